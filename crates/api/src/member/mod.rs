mod add_member;
mod get_members;

use actix_web::web;
use add_member::add_member_controller;
use get_members::get_members_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/addMember", web::post().to(add_member_controller));
    cfg.route("/members", web::get().to(get_members_controller));
}
