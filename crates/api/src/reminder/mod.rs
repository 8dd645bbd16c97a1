mod get_reminders;
mod schedule_reminder;
pub mod send_reminders;

use actix_web::web;
use get_reminders::get_reminders_controller;
use schedule_reminder::schedule_reminder_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/scheduleReminder",
        web::post().to(schedule_reminder_controller),
    );
    cfg.route("/reminders", web::get().to(get_reminders_controller));
}
