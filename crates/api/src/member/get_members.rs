use crate::error::HuddleError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use huddle_api_structs::dtos::MemberDTO;
use huddle_api_structs::get_members::APIResponse;
use huddle_domain::Member;
use huddle_infra::HuddleContext;

pub async fn get_members_controller(
    ctx: web::Data<HuddleContext>,
) -> Result<HttpResponse, HuddleError> {
    let usecase = GetMembersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|res| {
            let members: APIResponse = res.members.into_iter().map(MemberDTO::new).collect();
            HttpResponse::Ok().json(members)
        })
        .map_err(HuddleError::from)
}

#[derive(Debug)]
pub struct GetMembersUseCase {}

#[derive(Debug)]
pub struct UseCaseRes {
    pub members: Vec<Member>,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for HuddleError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetMembersUseCase {
    type Response = UseCaseRes;
    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &HuddleContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .members
            .find_all()
            .await
            .map(|members| UseCaseRes { members })
            .map_err(|_| UseCaseError::StorageError)
    }
}
