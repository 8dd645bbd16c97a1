use crate::error::HuddleError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use huddle_api_structs::add_member::*;
use huddle_domain::Member;
use huddle_infra::HuddleContext;

pub async fn add_member_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<HuddleContext>,
) -> Result<HttpResponse, HuddleError> {
    let body = body.0;
    let usecase = AddMemberUseCase {
        name: body.name,
        phone_number: body.phone_number,
        slack_username: body.slack_username,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Created().json(APIResponse::new(res.member)))
        .map_err(HuddleError::from)
}

#[derive(Debug)]
pub struct AddMemberUseCase {
    pub name: String,
    pub phone_number: Option<String>,
    pub slack_username: Option<String>,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub member: Member,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidName,
    StorageError,
}

impl From<UseCaseError> for HuddleError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidName => {
                Self::BadClientData("Member name cannot be empty.".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for AddMemberUseCase {
    type Response = UseCaseRes;
    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &HuddleContext) -> Result<Self::Response, Self::Errors> {
        if self.name.trim().is_empty() {
            return Err(UseCaseError::InvalidName);
        }

        let member = Member::new(
            self.name.clone(),
            self.phone_number.clone(),
            self.slack_username.clone(),
        );

        match ctx.repos.members.insert(&member).await {
            Ok(_) => Ok(UseCaseRes { member }),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
