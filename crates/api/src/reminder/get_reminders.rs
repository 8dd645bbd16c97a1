use crate::error::HuddleError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use huddle_api_structs::dtos::ReminderDTO;
use huddle_api_structs::get_reminders::APIResponse;
use huddle_domain::Reminder;
use huddle_infra::HuddleContext;

pub async fn get_reminders_controller(
    ctx: web::Data<HuddleContext>,
) -> Result<HttpResponse, HuddleError> {
    let usecase = GetRemindersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|res| {
            let reminders: APIResponse =
                res.reminders.into_iter().map(ReminderDTO::new).collect();
            HttpResponse::Ok().json(reminders)
        })
        .map_err(HuddleError::from)
}

#[derive(Debug)]
pub struct GetRemindersUseCase {}

#[derive(Debug)]
pub struct UseCaseRes {
    pub reminders: Vec<Reminder>,
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
impl UseCase for GetRemindersUseCase {
    type Response = UseCaseRes;
    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &HuddleContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .reminders
            .find_all()
            .await
            .map(|reminders| UseCaseRes { reminders })
            .map_err(|_| UseCaseError::StorageError)
    }
}
