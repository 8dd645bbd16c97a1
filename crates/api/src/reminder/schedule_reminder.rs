use crate::error::HuddleError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use huddle_api_structs::schedule_reminder::*;
use huddle_domain::Reminder;
use huddle_infra::HuddleContext;

pub async fn schedule_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<HuddleContext>,
) -> Result<HttpResponse, HuddleError> {
    let body = body.0;
    let usecase = ScheduleReminderUseCase {
        message: body.message,
        time: body.time,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.reminder)))
        .map_err(HuddleError::from)
}

#[derive(Debug)]
pub struct ScheduleReminderUseCase {
    pub message: String,
    pub time: DateTime<Utc>,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub reminder: Reminder,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidMessage,
    StorageError,
}

impl From<UseCaseError> for HuddleError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidMessage => {
                Self::BadClientData("Reminder message cannot be empty.".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ScheduleReminderUseCase {
    type Response = UseCaseRes;
    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &HuddleContext) -> Result<Self::Response, Self::Errors> {
        if self.message.trim().is_empty() {
            return Err(UseCaseError::InvalidMessage);
        }

        // A time in the past is accepted: the reminder is stored but will
        // never match the broadcast filter.
        let reminder = Reminder::new(self.message.clone(), self.time);

        match ctx.repos.reminders.insert(&reminder).await {
            Ok(_) => Ok(UseCaseRes { reminder }),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
