use chrono::{DateTime, Utc};
use huddle_domain::Reminder;
use serde::{Deserialize, Serialize};

use crate::dtos::ReminderDTO;

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub reminder: ReminderDTO,
}

impl ReminderResponse {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder),
        }
    }
}

pub mod schedule_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub message: String,
        pub time: DateTime<Utc>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminders {
    use super::*;

    /// A plain array of reminder rows, matching what the store returns.
    pub type APIResponse = Vec<ReminderDTO>;
}
