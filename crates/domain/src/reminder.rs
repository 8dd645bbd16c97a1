use crate::shared::entity::ID;
use chrono::{DateTime, Utc};

/// A message that is broadcast to all `Member`s by the daily send job.
/// There is no delivered-flag: a `Reminder` stays in the store and is
/// picked up by every run until its `time` has passed.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    pub message: String,
    /// When the reminded-about thing happens. Only reminders with `time`
    /// in the future are broadcast.
    pub time: DateTime<Utc>,
}

impl Reminder {
    pub fn new(message: String, time: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            message,
            time,
        }
    }
}
