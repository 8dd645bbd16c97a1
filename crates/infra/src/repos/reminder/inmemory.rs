use super::IReminderRepo;
use chrono::{DateTime, Utc};
use huddle_domain::Reminder;
use std::sync::Mutex;

pub struct InMemoryReminderRepo {
    reminders: Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        let mut reminders = self.reminders.lock().unwrap();
        reminders.push(reminder.clone());
        Ok(())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        let reminders = self.reminders.lock().unwrap();
        Ok(reminders.clone())
    }

    async fn find_after(&self, after: DateTime<Utc>) -> anyhow::Result<Vec<Reminder>> {
        let reminders = self.reminders.lock().unwrap();
        Ok(reminders
            .iter()
            .filter(|r| r.time > after)
            .cloned()
            .collect())
    }
}
