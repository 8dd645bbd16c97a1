mod inmemory;
mod postgres;

use chrono::{DateTime, Utc};
use huddle_domain::Reminder;
pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>>;
    /// Reminders whose time is strictly after `after`
    async fn find_after(&self, after: DateTime<Utc>) -> anyhow::Result<Vec<Reminder>>;
}

#[cfg(test)]
mod tests {
    use crate::HuddleContext;
    use chrono::{Duration, Utc};
    use huddle_domain::Reminder;

    #[tokio::test]
    async fn insert_and_list() {
        let ctx = HuddleContext::create_inmemory();

        assert!(ctx.repos.reminders.find_all().await.unwrap().is_empty());

        let reminder = Reminder::new("standup".into(), Utc::now() + Duration::days(1));
        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .expect("To insert reminder");

        let all = ctx.repos.reminders.find_all().await.unwrap();
        assert_eq!(all, vec![reminder]);
    }

    #[tokio::test]
    async fn find_after_is_strict() {
        let ctx = HuddleContext::create_inmemory();
        let now = Utc::now();

        let passed = Reminder::new("passed".into(), now - Duration::hours(1));
        let at_now = Reminder::new("at now".into(), now);
        let upcoming = Reminder::new("upcoming".into(), now + Duration::hours(1));
        for reminder in [&passed, &at_now, &upcoming] {
            ctx.repos.reminders.insert(reminder).await.unwrap();
        }

        let after = ctx.repos.reminders.find_after(now).await.unwrap();
        assert_eq!(after, vec![upcoming]);

        assert_eq!(ctx.repos.reminders.find_all().await.unwrap().len(), 3);
    }
}
