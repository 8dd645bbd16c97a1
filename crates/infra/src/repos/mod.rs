mod member;
mod reminder;

pub use member::IMemberRepo;
use member::{InMemoryMemberRepo, PostgresMemberRepo};
pub use reminder::IReminderRepo;
use reminder::{InMemoryReminderRepo, PostgresReminderRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub members: Arc<dyn IMemberRepo>,
    pub reminders: Arc<dyn IReminderRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;

        Ok(Self {
            members: Arc::new(PostgresMemberRepo::new(pool.clone())),
            reminders: Arc::new(PostgresReminderRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            members: Arc::new(InMemoryMemberRepo::new()),
            reminders: Arc::new(InMemoryReminderRepo::new()),
        }
    }
}
