mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{IMemberRepo, IReminderRepo, Repos};
pub use services::*;
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

#[derive(Clone)]
pub struct HuddleContext {
    pub repos: Repos,
    pub messengers: Messengers,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

struct ContextParams {
    pub postgres_connection_string: String,
    pub twilio: TwilioApiConfig,
    pub slack: SlackApiConfig,
}

impl HuddleContext {
    async fn create(params: ContextParams) -> Self {
        let repos = Repos::create_postgres(&params.postgres_connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        Self {
            repos,
            messengers: Messengers::create(params.twilio, params.slack),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }

    /// Context backed entirely by in-process substitutes. Used by tests,
    /// which must run without a database or delivery providers.
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            messengers: Messengers::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> HuddleContext {
    HuddleContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string(),
        twilio: TwilioApiConfig::from_env(),
        slack: SlackApiConfig::from_env(),
    })
    .await
}

fn get_psql_connection_string() -> String {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING)
        .unwrap_or_else(|_| panic!("{} env var to be present.", PSQL_CONNECTION_STRING))
}

pub async fn run_migration() -> Result<(), MigrateError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&get_psql_connection_string())
        .await
        .expect("TO CONNECT TO POSTGRES");

    sqlx::migrate!().run(&pool).await
}
