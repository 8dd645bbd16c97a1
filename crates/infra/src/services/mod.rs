mod inmemory;
mod slack;
mod twilio;

pub use inmemory::{InMemoryChatService, InMemorySmsService, OutboundDM, OutboundSms};
pub use slack::{SlackApiConfig, SlackChatService};
use std::sync::Arc;
pub use twilio::{TwilioApiConfig, TwilioSmsService};

/// Sends a text message to a phone number
#[async_trait::async_trait]
pub trait ISmsService: Send + Sync {
    async fn send(&self, to_phone_number: &str, body: &str) -> anyhow::Result<()>;
}

/// Sends a direct message to a chat handle
#[async_trait::async_trait]
pub trait IChatService: Send + Sync {
    async fn post_message(&self, channel: &str, text: &str) -> anyhow::Result<()>;
}

/// The outbound delivery channels available to the reminder broadcast
#[derive(Clone)]
pub struct Messengers {
    pub sms: Arc<dyn ISmsService>,
    pub chat: Arc<dyn IChatService>,
}

impl Messengers {
    pub fn create(twilio: TwilioApiConfig, slack: SlackApiConfig) -> Self {
        Self {
            sms: Arc::new(TwilioSmsService::new(twilio)),
            chat: Arc::new(SlackChatService::new(slack)),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            sms: Arc::new(InMemorySmsService::new()),
            chat: Arc::new(InMemoryChatService::new()),
        }
    }
}

pub(crate) fn get_env_var(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| panic!("{} env var to be present.", name))
}
