use super::{IChatService, ISmsService};
use std::sync::Mutex;

/// An SMS the real provider would have sent
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundSms {
    pub to: String,
    pub body: String,
}

/// A chat direct message the real provider would have sent
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundDM {
    pub channel: String,
    pub text: String,
}

/// SMS service double that records sends. Numbers added to `unreachable`
/// make the corresponding send fail.
pub struct InMemorySmsService {
    pub sent: Mutex<Vec<OutboundSms>>,
    pub unreachable: Mutex<Vec<String>>,
}

impl InMemorySmsService {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            unreachable: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ISmsService for InMemorySmsService {
    async fn send(&self, to_phone_number: &str, body: &str) -> anyhow::Result<()> {
        if self
            .unreachable
            .lock()
            .unwrap()
            .iter()
            .any(|number| number == to_phone_number)
        {
            anyhow::bail!("Phone number {} is unreachable", to_phone_number);
        }

        self.sent.lock().unwrap().push(OutboundSms {
            to: to_phone_number.to_string(),
            body: body.to_string(),
        });

        Ok(())
    }
}

/// Chat service double that records sends. Channels added to
/// `unreachable` make the corresponding send fail.
pub struct InMemoryChatService {
    pub sent: Mutex<Vec<OutboundDM>>,
    pub unreachable: Mutex<Vec<String>>,
}

impl InMemoryChatService {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            unreachable: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IChatService for InMemoryChatService {
    async fn post_message(&self, channel: &str, text: &str) -> anyhow::Result<()> {
        if self
            .unreachable
            .lock()
            .unwrap()
            .iter()
            .any(|c| c == channel)
        {
            anyhow::bail!("Channel {} is unreachable", channel);
        }

        self.sent.lock().unwrap().push(OutboundDM {
            channel: channel.to_string(),
            text: text.to_string(),
        });

        Ok(())
    }
}
