use super::{get_env_var, ISmsService};
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct TwilioApiConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_phone_number: String,
}

impl TwilioApiConfig {
    /// Panics when the Twilio environment variables are not present
    pub fn from_env() -> Self {
        Self {
            account_sid: get_env_var("TWILIO_ACCOUNT_SID"),
            auth_token: get_env_var("TWILIO_AUTH_TOKEN"),
            from_phone_number: get_env_var("TWILIO_PHONE_NUMBER"),
        }
    }
}

pub struct TwilioSmsService {
    client: Client,
    config: TwilioApiConfig,
}

impl TwilioSmsService {
    pub fn new(config: TwilioApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TwilioErrorResponse {
    message: String,
}

#[async_trait::async_trait]
impl ISmsService for TwilioSmsService {
    async fn send(&self, to_phone_number: &str, body: &str) -> anyhow::Result<()> {
        let url = format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.config.account_sid
        );
        let params = [
            ("To", to_phone_number),
            ("From", self.config.from_phone_number.as_str()),
            ("Body", body),
        ];

        let res = self
            .client
            .post(&url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let err: TwilioErrorResponse = res.json().await?;
            anyhow::bail!(
                "Twilio API rejected the message ({}): {}",
                status,
                err.message
            );
        }

        Ok(())
    }
}
