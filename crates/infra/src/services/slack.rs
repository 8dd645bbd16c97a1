use super::{get_env_var, IChatService};
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct SlackApiConfig {
    pub token: String,
}

impl SlackApiConfig {
    /// Panics when the Slack environment variables are not present
    pub fn from_env() -> Self {
        Self {
            token: get_env_var("SLACK_TOKEN"),
        }
    }
}

pub struct SlackChatService {
    client: Client,
    config: SlackApiConfig,
}

impl SlackChatService {
    pub fn new(config: SlackApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

#[async_trait::async_trait]
impl IChatService for SlackChatService {
    async fn post_message(&self, channel: &str, text: &str) -> anyhow::Result<()> {
        let res: PostMessageResponse = self
            .client
            .post("https://slack.com/api/chat.postMessage")
            .bearer_auth(&self.config.token)
            .json(&serde_json::json!({
                "channel": channel,
                "text": text,
            }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // Slack signals failures in the response body, not the status code
        if !res.ok {
            anyhow::bail!(
                "Slack API rejected the message: {}",
                res.error.unwrap_or_else(|| "unknown error".into())
            );
        }

        Ok(())
    }
}
