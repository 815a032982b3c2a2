use crate::consts::USER_AGENT;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use vitrine_config::llm;
use vitrine_error::{ErrorType, Result, ResultExt, bail};

const ANTHROPIC_VERSION: &str = "2023-06-01";
const API_KEY_HEADER: &str = "x-api-key";
const VERSION_HEADER: &str = "anthropic-version";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

const UPSTREAM_UNAVAILABLE: &str = "AI service unavailable";
const UPSTREAM_ERROR: &str = "AI service error";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: &'a [Message],
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

impl MessagesResponse {
    fn text(self) -> String {
        self.content
            .into_iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

/// Messages API client
///
/// The API key comes from the process environment, never from the
/// configuration file.
#[derive(Clone)]
pub struct LlmService {
    client: Client,
    config: llm::Configuration,
    api_key: String,
}

impl LlmService {
    pub fn new(config: llm::Configuration, api_key: String) -> eyre::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    #[instrument(skip_all)]
    pub async fn complete(&self, system: Option<&str>, messages: &[Message]) -> Result<String> {
        let request = MessagesRequest {
            model: self.config.model.as_str(),
            max_tokens: self.config.max_tokens,
            system,
            messages,
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.config.base_url))
            .header(API_KEY_HEADER, self.api_key.as_str())
            .header(VERSION_HEADER, ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .with_error_type(ErrorType::BadGateway(Some(UPSTREAM_UNAVAILABLE.into())))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "completion request rejected by the upstream API");
            bail!(
                type = ErrorType::BadGateway(Some(UPSTREAM_ERROR.into())),
                format!("upstream responded with {status}")
            );
        }

        let response: MessagesResponse = response
            .json()
            .await
            .with_error_type(ErrorType::BadGateway(Some(UPSTREAM_ERROR.into())))?;

        Ok(response.text())
    }
}

#[cfg(test)]
mod test {
    use super::{Message, MessagesRequest, MessagesResponse, Role};

    #[test]
    fn request_serialises_without_empty_system() {
        let messages = [Message {
            role: Role::User,
            content: "hello".into(),
        }];
        let request = MessagesRequest {
            model: "claude-sonnet-4-20250514",
            max_tokens: 2048,
            system: None,
            messages: &messages,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("system").is_none());
        assert_eq!(value["messages"][0]["role"], "user");
    }

    #[test]
    fn response_text_joins_text_blocks_only() {
        let response: MessagesResponse = serde_json::from_value(serde_json::json!({
            "content": [
                { "type": "text", "text": "Hello" },
                { "type": "tool_use", "id": "x", "name": "y", "input": {} },
                { "type": "text", "text": ", world" },
            ],
        }))
        .unwrap();

        assert_eq!(response.text(), "Hello, world");
    }
}
