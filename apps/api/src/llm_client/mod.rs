//! LLM Client: the single point of entry for chat-completion calls.
//!
//! No other module talks to the LLM provider directly; handlers depend on the
//! `ChatModel` trait so the provider can be swapped or stubbed.
//!
//! Calls are made once. There are no retries: a failure is reported to the
//! caller, which decides on a fallback.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

pub mod prompts;

pub const DEFAULT_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";
/// The model used for all LLM calls.
pub const MODEL: &str = "deepseek-chat";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 1000;
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("LLM API key is not configured")]
    NotConfigured,
}

/// Anything that can turn a user message into a persona reply.
///
/// Carried in `AppState` as `Arc<dyn ChatModel>`.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn reply(&self, user_message: &str) -> Result<String, LlmError>;

    /// Whether calls can succeed at all (reported by the health check).
    fn is_configured(&self) -> bool {
        true
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletion {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
pub struct ReplyMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatCompletion {
    /// Text of the first choice, if it carries any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

/// Client for an OpenAI-compatible chat completions endpoint (DeepSeek by default).
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    system_prompt: String,
}

impl LlmClient {
    pub fn new(
        api_url: String,
        api_key: Option<String>,
        system_prompt: String,
    ) -> Result<Self, LlmError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_url,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            system_prompt,
        })
    }

    /// Makes one call to the chat completions API and returns the full response.
    pub async fn call(&self, user_message: &str) -> Result<ChatCompletion, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::NotConfigured)?;

        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &self.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_message,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!("Error calling LLM API: {e}");
                LlmError::Http(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("HTTP error from LLM API: {} - {}", status.as_u16(), body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let completion: ChatCompletion = serde_json::from_str(&body)?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(completion)
    }
}

#[async_trait]
impl ChatModel for LlmClient {
    async fn reply(&self, user_message: &str) -> Result<String, LlmError> {
        let completion = self.call(user_message).await?;
        completion
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_text_reads_first_choice() {
        let body = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "Hello there"}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3}
        }"#;
        let completion: ChatCompletion = serde_json::from_str(body).unwrap();
        assert_eq!(completion.text(), Some("Hello there"));
        assert_eq!(completion.usage.unwrap().completion_tokens, 3);
    }

    #[test]
    fn test_completion_without_choices_has_no_text() {
        let completion: ChatCompletion = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(completion.text().is_none());
    }

    #[test]
    fn test_blank_content_counts_as_empty() {
        let body = r#"{"choices": [{"message": {"content": "  "}}]}"#;
        let completion: ChatCompletion = serde_json::from_str(body).unwrap();
        assert!(completion.text().is_none());
    }

    #[test]
    fn test_request_body_shape() {
        let body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "hi",
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "deepseek-chat");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
        assert_eq!(json["max_tokens"], 1000);
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let client =
            LlmClient::new(DEFAULT_API_URL.to_string(), None, "sys".to_string()).unwrap();
        assert!(!client.is_configured());
        assert!(matches!(
            client.reply("hello").await,
            Err(LlmError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn test_blank_key_is_treated_as_missing() {
        let client = LlmClient::new(
            DEFAULT_API_URL.to_string(),
            Some("   ".to_string()),
            "sys".to_string(),
        )
        .unwrap();
        assert!(!client.is_configured());
    }
}
