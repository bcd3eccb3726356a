use std::time::Duration;

use herald_core::{HeraldError, LlmEnv};
use serde::Serialize;

/// A message in a chat conversation with the LLM.
///
/// # Examples
///
/// ```
/// use herald_pipeline::llm::{ChatMessage, Role};
///
/// let msg = ChatMessage {
///     role: Role::User,
///     content: "Review this diff".into(),
/// };
/// assert!(matches!(msg.role, Role::User));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// Role of the message sender.
    pub role: Role,
    /// Text content of the message.
    pub content: String,
}

/// Role in the chat conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System-level instructions.
    System,
    /// User input.
    User,
}

/// OpenAI-compatible chat completions client.
///
/// Works with any provider that exposes the `/v1/chat/completions` endpoint.
/// One synchronous request per pipeline run; no retry, no streaming.
///
/// # Examples
///
/// ```
/// use herald_core::LlmEnv;
/// use herald_pipeline::llm::LlmClient;
///
/// let env = LlmEnv {
///     api_key: "sk-test".into(),
///     model: "gpt-4.1-mini".into(),
///     base_url: None,
/// };
/// let client = LlmClient::new(&env).unwrap();
/// assert_eq!(client.model(), "gpt-4.1-mini");
/// ```
pub struct LlmClient {
    client: reqwest::Client,
    env: LlmEnv,
}

impl LlmClient {
    /// Create a new completion client from environment configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::Llm`] if the HTTP client cannot be built.
    pub fn new(env: &LlmEnv) -> Result<Self, HeraldError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| HeraldError::Llm(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            env: env.clone(),
        })
    }

    /// Return the model name from the configuration.
    pub fn model(&self) -> &str {
        &self.env.model
    }

    /// Send a chat completion request and return the text response.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::Llm`] on HTTP errors or response parsing
    /// failures.
    pub async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String, HeraldError> {
        let base_url = self
            .env
            .base_url
            .as_deref()
            .unwrap_or("https://api.openai.com");
        let url = format!("{base_url}/v1/chat/completions");

        let body = serde_json::json!({
            "model": self.env.model,
            "messages": messages,
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.env.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| HeraldError::Llm(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(HeraldError::Llm(format!(
                "LLM API error {status}: {body_text}"
            )));
        }

        let response_body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| HeraldError::Llm(format!("failed to parse response: {e}")))?;

        let content = response_body
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| {
                HeraldError::Llm(format!("unexpected response structure: {response_body}"))
            })?;

        Ok(content.to_string())
    }
}
