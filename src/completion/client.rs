use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};

use super::error::CompletionError;
use super::types::{ChatRequest, ChatResponse};

/// Sends one user message to a chat completion endpoint.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// `content` is sent as-is; callers quote-escape it beforehand.
    async fn send_chat(&self, content: &str) -> Result<ChatResponse, CompletionError>;
}

/// Settings for [`OpenAiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL; `/v1/chat/completions` is appended.
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
}

pub struct OpenAiClient {
    client: Client,
    url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl OpenAiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            url: completions_url(&config.endpoint),
            api_key: config.api_key,
            model: config.model,
            temperature: config.temperature,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatTransport for OpenAiClient {
    async fn send_chat(&self, content: &str) -> Result<ChatResponse, CompletionError> {
        let chat_request = ChatRequest::single(&self.model, self.temperature, content);
        let body = serde_json::to_vec(&chat_request).map_err(CompletionError::Serialize)?;

        let http_request = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .body(body)
            .build()
            .map_err(CompletionError::BuildRequest)?;

        tracing::debug!(url = %self.url, model = %self.model, "sending chat completion request");

        let response = self
            .client
            .execute(http_request)
            .await
            .map_err(CompletionError::Send)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, %body, "chat completion request rejected");
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(CompletionError::Send)?;
        let chat_response: ChatResponse =
            serde_json::from_slice(&bytes).map_err(CompletionError::Decode)?;

        tracing::debug!(
            id = %chat_response.id,
            choices = chat_response.choices.len(),
            total_tokens = chat_response.usage.total_tokens,
            "chat completion received"
        );

        Ok(chat_response)
    }
}

fn completions_url(endpoint: &str) -> String {
    format!("{}/v1/chat/completions", endpoint.trim_end_matches('/'))
}
