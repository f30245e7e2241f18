// src/services/upstream.rs
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Credential;

pub const MODEL: &str = "z-ai/glm-4.5-air:free";

pub const SYSTEM_PROMPT: &str = "You are a cyberpunk-themed AI assistant in a dystopian future. \
Respond in character with cyberpunk terminology and attitude. Keep responses concise but engaging.";

pub const COMPLETIONS_PATH: &str = "/api/v1/chat/completions";

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API request failed with status {0}")]
    Status(StatusCode),

    #[error("upstream returned no choices")]
    EmptyChoices,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<UpstreamMessage>,
}

impl CompletionRequest {
    /// System persona first, then the user's text as the only user turn.
    pub fn for_message(user_message: &str) -> Self {
        Self {
            model: MODEL.to_string(),
            messages: vec![
                UpstreamMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                UpstreamMessage {
                    role: "user".to_string(),
                    content: user_message.to_string(),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

/// Chat-completion client for an OpenRouter-compatible host.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    endpoint: String,
}

impl UpstreamClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), COMPLETIONS_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn complete(
        &self,
        credential: &Credential,
        user_message: &str,
    ) -> Result<String, UpstreamError> {
        let request = CompletionRequest::for_message(user_message);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(credential.expose())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let body: CompletionResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(UpstreamError::EmptyChoices)
    }
}
