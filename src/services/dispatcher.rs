// src/services/dispatcher.rs
use reqwest::StatusCode;
use thiserror::Error;

use crate::message::{ChatRequest, FailureBody, ProxyOutcome};
use crate::services::fallback::FallbackResponder;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/chat";

pub const INTERFERENCE_PREFIX: &str = "The neural network is experiencing interference. \
Let me try to reconnect... Error connecting to mainframe. Processing with local protocols: ";

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("could not reach chat endpoint: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API request failed with status {status}. Details: {detail}")]
    Status { status: StatusCode, detail: String },

    #[error("Invalid response format from API")]
    MalformedBody,
}

/// Client side of the chat: talks to the local proxy and never hands back an error.
#[derive(Debug)]
pub struct Dispatcher {
    http: reqwest::Client,
    endpoint: String,
    fallback: FallbackResponder,
}

impl Dispatcher {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            fallback: FallbackResponder::new(),
        }
    }

    pub fn with_fallback(mut self, fallback: FallbackResponder) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Always yields something displayable. Any failure is answered locally.
    pub async fn dispatch(&self, text: &str) -> String {
        match self.request(text).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(error = %err, endpoint = %self.endpoint, "chat endpoint failed, using local protocols");
                format!("{}{}", INTERFERENCE_PREFIX, self.fallback.respond(text))
            }
        }
    }

    /// One round trip to the proxy, without the fallback.
    pub async fn request(&self, text: &str) -> Result<String, DispatchError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&ChatRequest {
                message: text.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let outcome = ProxyOutcome::from_slice(&body);

        if !status.is_success() {
            let detail = match outcome {
                ProxyOutcome::Failure(failure) => failure.diagnostic().to_string(),
                ProxyOutcome::Reply { .. } => FailureBody::UNKNOWN.to_string(),
            };
            return Err(DispatchError::Status { status, detail });
        }

        match outcome {
            ProxyOutcome::Reply { response } if !response.is_empty() => Ok(response),
            _ => {
                tracing::debug!(body = %String::from_utf8_lossy(&body), "unexpected proxy response format");
                Err(DispatchError::MalformedBody)
            }
        }
    }
}
