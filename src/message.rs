// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Any body the proxy can answer with, as seen by the client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProxyOutcome {
    Reply { response: String },
    Failure(FailureBody),
}

/// Error bodies come in many shapes: `{error: {message}}`, `{message}`, `{error: "..."}`
/// or something else entirely. Fields are kept loose so one odd field never hides another.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FailureBody {
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

impl FailureBody {
    pub const UNKNOWN: &'static str = "Unknown error";

    /// `error.message`, then `message`, then `error` as plain text. Empty strings are skipped.
    pub fn diagnostic(&self) -> &str {
        let nested = self.error.as_ref().and_then(|error| error.get("message"));

        non_empty_str(nested)
            .or_else(|| non_empty_str(self.message.as_ref()))
            .or_else(|| non_empty_str(self.error.as_ref()))
            .unwrap_or(Self::UNKNOWN)
    }
}

impl ProxyOutcome {
    /// Decodes a proxy body. Anything that is not a reply becomes a failure.
    pub fn from_slice(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_else(|_| Self::Failure(FailureBody::default()))
    }
}
