// src/services/proxy.rs
use crate::{
    error::AppError,
    message::{ChatReply, ChatRequest},
    state::AppState,
};

/// Core of the proxy endpoint, shared by the listener and the serverless handler.
///
/// The credential is checked before the body is even looked at, so a misconfigured
/// server answers the same way for every request and never reaches upstream.
pub async fn relay(state: &AppState, body: &[u8]) -> Result<ChatReply, AppError> {
    let Some(credential) = state.config.credential.as_ref() else {
        tracing::warn!("no upstream credential configured, rejecting chat request");
        return Err(AppError::MissingCredential);
    };

    let request: ChatRequest =
        serde_json::from_slice(body).map_err(|_| AppError::MissingMessage)?;

    tracing::debug!(chars = request.message.chars().count(), "forwarding message upstream");

    let response = state.upstream.complete(credential, &request.message).await?;

    Ok(ChatReply { response })
}
