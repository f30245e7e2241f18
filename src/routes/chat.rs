use axum::{Json, body::Bytes, extract::State, http::StatusCode};

use crate::{error::AppError, message::ChatReply, services::proxy, state::SharedState};

pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatReply>, AppError> {
    proxy::relay(&state, &body).await.map(Json)
}

pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
