//! Single-function deployment: one handler answers every request it is given,
//! the way a serverless host routes `/api/chat` to an exported function.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use tower_http::trace::TraceLayer;

use crate::{error::AppError, routes::cors, services::proxy, state::SharedState};

pub async fn handle(State(state): State<SharedState>, method: Method, body: Bytes) -> Response {
    let mut response = match method {
        Method::OPTIONS => StatusCode::OK.into_response(),
        Method::POST => match proxy::relay(&state, &body).await {
            Ok(reply) => Json(reply).into_response(),
            Err(err) => err.into_response(),
        },
        _ => AppError::MethodNotAllowed.into_response(),
    };
    cors::apply(response.headers_mut());
    response
}

pub fn app(state: SharedState) -> Router {
    Router::new()
        .fallback(handle)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
