// src/routes/mod.rs
pub mod chat;
pub mod cors;

use crate::state::SharedState;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use chat::{chat_handler, method_not_allowed_handler, preflight_handler};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub const CHAT_PATH: &str = "/api/chat";

/// Long-running listener: chat endpoint, health check and the static front end.
pub fn create_router(static_dir: &str) -> Router<SharedState> {
    let chat_routes = Router::new()
        .route(
            CHAT_PATH,
            post(chat_handler)
                .options(preflight_handler)
                .fallback(method_not_allowed_handler),
        )
        .layer(middleware::map_response(cors::cors_headers));

    Router::new()
        .merge(chat_routes)
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}
