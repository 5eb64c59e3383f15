//! HTTP routes for data endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_articles, recent_articles, DataHandlers};

pub fn data_routes(handlers: DataHandlers) -> Router {
    Router::new()
        .route("/", post(create_articles))
        .route("/", get(recent_articles))
        .with_state(handlers)
}
