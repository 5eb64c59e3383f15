//! HTTP routes for consult endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{add_message, get_analysis, start_consult, ConsultHandlers};

/// Creates the consult router.
pub fn consult_routes(handlers: ConsultHandlers) -> Router {
    Router::new()
        .route("/start", post(start_consult))
        .route("/:id/messages", post(add_message))
        .route("/:id/analysis", get(get_analysis))
        .with_state(handlers)
}
