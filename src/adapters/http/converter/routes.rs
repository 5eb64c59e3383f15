//! HTTP routes for converter endpoints.

use axum::{routing::post, Router};

use super::handlers::{convert, convert_three_tones, ConverterHandlers};

pub fn converter_routes(handlers: ConverterHandlers) -> Router {
    Router::new()
        .route("/convert", post(convert))
        .route("/convert-three-tones", post(convert_three_tones))
        .with_state(handlers)
}
