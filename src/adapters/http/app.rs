//! Router assembly.
//!
//! Wires the application handlers over a set of ports and nests each
//! feature router under its prefix. Transport layers (trace, CORS, timeout)
//! are applied separately so tests can drive the bare router.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::handlers::{
    AddMessageHandler, ConvertMessageHandler, ConvertThreeTonesHandler, CreateArticlesHandler,
    GetAnalysisHandler, GetRecentArticlesHandler, StartConsultHandler,
};
use crate::ports::{AICounselor, ArticleRepository, ConsultRepository, MessageConverter};

use super::consult::{consult_routes, ConsultHandlers};
use super::converter::{converter_routes, ConverterHandlers};
use super::data::{data_routes, DataHandlers};
use super::health::health_routes;
use super::middleware::{auth_middleware, AuthState};

/// Outbound ports the HTTP surface is served over.
#[derive(Clone)]
pub struct AppPorts {
    pub consult_repository: Arc<dyn ConsultRepository>,
    pub counselor: Arc<dyn AICounselor>,
    pub converter: Arc<dyn MessageConverter>,
    pub article_repository: Arc<dyn ArticleRepository>,
    pub session_validator: AuthState,
    pub analysis_timeout: Duration,
}

/// Builds the API router with authentication applied.
pub fn build_router(ports: AppPorts) -> Router {
    let consult = ConsultHandlers::new(
        Arc::new(StartConsultHandler::new(ports.consult_repository.clone())),
        Arc::new(AddMessageHandler::new(ports.consult_repository.clone())),
        Arc::new(
            GetAnalysisHandler::new(ports.consult_repository, ports.counselor)
                .with_timeout(ports.analysis_timeout),
        ),
    );

    let converter = ConverterHandlers::new(
        Arc::new(ConvertMessageHandler::new(ports.converter.clone())),
        Arc::new(ConvertThreeTonesHandler::new(ports.converter)),
    );

    let data = DataHandlers::new(
        Arc::new(CreateArticlesHandler::new(ports.article_repository.clone())),
        Arc::new(GetRecentArticlesHandler::new(ports.article_repository)),
    );

    Router::new()
        .merge(health_routes())
        .nest("/consult", consult_routes(consult))
        .nest("/converter", converter_routes(converter))
        .nest("/data", data_routes(data))
        .layer(axum::middleware::from_fn_with_state(
            ports.session_validator,
            auth_middleware,
        ))
}

/// Adds tracing, CORS and the request timeout.
pub fn with_http_layers(router: Router, cors_origins: &[String], request_timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(cors_origins))
            .layer(TimeoutLayer::new(request_timeout)),
    )
}

/// CORS for the configured origins. No origins means any origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
        .filter_map(|o| o.parse::<HeaderValue>().ok())
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    if origins.is_empty() {
        layer.allow_origin(tower_http::cors::Any)
    } else {
        layer.allow_origin(origins).allow_credentials(true)
    }
}
