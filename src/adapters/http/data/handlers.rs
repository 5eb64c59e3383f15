//! HTTP handlers for data endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::{
    CreateArticlesCommand, CreateArticlesHandler, GetRecentArticlesHandler,
    GetRecentArticlesQuery,
};
use crate::domain::data::DataError;

use super::dto::{ArticleListResponse, CreateArticlesRequest, RecentArticlesParams};

#[derive(Clone)]
pub struct DataHandlers {
    create_handler: Arc<CreateArticlesHandler>,
    recent_handler: Arc<GetRecentArticlesHandler>,
}

impl DataHandlers {
    pub fn new(
        create_handler: Arc<CreateArticlesHandler>,
        recent_handler: Arc<GetRecentArticlesHandler>,
    ) -> Self {
        Self {
            create_handler,
            recent_handler,
        }
    }
}

/// POST /data - Store crawled article analyses
pub async fn create_articles(
    State(handlers): State<DataHandlers>,
    Json(req): Json<CreateArticlesRequest>,
) -> Response {
    let cmd = CreateArticlesCommand {
        articles: req.into_new_articles(),
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(saved) => (StatusCode::CREATED, Json(ArticleListResponse::new(saved))).into_response(),
        Err(e) => handle_data_error(e),
    }
}

/// GET /data?limit=N - Most recent articles first
pub async fn recent_articles(
    State(handlers): State<DataHandlers>,
    Query(params): Query<RecentArticlesParams>,
) -> Response {
    let query = GetRecentArticlesQuery {
        limit: params.limit,
    };

    match handlers.recent_handler.handle(query).await {
        Ok(articles) => (StatusCode::OK, Json(ArticleListResponse::new(articles))).into_response(),
        Err(e) => handle_data_error(e),
    }
}

fn handle_data_error(error: DataError) -> Response {
    let status = match &error {
        DataError::ValidationFailed { .. } | DataError::NothingToSave => StatusCode::BAD_REQUEST,
        DataError::Infrastructure(msg) => {
            tracing::error!("Data infrastructure error: {}", msg);
            return ErrorResponse::internal("An internal error occurred")
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    ErrorResponse::from_code(error.code(), error.to_string()).into_response_with(status)
}
