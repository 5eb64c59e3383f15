//! HTTP handlers for consult endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{
    AddMessageCommand, AddMessageHandler, GetAnalysisHandler, GetAnalysisQuery,
    StartConsultCommand, StartConsultHandler,
};
use crate::domain::consult::{ConsultError, MessageRole};
use crate::domain::foundation::SessionId;
use crate::domain::profile::{Gender, Mbti, UserProfile};

use super::dto::{
    AddMessageRequest, AddMessageResponse, AnalysisResponse, StartConsultRequest,
    StartConsultResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ConsultHandlers {
    start_handler: Arc<StartConsultHandler>,
    add_message_handler: Arc<AddMessageHandler>,
    analysis_handler: Arc<GetAnalysisHandler>,
}

impl ConsultHandlers {
    pub fn new(
        start_handler: Arc<StartConsultHandler>,
        add_message_handler: Arc<AddMessageHandler>,
        analysis_handler: Arc<GetAnalysisHandler>,
    ) -> Self {
        Self {
            start_handler,
            add_message_handler,
            analysis_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /consult/start - Start a consult for the caller
pub async fn start_consult(
    State(handlers): State<ConsultHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<StartConsultRequest>,
) -> Response {
    let profile = match parse_profile(&req) {
        Ok(profile) => profile,
        Err(e) => return handle_consult_error(e),
    };

    let cmd = StartConsultCommand {
        user_id: user.id,
        profile,
    };

    match handlers.start_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(StartConsultResponse {
                session_id: result.session_id.to_string(),
            }),
        )
            .into_response(),
        Err(e) => handle_consult_error(e),
    }
}

/// POST /consult/:id/messages - Append a message to a consult
pub async fn add_message(
    State(handlers): State<ConsultHandlers>,
    RequireAuth(user): RequireAuth,
    Path(session_id): Path<String>,
    Json(req): Json<AddMessageRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let role = match req.role.parse::<MessageRole>() {
        Ok(role) => role,
        Err(e) => return handle_consult_error(e.into()),
    };

    let cmd = AddMessageCommand {
        session_id,
        user_id: user.id,
        role,
        content: req.content,
    };

    match handlers.add_message_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(AddMessageResponse::from(result))).into_response(),
        Err(e) => handle_consult_error(e),
    }
}

/// GET /consult/:id/analysis - Analysis of a completed consult
pub async fn get_analysis(
    State(handlers): State<ConsultHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .analysis_handler
        .handle(GetAnalysisQuery { session_id })
        .await
    {
        Ok(analysis) => (StatusCode::OK, Json(AnalysisResponse::from(analysis))).into_response(),
        Err(e) => handle_consult_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn parse_profile(req: &StartConsultRequest) -> Result<UserProfile, ConsultError> {
    let mbti = Mbti::new(&req.mbti)?;
    let gender = req.gender.parse::<Gender>()?;
    Ok(UserProfile::new(gender, mbti))
}

/// A malformed id cannot name a stored session, so it is reported as 404.
fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Consult session", raw)),
        )
            .into_response()
    })
}

fn handle_consult_error(error: ConsultError) -> Response {
    let status = match &error {
        ConsultError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        ConsultError::NotFound(_) => StatusCode::NOT_FOUND,
        ConsultError::Forbidden => StatusCode::FORBIDDEN,
        ConsultError::IncompleteSession { .. } => StatusCode::PRECONDITION_FAILED,
        ConsultError::ConversationComplete | ConsultError::Conflict(_) => StatusCode::CONFLICT,
        ConsultError::AnalysisTimedOut { .. } => StatusCode::GATEWAY_TIMEOUT,
        ConsultError::Counselor(_) => StatusCode::BAD_GATEWAY,
        ConsultError::Infrastructure(msg) => {
            tracing::error!("Consult infrastructure error: {}", msg);
            return ErrorResponse::internal("An internal error occurred")
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    if status.is_server_error() {
        tracing::warn!(code = %error.code(), "{}", error);
    }

    ErrorResponse::from_code(error.code(), error.message()).into_response_with(status)
}
