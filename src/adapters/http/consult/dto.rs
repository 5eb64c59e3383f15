//! Request and response bodies for consult endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::AddMessageResult;
use crate::domain::consult::Analysis;

/// Body of `POST /consult/start`.
///
/// Values stay raw strings so that a bad MBTI or gender is reported as a
/// validation error instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct StartConsultRequest {
    pub mbti: String,
    pub gender: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartConsultResponse {
    pub session_id: String,
}

/// Body of `POST /consult/:id/messages`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddMessageRequest {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddMessageResponse {
    pub session_id: String,
    pub turn_count: usize,
    pub completed: bool,
}

impl From<AddMessageResult> for AddMessageResponse {
    fn from(result: AddMessageResult) -> Self {
        Self {
            session_id: result.session_id.to_string(),
            turn_count: result.turn_count,
            completed: result.completed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResponse {
    pub situation: String,
    pub traits: String,
    pub solutions: String,
    pub cautions: String,
}

impl From<Analysis> for AnalysisResponse {
    fn from(analysis: Analysis) -> Self {
        Self {
            situation: analysis.situation().to_string(),
            traits: analysis.traits().to_string(),
            solutions: analysis.solutions().to_string(),
            cautions: analysis.cautions().to_string(),
        }
    }
}
