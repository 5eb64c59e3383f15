//! HTTP handlers for converter endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::{
    ConvertMessageCommand, ConvertMessageHandler, ConvertThreeTonesCommand,
    ConvertThreeTonesHandler,
};
use crate::domain::converter::{ConverterError, Tone};
use crate::domain::profile::Mbti;

use super::dto::{
    ConvertRequest, ConvertThreeTonesRequest, ThreeTonesResponse, ToneMessageResponse,
};

#[derive(Clone)]
pub struct ConverterHandlers {
    convert_handler: Arc<ConvertMessageHandler>,
    three_tones_handler: Arc<ConvertThreeTonesHandler>,
}

impl ConverterHandlers {
    pub fn new(
        convert_handler: Arc<ConvertMessageHandler>,
        three_tones_handler: Arc<ConvertThreeTonesHandler>,
    ) -> Self {
        Self {
            convert_handler,
            three_tones_handler,
        }
    }
}

/// POST /converter/convert - Rewrite a message in one tone
pub async fn convert(
    State(handlers): State<ConverterHandlers>,
    Json(req): Json<ConvertRequest>,
) -> Response {
    let cmd = match build_convert_command(req) {
        Ok(cmd) => cmd,
        Err(e) => return handle_converter_error(e),
    };

    match handlers.convert_handler.handle(cmd).await {
        Ok(message) => (StatusCode::OK, Json(ToneMessageResponse::from(message))).into_response(),
        Err(e) => handle_converter_error(e),
    }
}

/// POST /converter/convert-three-tones - Rewrite a message in every tone
pub async fn convert_three_tones(
    State(handlers): State<ConverterHandlers>,
    Json(req): Json<ConvertThreeTonesRequest>,
) -> Response {
    let (sender, receiver) = match parse_pair(&req.sender_mbti, &req.receiver_mbti) {
        Ok(pair) => pair,
        Err(e) => return handle_converter_error(e),
    };

    let cmd = ConvertThreeTonesCommand {
        original: req.original_message,
        sender,
        receiver,
    };

    match handlers.three_tones_handler.handle(cmd).await {
        Ok(messages) => {
            let response = ThreeTonesResponse {
                tones: messages.into_iter().map(ToneMessageResponse::from).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_converter_error(e),
    }
}

fn build_convert_command(req: ConvertRequest) -> Result<ConvertMessageCommand, ConverterError> {
    let (sender, receiver) = parse_pair(&req.sender_mbti, &req.receiver_mbti)?;
    let tone = req.tone.parse::<Tone>()?;
    Ok(ConvertMessageCommand {
        original: req.original_message,
        sender,
        receiver,
        tone,
    })
}

fn parse_pair(sender: &str, receiver: &str) -> Result<(Mbti, Mbti), ConverterError> {
    Ok((Mbti::new(sender)?, Mbti::new(receiver)?))
}

fn handle_converter_error(error: ConverterError) -> Response {
    let status = match &error {
        ConverterError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        ConverterError::Converter(msg) => {
            tracing::warn!("Message converter failed: {}", msg);
            StatusCode::BAD_GATEWAY
        }
    };

    ErrorResponse::from_code(error.code(), error.to_string()).into_response_with(status)
}
