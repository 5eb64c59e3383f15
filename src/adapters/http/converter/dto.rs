//! Request and response bodies for converter endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::converter::ToneMessage;

/// Body of `POST /converter/convert`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertRequest {
    pub original_message: String,
    pub sender_mbti: String,
    pub receiver_mbti: String,
    pub tone: String,
}

/// Body of `POST /converter/convert-three-tones`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertThreeTonesRequest {
    pub original_message: String,
    pub sender_mbti: String,
    pub receiver_mbti: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToneMessageResponse {
    pub tone: String,
    pub content: String,
    pub explanation: String,
}

impl From<ToneMessage> for ToneMessageResponse {
    fn from(message: ToneMessage) -> Self {
        Self {
            tone: message.tone().label().to_string(),
            content: message.content().to_string(),
            explanation: message.explanation().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThreeTonesResponse {
    pub tones: Vec<ToneMessageResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::converter::Tone;

    #[test]
    fn tone_is_rendered_with_its_label() {
        let message = ToneMessage::new(Tone::Casual, "안녕!", "가볍게").unwrap();
        let response = ToneMessageResponse::from(message);
        assert_eq!(response.tone, "캐주얼한");
        assert_eq!(response.content, "안녕!");
    }
}
