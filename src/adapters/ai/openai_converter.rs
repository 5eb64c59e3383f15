//! OpenAI-backed message converter.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::converter::{Tone, ToneMessage};
use crate::domain::profile::Mbti;
use crate::ports::{AIError, MessageConverter};

use super::openai_client::{parse_json_content, OpenAIClient};

const SYSTEM_PROMPT: &str = "당신은 MBTI 성향을 고려해 메시지를 다듬는 커뮤니케이션 코치입니다. \
원래 의도는 유지하면서 받는 사람의 성향에 맞게 메시지를 바꾸세요. \
반드시 \"content\"(변환된 메시지)와 \"explanation\"(이 표현이 효과적인 이유) \
두 개의 키를 가진 JSON 객체로만 답하세요.";

pub struct OpenAIMessageConverter {
    client: OpenAIClient,
}

impl OpenAIMessageConverter {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessageConverter for OpenAIMessageConverter {
    async fn convert(
        &self,
        original: &str,
        sender: Mbti,
        receiver: Mbti,
        tone: Tone,
    ) -> Result<ToneMessage, AIError> {
        let prompt = build_prompt(original, sender, receiver, tone);
        let content = self.client.complete_json(SYSTEM_PROMPT, &prompt).await?;
        parse_tone_message(tone, &content)
    }
}

#[derive(Debug, Deserialize)]
struct ToneMessagePayload {
    content: String,
    explanation: String,
}

fn build_prompt(original: &str, sender: Mbti, receiver: Mbti, tone: Tone) -> String {
    format!(
        "보내는 사람 MBTI: {}\n받는 사람 MBTI: {}\n원하는 톤: {}\n\n원본 메시지:\n{}",
        sender,
        receiver,
        tone.label(),
        original
    )
}

fn parse_tone_message(tone: Tone, content: &str) -> Result<ToneMessage, AIError> {
    let payload: ToneMessagePayload = parse_json_content(content)?;
    ToneMessage::new(tone, payload.content, payload.explanation)
        .map_err(|e| AIError::parse(e.to_string()))
}
