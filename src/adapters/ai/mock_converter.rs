//! Mock message converter for tests and local runs without an API key.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::converter::{Tone, ToneMessage};
use crate::domain::profile::Mbti;
use crate::ports::{AIError, MessageConverter};

/// Prefixes the original message with the tone label.
#[derive(Debug, Clone, Default)]
pub struct MockMessageConverter {
    error: Option<AIError>,
    calls: Arc<Mutex<Vec<Tone>>>,
}

impl MockMessageConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error(mut self, error: AIError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }
}

#[async_trait]
impl MessageConverter for MockMessageConverter {
    async fn convert(
        &self,
        original: &str,
        sender: Mbti,
        receiver: Mbti,
        tone: Tone,
    ) -> Result<ToneMessage, AIError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(tone);
        }
        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        ToneMessage::new(
            tone,
            format!("[{}] {}", tone.label(), original),
            format!("{}에게 {} 맞춘 표현입니다 (보낸 사람 {})", receiver, tone.label(), sender),
        )
        .map_err(|e| AIError::parse(e.to_string()))
    }
}
