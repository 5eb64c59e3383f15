//! Mock AI counselor for tests and local runs without an API key.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::consult::{Analysis, MessageRecord};
use crate::domain::profile::UserProfile;
use crate::ports::{AICounselor, AIError};

/// Returns a canned analysis built from the profile, or a configured error.
#[derive(Debug, Clone, Default)]
pub struct MockAICounselor {
    error: Option<AIError>,
    delay: Duration,
    calls: Arc<Mutex<usize>>,
}

impl MockAICounselor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with `error`.
    pub fn with_error(mut self, error: AIError) -> Self {
        self.error = Some(error);
        self
    }

    /// Simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| *c).unwrap_or(0)
    }
}

#[async_trait]
impl AICounselor for MockAICounselor {
    async fn generate_analysis(
        &self,
        profile: &UserProfile,
        history: &[MessageRecord],
    ) -> Result<Analysis, AIError> {
        if let Ok(mut calls) = self.calls.lock() {
            *calls += 1;
        }
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        Analysis::new(
            format!("{}개의 메시지로 상황을 정리했습니다.", history.len()),
            format!("{} 성향은 감정보다 논리를 먼저 살피는 편입니다.", profile.mbti()),
            "솔직한 대화 시간을 정해 보세요.",
            "상대의 속도를 존중하세요.",
        )
        .map_err(|e| AIError::parse(e.to_string()))
    }
}
