//! ConvertThreeTonesHandler - rewrites one message in every tone at once.

use std::sync::Arc;

use futures::future::try_join_all;

use crate::domain::converter::{ConverterError, Tone, ToneMessage};
use crate::domain::profile::Mbti;
use crate::ports::MessageConverter;

use super::require_original;

/// Command to convert a message into all tones.
#[derive(Debug, Clone)]
pub struct ConvertThreeTonesCommand {
    pub original: String,
    pub sender: Mbti,
    pub receiver: Mbti,
}

/// Handler fanning one message out to every [`Tone`].
pub struct ConvertThreeTonesHandler {
    converter: Arc<dyn MessageConverter>,
}

impl ConvertThreeTonesHandler {
    pub fn new(converter: Arc<dyn MessageConverter>) -> Self {
        Self { converter }
    }

    /// Results come back in [`Tone::ALL`] order. The first failure fails the
    /// whole batch.
    #[tracing::instrument(skip(self, cmd), fields(sender = %cmd.sender, receiver = %cmd.receiver))]
    pub async fn handle(
        &self,
        cmd: ConvertThreeTonesCommand,
    ) -> Result<Vec<ToneMessage>, ConverterError> {
        require_original(&cmd.original)?;

        let calls = Tone::ALL.iter().map(|&tone| {
            self.converter
                .convert(&cmd.original, cmd.sender, cmd.receiver, tone)
        });

        let messages = try_join_all(calls).await.map_err(|e| {
            tracing::error!(error = %e, "three-tone conversion failed");
            ConverterError::Converter(e.to_string())
        })?;

        tracing::debug!(count = messages.len(), "converted into all tones");
        Ok(messages)
    }
}
