//! ConvertMessageHandler - rewrites one message in a single tone.

use std::sync::Arc;

use crate::domain::converter::{ConverterError, Tone, ToneMessage};
use crate::domain::profile::Mbti;
use crate::ports::MessageConverter;

use super::require_original;

/// Command to convert a message into one tone.
#[derive(Debug, Clone)]
pub struct ConvertMessageCommand {
    pub original: String,
    pub sender: Mbti,
    pub receiver: Mbti,
    pub tone: Tone,
}

/// Handler for single-tone conversion.
pub struct ConvertMessageHandler {
    converter: Arc<dyn MessageConverter>,
}

impl ConvertMessageHandler {
    pub fn new(converter: Arc<dyn MessageConverter>) -> Self {
        Self { converter }
    }

    #[tracing::instrument(skip(self, cmd), fields(sender = %cmd.sender, receiver = %cmd.receiver, tone = %cmd.tone))]
    pub async fn handle(&self, cmd: ConvertMessageCommand) -> Result<ToneMessage, ConverterError> {
        require_original(&cmd.original)?;

        self.converter
            .convert(&cmd.original, cmd.sender, cmd.receiver, cmd.tone)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "tone conversion failed");
                ConverterError::Converter(e.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockMessageConverter;
    use crate::ports::AIError;

    fn cmd(original: &str) -> ConvertMessageCommand {
        ConvertMessageCommand {
            original: original.to_string(),
            sender: Mbti::new("ENFP").unwrap(),
            receiver: Mbti::new("ISTJ").unwrap(),
            tone: Tone::Casual,
        }
    }

    #[tokio::test]
    async fn converts_in_requested_tone() {
        let handler = ConvertMessageHandler::new(Arc::new(MockMessageConverter::new()));

        let message = handler.handle(cmd("내일 보자")).await.unwrap();

        assert_eq!(message.tone(), Tone::Casual);
        assert!(message.content().contains("내일 보자"));
    }

    #[tokio::test]
    async fn blank_original_is_rejected() {
        let converter = Arc::new(MockMessageConverter::new());
        let handler = ConvertMessageHandler::new(converter.clone());

        let result = handler.handle(cmd("   ")).await;

        assert!(matches!(
            result,
            Err(ConverterError::ValidationFailed { ref field, .. }) if field == "original_message"
        ));
        assert_eq!(converter.call_count(), 0);
    }

    #[tokio::test]
    async fn converter_failure_is_mapped() {
        let converter = MockMessageConverter::new().with_error(AIError::unavailable("down"));
        let handler = ConvertMessageHandler::new(Arc::new(converter));

        let result = handler.handle(cmd("안녕")).await;

        assert!(matches!(result, Err(ConverterError::Converter(_))));
    }
}
