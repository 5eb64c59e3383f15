//! Message converter port - rewrites a message in a requested tone.

use async_trait::async_trait;

use crate::domain::converter::{Tone, ToneMessage};
use crate::domain::profile::Mbti;

use super::AIError;

/// Port for tone conversion.
#[async_trait]
pub trait MessageConverter: Send + Sync {
    /// Rewrite `original`, written by a `sender` type, for a `receiver`
    /// type in one tone.
    async fn convert(
        &self,
        original: &str,
        sender: Mbti,
        receiver: Mbti,
        tone: Tone,
    ) -> Result<ToneMessage, AIError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_converter_is_object_safe() {
        fn _accepts_dyn(_converter: &dyn MessageConverter) {}
    }
}
