//! Tone and ToneMessage value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Tone a message can be rewritten in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Tone {
    /// 공손한
    Polite,
    /// 캐주얼한
    Casual,
    /// 간결한
    Concise,
}

impl Tone {
    /// All tones, in the order the three-tone conversion returns them.
    pub const ALL: [Tone; 3] = [Tone::Polite, Tone::Casual, Tone::Concise];

    /// Label shown to users and sent to the AI.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Polite => "공손한",
            Tone::Casual => "캐주얼한",
            Tone::Concise => "간결한",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Tone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "공손한" | "polite" => Ok(Tone::Polite),
            "캐주얼한" | "casual" => Ok(Tone::Casual),
            "간결한" | "concise" => Ok(Tone::Concise),
            other => Err(ValidationError::invalid_format(
                "tone",
                format!("unknown tone: {}", other),
            )),
        }
    }
}

impl TryFrom<String> for Tone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tone> for String {
    fn from(tone: Tone) -> Self {
        tone.label().to_string()
    }
}

/// A message rewritten in one tone, with a note on why it works.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToneMessage {
    tone: Tone,
    content: String,
    explanation: String,
}

impl ToneMessage {
    /// # Errors
    ///
    /// - `EmptyField` if content or explanation is blank
    pub fn new(
        tone: Tone,
        content: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let content = content.into();
        let explanation = explanation.into();
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("content"));
        }
        if explanation.trim().is_empty() {
            return Err(ValidationError::empty_field("explanation"));
        }
        Ok(Self {
            tone,
            content,
            explanation,
        })
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_korean_and_english_labels() {
        assert_eq!("공손한".parse::<Tone>().unwrap(), Tone::Polite);
        assert_eq!("casual".parse::<Tone>().unwrap(), Tone::Casual);
        assert_eq!(" 간결한 ".parse::<Tone>().unwrap(), Tone::Concise);
        assert!("angry".parse::<Tone>().is_err());
    }

    #[test]
    fn all_lists_tones_in_fixed_order() {
        let labels: Vec<_> = Tone::ALL.iter().map(Tone::label).collect();
        assert_eq!(labels, vec!["공손한", "캐주얼한", "간결한"]);
    }

    #[test]
    fn tone_message_requires_content_and_explanation() {
        assert!(ToneMessage::new(Tone::Polite, "", "why").is_err());
        assert!(ToneMessage::new(Tone::Polite, "hello", " ").is_err());

        let message = ToneMessage::new(Tone::Casual, "내일 회의 괜찮아?", "ESTP는 직설을 선호").unwrap();
        assert_eq!(message.tone(), Tone::Casual);
        assert_eq!(message.content(), "내일 회의 괜찮아?");
        assert_eq!(message.explanation(), "ESTP는 직설을 선호");
    }
}
