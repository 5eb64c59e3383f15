//! Analysis value object, the result of a completed consult.

use serde::Serialize;

use crate::domain::foundation::ValidationError;

/// Four-section relationship analysis produced by the AI counselor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    situation: String,
    traits: String,
    solutions: String,
    cautions: String,
}

impl Analysis {
    /// Creates an analysis.
    ///
    /// # Errors
    ///
    /// - `EmptyField` naming the first blank section
    pub fn new(
        situation: impl Into<String>,
        traits: impl Into<String>,
        solutions: impl Into<String>,
        cautions: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let analysis = Self {
            situation: situation.into(),
            traits: traits.into(),
            solutions: solutions.into(),
            cautions: cautions.into(),
        };

        for (field, value) in [
            ("situation", &analysis.situation),
            ("traits", &analysis.traits),
            ("solutions", &analysis.solutions),
            ("cautions", &analysis.cautions),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::empty_field(field));
            }
        }

        Ok(analysis)
    }

    /// Summary of the user's situation.
    pub fn situation(&self) -> &str {
        &self.situation
    }

    /// MBTI trait analysis.
    pub fn traits(&self) -> &str {
        &self.traits
    }

    /// Suggestions for improving the relationship.
    pub fn solutions(&self) -> &str {
        &self.solutions
    }

    /// Things to be careful about.
    pub fn cautions(&self) -> &str {
        &self.cautions
    }
}
