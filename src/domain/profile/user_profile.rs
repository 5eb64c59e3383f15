//! UserProfile value object.

use serde::{Deserialize, Serialize};

use super::{Gender, Mbti};

/// The `(Gender, MBTI)` pair a consult is tailored to.
///
/// Immutable; it lives exactly as long as the session that carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserProfile {
    gender: Gender,
    mbti: Mbti,
}

impl UserProfile {
    pub fn new(gender: Gender, mbti: Mbti) -> Self {
        Self { gender, mbti }
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn mbti(&self) -> Mbti {
        self.mbti
    }
}
