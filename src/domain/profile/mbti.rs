//! MBTI type code value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Allowed characters for each of the four MBTI positions.
const DIMENSIONS: [[char; 2]; 4] = [
    ['E', 'I'], // energy
    ['S', 'N'], // information
    ['T', 'F'], // decision
    ['J', 'P'], // lifestyle
];

/// A four-letter MBTI code such as `INTJ`.
///
/// # Invariants
///
/// - exactly 4 characters
/// - each position is one of its two dimension letters
/// - stored uppercase (input is case-insensitive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Mbti([char; 4]);

impl Mbti {
    /// Parses and normalizes an MBTI code.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the length is not 4 or any position holds a
    ///   letter outside its dimension
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        let upper: Vec<char> = value.to_uppercase().chars().collect();
        if upper.len() != 4 {
            return Err(ValidationError::invalid_format(
                "mbti",
                format!("MBTI must be 4 characters: {}", value),
            ));
        }

        let mut letters = ['E', 'S', 'T', 'J'];
        for (position, (letter, allowed)) in upper.iter().zip(DIMENSIONS.iter()).enumerate() {
            if !allowed.contains(letter) {
                return Err(ValidationError::invalid_format(
                    "mbti",
                    format!(
                        "position {} must be {}/{}: {}",
                        position + 1,
                        allowed[0],
                        allowed[1],
                        letter
                    ),
                ));
            }
            letters[position] = *letter;
        }

        Ok(Self(letters))
    }

    /// E or I.
    pub fn energy(&self) -> char {
        self.0[0]
    }

    /// S or N.
    pub fn information(&self) -> char {
        self.0[1]
    }

    /// T or F.
    pub fn decision(&self) -> char {
        self.0[2]
    }

    /// J or P.
    pub fn lifestyle(&self) -> char {
        self.0[3]
    }

    /// The normalized four-letter code.
    pub fn code(&self) -> String {
        self.0.iter().collect()
    }
}

impl fmt::Display for Mbti {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Mbti {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Mbti {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Mbti> for String {
    fn from(mbti: Mbti) -> Self {
        mbti.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_valid_code() {
        let mbti = Mbti::new("INTJ").unwrap();
        assert_eq!(mbti.code(), "INTJ");
        assert_eq!(mbti.energy(), 'I');
        assert_eq!(mbti.information(), 'N');
        assert_eq!(mbti.decision(), 'T');
        assert_eq!(mbti.lifestyle(), 'J');
    }

    #[test]
    fn normalizes_lowercase_input() {
        assert_eq!(Mbti::new("enfp").unwrap().to_string(), "ENFP");
        assert_eq!(Mbti::new("eNfP").unwrap().to_string(), "ENFP");
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(Mbti::new("").is_err());
        assert!(Mbti::new("INT").is_err());
        assert!(Mbti::new("INTJX").is_err());
    }

    #[test]
    fn surrounding_whitespace_counts_toward_length() {
        assert!(Mbti::new(" INTJ").is_err());
        assert!(Mbti::new("INTJ\n").is_err());
        assert!(Mbti::new(" ENFP ").is_err());
    }

    #[test]
    fn rejects_letter_in_wrong_position() {
        assert!(Mbti::new("NITJ").is_err());
        assert!(Mbti::new("IXTJ").is_err());
        assert!(Mbti::new("INTA").is_err());
        assert!(Mbti::new("INVALID").is_err());
    }

    #[test]
    fn deserializes_from_json_string() {
        let mbti: Mbti = serde_json::from_str("\"istp\"").unwrap();
        assert_eq!(mbti.code(), "ISTP");
        assert!(serde_json::from_str::<Mbti>("\"ABCD\"").is_err());
    }

    #[test]
    fn all_sixteen_types_parse() {
        let mut count = 0;
        for e in ['E', 'I'] {
            for s in ['S', 'N'] {
                for t in ['T', 'F'] {
                    for j in ['J', 'P'] {
                        let code: String = [e, s, t, j].iter().collect();
                        assert!(Mbti::new(&code).is_ok(), "{} should parse", code);
                        count += 1;
                    }
                }
            }
        }
        assert_eq!(count, 16);
    }

    proptest! {
        #[test]
        fn valid_codes_expose_their_positions(
            e in prop::sample::select(vec!['E', 'I', 'e', 'i']),
            s in prop::sample::select(vec!['S', 'N', 's', 'n']),
            t in prop::sample::select(vec!['T', 'F', 't', 'f']),
            j in prop::sample::select(vec!['J', 'P', 'j', 'p']),
        ) {
            let input: String = [e, s, t, j].iter().collect();
            let mbti = Mbti::new(&input).unwrap();
            prop_assert_eq!(mbti.energy(), e.to_ascii_uppercase());
            prop_assert_eq!(mbti.information(), s.to_ascii_uppercase());
            prop_assert_eq!(mbti.decision(), t.to_ascii_uppercase());
            prop_assert_eq!(mbti.lifestyle(), j.to_ascii_uppercase());
        }

        #[test]
        fn wrong_length_is_rejected(input in "[A-Za-z]{0,3}|[A-Za-z]{5,8}") {
            prop_assert!(Mbti::new(&input).is_err());
        }

        #[test]
        fn disallowed_letter_is_rejected(
            position in 0usize..4,
            bad in "[ABCDGHKLMOQRUVWXYZ]",
        ) {
            let mut letters: Vec<char> = "INTJ".chars().collect();
            letters[position] = bad.chars().next().unwrap();
            let input: String = letters.into_iter().collect();
            prop_assert!(Mbti::new(&input).is_err());
        }
    }
}
