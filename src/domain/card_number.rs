use crate::domain::outcome::FailureReason;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How non-digit characters in the caller's input are treated.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Normalization {
    /// Only digits are accepted.
    Strict,
    /// Spaces, tabs and dashes are stripped; anything else is malformed.
    #[default]
    Separators,
    /// Every non-digit character is stripped.
    Lenient,
}

impl Normalization {
    fn strips(self, character: char) -> bool {
        match self {
            Normalization::Strict => false,
            Normalization::Separators => matches!(character, ' ' | '\t' | '-'),
            Normalization::Lenient => true,
        }
    }
}

/// A candidate card number, normalized to its decimal digits.
///
/// Only built through [`CardNumber::parse`], so `digits` is never empty and
/// contains ASCII digits only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardNumber {
    raw: String,
    digits: String,
}

impl CardNumber {
    pub fn parse(raw: &str, normalization: Normalization) -> Result<Self, FailureReason> {
        let mut digits = String::with_capacity(raw.len());
        for (position, character) in raw.chars().enumerate() {
            if character.is_ascii_digit() {
                digits.push(character);
            } else if !normalization.strips(character) {
                return Err(FailureReason::InvalidCharacter {
                    position,
                    character,
                });
            }
        }

        if digits.is_empty() {
            return Err(FailureReason::Empty);
        }

        Ok(Self {
            raw: raw.to_string(),
            digits,
        })
    }

    /// The input exactly as the caller supplied it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns `true` when the number has no digits.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Renders the number with everything but the first six and last four
    /// digits replaced by `*`. Numbers too short for that are fully masked.
    pub fn masked(&self) -> String {
        let len = self.digits.len();
        if len <= 10 {
            return "*".repeat(len);
        }
        let mut masked = String::with_capacity(len);
        masked.push_str(&self.digits[..6]);
        masked.push_str(&"*".repeat(len - 10));
        masked.push_str(&self.digits[len - 4..]);
        masked
    }
}

impl FromStr for CardNumber {
    type Err = FailureReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, Normalization::default())
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}
