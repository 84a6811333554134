use crate::domain::card_number::Normalization;
use crate::domain::issuer::Issuer;
use crate::domain::outcome::FailureKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const DEFAULT_MALFORMED_INPUT_MESSAGE: &str = "is not a card number";
pub const DEFAULT_CHECKSUM_FAILURE_MESSAGE: &str = "is not a valid card number";
pub const DEFAULT_POLICY_FAILURE_MESSAGE: &str = "is not a supported card";

/// Which numbers are acceptable, and how rejections are worded.
///
/// The default policy accepts every known issuer, rejects test numbers,
/// strips separators and uses the built-in messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationPolicy {
    /// Issuers that are accepted. Empty means every known issuer.
    pub allowed_issuers: BTreeSet<Issuer>,
    pub allow_test_numbers: bool,
    pub checksum_failure_message: Option<String>,
    pub policy_failure_message: Option<String>,
    pub malformed_input_message: Option<String>,
    pub normalization: Normalization,
}

impl ValidationPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_issuers(mut self, issuers: impl IntoIterator<Item = Issuer>) -> Self {
        self.allowed_issuers.extend(issuers);
        self
    }

    pub fn allow_test_numbers(mut self, allow: bool) -> Self {
        self.allow_test_numbers = allow;
        self
    }

    pub fn with_checksum_failure_message(mut self, message: impl Into<String>) -> Self {
        self.checksum_failure_message = Some(message.into());
        self
    }

    pub fn with_policy_failure_message(mut self, message: impl Into<String>) -> Self {
        self.policy_failure_message = Some(message.into());
        self
    }

    pub fn with_malformed_input_message(mut self, message: impl Into<String>) -> Self {
        self.malformed_input_message = Some(message.into());
        self
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn permits_issuer(&self, issuer: Issuer) -> bool {
        self.allowed_issuers.is_empty() || self.allowed_issuers.contains(&issuer)
    }

    /// Resolves the message for a failure channel, falling back to the
    /// built-in default when that channel has no override.
    pub fn message_for(&self, kind: FailureKind) -> &str {
        match kind {
            FailureKind::MalformedInput => self
                .malformed_input_message
                .as_deref()
                .unwrap_or(DEFAULT_MALFORMED_INPUT_MESSAGE),
            FailureKind::ChecksumFailure => self
                .checksum_failure_message
                .as_deref()
                .unwrap_or(DEFAULT_CHECKSUM_FAILURE_MESSAGE),
            FailureKind::PolicyFailure => self
                .policy_failure_message
                .as_deref()
                .unwrap_or(DEFAULT_POLICY_FAILURE_MESSAGE),
        }
    }
}
