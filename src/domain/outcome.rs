use crate::domain::issuer::Issuer;
use serde::Serialize;
use thiserror::Error;

/// The failure channel a rejection is reported through.
///
/// Each channel has its own message override in
/// [`ValidationPolicy`](super::policy::ValidationPolicy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureKind {
    MalformedInput,
    ChecksumFailure,
    PolicyFailure,
}

/// Why a number was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    #[error("card number is missing")]
    Missing,
    #[error("card number contains no digits")]
    Empty,
    #[error("invalid character '{}' at position {position}", .character.escape_default())]
    InvalidCharacter { position: usize, character: char },
    #[error("card number fails the Luhn checksum")]
    ChecksumFailure,
    #[error("card number does not belong to a known issuer")]
    UnrecognizedIssuer,
    #[error("{} cards are not allowed", .0.name())]
    DisallowedIssuer(Issuer),
    #[error("{} test numbers are not allowed", .0.name())]
    DisallowedTestNumber(Issuer),
}

impl FailureReason {
    pub fn kind(&self) -> FailureKind {
        match self {
            FailureReason::Missing
            | FailureReason::Empty
            | FailureReason::InvalidCharacter { .. } => FailureKind::MalformedInput,
            FailureReason::ChecksumFailure => FailureKind::ChecksumFailure,
            FailureReason::UnrecognizedIssuer
            | FailureReason::DisallowedIssuer(_)
            | FailureReason::DisallowedTestNumber(_) => FailureKind::PolicyFailure,
        }
    }

    /// The issuer named by the reason, if any.
    pub fn issuer(&self) -> Option<Issuer> {
        match self {
            FailureReason::DisallowedIssuer(issuer)
            | FailureReason::DisallowedTestNumber(issuer) => Some(*issuer),
            _ => None,
        }
    }
}

/// What is known about a number that passed every check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardDetails {
    pub issuer: Issuer,
    pub test_number: bool,
}

/// A rejected number: one reason plus the message resolved for its channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    reason: FailureReason,
    message: String,
}

impl Rejection {
    pub fn new(reason: FailureReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }

    pub fn reason(&self) -> &FailureReason {
        &self.reason
    }

    pub fn kind(&self) -> FailureKind {
        self.reason.kind()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result of validating a single number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid(CardDetails),
    Invalid(Rejection),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }

    pub fn kind(&self) -> Option<FailureKind> {
        self.rejection().map(Rejection::kind)
    }

    pub fn message(&self) -> Option<&str> {
        self.rejection().map(Rejection::message)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ValidationOutcome::Valid(_) => None,
            ValidationOutcome::Invalid(rejection) => Some(rejection),
        }
    }

    /// The issuer, when the outcome identified one.
    pub fn issuer(&self) -> Option<Issuer> {
        match self {
            ValidationOutcome::Valid(details) => Some(details.issuer),
            ValidationOutcome::Invalid(rejection) => rejection.reason().issuer(),
        }
    }
}
