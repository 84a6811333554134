use crate::domain::card_number::CardNumber;
use crate::domain::issuer;
use crate::domain::luhn;
use crate::domain::outcome::{CardDetails, FailureReason, Rejection, ValidationOutcome};
use crate::domain::policy::ValidationPolicy;
use crate::domain::test_numbers;
use tracing::debug;

/// Classifies a normalized card number against a policy.
///
/// A checksum failure is reported on its own, before any issuer or
/// test-number check. Otherwise test numbers are rejected first (when the
/// policy disallows them), then unknown or disallowed issuers.
pub fn classify(number: &CardNumber, policy: &ValidationPolicy) -> ValidationOutcome {
    if !luhn::is_valid(number.digits()) {
        return reject(number, FailureReason::ChecksumFailure, policy);
    }

    let test_issuer = test_numbers::lookup(number.digits());
    if let Some(issuer) = test_issuer
        && !policy.allow_test_numbers
    {
        return reject(number, FailureReason::DisallowedTestNumber(issuer), policy);
    }

    let Some(issuer) = issuer::identify(number.digits()) else {
        return reject(number, FailureReason::UnrecognizedIssuer, policy);
    };
    if !policy.permits_issuer(issuer) {
        return reject(number, FailureReason::DisallowedIssuer(issuer), policy);
    }

    ValidationOutcome::Valid(CardDetails {
        issuer,
        test_number: test_issuer.is_some(),
    })
}

fn reject(
    number: &CardNumber,
    reason: FailureReason,
    policy: &ValidationPolicy,
) -> ValidationOutcome {
    debug!(card = %number, kind = %reason.kind(), %reason, "card number rejected");
    let message = policy.message_for(reason.kind());
    ValidationOutcome::Invalid(Rejection::new(reason, message))
}

/// Validates raw caller input against one policy.
///
/// `ValidationEngine` owns its policy and holds no other state, so a single
/// instance can be shared between threads and reused for any number of calls.
#[derive(Debug, Clone, Default)]
pub struct ValidationEngine {
    policy: ValidationPolicy,
}

impl ValidationEngine {
    /// Creates a new `ValidationEngine` for the given policy.
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    /// Normalizes and classifies `input`.
    ///
    /// Absent input and input that does not normalize to a digit string are
    /// reported as malformed input, separately from checksum and policy
    /// failures.
    pub fn validate(&self, input: Option<&str>) -> ValidationOutcome {
        let Some(raw) = input else {
            return self.malformed(FailureReason::Missing);
        };

        match CardNumber::parse(raw, self.policy.normalization) {
            Ok(number) => self.classify(&number),
            Err(reason) => self.malformed(reason),
        }
    }

    pub fn classify(&self, number: &CardNumber) -> ValidationOutcome {
        classify(number, &self.policy)
    }

    fn malformed(&self, reason: FailureReason) -> ValidationOutcome {
        debug!(%reason, "malformed card number input");
        let message = self.policy.message_for(reason.kind());
        ValidationOutcome::Invalid(Rejection::new(reason, message))
    }
}
