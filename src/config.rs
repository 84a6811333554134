//! Policy configuration: a JSON policy file with command-line overrides.

use crate::domain::card_number::Normalization;
use crate::domain::issuer::Issuer;
use crate::domain::policy::ValidationPolicy;
use crate::error::{CardError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// Reads a [`ValidationPolicy`] from a JSON file.
///
/// Missing fields take their defaults; unknown fields and unknown issuer
/// names are configuration errors.
pub fn load_policy(path: &Path) -> Result<ValidationPolicy> {
    let file = File::open(path)?;
    let policy = read_policy(BufReader::new(file)).map_err(|e| match e {
        CardError::JsonError(e) => {
            CardError::ConfigError(format!("invalid policy file {}: {e}", path.display()))
        }
        other => other,
    })?;
    info!(path = %path.display(), "loaded validation policy");
    Ok(policy)
}

pub fn read_policy<R: Read>(source: R) -> Result<ValidationPolicy> {
    Ok(serde_json::from_reader(source)?)
}

/// Settings that replace the ones from the policy file. Unset fields keep the
/// file's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyOverrides {
    pub allow_test_numbers: Option<bool>,
    /// Replaces the allow list when non-empty.
    pub issuers: Vec<Issuer>,
    pub normalization: Option<Normalization>,
    pub checksum_failure_message: Option<String>,
    pub policy_failure_message: Option<String>,
    pub malformed_input_message: Option<String>,
}

impl PolicyOverrides {
    /// Applies the overrides on top of `policy`.
    pub fn apply(self, mut policy: ValidationPolicy) -> ValidationPolicy {
        if !self.issuers.is_empty() {
            policy.allowed_issuers = self.issuers.into_iter().collect();
        }
        if let Some(allow) = self.allow_test_numbers {
            policy.allow_test_numbers = allow;
        }
        if let Some(normalization) = self.normalization {
            policy.normalization = normalization;
        }
        if self.checksum_failure_message.is_some() {
            policy.checksum_failure_message = self.checksum_failure_message;
        }
        if self.policy_failure_message.is_some() {
            policy.policy_failure_message = self.policy_failure_message;
        }
        if self.malformed_input_message.is_some() {
            policy.malformed_input_message = self.malformed_input_message;
        }
        policy
    }
}
