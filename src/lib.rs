pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod interfaces;

pub use application::engine::{ValidationEngine, classify};
pub use domain::card_number::{CardNumber, Normalization};
pub use domain::issuer::Issuer;
pub use domain::luhn::is_valid as check_luhn;
pub use domain::outcome::{CardDetails, FailureKind, FailureReason, Rejection, ValidationOutcome};
pub use domain::policy::ValidationPolicy;
