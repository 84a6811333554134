//! Domain layer: card numbers, the issuer catalog, test numbers, the Luhn
//! checksum, validation policies and outcomes.
//!
//! Everything here is pure and works on immutable reference data, so it can be
//! used from any number of threads at once.

pub mod card_number;
pub mod issuer;
pub mod luhn;
pub mod outcome;
pub mod policy;
pub mod test_numbers;
