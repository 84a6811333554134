//! Published test card numbers that never belong to a real account.

use crate::domain::issuer::Issuer;
use once_cell::sync::Lazy;
use std::collections::HashMap;

const TEST_NUMBERS: &[(&str, Issuer)] = &[
    ("378282246310005", Issuer::AmericanExpress),
    ("371449635398431", Issuer::AmericanExpress),
    ("378734493671000", Issuer::AmericanExpress),
    ("30569309025904", Issuer::DinersClub),
    ("38520000023237", Issuer::DinersClub),
    ("36227206271667", Issuer::DinersClub),
    ("3056930009020004", Issuer::DinersClub),
    ("6011111111111117", Issuer::Discover),
    ("6011000990139424", Issuer::Discover),
    ("6011981111111113", Issuer::Discover),
    ("3530111333300000", Issuer::Jcb),
    ("3566002020360505", Issuer::Jcb),
    ("3528000000000007", Issuer::Jcb),
    ("5555555555554444", Issuer::MasterCard),
    ("5105105105105100", Issuer::MasterCard),
    ("5200828282828210", Issuer::MasterCard),
    ("2223003122003222", Issuer::MasterCard),
    ("4111111111111111", Issuer::Visa),
    ("4012888888881881", Issuer::Visa),
    ("4222222222222", Issuer::Visa),
    ("6200000000000005", Issuer::UnionPay),
    ("6759649826438453", Issuer::Maestro),
    ("5019717010103742", Issuer::Dankort),
    ("6331101999990016", Issuer::Switch),
];

static REGISTRY: Lazy<HashMap<&'static str, Issuer>> =
    Lazy::new(|| TEST_NUMBERS.iter().copied().collect());

/// Returns the issuer a test number was published for, or `None` when the
/// digits are not a known test number.
pub fn lookup(digits: &str) -> Option<Issuer> {
    REGISTRY.get(digits).copied()
}

/// All registered test numbers with their issuers, in registration order.
pub fn all() -> impl Iterator<Item = (&'static str, Issuer)> {
    TEST_NUMBERS.iter().copied()
}
