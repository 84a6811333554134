use cardcheck::{
    CardDetails, CardNumber, FailureKind, FailureReason, Issuer, ValidationEngine,
    ValidationOutcome, ValidationPolicy, check_luhn, classify,
};

fn test_card_policy() -> ValidationPolicy {
    ValidationPolicy::new()
        .allow_test_numbers(true)
        .allow_issuers([Issuer::Visa, Issuer::MasterCard])
}

fn custom_message_policy() -> ValidationPolicy {
    test_card_policy()
        .with_checksum_failure_message("Luhn fail!")
        .with_policy_failure_message("Not supported!")
}

fn production_policy() -> ValidationPolicy {
    ValidationPolicy::new()
        .allow_test_numbers(false)
        .allow_issuers([Issuer::Visa, Issuer::MasterCard])
}

#[test]
fn test_is_valid() {
    let engine = ValidationEngine::new(test_card_policy());
    assert!(engine.validate(Some("4012888888881881")).is_valid());
}

#[test]
fn test_number_must_exist() {
    let engine = ValidationEngine::new(test_card_policy());
    let outcome = engine.validate(None);
    assert!(!outcome.is_valid());
    assert_eq!(outcome.kind(), Some(FailureKind::MalformedInput));
}

#[test]
fn test_number_must_be_luhn() {
    let engine = ValidationEngine::new(test_card_policy());
    let outcome = engine.validate(Some("4012888888881882"));
    assert_eq!(outcome.kind(), Some(FailureKind::ChecksumFailure));
}

#[test]
fn test_custom_card_support_message() {
    let engine = ValidationEngine::new(custom_message_policy());
    let outcome = engine.validate(Some("3528000000000007"));
    assert_eq!(outcome.kind(), Some(FailureKind::PolicyFailure));
    assert_eq!(outcome.message(), Some("Not supported!"));
}

#[test]
fn test_custom_luhn_failure_message() {
    let engine = ValidationEngine::new(custom_message_policy());
    let outcome = engine.validate(Some("4111111111111112"));
    assert_eq!(outcome.kind(), Some(FailureKind::ChecksumFailure));
    assert_eq!(outcome.message(), Some("Luhn fail!"));
}

#[test]
fn test_production_rejects_test_number() {
    let engine = ValidationEngine::new(production_policy());
    let outcome = engine.validate(Some("4012888888881881"));
    assert_eq!(outcome.kind(), Some(FailureKind::PolicyFailure));
}

#[test]
fn test_production_accepts_valid_number() {
    let engine = ValidationEngine::new(production_policy());
    assert_eq!(
        engine.validate(Some("4485071359608368")),
        ValidationOutcome::Valid(CardDetails {
            issuer: Issuer::Visa,
            test_number: false,
        })
    );
}

#[test]
fn test_classify_entry_point() {
    let number: CardNumber = "5105 1051 0510 5100".parse().unwrap();
    let outcome = classify(&number, &test_card_policy());
    assert_eq!(outcome.issuer(), Some(Issuer::MasterCard));
    assert!(outcome.is_valid());

    let outcome = classify(&number, &production_policy());
    assert_eq!(
        outcome.rejection().map(|r| r.reason()),
        Some(&FailureReason::DisallowedTestNumber(Issuer::MasterCard))
    );
}

#[test]
fn test_checksum_entry_point() {
    assert!(check_luhn("4012888888881881"));
    assert!(!check_luhn("4012888888881882"));
    assert!(!check_luhn(""));
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(ValidationEngine::new(production_policy()));
    let handles: Vec<_> = ["4485071359608368", "4012888888881881", "4111111111111112"]
        .into_iter()
        .map(|number| {
            let engine = std::sync::Arc::clone(&engine);
            std::thread::spawn(move || engine.validate(Some(number)).kind())
        })
        .collect();

    let kinds: Vec<Option<FailureKind>> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        kinds,
        vec![
            None,
            Some(FailureKind::PolicyFailure),
            Some(FailureKind::ChecksumFailure),
        ]
    );
}
