//! Login rule order, table-driven.
//!
//! Rules run in order (required fields, email shape, password length) and
//! the first failure is the one reported.

use rstest::rstest;

use crate::core::session::{
    validate_credentials, GateDecision, LoginOutcome, LoginRejection, MemorySessionStore,
    SessionGate, SessionStore, PLACEHOLDER_TOKEN, TOKEN_KEY,
};

#[rstest]
#[case("", "", Err(LoginRejection::RequiredFieldsMissing))]
#[case("user@example.com", "", Err(LoginRejection::RequiredFieldsMissing))]
#[case("", "123456", Err(LoginRejection::RequiredFieldsMissing))]
#[case("", "1", Err(LoginRejection::RequiredFieldsMissing))]
#[case("not-an-email", "1", Err(LoginRejection::InvalidEmailFormat))]
#[case("user@example", "123456", Err(LoginRejection::InvalidEmailFormat))]
#[case("user @example.com", "123456", Err(LoginRejection::InvalidEmailFormat))]
#[case(" user@example.com", "123456", Err(LoginRejection::InvalidEmailFormat))]
#[case("a@@b.com", "123456", Err(LoginRejection::InvalidEmailFormat))]
#[case("a@b.com", "12345", Err(LoginRejection::PasswordTooShort))]
#[case("a@b.com", "ééééé", Err(LoginRejection::PasswordTooShort))]
#[case("a@b.com", "123456", Ok(()))]
#[case("a@b.com", "      ", Ok(()))]
#[case("first.last@sub.example.org", "correct horse", Ok(()))]
fn test_rule_order(
    #[case] email: &str,
    #[case] password: &str,
    #[case] expected: Result<(), LoginRejection>,
) {
    assert_eq!(validate_credentials(email, password), expected);
}

#[rstest]
#[case(LoginRejection::RequiredFieldsMissing, "Email and password are required.")]
#[case(LoginRejection::InvalidEmailFormat, "Please enter a valid email address.")]
#[case(
    LoginRejection::PasswordTooShort,
    "Password must be at least 6 characters long."
)]
fn test_rejection_messages(#[case] rejection: LoginRejection, #[case] message: &str) {
    assert_eq!(rejection.to_string(), message);
}

#[test]
fn test_short_password_leaves_no_token() {
    let gate = SessionGate::new(MemorySessionStore::new());

    let outcome = gate.submit_credentials("a@b.com", "12345").unwrap();

    assert_eq!(
        outcome,
        LoginOutcome::Rejected(LoginRejection::PasswordTooShort)
    );
    assert_eq!(gate.store().get(TOKEN_KEY).unwrap(), None);
    assert_eq!(gate.check_session(), GateDecision::Denied);
}

#[test]
fn test_valid_login_stores_placeholder() {
    let gate = SessionGate::new(MemorySessionStore::new());

    let outcome = gate.submit_credentials("a@b.com", "123456").unwrap();

    assert_eq!(outcome, LoginOutcome::Accepted(PLACEHOLDER_TOKEN.to_string()));
    assert_eq!(
        gate.store().get(TOKEN_KEY).unwrap().as_deref(),
        Some(PLACEHOLDER_TOKEN)
    );
    assert_eq!(gate.check_session(), GateDecision::Granted);
}

#[test]
fn test_logout_twice_is_harmless() {
    let gate = SessionGate::new(MemorySessionStore::with_entry(TOKEN_KEY, PLACEHOLDER_TOKEN));
    gate.logout();
    gate.logout();
    assert_eq!(gate.check_session(), GateDecision::Denied);
}
