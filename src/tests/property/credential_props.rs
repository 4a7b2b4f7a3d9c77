//! Property-based tests for login form validation

use proptest::prelude::*;

use crate::core::session::{validate_credentials, LoginRejection, MIN_PASSWORD_LEN};

fn arb_valid_email() -> impl Strategy<Value = String> {
    ("[a-z0-9._]{1,12}", "[a-z0-9]{1,10}", "[a-z]{2,6}")
        .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
}

proptest! {
    #[test]
    fn empty_field_is_reported_first(other in ".{0,20}") {
        prop_assert_eq!(
            validate_credentials("", &other),
            Err(LoginRejection::RequiredFieldsMissing)
        );
        prop_assert_eq!(
            validate_credentials(&other, ""),
            Err(LoginRejection::RequiredFieldsMissing)
        );
    }

    #[test]
    fn well_formed_email_with_long_password_passes(
        email in arb_valid_email(),
        password in "[^\\s]{6,30}",
    ) {
        prop_assert_eq!(validate_credentials(&email, &password), Ok(()));
    }

    #[test]
    fn short_password_is_rejected(email in arb_valid_email(), password in "[a-z]{1,5}") {
        prop_assert!(password.chars().count() < MIN_PASSWORD_LEN);
        prop_assert_eq!(
            validate_credentials(&email, &password),
            Err(LoginRejection::PasswordTooShort)
        );
    }

    #[test]
    fn email_with_whitespace_never_passes(
        email in arb_valid_email(),
        at in 0usize..8,
        password in "[a-z]{6,10}",
    ) {
        let cut = at.min(email.len());
        let broken = format!("{} {}", &email[..cut], &email[cut..]);
        prop_assert_eq!(
            validate_credentials(&broken, &password),
            Err(LoginRejection::InvalidEmailFormat)
        );
    }
}
