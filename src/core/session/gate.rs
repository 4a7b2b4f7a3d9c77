//! Session gate: decides whether the dashboard may be entered, turns a login
//! form submission into a persisted token, and clears it again on logout.
//!
//! Only the *presence* of the token is checked. Credentials are validated for
//! shape and a fixed placeholder token is issued; there is no credential
//! store behind the login form.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use super::store::{SessionStore, SessionStoreError};

/// Key the session token is persisted under.
pub const TOKEN_KEY: &str = "token";

/// Token issued for every accepted login.
pub const PLACEHOLDER_TOKEN: &str = "dummy-jwt-token";

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Something, an `@`, something, a dot, something. No whitespace anywhere.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

/// `None` only if the pattern fails to compile; callers then reject every email.
fn email_regex() -> Option<&'static Regex> {
    EMAIL_RE
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                log::error!("Email pattern failed to compile: {}", e);
                None
            }
        })
        .as_ref()
}

/// Result of a gate check on entry to the protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Granted,
    Denied,
}

/// Why a login form submission was rejected. Rules are checked in
/// declaration order and the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginRejection {
    #[error("Email and password are required.")]
    RequiredFieldsMissing,

    #[error("Please enter a valid email address.")]
    InvalidEmailFormat,

    #[error("Password must be at least 6 characters long.")]
    PasswordTooShort,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted(String),
    Rejected(LoginRejection),
}

#[derive(Error, Debug)]
pub enum GateError {
    #[error("Could not save session: {0}")]
    Store(#[from] SessionStoreError),
}

/// Validate login form input without touching any state.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), LoginRejection> {
    if email.is_empty() || password.is_empty() {
        return Err(LoginRejection::RequiredFieldsMissing);
    }
    if !email_regex().is_some_and(|re| re.is_match(email)) {
        return Err(LoginRejection::InvalidEmailFormat);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(LoginRejection::PasswordTooShort);
    }
    Ok(())
}

pub struct SessionGate<S> {
    store: S,
}

impl<S: SessionStore> SessionGate<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Presence check for the persisted token.
    ///
    /// A store that cannot be read denies entry; the failure is logged.
    pub fn check_session(&self) -> GateDecision {
        match self.store.get(TOKEN_KEY) {
            Ok(Some(_)) => GateDecision::Granted,
            Ok(None) => {
                log::info!("No session token, access to dashboard denied");
                GateDecision::Denied
            }
            Err(e) => {
                log::warn!("Session store read failed, denying access: {}", e);
                GateDecision::Denied
            }
        }
    }

    /// Validate the login form and, on success, persist the placeholder token.
    ///
    /// Rejections never write to the store.
    pub fn submit_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<LoginOutcome, GateError> {
        if let Err(rejection) = validate_credentials(email, password) {
            log::debug!("Login rejected: {:?}", rejection);
            return Ok(LoginOutcome::Rejected(rejection));
        }

        self.store.set(TOKEN_KEY, PLACEHOLDER_TOKEN)?;
        log::info!("Login accepted, session token stored");
        Ok(LoginOutcome::Accepted(PLACEHOLDER_TOKEN.to_string()))
    }

    /// Delete the persisted token. Idempotent; a store failure is only logged
    /// because the caller navigates to the login view either way.
    pub fn logout(&self) {
        match self.store.delete(TOKEN_KEY) {
            Ok(()) => log::info!("Session token cleared"),
            Err(e) => log::warn!("Failed to clear session token: {}", e),
        }
    }
}
