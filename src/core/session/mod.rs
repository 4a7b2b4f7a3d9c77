//! Session gate and the token store it persists through.

pub mod gate;
pub mod store;

pub use gate::{
    validate_credentials, GateDecision, GateError, LoginOutcome, LoginRejection, SessionGate,
    MIN_PASSWORD_LEN, PLACEHOLDER_TOKEN, TOKEN_KEY,
};
pub use store::{
    open_store, FileSessionStore, KeyringSessionStore, MemorySessionStore, SessionStore,
    SessionStoreError,
};

#[cfg(test)]
pub use store::MockSessionStore;
