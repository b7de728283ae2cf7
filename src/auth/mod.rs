//! Operator access gate
//!
//! The estimator is for counter staff only: a credential check guards
//! every command that quotes prices, and the signed-in operator persists
//! between invocations. Credential storage is deliberately simple; the
//! contract is the binary authenticated state and the fixed set of
//! user-facing failure categories.

mod gate;
mod session;

pub use gate::{CredentialGate, OperatorCredential};
pub use session::{Session, SessionStore};

use thiserror::Error;

/// User-facing sign-in failure categories
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Credential does not look like an email address
    #[error("Invalid Email Format")]
    InvalidEmailFormat,
    /// No operator registered under this email
    #[error("User not found")]
    UnknownUser,
    /// Password mismatch for a known operator
    #[error("Incorrect Password")]
    WrongCredential,
    /// Too many consecutive failures
    #[error("Too many failed attempts. Try again later.")]
    RateLimited,
}

/// Binary authenticated state gating the estimator
pub trait AccessGate {
    /// Attempt to sign an operator in
    fn sign_in(&mut self, email: &str, password: &str) -> Result<(), AuthError>;

    /// Whether a session is currently authenticated
    fn is_authenticated(&self) -> bool;

    /// End the current session
    fn end_session(&mut self);
}
