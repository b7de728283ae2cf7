//! Credential-backed access gate

use super::{AccessGate, AuthError};
use serde::Deserialize;

const DEFAULT_MAX_FAILURES: u32 = 5;

/// One registered operator
#[derive(Debug, Clone, Deserialize)]
pub struct OperatorCredential {
    pub email: String,
    pub password: String,
}

/// Access gate backed by the configured operator list
pub struct CredentialGate {
    operators: Vec<OperatorCredential>,
    authenticated: bool,
    consecutive_failures: u32,
    max_failures: u32,
}

impl CredentialGate {
    pub fn new(operators: Vec<OperatorCredential>) -> Self {
        Self {
            operators,
            authenticated: false,
            consecutive_failures: 0,
            max_failures: DEFAULT_MAX_FAILURES,
        }
    }

    /// Override the consecutive-failure limit
    pub fn with_max_failures(mut self, max_failures: u32) -> Self {
        self.max_failures = max_failures;
        self
    }

    fn reject(&mut self, error: AuthError) -> Result<(), AuthError> {
        self.consecutive_failures += 1;
        Err(error)
    }
}

fn looks_like_email(text: &str) -> bool {
    match text.split_once('@') {
        Some((user, domain)) => !user.is_empty() && domain.contains('.'),
        None => false,
    }
}

impl AccessGate for CredentialGate {
    fn sign_in(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        if self.consecutive_failures >= self.max_failures {
            return Err(AuthError::RateLimited);
        }

        if !looks_like_email(email) {
            return self.reject(AuthError::InvalidEmailFormat);
        }

        let operator = match self.operators.iter().find(|o| o.email == email) {
            Some(operator) => operator,
            None => return self.reject(AuthError::UnknownUser),
        };

        if operator.password != password {
            return self.reject(AuthError::WrongCredential);
        }

        self.consecutive_failures = 0;
        self.authenticated = true;
        Ok(())
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn end_session(&mut self) {
        self.authenticated = false;
    }
}
