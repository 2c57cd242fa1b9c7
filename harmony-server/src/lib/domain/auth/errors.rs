use thiserror::Error;

use crate::domain::user::errors::UserError;

/// Error for password policy failures at registration
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Password too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for registration, login, refresh and request gating.
///
/// `InvalidCredentials` and `InvalidToken` carry no detail so that callers
/// cannot tell an unknown email from a wrong password, or a forged token
/// from an expired one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email already taken")]
    EmailTaken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Password hashing failed: {0}")]
    HashingError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmailAlreadyExists(_) => AuthError::EmailTaken,
            other => AuthError::InternalError(other.to_string()),
        }
    }
}

impl From<auth::PasswordError> for AuthError {
    fn from(err: auth::PasswordError) -> Self {
        AuthError::HashingError(err.to_string())
    }
}

impl From<auth::InvalidToken> for AuthError {
    fn from(_: auth::InvalidToken) -> Self {
        AuthError::InvalidToken
    }
}

impl From<auth::JwtError> for AuthError {
    fn from(err: auth::JwtError) -> Self {
        AuthError::InternalError(format!("Token generation failed: {}", err))
    }
}
