use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("'{0}' is not a valid UUID")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("must be at least {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("must be at most {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("must not contain control characters")]
    InvalidCharacters,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("'{0}' is not a valid email address")]
    InvalidFormat(String),
}

/// Errors surfaced by the user service and the user store.
///
/// `EmailAlreadyExists` is raised by the store's unique constraint, so it is
/// also what a registration that loses a race against another one sees.
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Invalid user id: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("User {0} not found")]
    NotFound(String),

    #[error("Email {0} is already registered")]
    EmailAlreadyExists(String),

    #[error("Storage failure: {0}")]
    DatabaseError(String),
}
