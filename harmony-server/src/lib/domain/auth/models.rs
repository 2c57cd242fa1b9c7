use auth::SecretString;

use crate::domain::auth::errors::PasswordPolicyError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

pub use auth::TokenKind;
pub use auth::TokenPair;

/// Raw password accepted at registration.
///
/// 8-128 characters. Stays wrapped in a `SecretString` until it is hashed.
#[derive(Debug, Clone)]
pub struct Password(SecretString);

impl Password {
    const MIN_LENGTH: usize = 8;
    const MAX_LENGTH: usize = 128;

    /// Validate a raw password against the length policy.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 8 characters
    /// * `TooLong` - More than 128 characters
    pub fn new(password: SecretString) -> Result<Self, PasswordPolicyError> {
        let length = password.char_count();
        if length < Self::MIN_LENGTH {
            Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(PasswordPolicyError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(password))
        }
    }

    pub fn as_secret(&self) -> &SecretString {
        &self.0
    }

    pub fn into_secret(self) -> SecretString {
        self.0
    }
}

/// Command to register a new account with validated fields
#[derive(Debug)]
pub struct RegisterCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: Password,
}

impl RegisterCommand {
    pub fn new(username: Username, email: EmailAddress, password: Password) -> Self {
        Self {
            username,
            email,
            password,
        }
    }
}

/// Login credentials.
///
/// The password is not policy-checked here; a wrong password of any length
/// is simply a credential mismatch.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: SecretString,
}

/// Decoded and verified session token payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthClaims {
    pub user_id: UserId,
    pub kind: TokenKind,
}

/// Identity bound to a request by the auth gate.
///
/// Lives in the request extensions for the duration of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}
