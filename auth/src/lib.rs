//! Authentication utilities library
//!
//! Provides the credential and session-token building blocks for the server:
//! - Password hashing (Argon2id)
//! - Signed session tokens (HS256 JWT) of two kinds, access and refresh
//! - A zeroizing, non-serializable wrapper for sensitive strings
//!
//! The server defines its own authentication ports and adapts these implementations.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::{PasswordHasher, SecretString};
//!
//! let hasher = PasswordHasher::new();
//! let password = SecretString::from("my_password");
//! let hash = hasher.hash(&password).unwrap();
//! let is_valid = hasher.verify(&password, &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{TokenCodec, TokenKind};
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     Duration::minutes(15),
//!     Duration::days(7),
//! );
//!
//! let pair = codec.issue_pair("user123").unwrap();
//! let claims = codec.validate(&pair.access_token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! assert_eq!(claims.kind, TokenKind::Access);
//! ```

pub mod clock;
pub mod codec;
pub mod jwt;
pub mod password;
pub mod secret;

// Re-export commonly used items
pub use clock::Clock;
pub use clock::SystemClock;
pub use codec::TokenCodec;
pub use codec::TokenPair;
pub use jwt::Claims;
pub use jwt::InvalidToken;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenKind;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use secret::SecretString;
