use thiserror::Error;

/// Error type for low-level JWT operations.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token signing algorithm is not accepted")]
    InvalidAlgorithm,

    #[error("Token signature is invalid")]
    InvalidSignature,
}

/// Opaque validation failure surfaced to callers of the token codec.
///
/// Carries no detail on purpose: expired, forged, malformed and wrong-kind
/// tokens must be indistinguishable from the outside.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Invalid or expired token")]
pub struct InvalidToken;
