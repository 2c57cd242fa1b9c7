use chrono::Duration;

use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::jwt::Claims;
use crate::jwt::InvalidToken;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::TokenKind;

/// Access and refresh token issued together.
///
/// The two tokens are independent: nothing links them once issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Session token codec.
///
/// Issues and validates signed, self-contained tokens for a subject. The
/// signing secret is fixed at construction and never changes afterwards.
pub struct TokenCodec<C = SystemClock> {
    jwt_handler: JwtHandler,
    access_ttl: Duration,
    refresh_ttl: Duration,
    clock: C,
}

impl TokenCodec<SystemClock> {
    /// Access tokens live for minutes.
    pub const DEFAULT_ACCESS_TTL_MINUTES: i64 = 15;
    /// Refresh tokens live for days.
    pub const DEFAULT_REFRESH_TTL_HOURS: i64 = 168;

    /// Create a codec that reads time from the system clock.
    ///
    /// # Arguments
    /// * `secret` - HS256 signing secret
    /// * `access_ttl` - Lifetime of access tokens
    /// * `refresh_ttl` - Lifetime of refresh tokens
    pub fn new(secret: &[u8], access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self::with_clock(secret, access_ttl, refresh_ttl, SystemClock)
    }
}

impl<C: Clock> TokenCodec<C> {
    /// Create a codec with an explicit clock.
    pub fn with_clock(
        secret: &[u8],
        access_ttl: Duration,
        refresh_ttl: Duration,
        clock: C,
    ) -> Self {
        Self {
            jwt_handler: JwtHandler::new(secret),
            access_ttl,
            refresh_ttl,
            clock,
        }
    }

    /// Issue a signed token for `subject`, valid for `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(
        &self,
        subject: &str,
        kind: TokenKind,
        ttl: Duration,
    ) -> Result<String, JwtError> {
        let claims = Claims::new(subject, kind, self.clock.now(), ttl);
        self.jwt_handler.encode(&claims)
    }

    /// Issue an access token and a refresh token for `subject`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue_pair(&self, subject: &str) -> Result<TokenPair, JwtError> {
        let access_token = self.issue(subject, TokenKind::Access, self.access_ttl)?;
        let refresh_token = self.issue(subject, TokenKind::Refresh, self.refresh_ttl)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Validate a token and return its claims.
    ///
    /// Rejects bad signatures, foreign algorithms, malformed payloads and
    /// tokens at or past their expiry. The kind is not checked here; callers
    /// decide which kind they accept.
    ///
    /// # Errors
    /// * `InvalidToken` - For every rejection reason
    pub fn validate(&self, token: &str) -> Result<Claims, InvalidToken> {
        let claims = self.jwt_handler.decode(token).map_err(|e| {
            tracing::debug!(reason = %e, "Token rejected");
            InvalidToken
        })?;

        if claims.is_expired(self.clock.now().timestamp()) {
            tracing::debug!(reason = %JwtError::TokenExpired, "Token rejected");
            return Err(InvalidToken);
        }

        Ok(claims)
    }
}
