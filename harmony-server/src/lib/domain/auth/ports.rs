use async_trait::async_trait;
use auth::SecretString;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthClaims;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::TokenPair;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for the registration, login and refresh flows.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Create a new account.
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailTaken` - Email is already registered, including when a
    ///   concurrent registration wins the race at the store
    /// * `HashingError` - Password hashing failed
    /// * `InternalError` - Store failure
    async fn register(&self, command: RegisterCommand) -> Result<User, AuthError>;

    /// Exchange credentials for a token pair.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password, indistinguishably
    /// * `HashingError` - Stored digest is corrupt
    /// * `InternalError` - Store or signing failure
    async fn login(&self, command: LoginCommand) -> Result<TokenPair, AuthError>;

    /// Exchange a refresh token for a fresh token pair.
    ///
    /// The presented token stays valid until its own expiry.
    ///
    /// # Errors
    /// * `InvalidToken` - Token invalid, expired, not a refresh token, or its
    ///   subject no longer exists
    /// * `InternalError` - Store or signing failure
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError>;
}

/// One-way password hashing.
///
/// CPU-bound and synchronous; async callers should move it off the runtime
/// worker threads.
pub trait CredentialHasher: Send + Sync + 'static {
    /// Produce a salted digest.
    ///
    /// # Errors
    /// * `HashingError` - Entropy or resource failure
    fn hash(&self, password: &SecretString) -> Result<SecretString, AuthError>;

    /// Compare a password with a stored digest.
    ///
    /// # Returns
    /// `false` on mismatch
    ///
    /// # Errors
    /// * `HashingError` - Stored digest is structurally invalid
    fn verify(&self, password: &SecretString, digest: &SecretString) -> Result<bool, AuthError>;
}

/// Session token issuing and validation.
pub trait TokenProvider: Send + Sync + 'static {
    /// Issue an access token and a refresh token for a user.
    ///
    /// # Errors
    /// * `InternalError` - Signing failed
    fn issue_pair(&self, user_id: &UserId) -> Result<TokenPair, AuthError>;

    /// Verify a token and decode its claims.
    ///
    /// # Errors
    /// * `InvalidToken` - For any rejection reason
    fn validate(&self, token: &str) -> Result<AuthClaims, AuthError>;
}
