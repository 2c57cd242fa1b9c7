use auth::Clock;
use auth::PasswordHasher;
use auth::SecretString;
use auth::TokenCodec;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthClaims;
use crate::domain::auth::models::TokenPair;
use crate::domain::auth::ports::CredentialHasher;
use crate::domain::auth::ports::TokenProvider;
use crate::domain::user::models::UserId;

impl CredentialHasher for PasswordHasher {
    fn hash(&self, password: &SecretString) -> Result<SecretString, AuthError> {
        Ok(PasswordHasher::hash(self, password)?)
    }

    fn verify(&self, password: &SecretString, digest: &SecretString) -> Result<bool, AuthError> {
        Ok(PasswordHasher::verify(self, password, digest)?)
    }
}

impl<C> TokenProvider for TokenCodec<C>
where
    C: Clock + 'static,
{
    fn issue_pair(&self, user_id: &UserId) -> Result<TokenPair, AuthError> {
        Ok(TokenCodec::issue_pair(self, &user_id.to_string())?)
    }

    fn validate(&self, token: &str) -> Result<AuthClaims, AuthError> {
        let claims = TokenCodec::validate(self, token)?;

        let user_id = UserId::from_string(&claims.sub).map_err(|e| {
            tracing::debug!(reason = %e, "Token rejected: subject is not a user id");
            AuthError::InvalidToken
        })?;

        Ok(AuthClaims {
            user_id,
            kind: claims.kind,
        })
    }
}
