use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::TokenKind;
use crate::domain::auth::models::TokenPair;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::CredentialHasher;
use crate::domain::auth::ports::TokenProvider;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service implementation for account registration and sessions.
///
/// Hashing and verification run on the blocking thread pool so that a
/// burst of logins does not stall the runtime.
pub struct AuthService<UR, H, TP>
where
    UR: UserRepository,
    H: CredentialHasher,
    TP: TokenProvider,
{
    repository: Arc<UR>,
    hasher: Arc<H>,
    tokens: Arc<TP>,
}

impl<UR, H, TP> AuthService<UR, H, TP>
where
    UR: UserRepository,
    H: CredentialHasher,
    TP: TokenProvider,
{
    pub fn new(repository: Arc<UR>, hasher: Arc<H>, tokens: Arc<TP>) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }

    async fn run_blocking<T, F>(&self, task: F) -> Result<T, AuthError>
    where
        T: Send + 'static,
        F: FnOnce(&H) -> Result<T, AuthError> + Send + 'static,
    {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || task(hasher.as_ref()))
            .await
            .map_err(|e| AuthError::InternalError(format!("Hashing task failed: {}", e)))?
    }
}

#[async_trait]
impl<UR, H, TP> AuthServicePort for AuthService<UR, H, TP>
where
    UR: UserRepository,
    H: CredentialHasher,
    TP: TokenProvider,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, AuthError> {
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(AuthError::EmailTaken);
        }

        let password = command.password.into_secret();
        let password_hash = self
            .run_blocking(move |hasher| hasher.hash(&password))
            .await?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            created_at: now,
            updated_at: now,
        };

        // The store has the final say on uniqueness: a concurrent
        // registration may have passed the lookup above too.
        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<TokenPair, AuthError> {
        let user = match self.repository.find_by_email(&command.email).await? {
            Some(user) => user,
            None => {
                tracing::debug!("Login rejected: unknown email");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let password = command.password;
        let digest = user.password_hash.clone();
        let matches = self
            .run_blocking(move |hasher| hasher.verify(&password, &digest))
            .await?;

        if !matches {
            tracing::debug!(user_id = %user.id, "Login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let pair = self.tokens.issue_pair(&user.id)?;
        tracing::info!(user_id = %user.id, "User logged in");

        Ok(pair)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let claims = self.tokens.validate(refresh_token)?;

        if claims.kind != TokenKind::Refresh {
            tracing::debug!(kind = %claims.kind, "Refresh rejected: wrong token kind");
            return Err(AuthError::InvalidToken);
        }

        if self.repository.find_by_id(&claims.user_id).await?.is_none() {
            tracing::debug!(user_id = %claims.user_id, "Refresh rejected: user gone");
            return Err(AuthError::InvalidToken);
        }

        self.tokens.issue_pair(&claims.user_id)
    }
}
