use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// User management as seen by the HTTP layer.
///
/// Account creation is not here: it belongs to the auth service, which owns
/// password hashing.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Apply the fields present in `command` and bump `updated_at`.
    ///
    /// # Errors
    /// * `NotFound` - No user with this id
    /// * `EmailAlreadyExists` - Another account holds the new email
    async fn update_user(&self, id: &UserId, command: UpdateUserCommand)
        -> Result<User, UserError>;

    /// # Errors
    /// * `NotFound` - No user with this id
    async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;
}

/// User store.
///
/// Implementations must enforce email uniqueness atomically and report a
/// violation as `EmailAlreadyExists`; the services only pre-check it.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// `Ok(None)` when absent.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Exact, case-sensitive match. `Ok(None)` when absent.
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;

    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Overwrite every mutable column of an existing row.
    ///
    /// # Errors
    /// * `NotFound` - No row with this id
    /// * `EmailAlreadyExists` - The new email belongs to another row
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// # Errors
    /// * `NotFound` - No row with this id
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}
