use async_trait::async_trait;
use auth::SecretString;
use chrono::DateTime;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRecord {
    id: String,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRecord> for User {
    type Error = UserError;

    fn try_from(r: UserRecord) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::from_string(&r.id)?,
            username: Username::new(r.username)?,
            email: EmailAddress::new(r.email)?,
            password_hash: SecretString::new(r.password_hash),
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

fn write_error(e: sqlx::Error, email: &EmailAddress) -> UserError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return UserError::EmailAlreadyExists(email.to_string());
        }
    }
    UserError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.expose_secret())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, &user.email))?;

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?
        .map(User::try_from)
        .transpose()
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?
        .map(User::try_from)
        .transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let rows = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM users
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET username = ?, email = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(user.updated_at)
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, &user.email))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(user.id.to_string()));
        }

        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::repositories::connect;

    async fn repository() -> SqliteUserRepository {
        SqliteUserRepository::new(connect("sqlite::memory:", 1).await.unwrap())
    }

    fn user(username: &str, email: &str) -> User {
        let now = Utc::now();
        User {
            id: UserId::new(),
            username: Username::new(username.to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: SecretString::from("$argon2id$v=19$m=1024,t=1,p=1$c2FsdA$aGFzaA"),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repository = repository().await;
        let alice = user("alice", "a@x.com");

        repository.create(alice.clone()).await.unwrap();

        let by_id = repository.find_by_id(&alice.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, alice.username);
        assert_eq!(by_id.password_hash, alice.password_hash);

        let by_email = repository
            .find_by_email(&alice.email)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.id, alice.id);

        let missing = EmailAddress::new("b@x.com".to_string()).unwrap();
        assert!(repository.find_by_email(&missing).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let repository = repository().await;

        repository.create(user("alice", "a@x.com")).await.unwrap();
        let result = repository.create(user("bob", "a@x.com")).await;

        assert!(matches!(result, Err(UserError::EmailAlreadyExists(email)) if email == "a@x.com"));
        assert_eq!(repository.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_username_is_allowed() {
        let repository = repository().await;

        repository.create(user("alice", "a@x.com")).await.unwrap();
        repository.create(user("alice", "b@x.com")).await.unwrap();

        assert_eq!(repository.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repository = repository().await;
        let mut alice = user("alice", "a@x.com");
        repository.create(alice.clone()).await.unwrap();
        repository.create(user("bob", "b@x.com")).await.unwrap();

        alice.username = Username::new("alicia".to_string()).unwrap();
        repository.update(alice.clone()).await.unwrap();
        let stored = repository.find_by_id(&alice.id).await.unwrap().unwrap();
        assert_eq!(stored.username.as_str(), "alicia");

        alice.email = EmailAddress::new("b@x.com".to_string()).unwrap();
        assert!(matches!(
            repository.update(alice.clone()).await,
            Err(UserError::EmailAlreadyExists(_))
        ));

        repository.delete(&alice.id).await.unwrap();
        assert!(repository.find_by_id(&alice.id).await.unwrap().is_none());
        assert!(matches!(
            repository.delete(&alice.id).await,
            Err(UserError::NotFound(_))
        ));
        assert!(matches!(
            repository.update(alice).await,
            Err(UserError::NotFound(_))
        ));
    }
}
