use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::domain::channel::errors::ChannelError;
use crate::domain::channel::models::Channel;
use crate::domain::channel::models::ChannelId;
use crate::domain::channel::models::ChannelName;
use crate::domain::channel::models::ChannelType;
use crate::domain::channel::ports::ChannelRepository;

pub struct SqliteChannelRepository {
    pool: SqlitePool,
}

impl SqliteChannelRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ChannelRecord {
    id: String,
    name: String,
    #[sqlx(rename = "type")]
    channel_type: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ChannelRecord> for Channel {
    type Error = ChannelError;

    fn try_from(r: ChannelRecord) -> Result<Self, Self::Error> {
        Ok(Channel {
            id: ChannelId::from_string(&r.id)?,
            name: ChannelName::new(r.name)?,
            channel_type: ChannelType::parse(&r.channel_type)?,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

#[async_trait]
impl ChannelRepository for SqliteChannelRepository {
    async fn create(&self, channel: Channel) -> Result<Channel, ChannelError> {
        sqlx::query(
            r#"
            INSERT INTO channels (id, name, type, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(channel.id.to_string())
        .bind(channel.name.as_str())
        .bind(channel.channel_type.as_str())
        .bind(channel.created_at)
        .bind(channel.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ChannelError::DatabaseError(e.to_string()))?;

        Ok(channel)
    }

    async fn find_all(&self) -> Result<Vec<Channel>, ChannelError> {
        let rows = sqlx::query_as::<_, ChannelRecord>(
            r#"
            SELECT id, name, type, created_at, updated_at
            FROM channels
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ChannelError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Channel::try_from).collect()
    }

    async fn find_by_id(&self, id: &ChannelId) -> Result<Option<Channel>, ChannelError> {
        sqlx::query_as::<_, ChannelRecord>(
            r#"
            SELECT id, name, type, created_at, updated_at
            FROM channels
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ChannelError::DatabaseError(e.to_string()))?
        .map(Channel::try_from)
        .transpose()
    }

    async fn update(&self, channel: Channel) -> Result<Channel, ChannelError> {
        let result = sqlx::query("UPDATE channels SET name = ?, updated_at = ? WHERE id = ?")
            .bind(channel.name.as_str())
            .bind(channel.updated_at)
            .bind(channel.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| ChannelError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ChannelError::NotFound(channel.id));
        }

        Ok(channel)
    }

    async fn delete(&self, id: &ChannelId) -> Result<(), ChannelError> {
        let result = sqlx::query("DELETE FROM channels WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| ChannelError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ChannelError::NotFound(*id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::repositories::connect;

    async fn repository() -> SqliteChannelRepository {
        SqliteChannelRepository::new(connect("sqlite::memory:", 1).await.unwrap())
    }

    fn channel(name: &str, channel_type: ChannelType) -> Channel {
        let now = Utc::now();
        Channel {
            id: ChannelId::new(),
            name: ChannelName::new(name.to_string()).unwrap(),
            channel_type,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_find_and_list() {
        let repository = repository().await;
        let general = channel("general", ChannelType::Text);
        let lounge = channel("lounge", ChannelType::Voice);

        repository.create(general.clone()).await.unwrap();
        repository.create(lounge.clone()).await.unwrap();

        let stored = repository.find_by_id(&lounge.id).await.unwrap().unwrap();
        assert_eq!(stored.name.as_str(), "lounge");
        assert_eq!(stored.channel_type, ChannelType::Voice);

        let all = repository.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(repository
            .find_by_id(&ChannelId::new())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repository = repository().await;
        let mut general = channel("general", ChannelType::Text);
        repository.create(general.clone()).await.unwrap();

        general.name = ChannelName::new("lobby".to_string()).unwrap();
        repository.update(general.clone()).await.unwrap();
        let stored = repository.find_by_id(&general.id).await.unwrap().unwrap();
        assert_eq!(stored.name.as_str(), "lobby");

        repository.delete(&general.id).await.unwrap();
        assert!(matches!(
            repository.delete(&general.id).await,
            Err(ChannelError::NotFound(_))
        ));
        assert!(matches!(
            repository.update(general).await,
            Err(ChannelError::NotFound(_))
        ));
    }
}
