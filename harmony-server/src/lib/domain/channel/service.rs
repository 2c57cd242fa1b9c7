use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::channel::errors::ChannelError;
use crate::domain::channel::models::Channel;
use crate::domain::channel::models::ChannelId;
use crate::domain::channel::models::ChannelName;
use crate::domain::channel::models::CreateChannelCommand;
use crate::domain::channel::ports::ChannelRepository;
use crate::domain::channel::ports::ChannelServicePort;

/// Domain service implementation for channel operations.
pub struct ChannelService<CR>
where
    CR: ChannelRepository,
{
    repository: Arc<CR>,
}

impl<CR> ChannelService<CR>
where
    CR: ChannelRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> ChannelServicePort for ChannelService<CR>
where
    CR: ChannelRepository,
{
    async fn create_channel(
        &self,
        command: CreateChannelCommand,
    ) -> Result<Channel, ChannelError> {
        let now = Utc::now();
        let channel = Channel {
            id: ChannelId::new(),
            name: command.name,
            channel_type: command.channel_type,
            created_at: now,
            updated_at: now,
        };

        let created_channel = self.repository.create(channel).await?;
        tracing::info!(
            channel_id = %created_channel.id,
            name = %created_channel.name,
            channel_type = %created_channel.channel_type,
            "Channel created"
        );

        Ok(created_channel)
    }

    async fn list_channels(&self) -> Result<Vec<Channel>, ChannelError> {
        self.repository.find_all().await
    }

    async fn get_channel(&self, id: &ChannelId) -> Result<Channel, ChannelError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ChannelError::NotFound(*id))
    }

    async fn rename_channel(
        &self,
        id: &ChannelId,
        name: ChannelName,
    ) -> Result<Channel, ChannelError> {
        let mut channel = self.get_channel(id).await?;

        channel.name = name;
        channel.updated_at = Utc::now();

        let updated_channel = self.repository.update(channel).await?;
        tracing::info!(channel_id = %updated_channel.id, "Channel renamed");

        Ok(updated_channel)
    }

    async fn delete_channel(&self, id: &ChannelId) -> Result<(), ChannelError> {
        self.repository.delete(id).await?;
        tracing::info!(channel_id = %id, "Channel deleted");

        Ok(())
    }
}
