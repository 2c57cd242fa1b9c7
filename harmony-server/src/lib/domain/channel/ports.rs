use async_trait::async_trait;

use crate::domain::channel::errors::ChannelError;
use crate::domain::channel::models::Channel;
use crate::domain::channel::models::ChannelId;
use crate::domain::channel::models::ChannelName;
use crate::domain::channel::models::CreateChannelCommand;

/// Channel management as seen by the HTTP layer.
#[async_trait]
pub trait ChannelServicePort: Send + Sync + 'static {
    async fn create_channel(&self, command: CreateChannelCommand)
        -> Result<Channel, ChannelError>;

    async fn list_channels(&self) -> Result<Vec<Channel>, ChannelError>;

    /// # Errors
    /// * `NotFound` - No channel with this id
    async fn get_channel(&self, id: &ChannelId) -> Result<Channel, ChannelError>;

    /// Replace the name and bump `updated_at`. The type never changes.
    ///
    /// # Errors
    /// * `NotFound` - No channel with this id
    async fn rename_channel(
        &self,
        id: &ChannelId,
        name: ChannelName,
    ) -> Result<Channel, ChannelError>;

    /// # Errors
    /// * `NotFound` - No channel with this id
    async fn delete_channel(&self, id: &ChannelId) -> Result<(), ChannelError>;
}

/// Channel store.
#[async_trait]
pub trait ChannelRepository: Send + Sync + 'static {
    async fn create(&self, channel: Channel) -> Result<Channel, ChannelError>;

    /// Oldest first.
    async fn find_all(&self) -> Result<Vec<Channel>, ChannelError>;

    async fn find_by_id(&self, id: &ChannelId) -> Result<Option<Channel>, ChannelError>;

    /// # Errors
    /// * `NotFound` - No row with this id
    async fn update(&self, channel: Channel) -> Result<Channel, ChannelError>;

    /// # Errors
    /// * `NotFound` - No row with this id
    async fn delete(&self, id: &ChannelId) -> Result<(), ChannelError>;
}
