use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::channel::models::Channel;

pub mod create_channel;
pub mod delete_channel;
pub mod get_channel;
pub mod list_channels;
pub mod update_channel;

pub use create_channel::create_channel;
pub use delete_channel::delete_channel;
pub use get_channel::get_channel;
pub use list_channels::list_channels;
pub use update_channel::update_channel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelData {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub channel_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Channel> for ChannelData {
    fn from(channel: &Channel) -> Self {
        Self {
            id: channel.id.to_string(),
            name: channel.name.as_str().to_string(),
            channel_type: channel.channel_type.as_str().to_string(),
            created_at: channel.created_at,
            updated_at: channel.updated_at,
        }
    }
}
