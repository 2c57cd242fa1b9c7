use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ChannelData;
use crate::domain::channel::errors::ChannelError;
use crate::domain::channel::models::ChannelName;
use crate::domain::channel::models::ChannelType;
use crate::domain::channel::models::CreateChannelCommand;
use crate::domain::channel::ports::ChannelServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_channel(
    State(state): State<AppState>,
    Json(body): Json<CreateChannelRequest>,
) -> Result<ApiSuccess<ChannelData>, ApiError> {
    state
        .channel_service
        .create_channel(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref channel| ApiSuccess::new(StatusCode::CREATED, channel.into()))
}

/// HTTP request body for creating a channel (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateChannelRequest {
    name: String,
    #[serde(rename = "type")]
    channel_type: String,
}

impl CreateChannelRequest {
    fn try_into_command(self) -> Result<CreateChannelCommand, ChannelError> {
        let name = ChannelName::new(self.name)?;
        let channel_type = ChannelType::parse(&self.channel_type)?;
        Ok(CreateChannelCommand::new(name, channel_type))
    }
}
