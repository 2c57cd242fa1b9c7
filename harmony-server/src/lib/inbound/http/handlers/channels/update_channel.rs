use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ChannelData;
use crate::domain::channel::errors::ChannelError;
use crate::domain::channel::models::ChannelId;
use crate::domain::channel::models::ChannelName;
use crate::domain::channel::ports::ChannelServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// HTTP request body for renaming a channel (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateChannelRequest {
    name: String,
}

pub async fn update_channel(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
    Json(req): Json<UpdateChannelRequest>,
) -> Result<ApiSuccess<ChannelData>, ApiError> {
    let channel_id = ChannelId::from_string(&channel_id).map_err(ChannelError::from)?;
    let name = ChannelName::new(req.name).map_err(ChannelError::from)?;

    state
        .channel_service
        .rename_channel(&channel_id, name)
        .await
        .map_err(ApiError::from)
        .map(|ref channel| ApiSuccess::new(StatusCode::OK, channel.into()))
}
