use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ChannelData;
use crate::domain::channel::errors::ChannelError;
use crate::domain::channel::models::ChannelId;
use crate::domain::channel::ports::ChannelServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_channel(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
) -> Result<ApiSuccess<ChannelData>, ApiError> {
    let channel_id = ChannelId::from_string(&channel_id).map_err(ChannelError::from)?;

    state
        .channel_service
        .get_channel(&channel_id)
        .await
        .map_err(ApiError::from)
        .map(|ref channel| ApiSuccess::new(StatusCode::OK, channel.into()))
}
