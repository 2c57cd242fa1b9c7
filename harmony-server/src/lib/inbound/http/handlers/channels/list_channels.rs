use axum::extract::State;
use axum::http::StatusCode;

use super::ChannelData;
use crate::domain::channel::ports::ChannelServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_channels(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ChannelData>>, ApiError> {
    state
        .channel_service
        .list_channels()
        .await
        .map_err(ApiError::from)
        .map(|channels| {
            ApiSuccess::new(
                StatusCode::OK,
                channels.iter().map(ChannelData::from).collect(),
            )
        })
}
