use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::channel::errors::ChannelError;
use crate::domain::channel::models::ChannelId;
use crate::domain::channel::ports::ChannelServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn delete_channel(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let channel_id = ChannelId::from_string(&channel_id).map_err(ChannelError::from)?;

    state.channel_service.delete_channel(&channel_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
