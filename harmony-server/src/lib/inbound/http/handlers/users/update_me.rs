use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::UpdateUserRequest;
use super::UserData;
use crate::domain::auth::models::AuthenticatedUser;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_me(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let command = req.try_into_command()?;

    state
        .user_service
        .update_user(&identity.user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
