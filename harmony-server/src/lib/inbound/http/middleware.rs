use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::auth::gate;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Auth gate for protected routes.
///
/// On success the `AuthenticatedUser` is inserted into the request
/// extensions for handlers to extract. Every rejection is the same 401.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorization = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let identity = gate::authorize(state.tokens.as_ref(), authorization).map_err(|e| {
        tracing::debug!(uri = %req.uri(), "Request rejected by auth gate");
        ApiError::from(e)
    })?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
