use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthenticatedUser;
use crate::domain::auth::models::TokenKind;
use crate::domain::auth::ports::TokenProvider;

const BEARER_PREFIX: &str = "Bearer ";

/// Decide whether a request may reach a protected handler.
///
/// Takes the raw `Authorization` header value and returns the identity to
/// bind to the request. Only access tokens pass. Every failure is the same
/// `Unauthorized`.
///
/// # Errors
/// * `Unauthorized` - Header missing or not `Bearer <token>`, token invalid
///   or expired, or token is not an access token
pub fn authorize<TP>(
    tokens: &TP,
    authorization: Option<&str>,
) -> Result<AuthenticatedUser, AuthError>
where
    TP: TokenProvider + ?Sized,
{
    let token = authorization
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::Unauthorized)?;

    let claims = tokens
        .validate(token)
        .map_err(|_| AuthError::Unauthorized)?;

    if claims.kind != TokenKind::Access {
        return Err(AuthError::Unauthorized);
    }

    Ok(AuthenticatedUser {
        user_id: claims.user_id,
    })
}
