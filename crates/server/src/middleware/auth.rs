//! Token authentication middleware.
//!
//! Extracts the API token from the `Authorization` header, resolves it to a
//! user and injects the user into the request extensions. Requests without a
//! valid token are rejected before any service logic runs.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Extension,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use database::entities::user;
use database::services::user::UserService;

/// The authenticated caller, available to every handler behind the auth
/// layer.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub user::Model);

/// Accepts both `Token <key>` (the classic client convention) and
/// `Bearer <key>`.
fn extract_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Token ")
        .or_else(|| header.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|key| !key.is_empty())
}

pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok());

    let Some(header) = header else {
        return Err(ApiError::Unauthorized(
            "Authentication credentials were not provided".to_string(),
        ));
    };
    let Some(key) = extract_token(header) else {
        return Err(ApiError::Unauthorized("Invalid token header".to_string()));
    };

    match UserService::find_by_token(&state.db, key).await? {
        Some(caller) => {
            request.extensions_mut().insert(CurrentUser(caller));
            Ok(next.run(request).await)
        }
        None => Err(ApiError::Unauthorized("Invalid token".to_string())),
    }
}

/// Gate for admin-only routes. Must sit behind [`authenticate`].
pub async fn require_admin(
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !caller.is_staff {
        return Err(ApiError::Forbidden(
            "You do not have permission to perform this action".to_string(),
        ));
    }
    Ok(next.run(request).await)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_extract_token_accepts_both_schemes() {
        assert_eq!(extract_token("Token abc123"), Some("abc123"));
        assert_eq!(extract_token("Bearer abc123"), Some("abc123"));
    }

    #[test]
    fn test_extract_token_rejects_other_schemes() {
        assert_eq!(extract_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(extract_token("Token "), None);
        assert_eq!(extract_token("abc123"), None);
    }
}
