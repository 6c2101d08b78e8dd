use crate::dtos::user::{TokenRequest, TokenResponse};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{Json, extract::State};
use database::services::user::UserService;

/// Exchange username and password for an API token
#[utoipa::path(
    post,
    path = "/auth/token",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token issued or returned", body = TokenResponse),
        (status = 400, description = "Invalid credentials")
    ),
    tag = "Authentication"
)]
pub async fn obtain_token(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = UserService::obtain_token(&state.db, &request.username, &request.password).await?;
    Ok(Json(TokenResponse { token: token.key }))
}
