use crate::dtos::profile::{
    BatchInfoResponse, BatchInfoUpsertResponse, EmploymentResponse, SocialLinksResponse,
    SocialLinksUpsertResponse,
};
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use axum::{Extension, Json, extract::Path, extract::State, http::StatusCode};
use database::services::profile::{BatchInfoPatch, NewEmployment, ProfileService, SocialLinksPatch};

fn upsert_status(created: bool) -> StatusCode {
    if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    }
}

/// Batch info for the authenticated caller
#[utoipa::path(
    get,
    path = "/user/batch",
    responses(
        (status = 200, description = "Batch info", body = BatchInfoResponse),
        (status = 404, description = "Caller has no batch info yet")
    ),
    security(("token" = [])),
    tag = "Profile"
)]
pub async fn own_batch_info(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
) -> Result<Json<BatchInfoResponse>, ApiError> {
    let row = ProfileService::batch_info(&state.db, caller.id).await?;
    Ok(Json(row.into()))
}

/// Create or partially update the caller's batch info
#[utoipa::path(
    post,
    path = "/user/batch",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Existing row updated", body = BatchInfoUpsertResponse),
        (status = 201, description = "Row created", body = BatchInfoUpsertResponse),
        (status = 400, description = "Field-level validation failure")
    ),
    security(("token" = [])),
    tag = "Profile"
)]
pub async fn upsert_own_batch_info(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Json(patch): Json<BatchInfoPatch>,
) -> Result<(StatusCode, Json<BatchInfoUpsertResponse>), ApiError> {
    let (row, created) = ProfileService::upsert_batch_info(&state.db, caller.id, patch).await?;
    Ok((
        upsert_status(created),
        Json(BatchInfoUpsertResponse {
            created,
            batch_info: row.into(),
        }),
    ))
}

/// Batch info for any user by id
#[utoipa::path(
    get,
    path = "/users/{id}/batch",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Batch info", body = BatchInfoResponse),
        (status = 404, description = "User has no batch info")
    ),
    security(("token" = [])),
    tag = "Profile"
)]
pub async fn batch_info_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<BatchInfoResponse>, ApiError> {
    let row = ProfileService::batch_info(&state.db, id).await?;
    Ok(Json(row.into()))
}

/// Social links for the authenticated caller
#[utoipa::path(
    get,
    path = "/user/social",
    responses(
        (status = 200, description = "Social links", body = SocialLinksResponse),
        (status = 404, description = "Caller has no social links yet")
    ),
    security(("token" = [])),
    tag = "Profile"
)]
pub async fn own_social_links(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
) -> Result<Json<SocialLinksResponse>, ApiError> {
    let row = ProfileService::social_links(&state.db, caller.id).await?;
    Ok(Json(row.into()))
}

/// Create or partially update the caller's social links
#[utoipa::path(
    post,
    path = "/user/social",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Existing row updated", body = SocialLinksUpsertResponse),
        (status = 201, description = "Row created", body = SocialLinksUpsertResponse),
        (status = 400, description = "Field-level validation failure")
    ),
    security(("token" = [])),
    tag = "Profile"
)]
pub async fn upsert_own_social_links(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Json(patch): Json<SocialLinksPatch>,
) -> Result<(StatusCode, Json<SocialLinksUpsertResponse>), ApiError> {
    let (row, created) = ProfileService::upsert_social_links(&state.db, caller.id, patch).await?;
    Ok((
        upsert_status(created),
        Json(SocialLinksUpsertResponse {
            created,
            social_links: row.into(),
        }),
    ))
}

/// Social links for any user by id
#[utoipa::path(
    get,
    path = "/users/{id}/social",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Social links", body = SocialLinksResponse),
        (status = 404, description = "User has no social links")
    ),
    security(("token" = [])),
    tag = "Profile"
)]
pub async fn social_links_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SocialLinksResponse>, ApiError> {
    let row = ProfileService::social_links(&state.db, id).await?;
    Ok(Json(row.into()))
}

/// Employment history for the authenticated caller
#[utoipa::path(
    get,
    path = "/user/employment",
    responses(
        (status = 200, description = "Employment records", body = [EmploymentResponse])
    ),
    security(("token" = [])),
    tag = "Profile"
)]
pub async fn own_employment(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
) -> Result<Json<Vec<EmploymentResponse>>, ApiError> {
    let rows = ProfileService::employment(&state.db, caller.id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Append an employment record for the authenticated caller
#[utoipa::path(
    post,
    path = "/user/employment",
    request_body = serde_json::Value,
    responses(
        (status = 201, description = "Record created", body = EmploymentResponse),
        (status = 400, description = "Employer missing")
    ),
    security(("token" = [])),
    tag = "Profile"
)]
pub async fn add_employment(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Json(new): Json<NewEmployment>,
) -> Result<(StatusCode, Json<EmploymentResponse>), ApiError> {
    let row = ProfileService::add_employment(&state.db, caller.id, new).await?;
    Ok((StatusCode::CREATED, Json(row.into())))
}

/// Employment history for any user by id
#[utoipa::path(
    get,
    path = "/users/{id}/employment",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Employment records", body = [EmploymentResponse])
    ),
    security(("token" = [])),
    tag = "Profile"
)]
pub async fn employment_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<EmploymentResponse>>, ApiError> {
    let rows = ProfileService::employment(&state.db, id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
