use crate::dtos::centre::{CentreResponse, PocResponse};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{Json, extract::Path, extract::State};
use database::services::centre::CentreService;

/// All study centres, ordered by state then city
#[utoipa::path(
    get,
    path = "/centres",
    responses(
        (status = 200, description = "All study centres", body = [CentreResponse])
    ),
    security(("token" = [])),
    tag = "Centres"
)]
pub async fn list_centres(
    State(state): State<AppState>,
) -> Result<Json<Vec<CentreResponse>>, ApiError> {
    let rows = CentreService::list(&state.db).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Points of contact for one centre
#[utoipa::path(
    get,
    path = "/centres/{id}/poc",
    params(("id" = i32, Path, description = "Study centre id")),
    responses(
        (status = 200, description = "Contacts for the centre", body = [PocResponse])
    ),
    security(("token" = [])),
    tag = "Centres"
)]
pub async fn list_poc(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<PocResponse>>, ApiError> {
    let rows = CentreService::pocs(&state.db, id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
