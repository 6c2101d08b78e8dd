use crate::dtos::elective::{
    ElectiveResponse, EnrollmentResponse, EnrollmentStatusResponse, OfferingDetail,
    OfferingSummary,
};
use crate::dtos::user::UserSummary;
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use axum::{Extension, Json, extract::Path, extract::State, http::StatusCode};
use database::services::elective::ElectiveService;

/// Full elective catalog across all batches
#[utoipa::path(
    get,
    path = "/electives/all",
    responses(
        (status = 200, description = "Every catalogued elective", body = [ElectiveResponse])
    ),
    security(("token" = [])),
    tag = "Electives"
)]
pub async fn catalog(
    State(state): State<AppState>,
) -> Result<Json<Vec<ElectiveResponse>>, ApiError> {
    let rows = ElectiveService::catalog(&state.db).await?;
    Ok(Json(
        rows.into_iter()
            .map(|(course, instructor)| ElectiveResponse::new(course, instructor))
            .collect(),
    ))
}

/// Offerings for the caller's batch
#[utoipa::path(
    get,
    path = "/electives",
    responses(
        (status = 200, description = "Offerings for the caller's batch", body = [OfferingSummary]),
        (status = 404, description = "Caller has no batch info yet")
    ),
    security(("token" = [])),
    tag = "Electives"
)]
pub async fn offerings(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
) -> Result<Json<Vec<OfferingSummary>>, ApiError> {
    let rows = ElectiveService::offerings_for_caller(&state.db, caller.id).await?;
    Ok(Json(
        rows.into_iter()
            .map(|(offering, course)| OfferingSummary::new(offering, course.as_ref()))
            .collect(),
    ))
}

/// Single offering with course and instructor embedded
#[utoipa::path(
    get,
    path = "/electives/{id}",
    params(("id" = i32, Path, description = "Offering id")),
    responses(
        (status = 200, description = "Offering found", body = OfferingDetail),
        (status = 404, description = "No such offering")
    ),
    security(("token" = [])),
    tag = "Electives"
)]
pub async fn offering_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<OfferingDetail>, ApiError> {
    let (offering, course) = ElectiveService::offering_detail(&state.db, id).await?;
    Ok(Json(OfferingDetail::new(offering, course)))
}

/// Everyone enrolled in an offering
#[utoipa::path(
    get,
    path = "/electives/{id}/takers",
    params(("id" = i32, Path, description = "Offering id")),
    responses(
        (status = 200, description = "Enrolled users", body = [UserSummary]),
        (status = 404, description = "No such offering")
    ),
    security(("token" = [])),
    tag = "Electives"
)]
pub async fn takers(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<UserSummary>>, ApiError> {
    let users = ElectiveService::takers(&state.db, id).await?;
    Ok(Json(users.into_iter().map(UserSummary::from).collect()))
}

/// The caller's own enrollments
#[utoipa::path(
    get,
    path = "/electives/enrolled",
    responses(
        (status = 200, description = "Enrollments for the caller", body = [EnrollmentResponse])
    ),
    security(("token" = [])),
    tag = "Electives"
)]
pub async fn own_enrollments(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
) -> Result<Json<Vec<EnrollmentResponse>>, ApiError> {
    let rows = ElectiveService::enrollments_for_user(&state.db, caller.id).await?;
    Ok(Json(
        rows.into_iter()
            .map(|(enrollment, offering, course)| {
                EnrollmentResponse::new(enrollment, offering, course.as_ref())
            })
            .collect(),
    ))
}

/// Enrollments for any user by id
#[utoipa::path(
    get,
    path = "/users/{id}/electives",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Enrollments for the user", body = [EnrollmentResponse]),
        (status = 404, description = "No such user")
    ),
    security(("token" = [])),
    tag = "Electives"
)]
pub async fn enrollments_by_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<EnrollmentResponse>>, ApiError> {
    let rows = ElectiveService::enrollments_for_user(&state.db, id).await?;
    Ok(Json(
        rows.into_iter()
            .map(|(enrollment, offering, course)| {
                EnrollmentResponse::new(enrollment, offering, course.as_ref())
            })
            .collect(),
    ))
}

/// Whether the caller holds an enrollment for the offering
#[utoipa::path(
    get,
    path = "/electives/enroll/{id}",
    params(("id" = i32, Path, description = "Offering id")),
    responses(
        (status = 200, description = "Membership report", body = EnrollmentStatusResponse),
        (status = 404, description = "No such offering")
    ),
    security(("token" = [])),
    tag = "Electives"
)]
pub async fn enrollment_status(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<Json<EnrollmentStatusResponse>, ApiError> {
    let status = ElectiveService::enrollment_status(&state.db, &caller, id).await?;
    Ok(Json(status.into()))
}

/// Enroll the caller into an offering
#[utoipa::path(
    post,
    path = "/electives/enroll/{id}",
    params(("id" = i32, Path, description = "Offering id")),
    responses(
        (status = 201, description = "Enrollment created", body = EnrollmentResponse),
        (status = 404, description = "No such offering"),
        (status = 409, description = "Already enrolled")
    ),
    security(("token" = [])),
    tag = "Electives"
)]
pub async fn enroll(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<(StatusCode, Json<EnrollmentResponse>), ApiError> {
    let enrollment = ElectiveService::enroll(&state.db, caller.id, id).await?;
    let (offering, course) = ElectiveService::offering_detail(&state.db, id).await?;
    Ok((
        StatusCode::CREATED,
        Json(EnrollmentResponse::new(enrollment, offering, course.as_ref())),
    ))
}
