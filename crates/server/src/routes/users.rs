use crate::dtos::user::{
    ChangePasswordRequest, CreateUserRequest, UpdateUserRequest, UserDetail, UserSummary,
};
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use axum::{Extension, Json, extract::Path, extract::State, http::StatusCode};
use database::services::user::{NewUser, UserPatch, UserService};
use serde_json::{Value, json};

/// List all users (admin only)
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [UserSummary]),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("token" = [])),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserSummary>>, ApiError> {
    let users = UserService::list(&state.db).await?;
    Ok(Json(users.into_iter().map(UserSummary::from).collect()))
}

/// Create a new user (admin only)
#[utoipa::path(
    post,
    path = "/users/create",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserDetail),
        (status = 400, description = "Missing or malformed fields"),
        (status = 409, description = "Username or email already taken")
    ),
    security(("token" = [])),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserDetail>), ApiError> {
    let created = UserService::create(
        &state.db,
        NewUser {
            username: request.username,
            email: request.email,
            password: request.password,
            first_name: request.first_name,
            last_name: request.last_name,
        },
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(UserDetail::from((created, None, None))),
    ))
}

/// Identity echo for the authenticated caller
#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "Caller identity and detail"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("token" = [])),
    tag = "Users"
)]
pub async fn userinfo(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
) -> Result<Json<Value>, ApiError> {
    let detail = UserDetail::from(UserService::detail(&state.db, caller.id).await?);
    Ok(Json(json!({
        "user": caller.username,
        "detail": detail,
    })))
}

/// User detail by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserDetail),
        (status = 404, description = "No such user")
    ),
    security(("token" = [])),
    tag = "Users"
)]
pub async fn user_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserDetail>, ApiError> {
    let detail = UserService::detail(&state.db, id).await?;
    Ok(Json(detail.into()))
}

/// Update the authenticated caller's own profile fields
#[utoipa::path(
    put,
    path = "/users/update",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserDetail),
        (status = 409, description = "Email already taken")
    ),
    security(("token" = [])),
    tag = "Users"
)]
pub async fn update_user_self(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserDetail>, ApiError> {
    update_user(&state, caller.id, request).await
}

/// Update any user by id (admin only)
#[utoipa::path(
    put,
    path = "/users/{id}/update",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserDetail),
        (status = 404, description = "No such user"),
        (status = 409, description = "Email already taken")
    ),
    security(("token" = [])),
    tag = "Users"
)]
pub async fn update_user_admin(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserDetail>, ApiError> {
    update_user(&state, id, request).await
}

async fn update_user(
    state: &AppState,
    id: i32,
    request: UpdateUserRequest,
) -> Result<Json<UserDetail>, ApiError> {
    UserService::update(
        &state.db,
        id,
        UserPatch {
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
        },
    )
    .await?;
    let detail = UserService::detail(&state.db, id).await?;
    Ok(Json(detail.into()))
}

/// Change the authenticated caller's password
#[utoipa::path(
    put,
    path = "/user/change-pwd",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed"),
        (status = 400, description = "Old password incorrect or new password missing")
    ),
    security(("token" = [])),
    tag = "Users"
)]
pub async fn change_password(
    State(state): State<AppState>,
    Extension(CurrentUser(caller)): Extension<CurrentUser>,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Json<Value>, ApiError> {
    UserService::change_password(&state.db, &caller, &request.old_password, &request.new_password)
        .await?;
    Ok(Json(json!({ "message": "Password changed successfully" })))
}
