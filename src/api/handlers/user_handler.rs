//! User handlers.
//!
//! Collection endpoint: `/api/users/` (GET, POST).
//! Item endpoint: `/api/users/{id}` (GET, PATCH, DELETE).

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use validator::Validate;

use crate::api::extractors::{validation_error, UserId, ValidatedJson};
use crate::api::AppState;
use crate::domain::{User, UserInput, UserResponse};
use crate::errors::{AppError, AppResult};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/", get(list_users).post(create_user))
        .route(
            "/api/users/:id",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

fn to_responses(users: Vec<User>) -> Vec<UserResponse> {
    users.into_iter().map(UserResponse::from).collect()
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users/",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(to_responses(users)))
}

/// Create a user and return the full collection
#[utoipa::path(
    post,
    path = "/api/users/",
    tag = "Users",
    request_body = UserInput,
    responses(
        (status = 201, description = "User created; body is the updated collection", body = Vec<UserResponse>),
        (status = 400, description = "Name or email missing"),
        (status = 409, description = "Name or email already taken")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserInput>,
) -> AppResult<(StatusCode, Json<Vec<UserResponse>>)> {
    let (name, email) = payload.into_fields()?;
    state.user_service.create_user(name, email).await?;

    let users = state.user_service.list_users().await?;
    Ok((StatusCode::CREATED, Json(to_responses(users))))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Replace a user's name and email
///
/// The id is looked up before the body is validated, so an unknown id is
/// always reported as not found.
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UserInput,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Name or email missing"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Name or email already taken")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    payload: Result<Json<UserInput>, JsonRejection>,
) -> AppResult<Json<UserResponse>> {
    state.user_service.get_user(id).await?;

    let Json(payload) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    payload.validate().map_err(|e| validation_error(&e))?;
    let (name, email) = payload.into_fields()?;

    let user = state.user_service.update_user(id, name, email).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Delete a user and return the remaining collection
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted; body is the remaining collection", body = Vec<UserResponse>),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<Json<Vec<UserResponse>>> {
    state.user_service.delete_user(id).await?;

    let users = state.user_service.list_users().await?;
    Ok(Json(to_responses(users)))
}
