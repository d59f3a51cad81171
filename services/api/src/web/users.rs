//! services/api/src/web/users.rs
//!
//! Axum handlers for the user management endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};

use crate::error::ApiError;
use crate::web::state::AppState;
use crate::web::CreatedResponse;
use course_cms_core::domain::User;

/// Get a list of all users.
#[utoipa::path(
    get,
    path = "/users",
    tag = "User Management",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 400, description = "Request failed", body = crate::web::ErrorResponse)
    )
)]
pub async fn list_users_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let users = state.users.list().await?;
    Ok(Json(users))
}

/// Get user details by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "User Management",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 400, description = "Request failed", body = crate::web::ErrorResponse)
    )
)]
pub async fn get_user_handler(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.users.get(&user_id).await?;
    Ok(Json(user))
}

/// Create a new user.
#[utoipa::path(
    post,
    path = "/users",
    tag = "User Management",
    request_body = User,
    responses(
        (status = 201, description = "User created", body = CreatedResponse),
        (status = 400, description = "Validation or core failure", body = crate::web::ErrorResponse)
    )
)]
pub async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    Json(user): Json<User>,
) -> Result<impl IntoResponse, ApiError> {
    if user.name.trim().is_empty() {
        return Err(ApiError::validation("'name' is required"));
    }

    let id = state.users.create(&user).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Update user details.
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "User Management",
    params(("id" = String, Path, description = "User id")),
    request_body = User,
    responses(
        (status = 200, description = "User updated"),
        (status = 400, description = "Validation or core failure", body = crate::web::ErrorResponse)
    )
)]
pub async fn update_user_handler(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(user): Json<User>,
) -> Result<impl IntoResponse, ApiError> {
    state.users.update(&user_id, &user).await?;
    Ok(StatusCode::OK)
}

/// Delete a user by id.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "User Management",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Request failed", body = crate::web::ErrorResponse)
    )
)]
pub async fn delete_user_handler(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.users.delete(&user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
