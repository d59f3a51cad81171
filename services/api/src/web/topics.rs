//! services/api/src/web/topics.rs
//!
//! Axum handlers for the topic management endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use tracing::info;

use crate::error::ApiError;
use crate::web::state::AppState;
use crate::web::CreatedResponse;
use course_cms_core::domain::Topic;

/// Get a list of all topics.
#[utoipa::path(
    get,
    path = "/topic",
    tag = "Topic Management",
    responses(
        (status = 200, description = "All topics", body = [Topic]),
        (status = 400, description = "Request failed", body = crate::web::ErrorResponse)
    )
)]
pub async fn list_topics_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let topics = state.topics.list().await?;
    Ok(Json(topics))
}

/// Create a new topic with name, description, and position.
#[utoipa::path(
    post,
    path = "/topic",
    tag = "Topic Management",
    request_body = Topic,
    responses(
        (status = 201, description = "Topic created", body = CreatedResponse),
        (status = 400, description = "Validation or core failure", body = crate::web::ErrorResponse)
    )
)]
pub async fn create_topic_handler(
    State(state): State<Arc<AppState>>,
    Json(topic): Json<Topic>,
) -> Result<impl IntoResponse, ApiError> {
    if topic.name.trim().is_empty() {
        return Err(ApiError::validation("'name' is required"));
    }

    let id = state.topics.create(&topic).await?;
    info!("created topic {id}");
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Update topic details such as name, description, position, and visibility.
#[utoipa::path(
    put,
    path = "/topic/{topicId}",
    tag = "Topic Management",
    params(("topicId" = String, Path, description = "Topic id")),
    request_body = Topic,
    responses(
        (status = 200, description = "Topic updated"),
        (status = 400, description = "Validation or core failure", body = crate::web::ErrorResponse)
    )
)]
pub async fn update_topic_handler(
    State(state): State<Arc<AppState>>,
    Path(topic_id): Path<String>,
    Json(topic): Json<Topic>,
) -> Result<impl IntoResponse, ApiError> {
    if topic.name.trim().is_empty() {
        return Err(ApiError::validation("'name' is required"));
    }

    state.topics.update(&topic_id, &topic).await?;
    Ok(StatusCode::OK)
}

/// Delete a topic by id.
#[utoipa::path(
    delete,
    path = "/topic/{topicId}",
    tag = "Topic Management",
    params(("topicId" = String, Path, description = "Topic id")),
    responses(
        (status = 204, description = "Topic deleted"),
        (status = 400, description = "Request failed", body = crate::web::ErrorResponse)
    )
)]
pub async fn delete_topic_handler(
    State(state): State<Arc<AppState>>,
    Path(topic_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.topics.delete(&topic_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Hide a topic by id. Hiding flips a flag; the topic is not deleted.
#[utoipa::path(
    put,
    path = "/topic/{topicId}/hide",
    tag = "Topic Management",
    params(("topicId" = String, Path, description = "Topic id")),
    responses(
        (status = 204, description = "Topic hidden"),
        (status = 400, description = "Request failed", body = crate::web::ErrorResponse)
    )
)]
pub async fn hide_topic_handler(
    State(state): State<Arc<AppState>>,
    Path(topic_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.topics.hide(&topic_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
