//! services/api/src/web/pages.rs
//!
//! Axum handlers for the page management endpoints. Pages are addressed
//! under their owning topic; list responses are wrapped in a
//! `{"total": n, "pages": [...]}` envelope.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::web::state::AppState;
use crate::web::CreatedResponse;
use course_cms_core::domain::Page;

/// The envelope wrapping page list responses.
#[derive(Serialize, ToSchema)]
pub struct PagesEnvelope {
    pub total: usize,
    pub pages: Vec<Page>,
}

fn validate_page(page: &Page) -> Result<(), ApiError> {
    if page.title.trim().is_empty() {
        return Err(ApiError::validation("'title' is required"));
    }
    if page.content.is_null() {
        return Err(ApiError::validation("'content' is required"));
    }
    Ok(())
}

/// Get details of all pages for a given topic.
#[utoipa::path(
    get,
    path = "/topic/{topicId}/pages",
    tag = "Page Management",
    params(("topicId" = String, Path, description = "Topic id")),
    responses(
        (status = 200, description = "Pages of the topic", body = PagesEnvelope),
        (status = 400, description = "Request failed", body = crate::web::ErrorResponse)
    )
)]
pub async fn list_pages_handler(
    State(state): State<Arc<AppState>>,
    Path(topic_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let pages = state.pages.list_by_topic(&topic_id).await?;
    Ok(Json(PagesEnvelope {
        total: pages.len(),
        pages,
    }))
}

/// Get page details by page id.
#[utoipa::path(
    get,
    path = "/topic/{topicId}/pages/{id}",
    tag = "Page Management",
    params(
        ("topicId" = String, Path, description = "Topic id"),
        ("id" = String, Path, description = "Page id")
    ),
    responses(
        (status = 200, description = "The page", body = Page),
        (status = 400, description = "Request failed", body = crate::web::ErrorResponse)
    )
)]
pub async fn get_page_handler(
    State(state): State<Arc<AppState>>,
    Path((topic_id, page_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let page = state.pages.get(&topic_id, &page_id).await?;
    Ok(Json(page))
}

/// Save a new page with title, type, and content under a topic.
#[utoipa::path(
    post,
    path = "/topic/{topicId}/pages",
    tag = "Page Management",
    params(("topicId" = String, Path, description = "Topic id")),
    request_body = Page,
    responses(
        (status = 201, description = "Page created", body = CreatedResponse),
        (status = 400, description = "Validation or core failure", body = crate::web::ErrorResponse)
    )
)]
pub async fn create_page_handler(
    State(state): State<Arc<AppState>>,
    Path(topic_id): Path<String>,
    Json(page): Json<Page>,
) -> Result<impl IntoResponse, ApiError> {
    validate_page(&page)?;

    let id = state.pages.create(&topic_id, &page).await?;
    info!("created page {id} under topic {topic_id}");
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Update existing page details like title, type, and content.
#[utoipa::path(
    patch,
    path = "/topic/{topicId}/pages/{id}",
    tag = "Page Management",
    params(
        ("topicId" = String, Path, description = "Topic id"),
        ("id" = String, Path, description = "Page id")
    ),
    request_body = Page,
    responses(
        (status = 200, description = "Page updated"),
        (status = 400, description = "Validation or core failure", body = crate::web::ErrorResponse)
    )
)]
pub async fn update_page_handler(
    State(state): State<Arc<AppState>>,
    Path((topic_id, page_id)): Path<(String, String)>,
    Json(page): Json<Page>,
) -> Result<impl IntoResponse, ApiError> {
    validate_page(&page)?;

    state.pages.update(&topic_id, &page_id, &page).await?;
    Ok(StatusCode::OK)
}

/// Hide a page by id (marking it as hidden) for a specific topic.
#[utoipa::path(
    patch,
    path = "/topic/{topicId}/pages/{id}/hide",
    tag = "Page Management",
    params(
        ("topicId" = String, Path, description = "Topic id"),
        ("id" = String, Path, description = "Page id")
    ),
    responses(
        (status = 204, description = "Page hidden"),
        (status = 400, description = "Request failed", body = crate::web::ErrorResponse)
    )
)]
pub async fn hide_page_handler(
    State(state): State<Arc<AppState>>,
    Path((topic_id, page_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    state.pages.hide(&topic_id, &page_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete page details by page id for a specific topic.
#[utoipa::path(
    delete,
    path = "/topic/{topicId}/pages/{id}",
    tag = "Page Management",
    params(
        ("topicId" = String, Path, description = "Topic id"),
        ("id" = String, Path, description = "Page id")
    ),
    responses(
        (status = 204, description = "Page deleted"),
        (status = 400, description = "Request failed", body = crate::web::ErrorResponse)
    )
)]
pub async fn delete_page_handler(
    State(state): State<Arc<AppState>>,
    Path((topic_id, page_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    state.pages.delete(&topic_id, &page_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
