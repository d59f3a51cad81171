//! services/api/src/web/docs.rs
//!
//! The master definition for the OpenAPI specification, assembled from the
//! per-entity handler modules.

use utoipa::OpenApi;

use crate::web::pages::PagesEnvelope;
use crate::web::{CreatedResponse, ErrorResponse};
use course_cms_core::domain::{Page, Topic, User};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::web::topics::list_topics_handler,
        crate::web::topics::create_topic_handler,
        crate::web::topics::update_topic_handler,
        crate::web::topics::delete_topic_handler,
        crate::web::topics::hide_topic_handler,
        crate::web::pages::list_pages_handler,
        crate::web::pages::create_page_handler,
        crate::web::pages::get_page_handler,
        crate::web::pages::update_page_handler,
        crate::web::pages::hide_page_handler,
        crate::web::pages::delete_page_handler,
        crate::web::users::list_users_handler,
        crate::web::users::get_user_handler,
        crate::web::users::create_user_handler,
        crate::web::users::update_user_handler,
        crate::web::users::delete_user_handler,
    ),
    components(
        schemas(Topic, Page, User, PagesEnvelope, CreatedResponse, ErrorResponse)
    ),
    tags(
        (name = "Topic Management", description = "Topics grouping the course pages."),
        (name = "Page Management", description = "Pages and their typed content payloads."),
        (name = "User Management", description = "Plain user records.")
    )
)]
pub struct ApiDoc;
