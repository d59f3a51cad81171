pub mod docs;
pub mod pages;
pub mod state;
pub mod topics;
pub mod users;

use serde::Serialize;
use utoipa::ToSchema;

// Re-export the handlers the binary wires into the router.
pub use pages::{
    create_page_handler, delete_page_handler, get_page_handler, hide_page_handler,
    list_pages_handler, update_page_handler,
};
pub use topics::{
    create_topic_handler, delete_topic_handler, hide_topic_handler, list_topics_handler,
    update_topic_handler,
};
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};

/// The response payload sent after successfully creating an entity.
#[derive(Serialize, ToSchema)]
pub struct CreatedResponse {
    pub id: String,
}

/// The error envelope every failed request renders.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
