//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use std::sync::Arc;

use crate::config::Config;
use course_cms_core::service::{PageService, TopicService, UserService};

/// The shared application state, created once at startup and passed to all
/// handlers. The services carry their store handles by constructor
/// injection; nothing here is global.
#[derive(Clone)]
pub struct AppState {
    pub topics: TopicService,
    pub pages: PageService,
    pub users: UserService,
    pub config: Arc<Config>,
}
