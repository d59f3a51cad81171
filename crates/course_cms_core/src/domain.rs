//! crates/course_cms_core/src/domain.rs
//!
//! The API-facing entities. Identifiers travel as hex strings here; the
//! persisted counterparts in `schema` carry the binary form. The `content`
//! field of a page is an untyped value whose shape is named by the page's
//! `type` tag (see `content`).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// A top-level grouping of pages.
///
/// The identifier is absent on creation and assigned by storage on insert.
/// Timestamps are opaque strings supplied by the caller or the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Topic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Ordering hint; no uniqueness is enforced.
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub hidden: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

/// A content unit belonging to exactly one topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Page {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Hex identifier of the owning topic.
    #[serde(default)]
    pub topic_id: String,
    pub title: String,
    /// Open content tag; see `PageKind` for the known values.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Payload whose shape is determined by `kind`. Carried opaquely.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub content: Value,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    /// Presence marks the page as logically deleted; carried-through
    /// metadata only, nothing in this crate filters on it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
    #[serde(rename = "isHidden", default)]
    pub hidden: bool,
}

/// A registered user. Plain CRUD record; this backend has no notion of
/// authentication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub is_active: bool,
}
