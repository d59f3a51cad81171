//! crates/course_cms_core/src/content.rs
//!
//! The four content shapes a page can hold, keyed by the page's `type` tag.
//!
//! The tag is an open string at the model layer: a page whose tag matches
//! none of the known kinds is carried through unchanged rather than
//! rejected, and the mapper never checks that a payload actually conforms
//! to the shape its tag names.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The known page content kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Notes,
    Mcq,
    #[serde(rename = "ytvideo")]
    YtVideo,
    Coding,
}

impl PageKind {
    /// Maps a page's `type` tag onto the shape it names. Unrecognized tags
    /// return `None` and are passed through untouched by every layer.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "notes" => Some(Self::Notes),
            "mcq" => Some(Self::Mcq),
            "ytvideo" => Some(Self::YtVideo),
            "coding" => Some(Self::Coding),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::Mcq => "mcq",
            Self::YtVideo => "ytvideo",
            Self::Coding => "coding",
        }
    }
}

/// Content of a `notes` page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotesContent {
    pub title: String,
    pub content: String,
}

/// Content of an `mcq` page. `correct` is an index into `options`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McqContent {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub options: Vec<Value>,
    pub correct: i64,
}

/// Content of a `ytvideo` page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YouTubeContent {
    pub video_id: String,
    pub title: String,
}

/// Content of a `coding` page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodingContent {
    pub problem_statement: String,
    pub test_cases: Vec<String>,
    #[serde(rename = "solutions")]
    pub solution_test_cases: Vec<String>,
}
