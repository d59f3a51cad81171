pub mod content;
pub mod domain;
pub mod oid;
pub mod ports;
pub mod schema;
pub mod service;

pub use content::{CodingContent, McqContent, NotesContent, PageKind, YouTubeContent};
pub use domain::{Page, Topic, User};
pub use oid::{IdentifierError, ObjectId};
pub use ports::{PageStore, StoreError, StoreResult, Stored, TopicStore, UserStore};
pub use schema::{PageDoc, TopicDoc, UserDoc};
pub use service::{PageService, ServiceError, TopicService, UserService};
