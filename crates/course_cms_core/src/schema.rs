//! crates/course_cms_core/src/schema.rs
//!
//! The persisted document form of each entity and the mapper between it and
//! the API form. Field names here are the storage contract: any store
//! implementation must preserve them for compatibility.
//!
//! Mapping is explicit and field-by-field in both directions. The persisted
//! structs never carry their own identifier; storage assigns it on insert
//! and supplies it alongside the document on reads (see `Stored`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Page, Topic, User};
use crate::oid::{IdentifierError, ObjectId};

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Document form of a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicDoc {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub position: i32,
    #[serde(rename = "isHidden", default)]
    pub hidden: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

/// Document form of a page. The owning topic travels as a binary id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDoc {
    pub topic_id: ObjectId,
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
    #[serde(rename = "isHidden", default, skip_serializing_if = "is_false")]
    pub hidden: bool,
}

/// Document form of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDoc {
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

impl Topic {
    /// Maps to the document form. The topic's own identifier is not part of
    /// the document; storage assigns it on insert and uses it as the lookup
    /// key on update.
    pub fn to_doc(&self) -> TopicDoc {
        TopicDoc {
            name: self.name.clone(),
            description: self.description.clone(),
            position: self.position,
            hidden: self.hidden,
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
        }
    }
}

impl TopicDoc {
    /// Renders the API form under the identifier storage returned.
    pub fn into_api(self, id: ObjectId) -> Topic {
        Topic {
            id: Some(id.to_hex()),
            name: self.name,
            description: self.description,
            position: self.position,
            hidden: self.hidden,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Page {
    /// Maps to the document form, parsing the owning topic's identifier.
    ///
    /// The content payload is carried through unchanged, whatever its shape;
    /// conformance with the declared `type` tag is not checked.
    pub fn to_doc(&self) -> Result<PageDoc, IdentifierError> {
        let topic_id = ObjectId::parse_str(&self.topic_id)?;
        Ok(PageDoc {
            topic_id,
            title: self.title.clone(),
            kind: self.kind.clone(),
            content: self.content.clone(),
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
            deleted_at: self.deleted_at.clone(),
            hidden: self.hidden,
        })
    }
}

impl PageDoc {
    /// Renders the API form; both identifiers become hex strings. This
    /// direction never fails.
    pub fn into_api(self, id: ObjectId) -> Page {
        Page {
            id: Some(id.to_hex()),
            topic_id: self.topic_id.to_hex(),
            title: self.title,
            kind: self.kind,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
            hidden: self.hidden,
        }
    }
}

impl User {
    pub fn to_doc(&self) -> UserDoc {
        UserDoc {
            name: self.name.clone(),
            email: self.email.clone(),
            kind: self.kind.clone(),
            age: self.age,
            is_active: self.is_active,
        }
    }
}

impl UserDoc {
    pub fn into_api(self, id: ObjectId) -> User {
        User {
            id: Some(id.to_hex()),
            name: self.name,
            email: self.email,
            kind: self.kind,
            age: self.age,
            is_active: self.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TOPIC_ID: &str = "507f1f77bcf86cd799439011";
    const PAGE_ID: &str = "65f1a2b3c4d5e6f708192a3b";

    fn sample_page(content: Value, kind: &str) -> Page {
        Page {
            id: None,
            topic_id: TOPIC_ID.to_string(),
            title: "Sample".to_string(),
            kind: kind.to_string(),
            content,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-02T00:00:00Z".to_string(),
            deleted_at: None,
            hidden: false,
        }
    }

    #[test]
    fn topic_survives_both_directions() {
        let topic = Topic {
            id: None,
            name: "Algebra".to_string(),
            description: String::new(),
            position: 1,
            hidden: false,
            created_at: "2024-01-01".to_string(),
            updated_at: "2024-01-01".to_string(),
        };

        let id = ObjectId::parse_str(TOPIC_ID).unwrap();
        let round_tripped = topic.to_doc().into_api(id);

        assert_eq!(round_tripped.id.as_deref(), Some(TOPIC_ID));
        assert_eq!(round_tripped.name, topic.name);
        assert_eq!(round_tripped.description, topic.description);
        assert_eq!(round_tripped.position, topic.position);
        assert!(!round_tripped.hidden);
        assert_eq!(round_tripped.created_at, topic.created_at);
        assert_eq!(round_tripped.updated_at, topic.updated_at);
    }

    #[test]
    fn page_preserves_every_field_except_its_own_id() {
        let page = sample_page(
            json!({"question": "2+2?", "options": ["3", "4", "5"], "correct": 1}),
            "mcq",
        );

        let doc = page.to_doc().unwrap();
        let back = doc.into_api(ObjectId::parse_str(PAGE_ID).unwrap());

        assert_eq!(back.id.as_deref(), Some(PAGE_ID));
        assert_eq!(back.topic_id, page.topic_id);
        assert_eq!(back.title, page.title);
        assert_eq!(back.kind, page.kind);
        assert_eq!(back.content, page.content);
        assert_eq!(back.created_at, page.created_at);
        assert_eq!(back.updated_at, page.updated_at);
        assert_eq!(back.deleted_at, page.deleted_at);
        assert_eq!(back.hidden, page.hidden);
    }

    #[test]
    fn malformed_owner_id_rejects_the_mapping() {
        let page = Page {
            topic_id: "not-an-id".to_string(),
            ..sample_page(Value::Null, "notes")
        };
        assert!(page.to_doc().is_err());

        let page = Page {
            topic_id: String::new(),
            ..sample_page(Value::Null, "notes")
        };
        assert_eq!(page.to_doc().unwrap_err(), IdentifierError::Empty);
    }

    #[test]
    fn all_four_content_shapes_pass_through_unchanged() {
        let shapes = [
            ("notes", json!({"title": "Intro", "content": "Read this first."})),
            (
                "mcq",
                json!({"question": "2+2?", "image": "sum.png", "options": ["3", "4", "5", "22"], "correct": 2}),
            ),
            ("ytvideo", json!({"video_id": "dQw4w9WgXcQ", "title": "Lecture 1"})),
            (
                "coding",
                json!({
                    "problem_statement": "Reverse a list",
                    "test_cases": ["[1,2,3]", "[]"],
                    "solutions": ["[3,2,1]", "[]"]
                }),
            ),
        ];

        for (kind, content) in shapes {
            let page = sample_page(content.clone(), kind);
            let back = page
                .to_doc()
                .unwrap()
                .into_api(ObjectId::parse_str(PAGE_ID).unwrap());
            assert_eq!(back.content, content, "content changed for kind {kind}");
        }
    }

    #[test]
    fn unknown_kind_passes_through() {
        let page = sample_page(json!({"anything": true}), "quiz");
        let back = page
            .to_doc()
            .unwrap()
            .into_api(ObjectId::parse_str(PAGE_ID).unwrap());
        assert_eq!(back.kind, "quiz");
        assert_eq!(back.content, json!({"anything": true}));
    }

    #[test]
    fn topic_document_field_names() {
        let doc = Topic {
            id: None,
            name: "Algebra".to_string(),
            description: "intro".to_string(),
            position: 3,
            hidden: true,
            created_at: "c".to_string(),
            updated_at: "u".to_string(),
        }
        .to_doc();

        let rendered = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            rendered,
            json!({
                "name": "Algebra",
                "description": "intro",
                "position": 3,
                "isHidden": true,
                "createdAt": "c",
                "updatedAt": "u"
            })
        );
    }

    #[test]
    fn page_document_omits_empty_optionals() {
        let doc = sample_page(json!({"title": "n", "content": "c"}), "notes")
            .to_doc()
            .unwrap();

        let rendered = serde_json::to_value(&doc).unwrap();
        assert!(rendered.get("deleted_at").is_none());
        assert!(rendered.get("isHidden").is_none());
        assert_eq!(rendered["topic_id"], json!(TOPIC_ID));
        assert_eq!(rendered["type"], json!("notes"));
    }

    #[test]
    fn page_document_keeps_set_optionals() {
        let mut page = sample_page(Value::Null, "notes");
        page.deleted_at = Some("2024-02-01".to_string());
        page.hidden = true;

        let rendered = serde_json::to_value(page.to_doc().unwrap()).unwrap();
        assert_eq!(rendered["deleted_at"], json!("2024-02-01"));
        assert_eq!(rendered["isHidden"], json!(true));
    }

    #[test]
    fn user_round_trip() {
        let user = User {
            id: None,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            kind: "student".to_string(),
            age: 30,
            is_active: true,
        };
        let back = user.to_doc().into_api(ObjectId::parse_str(PAGE_ID).unwrap());
        assert_eq!(back.id.as_deref(), Some(PAGE_ID));
        assert_eq!(back.name, user.name);
        assert_eq!(back.email, user.email);
        assert_eq!(back.kind, user.kind);
        assert_eq!(back.age, user.age);
        assert_eq!(back.is_active, user.is_active);
    }
}
