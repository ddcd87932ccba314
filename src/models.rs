//! Roadmap Models
//!
//! Data structures for the imported roadmap document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Presentation-side view of an item's status string
///
/// The stored `status` field stays a plain string so unknown values survive
/// export unchanged; this enum only drives labels and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemStatus {
    #[default]
    NotStarted,
    InProgress,
    Done,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::NotStarted => "not_started",
            ItemStatus::InProgress => "in_progress",
            ItemStatus::Done => "done",
        }
    }

    /// Unrecognized strings fall back to NotStarted
    pub fn from_str(s: &str) -> Self {
        match s {
            "in_progress" => ItemStatus::InProgress,
            "done" => ItemStatus::Done,
            _ => ItemStatus::NotStarted,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::NotStarted => "Not started",
            ItemStatus::InProgress => "In progress",
            ItemStatus::Done => "Done",
        }
    }
}

/// One trackable unit within a roadmap
///
/// The six normalized fields are always present as text after normalization.
/// Anything else the source file carried rides along in `extra` and is
/// written back verbatim on export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub note: String,
    #[serde(rename = "dueDate", default)]
    pub due_date: String,
    /// Optional resource URL, passed through unvalidated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Unrecognized source fields, preserved for round-trip fidelity
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Create an item with normalized defaults (mainly for tests)
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            status: ItemStatus::NotStarted.as_str().to_string(),
            note: String::new(),
            due_date: String::new(),
            link: None,
            extra: Map::new(),
        }
    }

    /// Presentation status, with unknown strings read as not-started
    pub fn display_status(&self) -> ItemStatus {
        ItemStatus::from_str(&self.status)
    }

    pub fn is_done(&self) -> bool {
        self.status == ItemStatus::Done.as_str()
    }
}

/// The normalized roadmap document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub items: Vec<Item>,
}

/// User-editable item fields for a merge-update
///
/// Only fields set to `Some` are written; everything else on the item,
/// including passthrough fields, is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub note: Option<String>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,
}

impl ItemPatch {
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        assert_eq!(ItemStatus::Done.as_str(), "done");
        assert_eq!(ItemStatus::from_str("in_progress"), ItemStatus::InProgress);
    }

    #[test]
    fn test_unknown_status_reads_as_not_started() {
        let mut item = Item::new("1", "Read the book");
        item.status = "paused".to_string();
        assert_eq!(item.display_status(), ItemStatus::NotStarted);
        assert!(!item.is_done());
        // the stored string is untouched
        assert_eq!(item.status, "paused");
    }

    #[test]
    fn test_extra_fields_survive_serde() {
        let json = r#"{
            "id": "jsx",
            "title": "JSX",
            "status": "done",
            "link": "https://example.com",
            "difficulty": 3
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.link.as_deref(), Some("https://example.com"));
        assert_eq!(item.extra.get("difficulty"), Some(&serde_json::json!(3)));

        let out = serde_json::to_value(&item).unwrap();
        assert_eq!(out["difficulty"], serde_json::json!(3));
        assert_eq!(out["link"], serde_json::json!("https://example.com"));
    }
}
