//! Roadmap Core
//!
//! Normalization, progress calculation, merge-updates, and import/export
//! for roadmap documents. Everything here is pure and synchronous; the UI
//! and the persistence gateway are thin callers.

use serde_json::Value;
use thiserror::Error;

use crate::models::{Document, Item, ItemPatch, ItemStatus};

/// Error raised when imported content is not a well-formed roadmap
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FormatError {
    pub message: String,
}

impl FormatError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// JS-style truthiness: null, false, 0, and "" are falsy.
///
/// Defaulting on falsy (not just on missing) deliberately recovers from
/// explicit empty-string/zero/null values in loosely authored files.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        // arrays and objects are truthy even when empty
        _ => true,
    }
}

/// Text form of a value: strings as-is, everything else via its JSON form
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Truthy text field with an empty-string default
fn text_field(obj: &serde_json::Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .filter(|v| is_truthy(v))
        .map(text_of)
        .unwrap_or_default()
}

/// Validate and default an arbitrary JSON value into a well-formed Document
///
/// Fails when the root is not an object, `title` is missing or falsy, or
/// `items` is not an array. Normalization is idempotent: re-normalizing an
/// already-normalized document yields an identical one.
pub fn normalize(raw: &Value) -> Result<Document, FormatError> {
    let root = raw
        .as_object()
        .ok_or_else(|| FormatError::new("the file does not contain a roadmap object"))?;

    let title = root.get("title").filter(|v| is_truthy(v)).map(text_of);
    let items = root.get("items").and_then(Value::as_array);
    let (title, items) = match (title, items) {
        (Some(title), Some(items)) => (title, items),
        _ => {
            return Err(FormatError::new(
                "expected \"title\" (string) and \"items\" (array) at the JSON root",
            ))
        }
    };

    let description = text_field(root, "description");

    let mut normalized = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        normalized.push(normalize_item(item, idx)?);
    }

    Ok(Document {
        title,
        description,
        items: normalized,
    })
}

fn normalize_item(raw: &Value, idx: usize) -> Result<Item, FormatError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| FormatError::new("a roadmap item has an invalid format"))?;

    // Fallback id is the 0-based position, which is stable for a given file
    let id = match obj.get("id") {
        Some(v) if !v.is_null() => text_of(v),
        _ => idx.to_string(),
    };
    let title = obj
        .get("title")
        .filter(|v| is_truthy(v))
        .map(text_of)
        .unwrap_or_else(|| format!("Item {}", idx + 1));
    let status = obj
        .get("status")
        .filter(|v| is_truthy(v))
        .map(text_of)
        .unwrap_or_else(|| ItemStatus::NotStarted.as_str().to_string());
    let link = obj
        .get("link")
        .and_then(Value::as_str)
        .map(str::to_owned);

    // Everything not claimed by a normalized field passes through verbatim
    let mut extra = serde_json::Map::new();
    for (key, value) in obj {
        match key.as_str() {
            "id" | "title" | "description" | "status" | "note" | "dueDate" => {}
            "link" if link.is_some() => {}
            _ => {
                extra.insert(key.clone(), value.clone());
            }
        }
    }

    Ok(Item {
        id,
        title,
        description: text_field(obj, "description"),
        status,
        note: text_field(obj, "note"),
        due_date: text_field(obj, "dueDate"),
        link,
        extra,
    })
}

/// Parse JSON text and normalize it into a Document
///
/// Syntax errors and shape errors both surface as a FormatError; the caller
/// shows one import-failure message either way.
pub fn import_from_text(text: &str) -> Result<Document, FormatError> {
    let raw: Value = serde_json::from_str(text)
        .map_err(|err| FormatError::new(format!("could not parse the file as JSON: {err}")))?;
    normalize(&raw)
}

/// Pretty-printed JSON for download
pub fn export_to_text(doc: &Document) -> String {
    // serializing a Document cannot fail: all keys are strings
    serde_json::to_string_pretty(doc).unwrap_or_default()
}

/// Download filename derived from the document title
///
/// Lowercased; runs of anything other than ASCII alphanumerics and Cyrillic
/// letters collapse to a single hyphen; falls back to "roadmap" when nothing
/// survives.
pub fn export_file_name(doc: &Document) -> String {
    let slug = slugify(&doc.title);
    let base = if slug.is_empty() { "roadmap" } else { slug.as_str() };
    format!("{base}-with-progress.json")
}

fn slugify(title: &str) -> String {
    let mut slug = String::new();
    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() || is_cyrillic(ch) {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

fn is_cyrillic(ch: char) -> bool {
    ('а'..='я').contains(&ch) || ch == 'ё'
}

/// Percentage of items whose status is exactly "done"
///
/// 0 for no document or no items; otherwise `100 * done / total` rounded
/// half-away-from-zero (`f64::round`).
pub fn compute_progress(doc: Option<&Document>) -> u8 {
    let Some(doc) = doc else { return 0 };
    if doc.items.is_empty() {
        return 0;
    }
    let total = doc.items.len() as f64;
    let done = doc.items.iter().filter(|item| item.is_done()).count() as f64;
    (100.0 * done / total).round() as u8
}

/// Replace the matching item(s) with a shallow-merged copy, patch fields win
///
/// Every item whose id equals `item_id` is patched (ids are not checked for
/// uniqueness on import, so duplicates all receive the update). An unmatched
/// id is a silent no-op. The input document is never mutated.
pub fn update_item(doc: &Document, item_id: &str, patch: &ItemPatch) -> Document {
    let items = doc
        .items
        .iter()
        .map(|item| {
            if item.id == item_id {
                apply_patch(item, patch)
            } else {
                item.clone()
            }
        })
        .collect();

    Document {
        items,
        ..doc.clone()
    }
}

fn apply_patch(item: &Item, patch: &ItemPatch) -> Item {
    let mut next = item.clone();
    if let Some(title) = &patch.title {
        next.title = title.clone();
    }
    if let Some(description) = &patch.description {
        next.description = description.clone();
    }
    if let Some(status) = &patch.status {
        next.status = status.clone();
    }
    if let Some(note) = &patch.note {
        next.note = note.clone();
    }
    if let Some(due_date) = &patch.due_date {
        next.due_date = due_date.clone();
    }
    next
}

/// First item whose id equals `item_id` (text comparison, same as update)
pub fn find_item<'a>(doc: &'a Document, item_id: &str) -> Option<&'a Item> {
    doc.items.iter().find(|item| item.id == item_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_raw() -> Value {
        json!({
            "title": "React Roadmap",
            "description": "Core topics",
            "items": [
                { "id": "jsx", "title": "JSX", "link": "https://react.dev" },
                { "title": "Hooks", "status": "in_progress" },
                { "id": 3, "description": "", "note": null }
            ]
        })
    }

    #[test]
    fn test_normalize_fills_defaults() {
        let doc = normalize(&sample_raw()).unwrap();
        assert_eq!(doc.title, "React Roadmap");
        assert_eq!(doc.description, "Core topics");
        assert_eq!(doc.items.len(), 3);

        let first = &doc.items[0];
        assert_eq!(first.id, "jsx");
        assert_eq!(first.status, "not_started");
        assert_eq!(first.note, "");
        assert_eq!(first.due_date, "");
        assert_eq!(first.link.as_deref(), Some("https://react.dev"));

        // missing id falls back to the 0-based position
        assert_eq!(doc.items[1].id, "1");
        assert_eq!(doc.items[1].status, "in_progress");

        // numeric id coerced to text, missing title synthesized
        assert_eq!(doc.items[2].id, "3");
        assert_eq!(doc.items[2].title, "Item 3");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let doc = normalize(&sample_raw()).unwrap();
        let again = normalize(&serde_json::to_value(&doc).unwrap()).unwrap();
        assert_eq!(doc, again);
    }

    #[test]
    fn test_positional_ids_are_stable() {
        let raw = json!({ "title": "X", "items": [{}, {}, {}] });
        let doc = normalize(&raw).unwrap();
        let ids: Vec<&str> = doc.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["0", "1", "2"]);

        let doc2 = normalize(&raw).unwrap();
        assert_eq!(doc, doc2);
    }

    #[test]
    fn test_normalize_rejects_bad_roots() {
        assert!(normalize(&json!(null)).is_err());
        assert!(normalize(&json!([1, 2])).is_err());
        assert!(normalize(&json!({ "items": [] })).is_err());
        assert!(normalize(&json!({ "title": "", "items": [] })).is_err());
        assert!(normalize(&json!({ "title": "X" })).is_err());
        assert!(normalize(&json!({ "title": "X", "items": "not-an-array" })).is_err());
    }

    #[test]
    fn test_normalize_rejects_non_object_items() {
        let err = normalize(&json!({ "title": "X", "items": ["oops"] })).unwrap_err();
        assert!(err.message.contains("invalid format"));
    }

    #[test]
    fn test_falsy_values_are_defaulted() {
        let raw = json!({
            "title": "X",
            "items": [{ "id": "a", "title": "", "status": null, "note": 0, "dueDate": false }]
        });
        let item = &normalize(&raw).unwrap().items[0];
        assert_eq!(item.title, "Item 1");
        assert_eq!(item.status, "not_started");
        assert_eq!(item.note, "");
        assert_eq!(item.due_date, "");
    }

    #[test]
    fn test_unknown_status_passes_through() {
        let raw = json!({ "title": "X", "items": [{ "id": "a", "status": "blocked" }] });
        let doc = normalize(&raw).unwrap();
        assert_eq!(doc.items[0].status, "blocked");
        assert_eq!(doc.items[0].display_status(), ItemStatus::NotStarted);
    }

    #[test]
    fn test_import_rejects_invalid_json() {
        let err = import_from_text("{ not json").unwrap_err();
        assert!(err.message.contains("JSON"));
    }

    #[test]
    fn test_progress_empty_and_missing() {
        assert_eq!(compute_progress(None), 0);
        let doc = Document {
            title: "X".to_string(),
            description: String::new(),
            items: Vec::new(),
        };
        assert_eq!(compute_progress(Some(&doc)), 0);
    }

    fn doc_with_statuses(statuses: &[&str]) -> Document {
        let items = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| {
                let mut item = Item::new(i.to_string(), format!("Item {}", i + 1));
                item.status = status.to_string();
                item
            })
            .collect();
        Document {
            title: "X".to_string(),
            description: String::new(),
            items,
        }
    }

    #[test]
    fn test_progress_rounding() {
        assert_eq!(compute_progress(Some(&doc_with_statuses(&["done", "not_started", "not_started"]))), 33);
        assert_eq!(compute_progress(Some(&doc_with_statuses(&["done", "done", "not_started"]))), 67);
        assert_eq!(compute_progress(Some(&doc_with_statuses(&["done", "done", "done"]))), 100);
        // only the exact "done" string counts
        assert_eq!(compute_progress(Some(&doc_with_statuses(&["Done", "DONE"]))), 0);
    }

    #[test]
    fn test_update_item_patches_only_the_target() {
        let doc = normalize(&sample_raw()).unwrap();
        let updated = update_item(&doc, "jsx", &ItemPatch::status("done"));

        assert_eq!(updated.items[0].status, "done");
        assert_eq!(updated.items[0].title, doc.items[0].title);
        assert_eq!(updated.items[0].link, doc.items[0].link);
        assert_eq!(updated.items[1], doc.items[1]);
        assert_eq!(updated.items[2], doc.items[2]);
        // the input is untouched
        assert_eq!(doc.items[0].status, "not_started");
    }

    #[test]
    fn test_update_item_unmatched_id_is_a_no_op() {
        let doc = normalize(&sample_raw()).unwrap();
        let updated = update_item(&doc, "nope", &ItemPatch::status("done"));
        assert_eq!(updated, doc);
    }

    #[test]
    fn test_update_item_patches_every_duplicate_id() {
        let raw = json!({
            "title": "X",
            "items": [{ "id": "dup" }, { "id": "dup" }]
        });
        let doc = normalize(&raw).unwrap();
        let updated = update_item(&doc, "dup", &ItemPatch::status("done"));
        assert!(updated.items.iter().all(|i| i.is_done()));
    }

    #[test]
    fn test_find_item_returns_first_match() {
        let doc = normalize(&sample_raw()).unwrap();
        assert_eq!(find_item(&doc, "jsx").unwrap().title, "JSX");
        assert!(find_item(&doc, "missing").is_none());
    }

    #[test]
    fn test_export_file_name() {
        let mut doc = doc_with_statuses(&[]);
        doc.title = "React Roadmap".to_string();
        assert_eq!(export_file_name(&doc), "react-roadmap-with-progress.json");

        doc.title = "Дорожная карта: Rust!".to_string();
        assert_eq!(export_file_name(&doc), "дорожная-карта-rust-with-progress.json");

        doc.title = "***".to_string();
        assert_eq!(export_file_name(&doc), "roadmap-with-progress.json");
    }

    #[test]
    fn test_end_to_end_import_update_export() {
        let doc =
            import_from_text(r#"{"title":"React Roadmap","items":[{"id":"jsx","title":"JSX"}]}"#)
                .unwrap();
        assert_eq!(doc.items.len(), 1);
        assert_eq!(doc.items[0].status, "not_started");
        assert_eq!(compute_progress(Some(&doc)), 0);

        let done = update_item(&doc, "jsx", &ItemPatch::status("done"));
        assert_eq!(compute_progress(Some(&done)), 100);

        let reimported = import_from_text(&export_to_text(&done)).unwrap();
        assert_eq!(reimported, done);
    }

    #[test]
    fn test_failed_import_leaves_prior_document_usable() {
        let prior = normalize(&sample_raw()).unwrap();
        let result = import_from_text(r#"{"title":"X","items":"not-an-array"}"#);
        assert!(result.is_err());
        // the prior document is untouched by the failed attempt
        assert_eq!(compute_progress(Some(&prior)), 0);
        assert_eq!(prior.items.len(), 3);
    }
}
