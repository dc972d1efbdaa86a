//! Note list decoder for snapshot payloads.
//!
//! # Responsibility
//! - Parse the JSON array the snapshot writer stores under list keys.
//! - Apply field defaults and enforce the non-empty `id` requirement.
//!
//! # Invariants
//! - Decoding is all-or-nothing at batch granularity: one malformed element
//!   discards the whole payload rather than dropping a single row.
//! - Array order is presentation order and is preserved as-is.

use crate::model::note::{NoteSummary, DEFAULT_TITLE};
use log::warn;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reason a snapshot payload was rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteListDecodeError {
    /// Payload is not parseable JSON.
    InvalidJson(String),
    /// Payload parsed but the top-level value is not an array.
    NotAnArray,
    /// An array element is not a JSON object.
    ElementNotObject { index: usize },
    /// An array element lacks a non-empty string `id`.
    MissingId { index: usize },
}

impl Display for NoteListDecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJson(message) => write!(f, "payload is not valid JSON: {message}"),
            Self::NotAnArray => write!(f, "top-level value is not an array"),
            Self::ElementNotObject { index } => {
                write!(f, "element {index} is not an object")
            }
            Self::MissingId { index } => {
                write!(f, "element {index} lacks a non-empty `id`")
            }
        }
    }
}

impl Error for NoteListDecodeError {}

/// Decodes a snapshot payload, failing closed to the empty list.
///
/// This is the surface widget code uses: any malformed payload degrades to
/// "no rows" and emits one `warn` diagnostic naming the reason. An empty
/// widget signals "no data yet"; a partially-decoded one would look stale.
pub fn decode_note_list(raw: &str) -> Vec<NoteSummary> {
    match try_decode_note_list(raw) {
        Ok(items) => items,
        Err(reason) => {
            warn!("event=note_list_decode module=projection status=discarded reason=\"{reason}\"");
            Vec::new()
        }
    }
}

/// Decodes a snapshot payload, reporting why a batch was rejected.
///
/// Field handling per element:
/// - `id`: required non-empty string; anything else rejects the batch.
/// - `title`: defaults to `"Untitled"` when missing, not a string, or empty.
/// - `preview`: defaults to `""` when missing or not a string.
/// - Unknown fields are ignored for forward compatibility.
pub fn try_decode_note_list(raw: &str) -> Result<Vec<NoteSummary>, NoteListDecodeError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|err| NoteListDecodeError::InvalidJson(err.to_string()))?;

    let Value::Array(elements) = value else {
        return Err(NoteListDecodeError::NotAnArray);
    };

    let mut items = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        let object = element
            .as_object()
            .ok_or(NoteListDecodeError::ElementNotObject { index })?;

        let id = object
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .ok_or(NoteListDecodeError::MissingId { index })?;

        let title = match object.get("title").and_then(Value::as_str) {
            Some(title) if !title.is_empty() => title,
            _ => DEFAULT_TITLE,
        };

        let preview = object
            .get("preview")
            .and_then(Value::as_str)
            .unwrap_or_default();

        items.push(NoteSummary::new(id, title, preview));
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::{decode_note_list, try_decode_note_list, NoteListDecodeError};

    #[test]
    fn decodes_full_objects_in_order() {
        let items = decode_note_list(
            r#"[{"id":"1","title":"First","preview":"P1"},{"id":"2","title":"Second","preview":"P2"}]"#,
        );
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[0].title, "First");
        assert_eq!(items[1].preview, "P2");
    }

    #[test]
    fn defaults_title_and_preview() {
        let items = decode_note_list(r#"[{"id":"a"}]"#);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Untitled");
        assert_eq!(items[0].preview, "");
    }

    #[test]
    fn one_bad_element_discards_the_batch() {
        let items = decode_note_list(r#"[{"id":"a"},{"title":"x"}]"#);
        assert!(items.is_empty());

        let reason = try_decode_note_list(r#"[{"id":"a"},{"title":"x"}]"#)
            .expect_err("second element lacks id");
        assert_eq!(reason, NoteListDecodeError::MissingId { index: 1 });
    }

    #[test]
    fn non_array_payloads_are_rejected() {
        assert!(decode_note_list("").is_empty());
        assert!(decode_note_list("not json").is_empty());
        assert!(decode_note_list("{}").is_empty());
        assert!(decode_note_list("[1,2,3]").is_empty());
    }

    #[test]
    fn non_string_optional_fields_fall_back() {
        let items = decode_note_list(r#"[{"id":"a","title":7,"preview":[1]}]"#);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Untitled");
        assert_eq!(items[0].preview, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let items = decode_note_list(r#"[{"id":"a","color":"red","pinned_at":123}]"#);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "a");
    }

    #[test]
    fn empty_id_rejects_the_batch() {
        assert!(decode_note_list(r#"[{"id":""}]"#).is_empty());
    }
}
