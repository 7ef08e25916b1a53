//! JournalDocument - the persisted layout of the decision collection.
//!
//! Current layout:
//!
//! ```json
//! { "schemaVersion": 1, "decisions": [ { "id": "...", "title": "...", ... } ] }
//! ```
//!
//! The unversioned layout (a bare array of decisions) is still accepted on
//! read and upgraded on the next write.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use crate::domain::journal::Decision;
use crate::ports::StorageError;

/// Newest schema version this build reads and the one it writes.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JournalDocumentRef<'a> {
    schema_version: u32,
    decisions: &'a [Decision],
}

#[derive(Deserialize)]
struct JournalDocument {
    decisions: Vec<Decision>,
}

/// Result of decoding a stored journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedJournal {
    pub decisions: Vec<Decision>,
    /// True when the text used the unversioned bare-array layout.
    pub legacy: bool,
    /// Records dropped because an earlier record had the same id.
    pub duplicates_dropped: usize,
}

/// Serializes the collection in the current layout.
pub fn encode(decisions: &[Decision]) -> Result<String, StorageError> {
    serde_json::to_string(&JournalDocumentRef {
        schema_version: SCHEMA_VERSION,
        decisions,
    })
    .map_err(|e| StorageError::SerializationFailed(e.to_string()))
}

/// Parses stored text in either the versioned or the legacy layout.
///
/// # Errors
///
/// - `UnsupportedSchema` if the document was written by a newer version
/// - `DeserializationFailed` for anything that is not a journal
pub fn decode(text: &str) -> Result<DecodedJournal, StorageError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| StorageError::DeserializationFailed(e.to_string()))?;

    let (decisions, legacy) = match value {
        Value::Array(_) => {
            let decisions: Vec<Decision> = serde_json::from_value(value)
                .map_err(|e| StorageError::DeserializationFailed(e.to_string()))?;
            (decisions, true)
        }
        Value::Object(_) => {
            let found = value
                .get("schemaVersion")
                .and_then(Value::as_u64)
                .ok_or_else(|| {
                    StorageError::DeserializationFailed("missing schemaVersion".to_string())
                })?;
            if found > u64::from(SCHEMA_VERSION) {
                return Err(StorageError::UnsupportedSchema {
                    found: u32::try_from(found).unwrap_or(u32::MAX),
                    supported: SCHEMA_VERSION,
                });
            }
            let document: JournalDocument = serde_json::from_value(value)
                .map_err(|e| StorageError::DeserializationFailed(e.to_string()))?;
            (document.decisions, false)
        }
        _ => {
            return Err(StorageError::DeserializationFailed(
                "expected an object or an array".to_string(),
            ))
        }
    };

    let (decisions, duplicates_dropped) = dedup_by_id(decisions);
    Ok(DecodedJournal {
        decisions,
        legacy,
        duplicates_dropped,
    })
}

/// Keeps the first record for each id, preserving order.
fn dedup_by_id(decisions: Vec<Decision>) -> (Vec<Decision>, usize) {
    let total = decisions.len();
    let mut seen = HashSet::with_capacity(total);
    let kept: Vec<Decision> = decisions
        .into_iter()
        .filter(|d| seen.insert(*d.id()))
        .collect();
    let dropped = total - kept.len();
    (kept, dropped)
}
