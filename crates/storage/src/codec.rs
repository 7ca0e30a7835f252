//! Text encoding of stored lists: a plain JSON array, no version field.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::repository::StorageError;

/// Serialize a list for storage.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if an element cannot be encoded.
pub fn encode_list<T: Serialize>(items: &[T]) -> Result<String, StorageError> {
    serde_json::to_string(items).map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Decode a stored list. Absent or unreadable values yield an empty list.
#[must_use]
pub fn decode_list_or_empty<T: DeserializeOwned>(key: &str, raw: Option<&str>) -> Vec<T> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str(raw) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(key, error = %err, "discarding unreadable stored list");
            Vec::new()
        }
    }
}
