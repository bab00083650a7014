//! Domain Models
//!
//! The single domain entity plus input validation helpers shared by the
//! add form and the edit modal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length (in chars) of the title and body fields
pub const FIELD_MAX_LEN: usize = 100;

/// Item data structure (matches the remote payload; extra fields are ignored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub title: String,
    pub body: String,
}

impl Item {
    /// Build an item from already-validated (trimmed) fields
    pub fn new(id: u64, title: String, body: String) -> Self {
        Self { id, title, body }
    }
}

/// Generate a fresh client-side id from the current timestamp
pub fn fresh_id() -> u64 {
    js_sys::Date::now() as u64
}

/// Validation failures surfaced to the user as toast messages
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title cannot be empty.")]
    EmptyTitle,
    #[error("Description cannot be empty.")]
    EmptyBody,
}

/// Truncate raw input to the field cap, counting chars.
/// Applied on every keystroke so over-long input is blocked at entry.
pub fn clamp_field(value: &str) -> String {
    value.chars().take(FIELD_MAX_LEN).collect()
}

/// Trim both fields and reject empty results.
/// Returns the trimmed pair ready to be written into the store.
pub fn validate_fields(title: &str, body: &str) -> Result<(String, String), ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    let body = body.trim();
    if body.is_empty() {
        return Err(ValidationError::EmptyBody);
    }
    Ok((title.to_string(), body.to_string()))
}
