//! Helpers shared by several route groups.

use db::DocumentId;

use crate::error::ApiError;

/// Parses a path segment that must be a document id.
pub fn parse_id(raw: &str) -> Result<DocumentId, ApiError> {
    Ok(DocumentId::parse(raw)?)
}

/// A client-supplied optional field, with `null` and `""` both meaning absent.
pub fn provided(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
