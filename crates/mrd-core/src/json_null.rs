//! JSON-null sentinel handling for nullable JSON columns.
//!
//! The wire convention distinguishes "column is SQL NULL" from "column holds a
//! JSON `null` value" via the sentinel strings `"DbNull"`, `"JsonNull"`, and
//! `"AnyNull"`. `DbNull`/`JsonNull` are write-position sentinels; `AnyNull` is
//! filter-only and matches either kind of null.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

/// Three-way null sentinel for nullable JSON columns.
///
/// Serialized in `PascalCase` to match the wire convention the generated input
/// schemas document (`"DbNull" | "JsonNull" | "AnyNull"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum JsonNullSentinel {
    DbNull,
    JsonNull,
    AnyNull,
}

impl JsonNullSentinel {
    pub const VALUES: &'static [&'static str] = &["DbNull", "JsonNull", "AnyNull"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DbNull => "DbNull",
            Self::JsonNull => "JsonNull",
            Self::AnyNull => "AnyNull",
        }
    }
}

impl fmt::Display for JsonNullSentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved write value for a nullable JSON column.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonWrite {
    /// Persist SQL NULL.
    DbNull,
    /// Persist the given JSON value (possibly the JSON `null` literal).
    Value(serde_json::Value),
}

/// Map an optional null sentinel to the concrete value to persist.
///
/// An absent sentinel resolves to SQL NULL.
///
/// # Errors
///
/// Returns [`CoreError::InvalidNullSentinel`] for `AnyNull`, which is only
/// meaningful in filter position.
pub fn transform_json_null(sentinel: Option<JsonNullSentinel>) -> Result<JsonWrite, CoreError> {
    match sentinel {
        None | Some(JsonNullSentinel::DbNull) => Ok(JsonWrite::DbNull),
        Some(JsonNullSentinel::JsonNull) => Ok(JsonWrite::Value(serde_json::Value::Null)),
        Some(JsonNullSentinel::AnyNull) => Err(CoreError::InvalidNullSentinel {
            sentinel: JsonNullSentinel::AnyNull.to_string(),
            reason: "only valid in filter position".to_string(),
        }),
    }
}

/// Write-position input for a nullable JSON column: either a null sentinel or
/// an arbitrary JSON value.
///
/// Variant order matters: untagged deserialization tries `Sentinel` first so
/// the literal strings `"DbNull"`/`"JsonNull"`/`"AnyNull"` are never mistaken
/// for plain JSON strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum NullableJsonInput {
    Sentinel(JsonNullSentinel),
    Value(serde_json::Value),
}

impl NullableJsonInput {
    /// Resolve to the value to persist.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidNullSentinel`] if the input is `AnyNull`.
    pub fn into_write(self) -> Result<JsonWrite, CoreError> {
        match self {
            Self::Sentinel(sentinel) => transform_json_null(Some(sentinel)),
            Self::Value(value) => Ok(JsonWrite::Value(value)),
        }
    }
}
