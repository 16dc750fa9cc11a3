use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Gender;

/// Clinical master record, keyed by `uhid` (unique health ID, string primary
/// key). Soft-deleted via `is_deleted` rather than removed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Patient {
    pub uhid: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub gender: Gender,
    pub dob: Option<DateTime<Utc>>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
