use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Clinical note for a visit, unique on `patient_visit_id`. The `diagnosis`
/// column is nullable JSON; writes go through the null-sentinel convention
/// in [`crate::json_null`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Assessment {
    pub id: i64,
    pub patient_uhid: String,
    pub doctor_id: i64,
    pub patient_visit_id: i64,
    pub complaint: Option<String>,
    pub history: Option<String>,
    pub examination: Option<String>,
    pub diagnosis: Option<serde_json::Value>,
    pub treatment: Option<String>,
    pub follow_up: Option<String>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
