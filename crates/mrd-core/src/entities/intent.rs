use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named state in the inventory-intent workflow (requested, approved,
/// issued, ...).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IntentStatus {
    pub id: i64,
    pub status_name: String,
    pub hospital_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Binds a hospital and an intent status to a display color for the kanban
/// board.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IntentTrack {
    pub id: i64,
    pub hospital_id: i64,
    pub intent_status_id: i64,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A product's position in the intent workflow within a hospital.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProductIntent {
    pub id: i64,
    pub product_id: i64,
    pub intent_status_id: i64,
    pub intent_track_id: i64,
    pub hospital_id: i64,
    pub quantity: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
