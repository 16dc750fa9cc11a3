use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One check-in/out event for a patient, linked to a department, a doctor,
/// and the hospital. At most one assessment per visit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PatientVisit {
    pub id: i64,
    pub patient_uhid: String,
    pub department_id: i64,
    pub doctor_id: i64,
    pub hospital_id: i64,
    pub check_in_time: DateTime<Utc>,
    pub check_out_time: Option<DateTime<Utc>>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
