use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tenant-scoped SKU with pricing fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub purchase_rate: f64,
    pub sale_rate: f64,
    pub mrp: f64,
    pub max_discount: Option<f64>,
    pub hospital_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Join table Product↔Department, unique on (`product_id`, `department_id`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProductDepartment {
    pub id: i64,
    pub product_id: i64,
    pub department_id: i64,
    pub created_at: DateTime<Utc>,
}
