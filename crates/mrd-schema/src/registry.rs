//! Central schema registry for all Meridian types.
//!
//! The `SchemaRegistry` builds JSON Schemas at construction time from two
//! sources: entity shapes derived from mrd-core types via
//! [`schemars::schema_for!`], and query/mutation input schemas generated from
//! the model catalog. Validation is provided via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;
use serde_json::{Map, Value, json};

use crate::error::SchemaError;
use crate::inputs::InputKind;
use crate::{catalog, filters, inputs};

/// Central store of all JSON Schemas in the Meridian system.
///
/// Entity shapes are keyed by the model name (`"patient"`); generated input
/// schemas by `"{model}.{kind}"` (`"patient.where"`, `"user.create"`, ...).
/// Every stored schema is a self-contained document: generated inputs carry
/// the full shared `$defs` bundle so cross-model references always resolve.
pub struct SchemaRegistry {
    schemas: HashMap<String, Value>,
}

/// Insert an entity schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert(
            String::from($name),
            serde_json::to_value(schema_for!($ty)).unwrap(),
        );
    };
}

impl SchemaRegistry {
    /// Build a new registry containing all entity schemas from mrd-core plus
    /// every generated input schema for every model in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Catalog` if the model catalog fails its
    /// integrity check.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    pub fn new() -> Result<Self, SchemaError> {
        let models = catalog::catalog();
        catalog::check(&models)?;

        let mut schemas = HashMap::new();

        // --- Entity shapes (17) ---
        register!(schemas, "hospital", mrd_core::entities::Hospital);
        register!(schemas, "department", mrd_core::entities::Department);
        register!(schemas, "user", mrd_core::entities::User);
        register!(schemas, "user_login", mrd_core::entities::UserLogin);
        register!(schemas, "role", mrd_core::entities::Role);
        register!(schemas, "user_role", mrd_core::entities::UserRole);
        register!(schemas, "permission", mrd_core::entities::Permission);
        register!(
            schemas,
            "role_permission",
            mrd_core::entities::RolePermission
        );
        register!(schemas, "vendor", mrd_core::entities::Vendor);
        register!(schemas, "product", mrd_core::entities::Product);
        register!(
            schemas,
            "product_department",
            mrd_core::entities::ProductDepartment
        );
        register!(schemas, "intent_status", mrd_core::entities::IntentStatus);
        register!(schemas, "intent_track", mrd_core::entities::IntentTrack);
        register!(schemas, "product_intent", mrd_core::entities::ProductIntent);
        register!(schemas, "patient", mrd_core::entities::Patient);
        register!(schemas, "patient_visit", mrd_core::entities::PatientVisit);
        register!(schemas, "assessment", mrd_core::entities::Assessment);

        // --- Generated input schemas (17 models x 13 kinds) ---
        let mut defs = filters::shared_defs(&models);
        for model in &models {
            inputs::model_defs(model, &mut defs);
        }
        for model in &models {
            for kind in InputKind::ALL {
                schemas.insert(
                    kind.key(model.name),
                    input_document(&kind.def_name(model.name), &defs),
                );
            }
        }

        Ok(Self { schemas })
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

/// Wrap one `$defs` entry into a self-contained schema document.
fn input_document(def_name: &str, defs: &Map<String, Value>) -> Value {
    json!({
        "$ref": format!("#/$defs/{def_name}"),
        "$defs": defs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mrd_core::entities::Vendor;
    use mrd_core::enums::Gender;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new().unwrap()
    }

    #[test]
    fn registry_has_expected_count() {
        let reg = registry();
        // 17 entity shapes + 17 models x 13 input kinds = 238
        assert_eq!(reg.schema_count(), 238);
    }

    #[test]
    fn registry_list_is_sorted() {
        let reg = registry();
        let names = reg.list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn get_existing_schemas() {
        let reg = registry();
        assert!(reg.get("patient").is_some());
        assert!(reg.get("patient.where").is_some());
        assert!(reg.get("user.create").is_some());
        assert!(reg.get("assessment.scalar_where_with_aggregates").is_some());
    }

    #[test]
    fn get_nonexistent_schema() {
        let reg = registry();
        assert!(reg.get("nonexistent").is_none());
        assert!(reg.get("patient.nonexistent").is_none());
    }

    #[test]
    fn every_model_has_all_input_kinds() {
        let reg = registry();
        for model in catalog::catalog() {
            assert!(reg.get(model.name).is_some(), "missing {}", model.name);
            for kind in InputKind::ALL {
                let key = kind.key(model.name);
                assert!(reg.get(&key).is_some(), "missing {key}");
            }
        }
    }

    #[test]
    fn input_documents_are_self_contained() {
        let reg = registry();
        let doc = reg.get("user.where").unwrap();
        let defs = doc["$defs"].as_object().unwrap();
        // Cross-model references must resolve within the same document.
        assert!(defs.contains_key("hospital_where"));
        assert!(defs.contains_key("string_filter"));
        assert!(defs.contains_key("gender_filter"));
    }

    #[test]
    fn validate_valid_entity() {
        let reg = registry();
        let vendor = Vendor {
            id: 1,
            name: "Acme Surgical".into(),
            phone: None,
            email: None,
            address: None,
            hospital_id: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&vendor).unwrap();
        assert!(reg.validate("vendor", &json).is_ok());
    }

    #[test]
    fn validate_rejects_missing_required_field() {
        let reg = registry();
        let invalid = json!({
            "id": 1,
            // "name" is missing
            "hospital_id": 1,
            "created_at": "2026-02-08T12:00:00Z",
            "updated_at": "2026-02-08T12:00:00Z"
        });
        let result = reg.validate("vendor", &invalid);
        assert!(result.is_err());
        if let Err(SchemaError::ValidationFailed { errors }) = result {
            assert!(!errors.is_empty());
        } else {
            panic!("Expected ValidationFailed");
        }
    }

    #[test]
    fn validate_rejects_invalid_enum() {
        let reg = registry();
        assert_eq!(Gender::VALUES.len(), 3);
        let invalid = json!({
            "uhid": "UH-0001",
            "first_name": "Asha",
            "last_name": "Rao",
            "gender": "unknown",
            "dob": "1990-01-01T00:00:00Z",
            "is_deleted": false,
            "created_at": "2026-02-08T12:00:00Z",
            "updated_at": "2026-02-08T12:00:00Z"
        });
        assert!(reg.validate("patient", &invalid).is_err());
    }

    #[test]
    fn validate_nonexistent_schema_returns_not_found() {
        let reg = registry();
        let result = reg.validate("bogus", &json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }

    #[test]
    fn validate_minimal_where_input() {
        let reg = registry();
        let input = json!({ "name": { "contains": "General" } });
        assert!(reg.validate("hospital.where", &input).is_ok());
    }

    #[test]
    fn validate_rejects_unknown_where_field() {
        let reg = registry();
        let input = json!({ "no_such_column": 1 });
        assert!(reg.validate("hospital.where", &input).is_err());
    }
}
