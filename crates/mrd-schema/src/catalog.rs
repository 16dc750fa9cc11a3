//! The model catalog: declarative descriptors for every entity in the
//! hospital-management schema.
//!
//! This is the data dictionary the whole schema layer is generated from.
//! Field, relation, and unique-key declarations here mirror the relational
//! schema one-to-one; changing a model means changing exactly one function in
//! this file.

use mrd_core::enums::Gender;

use crate::descriptor::{FieldDescriptor as F, ModelDescriptor, RelationArity, ScalarType};
use crate::error::SchemaError;

/// The `gender` enum as a scalar type.
pub const GENDER: ScalarType = ScalarType::Enum {
    name: "gender",
    values: Gender::VALUES,
};

/// Build the full catalog, leaves-last (dependency order mirrors foreign-key
/// direction: the tenant root first, the clinical chain last).
#[must_use]
pub fn catalog() -> Vec<ModelDescriptor> {
    vec![
        hospital(),
        department(),
        user(),
        user_login(),
        role(),
        user_role(),
        permission(),
        role_permission(),
        vendor(),
        product(),
        product_department(),
        intent_status(),
        intent_track(),
        product_intent(),
        patient(),
        patient_visit(),
        assessment(),
    ]
}

fn timestamps(model: ModelDescriptor) -> ModelDescriptor {
    model
        .field(F::new("created_at", ScalarType::DateTime).with_default())
        .field(F::new("updated_at", ScalarType::DateTime).with_default())
}

fn hospital() -> ModelDescriptor {
    timestamps(
        ModelDescriptor::new("hospital")
            .field(F::id_auto("id"))
            .field(F::new("name", ScalarType::String))
            .field(F::new("phone", ScalarType::String).optional()),
    )
    .has_many("departments", "department")
    .has_many("users", "user")
    .has_many("roles", "role")
    .has_many("permissions", "permission")
    .has_many("vendors", "vendor")
    .has_many("products", "product")
    .has_many("intent_statuses", "intent_status")
    .has_many("intent_tracks", "intent_track")
    .has_many("product_intents", "product_intent")
    .has_many("patient_visits", "patient_visit")
    .unique("id", &["id"])
}

fn department() -> ModelDescriptor {
    timestamps(
        ModelDescriptor::new("department")
            .field(F::id_auto("id"))
            .field(F::new("name", ScalarType::String))
            .field(F::new("hospital_id", ScalarType::Int).fk())
            .field(F::new("role_id", ScalarType::Int).fk()),
    )
    .belongs_to("hospital", "hospital", &["hospital_id"])
    .belongs_to("role", "role", &["role_id"])
    .has_many("users", "user")
    .has_many("patient_visits", "patient_visit")
    .has_many("product_departments", "product_department")
    .unique("id", &["id"])
}

fn user() -> ModelDescriptor {
    timestamps(
        ModelDescriptor::new("user")
            .field(F::id_auto("id"))
            .field(F::new("first_name", ScalarType::String))
            .field(F::new("last_name", ScalarType::String))
            .field(F::new("email", ScalarType::String))
            .field(F::new("phone", ScalarType::String).optional())
            .field(F::new("department_id", ScalarType::Int).fk())
            .field(F::new("hospital_id", ScalarType::Int).fk()),
    )
    .belongs_to("department", "department", &["department_id"])
    .belongs_to("hospital", "hospital", &["hospital_id"])
    .has_one("login", "user_login")
    .has_many("user_roles", "user_role")
    .has_many("assessments", "assessment")
    .has_many("patient_visits", "patient_visit")
    .unique("id", &["id"])
    .unique("email_hospital_id", &["email", "hospital_id"])
}

fn user_login() -> ModelDescriptor {
    timestamps(
        ModelDescriptor::new("user_login")
            .field(F::id_auto("id"))
            .field(F::new("user_id", ScalarType::Int).fk())
            .field(F::new("password_hash", ScalarType::String))
            .field(F::new("last_login_at", ScalarType::DateTime).optional()),
    )
    .belongs_to("user", "user", &["user_id"])
    .unique("id", &["id"])
    .unique("user_id", &["user_id"])
}

fn role() -> ModelDescriptor {
    timestamps(
        ModelDescriptor::new("role")
            .field(F::id_auto("id"))
            .field(F::new("role_name", ScalarType::String))
            .field(F::new("hospital_id", ScalarType::Int).fk()),
    )
    .belongs_to("hospital", "hospital", &["hospital_id"])
    .has_many("departments", "department")
    .has_many("role_permissions", "role_permission")
    .has_many("user_roles", "user_role")
    .unique("id", &["id"])
    .unique("role_name_hospital_id", &["role_name", "hospital_id"])
}

fn user_role() -> ModelDescriptor {
    ModelDescriptor::new("user_role")
        .field(F::id_auto("id"))
        .field(F::new("user_id", ScalarType::Int).fk())
        .field(F::new("role_id", ScalarType::Int).fk())
        .field(F::new("created_at", ScalarType::DateTime).with_default())
        .belongs_to("user", "user", &["user_id"])
        .belongs_to("role", "role", &["role_id"])
        .unique("id", &["id"])
        .unique("user_id_role_id", &["user_id", "role_id"])
}

fn permission() -> ModelDescriptor {
    timestamps(
        ModelDescriptor::new("permission")
            .field(F::id_auto("id"))
            .field(F::new("permission_name", ScalarType::String))
            .field(F::new("description", ScalarType::String).optional())
            .field(F::new("hospital_id", ScalarType::Int).fk()),
    )
    .belongs_to("hospital", "hospital", &["hospital_id"])
    .has_many("role_permissions", "role_permission")
    .unique("id", &["id"])
}

fn role_permission() -> ModelDescriptor {
    ModelDescriptor::new("role_permission")
        .field(F::id_auto("id"))
        .field(F::new("role_id", ScalarType::Int).fk())
        .field(F::new("permission_id", ScalarType::Int).fk())
        .field(F::new("created_at", ScalarType::DateTime).with_default())
        .belongs_to("role", "role", &["role_id"])
        .belongs_to("permission", "permission", &["permission_id"])
        .unique("id", &["id"])
        .unique("role_id_permission_id", &["role_id", "permission_id"])
}

fn vendor() -> ModelDescriptor {
    timestamps(
        ModelDescriptor::new("vendor")
            .field(F::id_auto("id"))
            .field(F::new("name", ScalarType::String))
            .field(F::new("phone", ScalarType::String).optional())
            .field(F::new("email", ScalarType::String).optional())
            .field(F::new("address", ScalarType::String).optional())
            .field(F::new("hospital_id", ScalarType::Int).fk()),
    )
    .belongs_to("hospital", "hospital", &["hospital_id"])
    .unique("id", &["id"])
}

fn product() -> ModelDescriptor {
    timestamps(
        ModelDescriptor::new("product")
            .field(F::id_auto("id"))
            .field(F::new("name", ScalarType::String))
            .field(F::new("description", ScalarType::String).optional())
            .field(F::new("purchase_rate", ScalarType::Float))
            .field(F::new("sale_rate", ScalarType::Float))
            .field(F::new("mrp", ScalarType::Float))
            .field(F::new("max_discount", ScalarType::Float).optional())
            .field(F::new("hospital_id", ScalarType::Int).fk()),
    )
    .belongs_to("hospital", "hospital", &["hospital_id"])
    .has_many("product_departments", "product_department")
    .has_many("product_intents", "product_intent")
    .unique("id", &["id"])
}

fn product_department() -> ModelDescriptor {
    ModelDescriptor::new("product_department")
        .field(F::id_auto("id"))
        .field(F::new("product_id", ScalarType::Int).fk())
        .field(F::new("department_id", ScalarType::Int).fk())
        .field(F::new("created_at", ScalarType::DateTime).with_default())
        .belongs_to("product", "product", &["product_id"])
        .belongs_to("department", "department", &["department_id"])
        .unique("id", &["id"])
        .unique("product_id_department_id", &["product_id", "department_id"])
}

fn intent_status() -> ModelDescriptor {
    timestamps(
        ModelDescriptor::new("intent_status")
            .field(F::id_auto("id"))
            .field(F::new("status_name", ScalarType::String))
            .field(F::new("hospital_id", ScalarType::Int).fk()),
    )
    .belongs_to("hospital", "hospital", &["hospital_id"])
    .has_many("intent_tracks", "intent_track")
    .has_many("product_intents", "product_intent")
    .unique("id", &["id"])
}

fn intent_track() -> ModelDescriptor {
    timestamps(
        ModelDescriptor::new("intent_track")
            .field(F::id_auto("id"))
            .field(F::new("hospital_id", ScalarType::Int).fk())
            .field(F::new("intent_status_id", ScalarType::Int).fk())
            .field(F::new("color", ScalarType::String)),
    )
    .belongs_to("hospital", "hospital", &["hospital_id"])
    .belongs_to("intent_status", "intent_status", &["intent_status_id"])
    .has_many("product_intents", "product_intent")
    .unique("id", &["id"])
}

fn product_intent() -> ModelDescriptor {
    timestamps(
        ModelDescriptor::new("product_intent")
            .field(F::id_auto("id"))
            .field(F::new("product_id", ScalarType::Int).fk())
            .field(F::new("intent_status_id", ScalarType::Int).fk())
            .field(F::new("intent_track_id", ScalarType::Int).fk())
            .field(F::new("hospital_id", ScalarType::Int).fk())
            .field(F::new("quantity", ScalarType::Int).optional()),
    )
    .belongs_to("product", "product", &["product_id"])
    .belongs_to("intent_status", "intent_status", &["intent_status_id"])
    .belongs_to("intent_track", "intent_track", &["intent_track_id"])
    .belongs_to("hospital", "hospital", &["hospital_id"])
    .unique("id", &["id"])
}

fn patient() -> ModelDescriptor {
    timestamps(
        ModelDescriptor::new("patient")
            .field(F::id_string("uhid"))
            .field(F::new("first_name", ScalarType::String))
            .field(F::new("last_name", ScalarType::String).optional())
            .field(F::new("gender", GENDER))
            .field(F::new("dob", ScalarType::DateTime).optional())
            .field(F::new("phone", ScalarType::String).optional())
            .field(F::new("address", ScalarType::String).optional())
            .field(F::new("is_deleted", ScalarType::Boolean).with_default()),
    )
    .has_many("visits", "patient_visit")
    .has_many("assessments", "assessment")
    .unique("uhid", &["uhid"])
}

fn patient_visit() -> ModelDescriptor {
    timestamps(
        ModelDescriptor::new("patient_visit")
            .field(F::id_auto("id"))
            .field(F::new("patient_uhid", ScalarType::String).fk())
            .field(F::new("department_id", ScalarType::Int).fk())
            .field(F::new("doctor_id", ScalarType::Int).fk())
            .field(F::new("hospital_id", ScalarType::Int).fk())
            .field(F::new("check_in_time", ScalarType::DateTime).with_default())
            .field(F::new("check_out_time", ScalarType::DateTime).optional())
            .field(F::new("is_deleted", ScalarType::Boolean).with_default()),
    )
    .belongs_to("patient", "patient", &["patient_uhid"])
    .belongs_to("department", "department", &["department_id"])
    .belongs_to("doctor", "user", &["doctor_id"])
    .belongs_to("hospital", "hospital", &["hospital_id"])
    .has_one("assessment", "assessment")
    .unique("id", &["id"])
}

fn assessment() -> ModelDescriptor {
    timestamps(
        ModelDescriptor::new("assessment")
            .field(F::id_auto("id"))
            .field(F::new("patient_uhid", ScalarType::String).fk())
            .field(F::new("doctor_id", ScalarType::Int).fk())
            .field(F::new("patient_visit_id", ScalarType::Int).fk())
            .field(F::new("complaint", ScalarType::String).optional())
            .field(F::new("history", ScalarType::String).optional())
            .field(F::new("examination", ScalarType::String).optional())
            .field(F::new("diagnosis", ScalarType::Json).optional())
            .field(F::new("treatment", ScalarType::String).optional())
            .field(F::new("follow_up", ScalarType::String).optional())
            .field(F::new("is_deleted", ScalarType::Boolean).with_default()),
    )
    .belongs_to("patient", "patient", &["patient_uhid"])
    .belongs_to("doctor", "user", &["doctor_id"])
    .belongs_to("visit", "patient_visit", &["patient_visit_id"])
    .unique("id", &["id"])
    .unique("patient_visit_id", &["patient_visit_id"])
}

/// Verify catalog integrity: every relation targets a known model, every
/// relation FK and unique-key field names a real scalar, and relation names do
/// not shadow field names.
///
/// # Errors
///
/// Returns [`SchemaError::Catalog`] naming the first violation found.
pub fn check(models: &[ModelDescriptor]) -> Result<(), SchemaError> {
    for model in models {
        for relation in &model.relations {
            if !models.iter().any(|m| m.name == relation.target) {
                return Err(SchemaError::Catalog(format!(
                    "model '{}' relation '{}' targets unknown model '{}'",
                    model.name, relation.name, relation.target
                )));
            }
            if model.field_named(relation.name).is_some() {
                return Err(SchemaError::Catalog(format!(
                    "model '{}' relation '{}' shadows a scalar field",
                    model.name, relation.name
                )));
            }
            for fk in relation.fk_fields {
                match model.field_named(fk) {
                    Some(field) if field.foreign_key => {}
                    Some(_) => {
                        return Err(SchemaError::Catalog(format!(
                            "model '{}' relation '{}' fk field '{fk}' is not marked foreign_key",
                            model.name, relation.name
                        )));
                    }
                    None => {
                        return Err(SchemaError::Catalog(format!(
                            "model '{}' relation '{}' references missing fk field '{fk}'",
                            model.name, relation.name
                        )));
                    }
                }
            }
            if matches!(relation.arity, RelationArity::ToOne { optional: false })
                && relation.fk_fields.is_empty()
            {
                return Err(SchemaError::Catalog(format!(
                    "model '{}' required to-one relation '{}' has no fk fields",
                    model.name, relation.name
                )));
            }
        }
        for unique in &model.uniques {
            if unique.fields.is_empty() {
                return Err(SchemaError::Catalog(format!(
                    "model '{}' unique key '{}' has no fields",
                    model.name, unique.name
                )));
            }
            for field in unique.fields {
                if model.field_named(field).is_none() {
                    return Err(SchemaError::Catalog(format!(
                        "model '{}' unique key '{}' references missing field '{field}'",
                        model.name, unique.name
                    )));
                }
            }
        }
    }
    Ok(())
}
