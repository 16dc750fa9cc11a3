//! Serde roundtrip and JsonSchema validation tests for all entity types.

use chrono::Utc;
use mrd_core::entities::*;
use mrd_core::enums::Gender;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    hospital_roundtrip,
    Hospital,
    Hospital {
        id: 1,
        name: "St. Mary General".into(),
        phone: Some("+1-555-0100".into()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    department_roundtrip,
    Department,
    Department {
        id: 4,
        name: "Radiology".into(),
        hospital_id: 1,
        role_id: 2,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    user_roundtrip,
    User,
    User {
        id: 12,
        first_name: "Asha".into(),
        last_name: "Nair".into(),
        email: "asha.nair@stmary.example".into(),
        phone: None,
        department_id: 4,
        hospital_id: 1,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    user_login_roundtrip,
    UserLogin,
    UserLogin {
        id: 12,
        user_id: 12,
        password_hash: "$argon2id$v=19$m=65536,t=3,p=4$c2FsdA$aGFzaA".into(),
        last_login_at: Some(Utc::now()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    role_roundtrip,
    Role,
    Role {
        id: 2,
        role_name: "radiologist".into(),
        hospital_id: 1,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    user_role_roundtrip,
    UserRole,
    UserRole {
        id: 7,
        user_id: 12,
        role_id: 2,
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    permission_roundtrip,
    Permission,
    Permission {
        id: 3,
        permission_name: "patient.read".into(),
        description: Some("Read patient master records".into()),
        hospital_id: 1,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    role_permission_roundtrip,
    RolePermission,
    RolePermission {
        id: 9,
        role_id: 2,
        permission_id: 3,
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    vendor_roundtrip,
    Vendor,
    Vendor {
        id: 5,
        name: "MedSupply Co".into(),
        phone: Some("+1-555-0188".into()),
        email: None,
        address: Some("14 Dock Road".into()),
        hospital_id: 1,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    product_roundtrip,
    Product,
    Product {
        id: 31,
        name: "Paracetamol 500mg".into(),
        description: None,
        purchase_rate: 0.80,
        sale_rate: 1.20,
        mrp: 1.50,
        max_discount: Some(10.0),
        hospital_id: 1,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    product_department_roundtrip,
    ProductDepartment,
    ProductDepartment {
        id: 8,
        product_id: 31,
        department_id: 4,
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    intent_status_roundtrip,
    IntentStatus,
    IntentStatus {
        id: 1,
        status_name: "requested".into(),
        hospital_id: 1,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    intent_track_roundtrip,
    IntentTrack,
    IntentTrack {
        id: 1,
        hospital_id: 1,
        intent_status_id: 1,
        color: "#f4a261".into(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    product_intent_roundtrip,
    ProductIntent,
    ProductIntent {
        id: 44,
        product_id: 31,
        intent_status_id: 1,
        intent_track_id: 1,
        hospital_id: 1,
        quantity: Some(200),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    patient_roundtrip,
    Patient,
    Patient {
        uhid: "UH-2024-000731".into(),
        first_name: "Ravi".into(),
        last_name: Some("Kumar".into()),
        gender: Gender::Male,
        dob: None,
        phone: Some("+91-98-7654-3210".into()),
        address: None,
        is_deleted: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    patient_visit_roundtrip,
    PatientVisit,
    PatientVisit {
        id: 201,
        patient_uhid: "UH-2024-000731".into(),
        department_id: 4,
        doctor_id: 12,
        hospital_id: 1,
        check_in_time: Utc::now(),
        check_out_time: None,
        is_deleted: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    assessment_roundtrip,
    Assessment,
    Assessment {
        id: 301,
        patient_uhid: "UH-2024-000731".into(),
        doctor_id: 12,
        patient_visit_id: 201,
        complaint: Some("Persistent cough".into()),
        history: None,
        examination: Some("Chest clear on auscultation".into()),
        diagnosis: Some(serde_json::json!({"icd10": "J20.9", "primary": true})),
        treatment: Some("Rest and fluids".into()),
        follow_up: Some("Review in 7 days".into()),
        is_deleted: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

// --- Schema rejection tests ---

#[test]
fn schema_rejects_patient_without_uhid() {
    let schema = serde_json::to_value(schema_for!(Patient)).unwrap();
    let invalid = serde_json::json!({
        "first_name": "Ravi",
        "gender": "male",
        "is_deleted": false,
        "created_at": "2026-08-01T09:00:00Z",
        "updated_at": "2026-08-01T09:00:00Z"
    });
    let errors = validate_against_schema(&schema, &invalid);
    assert!(!errors.is_empty(), "Should reject patient without 'uhid'");
}

#[test]
fn schema_rejects_invalid_gender_value() {
    let schema = serde_json::to_value(schema_for!(Patient)).unwrap();
    let invalid = serde_json::json!({
        "uhid": "UH-2024-000731",
        "first_name": "Ravi",
        "last_name": null,
        "gender": "unknown",
        "dob": null,
        "phone": null,
        "address": null,
        "is_deleted": false,
        "created_at": "2026-08-01T09:00:00Z",
        "updated_at": "2026-08-01T09:00:00Z"
    });
    let errors = validate_against_schema(&schema, &invalid);
    assert!(!errors.is_empty(), "Should reject invalid gender value");
}
