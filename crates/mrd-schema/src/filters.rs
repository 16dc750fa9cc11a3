//! Shared `$defs` building blocks for the generated input schemas.
//!
//! Every per-model document references these defs: scalar filters (with the
//! full comparison-operator set), with-aggregates filters, field-update
//! operations, and the order-by primitives. Filter defs are recursive through
//! their `not` operator, which is why everything lives in one `$defs` bundle
//! rather than being inlined.

use serde_json::{Map, Value, json};

use mrd_core::enums::{NullsOrder, QueryMode, SortOrder};
use mrd_core::json_null::JsonNullSentinel;

use crate::descriptor::{ModelDescriptor, ScalarType};

/// `{"$ref": "#/$defs/<name>"}`.
pub(crate) fn def_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/$defs/{name}") })
}

/// Plain JSON Schema for a scalar value of the given type.
pub(crate) fn value_schema(scalar: ScalarType) -> Value {
    match scalar {
        ScalarType::String => json!({ "type": "string" }),
        ScalarType::Int => json!({ "type": "integer" }),
        ScalarType::Float => json!({ "type": "number" }),
        ScalarType::Boolean => json!({ "type": "boolean" }),
        ScalarType::DateTime => json!({ "type": "string", "format": "date-time" }),
        ScalarType::Json => json!(true),
        ScalarType::Enum { values, .. } => json!({ "type": "string", "enum": values }),
    }
}

/// Schema accepting a scalar value or JSON null.
pub(crate) fn nullable_value_schema(scalar: ScalarType) -> Value {
    json!({ "anyOf": [value_schema(scalar), { "type": "null" }] })
}

fn filter_def_name(scalar: ScalarType, required: bool) -> String {
    let base = scalar.def_base();
    if matches!(scalar, ScalarType::Json) || !required {
        format!("{base}_nullable_filter")
    } else {
        format!("{base}_filter")
    }
}

fn with_aggregates_def_name(scalar: ScalarType, required: bool) -> String {
    filter_def_name(scalar, required).replace("_filter", "_with_aggregates_filter")
}

fn update_def_name(scalar: ScalarType, required: bool) -> String {
    let base = scalar.def_base();
    if matches!(scalar, ScalarType::Json) || !required {
        format!("{base}_nullable_update")
    } else {
        format!("{base}_update")
    }
}

/// Reference to the filter def for a field of this type/nullability.
pub(crate) fn filter_ref(scalar: ScalarType, required: bool) -> Value {
    def_ref(&filter_def_name(scalar, required))
}

/// Reference to the with-aggregates filter def.
pub(crate) fn with_aggregates_ref(scalar: ScalarType, required: bool) -> Value {
    def_ref(&with_aggregates_def_name(scalar, required))
}

/// Reference to the field-update def.
pub(crate) fn update_ref(scalar: ScalarType, required: bool) -> Value {
    def_ref(&update_def_name(scalar, required))
}

/// Comparison-operator properties shared by the plain and with-aggregates
/// filter objects.
fn filter_props(scalar: ScalarType, nullable: bool, self_def: &str) -> Map<String, Value> {
    let v = value_schema(scalar);
    let equals = if nullable {
        json!({ "anyOf": [v, { "type": "null" }] })
    } else {
        v.clone()
    };

    let mut props = Map::new();
    props.insert("equals".into(), equals.clone());
    props.insert("in".into(), json!({ "type": "array", "items": v }));
    props.insert("notIn".into(), json!({ "type": "array", "items": v }));

    if scalar.is_comparable() {
        for op in ["lt", "lte", "gt", "gte"] {
            props.insert(op.into(), v.clone());
        }
    }

    if scalar.is_text() {
        for op in ["contains", "startsWith", "endsWith"] {
            props.insert(op.into(), v.clone());
        }
        props.insert("mode".into(), def_ref("query_mode"));
    }

    props.insert(
        "not".into(),
        json!({ "anyOf": [equals, def_ref(self_def)] }),
    );
    props
}

/// Build the filter def: shorthand scalar (or null) or the operator object.
fn scalar_filter(scalar: ScalarType, nullable: bool) -> Value {
    let name = filter_def_name(scalar, !nullable);
    let object = json!({
        "type": "object",
        "properties": filter_props(scalar, nullable, &name),
        "additionalProperties": false,
    });

    let mut any_of = vec![value_schema(scalar)];
    if nullable {
        any_of.push(json!({ "type": "null" }));
    }
    any_of.push(object);
    json!({ "anyOf": any_of })
}

/// Build the with-aggregates filter def: the plain operator set plus
/// `_count`/`_min`/`_max` (and `_avg`/`_sum` for numeric types).
fn scalar_with_aggregates_filter(scalar: ScalarType, nullable: bool) -> Value {
    let name = with_aggregates_def_name(scalar, !nullable);
    let mut props = filter_props(scalar, nullable, &name);
    props.insert("_count".into(), def_ref("int_filter"));
    props.insert("_min".into(), filter_ref(scalar, !nullable));
    props.insert("_max".into(), filter_ref(scalar, !nullable));
    if scalar.is_numeric() {
        props.insert("_avg".into(), def_ref("float_filter"));
        props.insert("_sum".into(), filter_ref(scalar, true));
    }

    let object = json!({
        "type": "object",
        "properties": props,
        "additionalProperties": false,
    });

    let mut any_of = vec![value_schema(scalar)];
    if nullable {
        any_of.push(json!({ "type": "null" }));
    }
    any_of.push(object);
    json!({ "anyOf": any_of })
}

/// Build the field-update def: shorthand value (or null) or a single-operation
/// object (`set`, plus arithmetic operators for numeric types).
fn scalar_update(scalar: ScalarType, nullable: bool) -> Value {
    let v = value_schema(scalar);
    let set_value = if nullable {
        json!({ "anyOf": [v, { "type": "null" }] })
    } else {
        v.clone()
    };

    let mut op_props = Map::new();
    op_props.insert("set".into(), set_value.clone());
    if scalar.is_numeric() {
        for op in ["increment", "decrement", "multiply", "divide"] {
            op_props.insert(op.into(), v.clone());
        }
    }

    let op_object = json!({
        "type": "object",
        "properties": op_props,
        "additionalProperties": false,
        "minProperties": 1,
        "maxProperties": 1,
    });

    json!({ "anyOf": [set_value, op_object] })
}

fn json_filter_props() -> Map<String, Value> {
    let mut props = Map::new();
    // `equals`/`not` accept any JSON value, including the null sentinels.
    props.insert("equals".into(), json!(true));
    props.insert("not".into(), json!(true));
    props.insert(
        "path".into(),
        json!({ "type": "array", "items": { "type": "string" } }),
    );
    props.insert("string_contains".into(), json!({ "type": "string" }));
    props.insert("string_starts_with".into(), json!({ "type": "string" }));
    props.insert("string_ends_with".into(), json!({ "type": "string" }));
    props.insert("array_contains".into(), json!(true));
    props
}

/// The JSON-column filter. No scalar shorthand: JSON predicates must use the
/// operator object so a literal payload is never mistaken for a filter.
fn json_nullable_filter() -> Value {
    json!({
        "type": "object",
        "properties": json_filter_props(),
        "additionalProperties": false,
    })
}

fn json_nullable_with_aggregates_filter() -> Value {
    let mut props = json_filter_props();
    props.insert("_count".into(), def_ref("int_filter"));
    props.insert("_min".into(), def_ref("json_nullable_filter"));
    props.insert("_max".into(), def_ref("json_nullable_filter"));
    json!({
        "type": "object",
        "properties": props,
        "additionalProperties": false,
    })
}

/// Write-position input for a nullable JSON column: a write sentinel, a `set`
/// operation, or any JSON value.
fn json_nullable_update() -> Value {
    json!({
        "anyOf": [
            def_ref("json_null_write"),
            {
                "type": "object",
                "properties": { "set": true },
                "required": ["set"],
                "additionalProperties": false,
            },
            true,
        ]
    })
}

/// Build the complete shared `$defs` bundle for the given catalog.
///
/// Enum defs are derived from the enum scalar types actually used by the
/// catalog, so adding an enum to a model automatically adds its filter and
/// update defs.
pub(crate) fn shared_defs(models: &[ModelDescriptor]) -> Map<String, Value> {
    let mut defs = Map::new();

    defs.insert(
        "sort_order".into(),
        json!({ "type": "string", "enum": SortOrder::VALUES }),
    );
    defs.insert(
        "nulls_order".into(),
        json!({ "type": "string", "enum": NullsOrder::VALUES }),
    );
    defs.insert(
        "query_mode".into(),
        json!({ "type": "string", "enum": QueryMode::VALUES }),
    );
    defs.insert(
        "sort_order_input".into(),
        json!({
            "type": "object",
            "properties": {
                "sort": def_ref("sort_order"),
                "nulls": def_ref("nulls_order"),
            },
            "required": ["sort"],
            "additionalProperties": false,
        }),
    );

    defs.insert(
        "json_null_sentinel".into(),
        json!({ "type": "string", "enum": JsonNullSentinel::VALUES }),
    );
    defs.insert(
        "json_null_write".into(),
        json!({ "type": "string", "enum": ["DbNull", "JsonNull"] }),
    );
    defs.insert("json_nullable_filter".into(), json_nullable_filter());
    defs.insert(
        "json_nullable_with_aggregates_filter".into(),
        json_nullable_with_aggregates_filter(),
    );
    defs.insert("json_nullable_update".into(), json_nullable_update());

    let mut scalars = vec![
        ScalarType::String,
        ScalarType::Int,
        ScalarType::Float,
        ScalarType::Boolean,
        ScalarType::DateTime,
    ];
    for model in models {
        for field in &model.fields {
            if let ScalarType::Enum { .. } = field.scalar {
                if !scalars.contains(&field.scalar) {
                    scalars.push(field.scalar);
                }
            }
        }
    }

    for scalar in scalars {
        for nullable in [false, true] {
            defs.insert(
                filter_def_name(scalar, !nullable),
                scalar_filter(scalar, nullable),
            );
            defs.insert(
                with_aggregates_def_name(scalar, !nullable),
                scalar_with_aggregates_filter(scalar, nullable),
            );
            defs.insert(
                update_def_name(scalar, !nullable),
                scalar_update(scalar, nullable),
            );
        }
    }

    defs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use pretty_assertions::assert_eq;

    fn defs() -> Map<String, Value> {
        shared_defs(&catalog::catalog())
    }

    #[test]
    fn bundle_contains_order_primitives() {
        let defs = defs();
        assert_eq!(
            defs["sort_order"],
            json!({ "type": "string", "enum": ["asc", "desc"] })
        );
        assert_eq!(
            defs["nulls_order"],
            json!({ "type": "string", "enum": ["first", "last"] })
        );
        assert!(defs.contains_key("sort_order_input"));
    }

    #[test]
    fn bundle_contains_filters_for_every_base_type() {
        let defs = defs();
        for base in ["string", "int", "float", "bool", "date_time"] {
            assert!(defs.contains_key(&format!("{base}_filter")), "{base}");
            assert!(
                defs.contains_key(&format!("{base}_nullable_filter")),
                "{base}"
            );
            assert!(
                defs.contains_key(&format!("{base}_with_aggregates_filter")),
                "{base}"
            );
            assert!(defs.contains_key(&format!("{base}_update")), "{base}");
        }
    }

    #[test]
    fn gender_defs_are_derived_from_catalog() {
        let defs = defs();
        assert!(defs.contains_key("gender_filter"));
        assert!(defs.contains_key("gender_nullable_filter"));
        assert!(defs.contains_key("gender_update"));
    }

    #[test]
    fn string_filter_has_text_operators() {
        let defs = defs();
        let object = &defs["string_filter"]["anyOf"][1];
        let props = object["properties"].as_object().unwrap();
        for op in [
            "equals",
            "in",
            "notIn",
            "lt",
            "lte",
            "gt",
            "gte",
            "contains",
            "startsWith",
            "endsWith",
            "mode",
            "not",
        ] {
            assert!(props.contains_key(op), "string_filter missing {op}");
        }
    }

    #[test]
    fn bool_filter_has_no_comparison_operators() {
        let defs = defs();
        let object = &defs["bool_filter"]["anyOf"][1];
        let props = object["properties"].as_object().unwrap();
        assert!(!props.contains_key("lt"));
        assert!(!props.contains_key("contains"));
        assert!(props.contains_key("equals"));
    }

    #[test]
    fn int_update_has_arithmetic_operators() {
        let defs = defs();
        let object = &defs["int_update"]["anyOf"][1];
        let props = object["properties"].as_object().unwrap();
        for op in ["set", "increment", "decrement", "multiply", "divide"] {
            assert!(props.contains_key(op), "int_update missing {op}");
        }
        assert_eq!(object["maxProperties"], json!(1));
    }

    #[test]
    fn string_update_is_set_only() {
        let defs = defs();
        let object = &defs["string_update"]["anyOf"][1];
        let props = object["properties"].as_object().unwrap();
        assert_eq!(props.len(), 1);
        assert!(props.contains_key("set"));
    }

    #[test]
    fn numeric_with_aggregates_have_avg_and_sum() {
        let defs = defs();
        let object = &defs["float_with_aggregates_filter"]["anyOf"][1];
        let props = object["properties"].as_object().unwrap();
        for op in ["_count", "_avg", "_sum", "_min", "_max"] {
            assert!(props.contains_key(op), "missing {op}");
        }

        let object = &defs["string_with_aggregates_filter"]["anyOf"][1];
        let props = object["properties"].as_object().unwrap();
        assert!(!props.contains_key("_avg"));
        assert!(!props.contains_key("_sum"));
        assert!(props.contains_key("_min"));
    }

    #[test]
    fn json_null_defs_match_sentinel_convention() {
        let defs = defs();
        assert_eq!(
            defs["json_null_sentinel"],
            json!({ "type": "string", "enum": ["DbNull", "JsonNull", "AnyNull"] })
        );
        assert_eq!(
            defs["json_null_write"],
            json!({ "type": "string", "enum": ["DbNull", "JsonNull"] })
        );
    }
}
