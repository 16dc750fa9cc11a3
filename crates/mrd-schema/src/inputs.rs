//! Per-model input-schema generation.
//!
//! For every model in the catalog this module derives the full set of query
//! and mutation input schemas: filters, unique lookups, ordering, checked and
//! unchecked mutations, batch mutations, and projections, as `$defs` entries
//! that cross-reference each other and
//! the shared scalar defs from [`crate::filters`].
//!
//! Checked mutation inputs omit foreign-key scalars and expose nested relation
//! operations instead; unchecked inputs expose the FK scalars and no relation
//! objects. Relation objects validate shape only; referential completeness is
//! the database layer's concern, not this crate's.

use serde_json::{Map, Value, json};
use std::fmt;
use std::str::FromStr;

use crate::descriptor::{
    FieldDescriptor, ModelDescriptor, RelationArity, RelationDescriptor, ScalarType,
};
use crate::error::SchemaError;
use crate::filters;

// ---------------------------------------------------------------------------
// InputKind
// ---------------------------------------------------------------------------

/// The kinds of generated input schema, one per model operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Where,
    WhereUnique,
    OrderBy,
    OrderByAggregate,
    ScalarWhereWithAggregates,
    Create,
    CreateUnchecked,
    Update,
    UpdateUnchecked,
    CreateMany,
    UpdateMany,
    Include,
    Select,
}

impl InputKind {
    /// Every kind, in registry order.
    pub const ALL: [Self; 13] = [
        Self::Where,
        Self::WhereUnique,
        Self::OrderBy,
        Self::OrderByAggregate,
        Self::ScalarWhereWithAggregates,
        Self::Create,
        Self::CreateUnchecked,
        Self::Update,
        Self::UpdateUnchecked,
        Self::CreateMany,
        Self::UpdateMany,
        Self::Include,
        Self::Select,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Where => "where",
            Self::WhereUnique => "where_unique",
            Self::OrderBy => "order_by",
            Self::OrderByAggregate => "order_by_aggregate",
            Self::ScalarWhereWithAggregates => "scalar_where_with_aggregates",
            Self::Create => "create",
            Self::CreateUnchecked => "create_unchecked",
            Self::Update => "update",
            Self::UpdateUnchecked => "update_unchecked",
            Self::CreateMany => "create_many",
            Self::UpdateMany => "update_many",
            Self::Include => "include",
            Self::Select => "select",
        }
    }

    /// `$defs` entry name for a model (`user_where`, `patient_create`, ...).
    #[must_use]
    pub fn def_name(self, model: &str) -> String {
        format!("{model}_{}", self.as_str())
    }

    /// Registry key for a model (`user.where`, `patient.create`, ...).
    #[must_use]
    pub fn key(self, model: &str) -> String {
        format!("{model}.{}", self.as_str())
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SchemaError::NotFound(format!("input kind '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Small schema helpers
// ---------------------------------------------------------------------------

fn def_ref(name: &str) -> Value {
    filters::def_ref(name)
}

fn kind_ref(kind: InputKind, model: &str) -> Value {
    def_ref(&kind.def_name(model))
}

fn strict_object(props: Map<String, Value>) -> Value {
    json!({
        "type": "object",
        "properties": props,
        "additionalProperties": false,
    })
}

fn strict_object_required(props: Map<String, Value>, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": props,
        "required": required,
        "additionalProperties": false,
    })
}

/// A single value or a list of them (nested relation payloads accept both).
fn one_or_many(schema: &Value) -> Value {
    json!({ "anyOf": [schema, { "type": "array", "items": schema }] })
}

// ---------------------------------------------------------------------------
// Per-model defs
// ---------------------------------------------------------------------------

/// Generate every input def for `model` into `defs`.
pub(crate) fn model_defs(model: &ModelDescriptor, defs: &mut Map<String, Value>) {
    defs.insert(InputKind::Where.def_name(model.name), where_input(model));
    defs.insert(
        InputKind::WhereUnique.def_name(model.name),
        where_unique_input(model),
    );
    defs.insert(InputKind::OrderBy.def_name(model.name), order_by(model));
    defs.insert(
        InputKind::OrderByAggregate.def_name(model.name),
        order_by_aggregate(model),
    );
    defs.insert(
        InputKind::ScalarWhereWithAggregates.def_name(model.name),
        scalar_where_with_aggregates(model),
    );
    defs.insert(InputKind::Create.def_name(model.name), create(model, true));
    defs.insert(
        InputKind::CreateUnchecked.def_name(model.name),
        create(model, false),
    );
    defs.insert(InputKind::Update.def_name(model.name), update(model, true));
    defs.insert(
        InputKind::UpdateUnchecked.def_name(model.name),
        update(model, false),
    );
    defs.insert(
        InputKind::CreateMany.def_name(model.name),
        create_many(model),
    );
    defs.insert(
        InputKind::UpdateMany.def_name(model.name),
        update_many(model),
    );
    defs.insert(InputKind::Include.def_name(model.name), include(model));
    defs.insert(InputKind::Select.def_name(model.name), select(model));
}

/// Recursive AND/OR/NOT tree plus per-field and per-relation filters.
fn where_input(model: &ModelDescriptor) -> Value {
    let self_ref = kind_ref(InputKind::Where, model.name);
    let mut props = Map::new();
    props.insert("AND".into(), one_or_many(&self_ref));
    props.insert(
        "OR".into(),
        json!({ "type": "array", "items": self_ref.clone() }),
    );
    props.insert("NOT".into(), one_or_many(&self_ref));

    for field in &model.fields {
        props.insert(
            field.name.into(),
            filters::filter_ref(field.scalar, field.required),
        );
    }

    for relation in &model.relations {
        let target_where = kind_ref(InputKind::Where, relation.target);
        let schema = match relation.arity {
            RelationArity::ToMany => {
                let mut rel_props = Map::new();
                for quantifier in ["some", "every", "none"] {
                    rel_props.insert(quantifier.into(), target_where.clone());
                }
                strict_object(rel_props)
            }
            RelationArity::ToOne { optional } => {
                let is_schema = if optional {
                    json!({ "anyOf": [target_where.clone(), { "type": "null" }] })
                } else {
                    target_where.clone()
                };
                let mut rel_props = Map::new();
                rel_props.insert("is".into(), is_schema);
                rel_props.insert("isNot".into(), target_where.clone());
                json!({ "anyOf": [target_where, strict_object(rel_props)] })
            }
        };
        props.insert(relation.name.into(), schema);
    }

    strict_object(props)
}

/// Value schema for one field of a unique key. The catalog integrity check
/// rejects unknown unique-key fields before any generation runs, so the
/// reject-everything fallback is unreachable in practice.
fn unique_field_schema(model: &ModelDescriptor, field_name: &str) -> Value {
    model.field_named(field_name).map_or(Value::Bool(false), |f| {
        filters::value_schema(f.scalar)
    })
}

/// Exactly the declared unique key combinations, nothing else.
fn where_unique_input(model: &ModelDescriptor) -> Value {
    let variants: Vec<Value> = model
        .uniques
        .iter()
        .map(|unique| {
            let mut props = Map::new();
            if let [field_name] = unique.fields {
                props.insert((*field_name).into(), unique_field_schema(model, field_name));
            } else {
                let mut key_props = Map::new();
                for field_name in unique.fields {
                    key_props
                        .insert((*field_name).into(), unique_field_schema(model, field_name));
                }
                props.insert(
                    unique.name.into(),
                    strict_object_required(key_props, unique.fields),
                );
            }
            strict_object_required(props, &[unique.name])
        })
        .collect();

    json!({ "oneOf": variants })
}

fn order_by_field(field: &FieldDescriptor) -> Value {
    if field.required {
        def_ref("sort_order")
    } else {
        json!({ "anyOf": [def_ref("sort_order"), def_ref("sort_order_input")] })
    }
}

/// Per-field asc/desc plus to-one relation ordering and `_count` for to-many.
fn order_by(model: &ModelDescriptor) -> Value {
    let mut props = Map::new();
    for field in &model.fields {
        props.insert(field.name.into(), order_by_field(field));
    }
    for relation in &model.relations {
        let schema = match relation.arity {
            RelationArity::ToOne { .. } => kind_ref(InputKind::OrderBy, relation.target),
            RelationArity::ToMany => {
                let mut count = Map::new();
                count.insert("_count".into(), def_ref("sort_order"));
                strict_object(count)
            }
        };
        props.insert(relation.name.into(), schema);
    }
    strict_object(props)
}

/// Order-by-fields object over a subset of scalar fields.
fn aggregate_order_block<'a>(fields: impl Iterator<Item = &'a FieldDescriptor>) -> Value {
    let mut props = Map::new();
    for field in fields {
        props.insert(field.name.into(), def_ref("sort_order"));
    }
    strict_object(props)
}

/// Scalar ordering plus `_count`/`_avg`/`_sum`/`_min`/`_max` blocks.
fn order_by_aggregate(model: &ModelDescriptor) -> Value {
    let mut props = Map::new();
    for field in &model.fields {
        props.insert(field.name.into(), order_by_field(field));
    }
    props.insert("_count".into(), aggregate_order_block(model.fields.iter()));
    props.insert("_min".into(), aggregate_order_block(model.fields.iter()));
    props.insert("_max".into(), aggregate_order_block(model.fields.iter()));
    if model.numeric_fields().next().is_some() {
        props.insert("_avg".into(), aggregate_order_block(model.numeric_fields()));
        props.insert("_sum".into(), aggregate_order_block(model.numeric_fields()));
    }
    strict_object(props)
}

/// AND/OR/NOT over per-field with-aggregates filters (used by groupBy having).
fn scalar_where_with_aggregates(model: &ModelDescriptor) -> Value {
    let self_ref = kind_ref(InputKind::ScalarWhereWithAggregates, model.name);
    let mut props = Map::new();
    props.insert("AND".into(), one_or_many(&self_ref));
    props.insert(
        "OR".into(),
        json!({ "type": "array", "items": self_ref.clone() }),
    );
    props.insert("NOT".into(), one_or_many(&self_ref));
    for field in &model.fields {
        props.insert(
            field.name.into(),
            filters::with_aggregates_ref(field.scalar, field.required),
        );
    }
    strict_object(props)
}

/// Write-position schema for one scalar column.
fn create_value(field: &FieldDescriptor) -> Value {
    if matches!(field.scalar, ScalarType::Json) {
        def_ref("json_nullable_update")
    } else if field.required {
        filters::value_schema(field.scalar)
    } else {
        filters::nullable_value_schema(field.scalar)
    }
}

/// Nested relation operations available inside a checked create.
fn create_relation_ops(relation: &RelationDescriptor) -> Value {
    let target_create = kind_ref(InputKind::Create, relation.target);
    let target_unique = kind_ref(InputKind::WhereUnique, relation.target);
    let mut connect_or_create = Map::new();
    connect_or_create.insert("where".into(), target_unique.clone());
    connect_or_create.insert("create".into(), target_create.clone());
    let connect_or_create = strict_object_required(connect_or_create, &["where", "create"]);

    let mut props = Map::new();
    match relation.arity {
        RelationArity::ToOne { .. } => {
            props.insert("create".into(), target_create);
            props.insert("connect".into(), target_unique);
            props.insert("connectOrCreate".into(), connect_or_create);
        }
        RelationArity::ToMany => {
            props.insert("create".into(), one_or_many(&target_create));
            props.insert("connect".into(), one_or_many(&target_unique));
            props.insert("connectOrCreate".into(), one_or_many(&connect_or_create));
        }
    }
    let mut object = strict_object(props);
    object["minProperties"] = json!(1);
    object
}

/// Create input. Checked inputs drop FK scalars and gain relation operations;
/// unchecked inputs keep the FK scalars and have no relation objects.
fn create(model: &ModelDescriptor, checked: bool) -> Value {
    let mut props = Map::new();
    let mut required: Vec<&str> = Vec::new();

    for field in &model.fields {
        if checked && field.foreign_key {
            continue;
        }
        props.insert(field.name.into(), create_value(field));
        if field.required && !field.has_default {
            required.push(field.name);
        }
    }

    if checked {
        for relation in &model.relations {
            props.insert(relation.name.into(), create_relation_ops(relation));
        }
    }

    if required.is_empty() {
        strict_object(props)
    } else {
        strict_object_required(props, &required)
    }
}

/// Nested relation operations available inside a checked update.
fn update_relation_ops(relation: &RelationDescriptor) -> Value {
    let target_create = kind_ref(InputKind::Create, relation.target);
    let target_unique = kind_ref(InputKind::WhereUnique, relation.target);
    let target_update = kind_ref(InputKind::Update, relation.target);
    let target_where = kind_ref(InputKind::Where, relation.target);

    let mut connect_or_create = Map::new();
    connect_or_create.insert("where".into(), target_unique.clone());
    connect_or_create.insert("create".into(), target_create.clone());
    let connect_or_create = strict_object_required(connect_or_create, &["where", "create"]);

    let mut upsert = Map::new();
    upsert.insert("create".into(), target_create.clone());
    upsert.insert("update".into(), target_update.clone());

    let mut props = Map::new();
    match relation.arity {
        RelationArity::ToOne { optional } => {
            props.insert("create".into(), target_create);
            props.insert("connect".into(), target_unique);
            props.insert("connectOrCreate".into(), connect_or_create);
            props.insert("update".into(), target_update);
            props.insert(
                "upsert".into(),
                strict_object_required(upsert, &["create", "update"]),
            );
            if optional {
                props.insert("disconnect".into(), json!({ "type": "boolean" }));
                props.insert("delete".into(), json!({ "type": "boolean" }));
            }
        }
        RelationArity::ToMany => {
            let mut keyed_upsert = upsert;
            keyed_upsert.insert("where".into(), target_unique.clone());
            let keyed_upsert =
                strict_object_required(keyed_upsert, &["where", "create", "update"]);

            let mut keyed_update = Map::new();
            keyed_update.insert("where".into(), target_unique.clone());
            keyed_update.insert("data".into(), target_update);
            let keyed_update = strict_object_required(keyed_update, &["where", "data"]);

            let mut update_many = Map::new();
            update_many.insert("where".into(), target_where.clone());
            update_many.insert(
                "data".into(),
                kind_ref(InputKind::UpdateMany, relation.target),
            );
            let update_many = strict_object_required(update_many, &["where", "data"]);

            let unique_list = json!({ "type": "array", "items": target_unique.clone() });
            props.insert("create".into(), one_or_many(&target_create));
            props.insert("connect".into(), one_or_many(&target_unique));
            props.insert("connectOrCreate".into(), one_or_many(&connect_or_create));
            props.insert("set".into(), unique_list.clone());
            props.insert("disconnect".into(), unique_list.clone());
            props.insert("delete".into(), unique_list);
            props.insert("update".into(), one_or_many(&keyed_update));
            props.insert("updateMany".into(), one_or_many(&update_many));
            props.insert("upsert".into(), one_or_many(&keyed_upsert));
            props.insert("deleteMany".into(), one_or_many(&target_where));
        }
    }
    let mut object = strict_object(props);
    object["minProperties"] = json!(1);
    object
}

/// Update input: every field optional, typed field-update operations per
/// scalar; checked updates additionally expose nested relation operations.
fn update(model: &ModelDescriptor, checked: bool) -> Value {
    let mut props = Map::new();
    for field in &model.fields {
        if checked && field.foreign_key {
            continue;
        }
        props.insert(
            field.name.into(),
            filters::update_ref(field.scalar, field.required),
        );
    }
    if checked {
        for relation in &model.relations {
            props.insert(relation.name.into(), update_relation_ops(relation));
        }
    }
    strict_object(props)
}

/// `{data: row | [rows], skipDuplicates?}` over unchecked-create rows.
fn create_many(model: &ModelDescriptor) -> Value {
    let row = kind_ref(InputKind::CreateUnchecked, model.name);
    let mut props = Map::new();
    props.insert("data".into(), one_or_many(&row));
    props.insert("skipDuplicates".into(), json!({ "type": "boolean" }));
    strict_object_required(props, &["data"])
}

/// Scalar-only update payload for updateMany (no FK scalars, no relations).
fn update_many(model: &ModelDescriptor) -> Value {
    let mut props = Map::new();
    for field in &model.fields {
        if field.foreign_key {
            continue;
        }
        props.insert(
            field.name.into(),
            filters::update_ref(field.scalar, field.required),
        );
    }
    strict_object(props)
}

/// Boolean-or-args value for one relation inside include/select.
fn relation_selection(relation: &RelationDescriptor) -> Value {
    let mut args = Map::new();
    args.insert(
        "include".into(),
        kind_ref(InputKind::Include, relation.target),
    );
    args.insert(
        "select".into(),
        kind_ref(InputKind::Select, relation.target),
    );
    if matches!(relation.arity, RelationArity::ToMany) {
        args.insert("where".into(), kind_ref(InputKind::Where, relation.target));
        args.insert(
            "orderBy".into(),
            one_or_many(&kind_ref(InputKind::OrderBy, relation.target)),
        );
        args.insert(
            "cursor".into(),
            kind_ref(InputKind::WhereUnique, relation.target),
        );
        args.insert("take".into(), json!({ "type": "integer" }));
        args.insert("skip".into(), json!({ "type": "integer" }));
    }
    json!({ "anyOf": [{ "type": "boolean" }, strict_object(args)] })
}

/// `_count` selector over the model's to-many relations.
fn count_selection(model: &ModelDescriptor) -> Option<Value> {
    let mut rels = Map::new();
    for relation in &model.relations {
        if matches!(relation.arity, RelationArity::ToMany) {
            rels.insert(relation.name.into(), json!({ "type": "boolean" }));
        }
    }
    if rels.is_empty() {
        return None;
    }
    let mut select = Map::new();
    select.insert("select".into(), strict_object(rels));
    Some(json!({ "anyOf": [{ "type": "boolean" }, strict_object(select)] }))
}

/// Relation include map: boolean or nested find-many arguments per relation.
fn include(model: &ModelDescriptor) -> Value {
    let mut props = Map::new();
    for relation in &model.relations {
        props.insert(relation.name.into(), relation_selection(relation));
    }
    if let Some(count) = count_selection(model) {
        props.insert("_count".into(), count);
    }
    strict_object(props)
}

/// Scalar-and-relation projection map.
fn select(model: &ModelDescriptor) -> Value {
    let mut props = Map::new();
    for field in &model.fields {
        props.insert(field.name.into(), json!({ "type": "boolean" }));
    }
    for relation in &model.relations {
        props.insert(relation.name.into(), relation_selection(relation));
    }
    if let Some(count) = count_selection(model) {
        props.insert("_count".into(), count);
    }
    strict_object(props)
}
