//! Declarative model descriptors.
//!
//! A [`ModelDescriptor`] is the single source of truth for one entity: its
//! scalar fields, its relations, and its unique keys. Every per-model input
//! schema (filters, ordering, mutations) is derived mechanically from these
//! descriptors; there is no hand-written per-entity schema code.

use serde::Serialize;

/// Scalar column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    String,
    Int,
    Float,
    Boolean,
    DateTime,
    Json,
    /// A named string enum with a closed literal set.
    Enum {
        name: &'static str,
        #[serde(skip)]
        values: &'static [&'static str],
    },
}

impl ScalarType {
    /// Whether the type supports ordered comparison operators (lt/lte/gt/gte).
    #[must_use]
    pub const fn is_comparable(self) -> bool {
        !matches!(self, Self::Boolean | Self::Json | Self::Enum { .. })
    }

    /// Whether the type supports text search operators (contains/startsWith/endsWith).
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::String)
    }

    /// Whether the type supports arithmetic update operators and `_avg`/`_sum`.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }

    /// Base name used to build shared `$defs` names (`string_filter`,
    /// `gender_update`, ...).
    #[must_use]
    pub const fn def_base(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Boolean => "bool",
            Self::DateTime => "date_time",
            Self::Json => "json",
            Self::Enum { name, .. } => name,
        }
    }
}

/// One scalar column of a model.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub scalar: ScalarType,
    /// Non-nullable column.
    pub required: bool,
    /// Part of the primary key.
    pub id: bool,
    /// Column has a database-side default and may be omitted on create
    /// (autoincrement ids, `now()` timestamps, `false` flags).
    pub has_default: bool,
    /// Foreign-key scalar; omitted from checked mutation inputs.
    pub foreign_key: bool,
}

impl FieldDescriptor {
    #[must_use]
    pub const fn new(name: &'static str, scalar: ScalarType) -> Self {
        Self {
            name,
            scalar,
            required: true,
            id: false,
            has_default: false,
            foreign_key: false,
        }
    }

    /// Autoincrement integer primary key.
    #[must_use]
    pub const fn id_auto(name: &'static str) -> Self {
        let mut field = Self::new(name, ScalarType::Int);
        field.id = true;
        field.has_default = true;
        field
    }

    /// String primary key supplied by the caller (no default).
    #[must_use]
    pub const fn id_string(name: &'static str) -> Self {
        let mut field = Self::new(name, ScalarType::String);
        field.id = true;
        field
    }

    /// Mark the column nullable.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Mark the column as having a database-side default.
    #[must_use]
    pub const fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    /// Mark the column as a foreign key.
    #[must_use]
    pub const fn fk(mut self) -> Self {
        self.foreign_key = true;
        self
    }
}

/// Cardinality of a relation as seen from the declaring model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationArity {
    ToOne { optional: bool },
    ToMany,
}

/// One relation of a model.
#[derive(Debug, Clone, Serialize)]
pub struct RelationDescriptor {
    pub name: &'static str,
    /// Catalog name of the target model.
    pub target: &'static str,
    pub arity: RelationArity,
    /// Foreign-key scalars on this model backing the relation (owning side of
    /// a to-one relation; empty otherwise).
    pub fk_fields: &'static [&'static str],
}

/// A uniqueness constraint. Single-field keys are addressed by the field name;
/// compound keys by their generated name (e.g. `email_hospital_id`).
#[derive(Debug, Clone, Serialize)]
pub struct UniqueKey {
    pub name: &'static str,
    pub fields: &'static [&'static str],
}

/// Complete declarative description of one model.
#[derive(Debug, Clone, Serialize)]
pub struct ModelDescriptor {
    /// Catalog name, snake_case (`patient_visit`).
    pub name: &'static str,
    pub fields: Vec<FieldDescriptor>,
    pub relations: Vec<RelationDescriptor>,
    pub uniques: Vec<UniqueKey>,
}

impl ModelDescriptor {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
            relations: Vec::new(),
            uniques: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Owning side of a required to-one relation backed by FK scalars.
    #[must_use]
    pub fn belongs_to(
        mut self,
        name: &'static str,
        target: &'static str,
        fk_fields: &'static [&'static str],
    ) -> Self {
        self.relations.push(RelationDescriptor {
            name,
            target,
            arity: RelationArity::ToOne { optional: false },
            fk_fields,
        });
        self
    }

    /// Inverse side of an optional 1:1 relation (no FK on this model).
    #[must_use]
    pub fn has_one(mut self, name: &'static str, target: &'static str) -> Self {
        self.relations.push(RelationDescriptor {
            name,
            target,
            arity: RelationArity::ToOne { optional: true },
            fk_fields: &[],
        });
        self
    }

    #[must_use]
    pub fn has_many(mut self, name: &'static str, target: &'static str) -> Self {
        self.relations.push(RelationDescriptor {
            name,
            target,
            arity: RelationArity::ToMany,
            fk_fields: &[],
        });
        self
    }

    #[must_use]
    pub fn unique(mut self, name: &'static str, fields: &'static [&'static str]) -> Self {
        self.uniques.push(UniqueKey { name, fields });
        self
    }

    #[must_use]
    pub fn field_named(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn relation_named(&self, name: &str) -> Option<&RelationDescriptor> {
        self.relations.iter().find(|r| r.name == name)
    }

    /// Scalar fields that participate in arithmetic aggregates.
    pub fn numeric_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.scalar.is_numeric())
    }
}
