//! # mrd-schema
//!
//! JSON Schema generation, validation, and registry for Meridian.
//!
//! This crate provides:
//! - `SchemaRegistry`: central store of all JSON Schemas in the system
//! - A declarative model catalog describing every entity's fields, relations,
//!   and unique keys
//! - Mechanically generated query/mutation input schemas (filters, ordering,
//!   creates, updates, projections) for every catalog model
//!
//! ## Architecture
//!
//! Entity types are defined in `mrd-core` with `#[derive(JsonSchema)]` and
//! registered under their model name. Everything else is data-driven: the
//! catalog in [`catalog`] feeds the input-schema generators, which emit a
//! shared `$defs` bundle; the registry wraps each def into a self-contained
//! document keyed `"{model}.{kind}"`. Consumer crates
//! (mrd-cli) depend on mrd-schema for runtime validation and export.

pub mod catalog;
pub mod descriptor;
pub mod error;
mod filters;
pub mod inputs;
pub mod registry;

pub use descriptor::{
    FieldDescriptor, ModelDescriptor, RelationArity, RelationDescriptor, ScalarType, UniqueKey,
};
pub use error::SchemaError;
pub use inputs::InputKind;
pub use registry::SchemaRegistry;
