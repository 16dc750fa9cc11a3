//! # mrd-core
//!
//! Core types, domain enums, and error types for Meridian.
//!
//! This crate provides the foundational types shared across all Meridian crates:
//! - Entity structs for all domain objects (hospitals, users, patients, etc.)
//! - Domain and query-side enums
//! - JSON-null sentinel handling for nullable JSON columns
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod json_null;
