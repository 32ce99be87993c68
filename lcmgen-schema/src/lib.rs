//! # LCM Schema
//!
//! Intermediate representation of parsed LCM message schemas.
//!
//! This crate provides:
//! - Struct, member, dimension and constant definitions
//! - The base hash and structural fingerprint routines every backend agrees on
//! - IR validation
//! - IR loading from JSON documents

pub mod document;
pub mod error;
pub mod hash;
pub mod ir;
pub mod structs;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use hash::{compute_base_hash, rotate_fingerprint};
pub use ir::SchemaIr;
pub use structs::{ConstantDef, MemberDef, StructDef};
pub use types::{DimensionDef, DimensionMode, PrimitiveType, TypeRef};
pub use validation::validate_schema;
