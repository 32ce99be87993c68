//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use lcmgen::prelude::*;
//! ```

// Schema types
pub use lcmgen_schema::{
    ConstantDef, DimensionDef, DimensionMode, MemberDef, ParseError, PrimitiveType, SchemaError,
    SchemaIr, StructDef, TypeRef, validate_schema,
};

// Code generation
pub use lcmgen_codegen::vala::{ClassGenerator, map_type_name};
pub use lcmgen_codegen::{
    Always, CodegenError, GenerationReport, Generator, Lazy, RegenerationGate, ValaOptions,
    generate_from_file, generate_from_json, generate_vala,
};
