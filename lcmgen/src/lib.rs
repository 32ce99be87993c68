//! # lcmgen
//!
//! Vala backend of the LCM (Lightweight Communications and Marshalling)
//! schema compiler.
//!
//! Given an already-parsed, already-validated schema IR, it emits one Vala
//! class per struct declaring its fields and constants, the `encode()`
//! entry point, and a structural type fingerprint that every LCM backend
//! computes identically.
//!
//! ## Quick Start
//!
//! ```ignore
//! use lcmgen::prelude::*;
//!
//! let ir = SchemaIr::from_json_file(Path::new("schema.json"))?;
//! let report = generate_vala(&ir, &ValaOptions::new().output_dir("gen").lazy(true))?;
//! println!("{} written, {} up to date", report.written.len(), report.skipped.len());
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema IR, base hash, fingerprint and validation
//! - [`codegen`] - Vala code generation and the generation driver

pub mod prelude;

/// Schema IR, hashing and validation.
pub mod schema {
    pub use lcmgen_schema::*;
}

/// Vala code generation.
pub mod codegen {
    pub use lcmgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use lcmgen_codegen::{
    CodegenError, GenerationReport, Generator, ValaOptions, generate_from_file, generate_vala,
};
pub use lcmgen_schema::{SchemaIr, StructDef, validate_schema};
