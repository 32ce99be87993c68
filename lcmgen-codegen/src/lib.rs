//! # LCM Codegen
//!
//! Vala backend of the LCM schema compiler.
//!
//! This crate provides:
//! - One Vala class per schema struct: fields, constants, `encode()` entry
//!   point, `hash` property and structural `_compute_hash`
//! - Incremental regeneration gated on schema timestamps
//! - A generation driver writing one `.vala` file per struct
//!
//! The no-hash encode/decode bodies (`_encode_no_hash`, `_decode_no_hash`,
//! `_encoded_size_no_hash`) are referenced by the generated code but not
//! generated.

pub mod error;
pub mod gate;
pub mod generator;
pub mod options;
pub mod vala;

pub use error::CodegenError;
pub use gate::{Always, Lazy, RegenerationGate};
pub use generator::{GenerationReport, Generator};
pub use options::ValaOptions;

use lcmgen_schema::{SchemaIr, validate_schema};

/// Validates an IR and generates its Vala files.
///
/// # Arguments
/// * `ir` - Schema IR
/// * `options` - Output directory and laziness
///
/// # Returns
/// The files written and skipped.
///
/// # Errors
/// Returns `CodegenError` if validation, rendering, or writing fails.
pub fn generate_vala(ir: &SchemaIr, options: &ValaOptions) -> Result<GenerationReport, CodegenError> {
    validate_schema(ir)?;
    Generator::new(ir, options.clone()).run()
}

/// Generates Vala files from a JSON IR document.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation, or generation fails.
pub fn generate_from_json(json: &str, options: &ValaOptions) -> Result<GenerationReport, CodegenError> {
    let ir = SchemaIr::from_json(json)?;
    generate_vala(&ir, options)
}

/// Generates Vala files from a JSON IR document on disk.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation, or generation
/// fails.
pub fn generate_from_file(
    path: &std::path::Path,
    options: &ValaOptions,
) -> Result<GenerationReport, CodegenError> {
    let ir = SchemaIr::from_json_file(path)?;
    generate_vala(&ir, options)
}
