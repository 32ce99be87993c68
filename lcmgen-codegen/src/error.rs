//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// IR document loading error.
    #[error("IR parse error: {0}")]
    Parse(#[from] lcmgen_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] lcmgen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output file could not be opened for writing. Aborts the whole run.
    #[error("couldn't open '{}' for writing: {source}", path.display())]
    OpenOutput {
        /// Output path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Constant declared with a type that cannot hold a literal.
    #[error("constant '{constant}' has illegal type '{type_name}'")]
    IllegalConstantType {
        /// Constant name, as `Struct.CONSTANT`.
        constant: String,
        /// Declared type name.
        type_name: String,
    },

    /// Unknown type reference.
    #[error("unknown type '{type_name}' in field '{field}'")]
    UnknownType {
        /// Type name.
        type_name: String,
        /// Field name, as `Struct.member`.
        field: String,
    },
}

impl CodegenError {
    /// Creates an output-open error for `path`.
    pub fn open_output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OpenOutput {
            path: path.into(),
            source,
        }
    }
}
