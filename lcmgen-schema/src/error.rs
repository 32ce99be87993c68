//! Error types for IR loading and validation.

use thiserror::Error;

/// Error type for IR document loading.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Malformed JSON document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid value in a well-formed document.
    #[error("invalid value '{value}' for '{field}' in struct '{struct_name}'")]
    InvalidValue {
        /// Struct being loaded.
        struct_name: String,
        /// Offending field.
        field: String,
        /// Invalid value.
        value: String,
    },

    /// Schema error raised while assembling the IR.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Struct not found.
    #[error("struct '{name}' not found (referenced by '{referenced_by}')")]
    StructNotFound {
        /// Missing struct name.
        name: String,
        /// Member that references it, as `Struct.member`.
        referenced_by: String,
    },

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (struct, member, constant).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Constant declared with a type that cannot hold a literal.
    #[error("constant '{constant}' has illegal type '{type_name}'")]
    IllegalConstantType {
        /// Constant name, as `Struct.CONSTANT`.
        constant: String,
        /// Declared type name.
        type_name: String,
    },

    /// Array dimension that cannot be resolved.
    #[error("invalid dimension '{size}' on member '{member}': {reason}")]
    InvalidDimension {
        /// Member name, as `Struct.member`.
        member: String,
        /// Dimension size text.
        size: String,
        /// Why the dimension is invalid.
        reason: String,
    },
}

impl ParseError {
    /// Creates an invalid value error.
    pub fn invalid_value(
        struct_name: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            struct_name: struct_name.into(),
            field: field.into(),
            value: value.into(),
        }
    }
}

impl SchemaError {
    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates an invalid dimension error.
    pub fn invalid_dimension(
        member: impl Into<String>,
        size: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidDimension {
            member: member.into(),
            size: size.into(),
            reason: reason.into(),
        }
    }
}
