//! Schema type references.
//!
//! This module contains the primitive type table of the schema language and
//! the reference/dimension descriptors used by struct members.

use std::fmt;

/// LCM primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// Raw byte.
    Byte,
    /// Boolean.
    Boolean,
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// Length-prefixed UTF-8 string.
    String,
}

impl PrimitiveType {
    /// All primitive types, in schema declaration order.
    pub const ALL: [Self; 9] = [
        Self::Byte,
        Self::Boolean,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Float,
        Self::Double,
        Self::String,
    ];

    /// Returns the schema type name.
    #[must_use]
    pub const fn schema_name(&self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Boolean => "boolean",
            Self::Int8 => "int8_t",
            Self::Int16 => "int16_t",
            Self::Int32 => "int32_t",
            Self::Int64 => "int64_t",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
        }
    }

    /// Parses a primitive type from its schema name.
    #[must_use]
    pub fn from_schema_name(name: &str) -> Option<Self> {
        match name {
            "byte" => Some(Self::Byte),
            "boolean" => Some(Self::Boolean),
            "int8_t" => Some(Self::Int8),
            "int16_t" => Some(Self::Int16),
            "int32_t" => Some(Self::Int32),
            "int64_t" => Some(Self::Int64),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "string" => Some(Self::String),
            _ => None,
        }
    }

    /// Returns true for the integer types usable as array sizes.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Byte | Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64
        )
    }

    /// Returns true if a schema constant may be declared with this type.
    #[must_use]
    pub const fn is_legal_const_type(&self) -> bool {
        match self {
            Self::Byte
            | Self::Boolean
            | Self::Int8
            | Self::Int16
            | Self::Int32
            | Self::Int64
            | Self::Float
            | Self::Double
            | Self::String => true,
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema_name())
    }
}

/// Reference to a member or constant type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// One of the built-in primitives.
    Primitive(PrimitiveType),
    /// Another struct in the same schema run (possibly the referencing
    /// struct itself).
    Struct(String),
}

impl TypeRef {
    /// Resolves a schema type name. Known primitive names become
    /// primitives, every other name is a struct reference.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        PrimitiveType::from_schema_name(name)
            .map_or_else(|| Self::Struct(name.to_string()), Self::Primitive)
    }

    /// Returns the schema type name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Primitive(p) => p.schema_name(),
            Self::Struct(name) => name,
        }
    }

    /// Returns true if this references a primitive type.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Returns the primitive type, if any.
    #[must_use]
    pub const fn primitive(&self) -> Option<PrimitiveType> {
        match self {
            Self::Primitive(p) => Some(*p),
            Self::Struct(_) => None,
        }
    }

    /// Returns the referenced struct name, if any.
    #[must_use]
    pub fn struct_name(&self) -> Option<&str> {
        match self {
            Self::Primitive(_) => None,
            Self::Struct(name) => Some(name),
        }
    }

    /// Returns true if a schema constant may be declared with this type.
    #[must_use]
    pub const fn is_legal_const_type(&self) -> bool {
        match self {
            Self::Primitive(p) => p.is_legal_const_type(),
            Self::Struct(_) => false,
        }
    }
}

impl From<PrimitiveType> for TypeRef {
    fn from(prim: PrimitiveType) -> Self {
        Self::Primitive(prim)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How an array dimension is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DimensionMode {
    /// Literal integer known when the schema is compiled.
    #[default]
    Constant,
    /// Sized at runtime by another member of the struct.
    Variable,
}

impl DimensionMode {
    /// Numeric tag mixed into the struct hash.
    #[must_use]
    pub const fn tag(&self) -> u8 {
        match self {
            Self::Constant => 0,
            Self::Variable => 1,
        }
    }
}

/// One array dimension of a member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DimensionDef {
    /// Sizing mode.
    pub mode: DimensionMode,
    /// Size as written in the schema: a literal integer for constant
    /// dimensions, a member name for variable ones.
    pub size: String,
}

impl DimensionDef {
    /// Creates a constant-size dimension.
    #[must_use]
    pub fn constant(size: usize) -> Self {
        Self {
            mode: DimensionMode::Constant,
            size: size.to_string(),
        }
    }

    /// Creates a dimension sized by the named member.
    #[must_use]
    pub fn variable(member: impl Into<String>) -> Self {
        Self {
            mode: DimensionMode::Variable,
            size: member.into(),
        }
    }

    /// Returns true for a constant-size dimension.
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        matches!(self.mode, DimensionMode::Constant)
    }
}
