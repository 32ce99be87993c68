//! Struct definitions for LCM schemas.
//!
//! This module contains the data structures representing schema structs
//! including their members, array dimensions, and named constants.

use crate::types::{DimensionDef, TypeRef};
use std::path::PathBuf;

/// Struct (message type) definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDef {
    /// Struct type name. Unique within a schema run.
    pub name: String,
    /// Schema file that declares this struct.
    pub source_file: PathBuf,
    /// Members in declaration order.
    pub members: Vec<MemberDef>,
    /// Named constants in declaration order.
    pub constants: Vec<ConstantDef>,
    /// Hash of the struct's own shape, excluding nested struct contents.
    pub base_hash: u64,
    /// Free-text comment attached to the struct.
    pub comment: Option<String>,
}

impl StructDef {
    /// Creates a new empty struct definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let mut def = Self {
            name: name.into(),
            source_file: PathBuf::new(),
            members: Vec::new(),
            constants: Vec::new(),
            base_hash: 0,
            comment: None,
        };
        def.recompute_base_hash();
        def
    }

    /// Adds a member and refreshes the base hash.
    pub fn add_member(&mut self, member: MemberDef) {
        self.members.push(member);
        self.recompute_base_hash();
    }

    /// Adds a named constant. Constants do not take part in the hash.
    pub fn add_constant(&mut self, constant: ConstantDef) {
        self.constants.push(constant);
    }

    /// Sets the struct comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Sets the declaring schema file.
    #[must_use]
    pub fn with_source_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_file = path.into();
        self
    }

    /// Overrides the base hash with a value computed elsewhere.
    #[must_use]
    pub fn with_base_hash(mut self, hash: u64) -> Self {
        self.base_hash = hash;
        self
    }

    /// Recomputes the base hash from the current members.
    pub fn recompute_base_hash(&mut self) {
        self.base_hash = crate::hash::compute_base_hash(self);
    }

    /// Returns the index of the last member whose type is another struct.
    #[must_use]
    pub fn last_complex_member(&self) -> Option<usize> {
        self.members.iter().rposition(MemberDef::is_complex)
    }

    /// Iterates over the members that reference other structs.
    pub fn complex_members(&self) -> impl Iterator<Item = &MemberDef> {
        self.members.iter().filter(|m| m.is_complex())
    }

    /// Looks up a member by name.
    #[must_use]
    pub fn get_member(&self, name: &str) -> Option<&MemberDef> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// Member (field) definition within a struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDef {
    /// Member name.
    pub name: String,
    /// Member type.
    pub type_ref: TypeRef,
    /// Array dimensions, outermost first. Empty for a scalar.
    pub dimensions: Vec<DimensionDef>,
    /// Free-text comment.
    pub comment: Option<String>,
}

impl MemberDef {
    /// Creates a new scalar member.
    #[must_use]
    pub fn new(name: impl Into<String>, type_ref: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            type_ref: type_ref.into(),
            dimensions: Vec::new(),
            comment: None,
        }
    }

    /// Appends an array dimension.
    #[must_use]
    pub fn with_dimension(mut self, dim: DimensionDef) -> Self {
        self.dimensions.push(dim);
        self
    }

    /// Sets the member comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Number of array dimensions (0 for a scalar).
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.dimensions.len()
    }

    /// Returns true if every dimension is a literal size.
    #[must_use]
    pub fn is_constant_size(&self) -> bool {
        self.dimensions.iter().all(DimensionDef::is_constant)
    }

    /// Returns true if the member's type is another struct.
    #[must_use]
    pub fn is_complex(&self) -> bool {
        !self.type_ref.is_primitive()
    }
}

/// Named constant definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantDef {
    /// Constant name.
    pub name: String,
    /// Declared type.
    pub type_ref: TypeRef,
    /// Literal value exactly as written in the schema.
    pub value: String,
    /// Free-text comment.
    pub comment: Option<String>,
}

impl ConstantDef {
    /// Creates a new constant definition.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        type_ref: impl Into<TypeRef>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_ref: type_ref.into(),
            value: value.into(),
            comment: None,
        }
    }

    /// Sets the constant comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
