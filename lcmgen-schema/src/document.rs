//! JSON IR documents.
//!
//! The lexer/parser front end hands its output to the backends as a JSON
//! document:
//!
//! ```json
//! {
//!   "structs": [
//!     {
//!       "name": "Path",
//!       "source_file": "path.lcm",
//!       "base_hash": "0x1122334455667788",
//!       "comment": "A polyline.",
//!       "members": [
//!         { "name": "num_points", "type": "int32_t" },
//!         { "name": "points", "type": "Point", "dimensions": ["num_points"] }
//!       ],
//!       "constants": [
//!         { "name": "MAX_POINTS", "type": "int32_t", "value": "1024" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! `base_hash` is optional (number or `0x` hex string); when absent it is
//! computed from the members. A dimension that is an integer literal is
//! constant-size, any other dimension names the member holding its size.

use crate::error::ParseError;
use crate::ir::SchemaIr;
use crate::structs::{ConstantDef, MemberDef, StructDef};
use crate::types::{DimensionDef, DimensionMode, TypeRef};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDocument {
    structs: Vec<RawStruct>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStruct {
    name: String,
    #[serde(default)]
    source_file: PathBuf,
    #[serde(default)]
    base_hash: Option<RawHash>,
    #[serde(default)]
    comment: Option<String>,
    #[serde(default)]
    members: Vec<RawMember>,
    #[serde(default)]
    constants: Vec<RawConstant>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawHash {
    Number(u64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMember {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    dimensions: Vec<String>,
    #[serde(default)]
    comment: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConstant {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    value: String,
    #[serde(default)]
    comment: Option<String>,
}

impl SchemaIr {
    /// Loads an IR from a JSON document.
    ///
    /// # Errors
    /// Returns `ParseError` if the document is malformed, a hash value is
    /// not a valid 64-bit number, or two structs share a name.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        Self::from_document(json, None)
    }

    /// Loads an IR from a JSON document on disk.
    ///
    /// Structs that do not name a `source_file` are attributed to `path`.
    ///
    /// # Errors
    /// Returns `ParseError` if the file cannot be read or parsed.
    pub fn from_json_file(path: &Path) -> Result<Self, ParseError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_document(&json, Some(path))
    }

    fn from_document(json: &str, default_source: Option<&Path>) -> Result<Self, ParseError> {
        let doc: RawDocument = serde_json::from_str(json)?;
        let mut ir = Self::new();
        for mut raw in doc.structs {
            if raw.source_file.as_os_str().is_empty() {
                if let Some(path) = default_source {
                    raw.source_file = path.to_path_buf();
                }
            }
            ir.add_struct(raw.into_struct_def()?)?;
        }
        Ok(ir)
    }
}

impl RawStruct {
    fn into_struct_def(self) -> Result<StructDef, ParseError> {
        let base_hash = self
            .base_hash
            .map(|h| parse_hash(&self.name, h))
            .transpose()?;

        let mut def = StructDef::new(self.name).with_source_file(self.source_file);
        def.comment = self.comment;
        def.members = self.members.into_iter().map(RawMember::into_member_def).collect();
        def.constants = self
            .constants
            .into_iter()
            .map(|c| ConstantDef {
                name: c.name,
                type_ref: TypeRef::from_name(&c.type_name),
                value: c.value,
                comment: c.comment,
            })
            .collect();

        match base_hash {
            Some(hash) => def.base_hash = hash,
            None => def.recompute_base_hash(),
        }

        Ok(def)
    }
}

impl RawMember {
    fn into_member_def(self) -> MemberDef {
        MemberDef {
            name: self.name,
            type_ref: TypeRef::from_name(&self.type_name),
            dimensions: self
                .dimensions
                .into_iter()
                .map(|size| {
                    let mode = if !size.is_empty() && size.bytes().all(|b| b.is_ascii_digit()) {
                        DimensionMode::Constant
                    } else {
                        DimensionMode::Variable
                    };
                    DimensionDef { mode, size }
                })
                .collect(),
            comment: self.comment,
        }
    }
}

fn parse_hash(struct_name: &str, raw: RawHash) -> Result<u64, ParseError> {
    match raw {
        RawHash::Number(n) => Ok(n),
        RawHash::Text(text) => {
            let digits = text
                .strip_prefix("0x")
                .or_else(|| text.strip_prefix("0X"))
                .unwrap_or(&text);
            u64::from_str_radix(digits, 16)
                .map_err(|_| ParseError::invalid_value(struct_name, "base_hash", &text))
        }
    }
}
