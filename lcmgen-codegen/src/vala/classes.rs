//! Class (one file per struct) code generation.

use crate::error::CodegenError;
use crate::vala::comments::{AUTO_GENERATED_WARNING, emit_comment};
use crate::vala::hash::HashGenerator;
use crate::vala::members::MemberGenerator;
use lcmgen_schema::ir::SchemaIr;
use lcmgen_schema::structs::StructDef;

/// Generator for complete Vala class files.
pub struct ClassGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> ClassGenerator<'a> {
    /// Creates a new class generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates the full text of the file for one struct.
    ///
    /// Sections are written in a fixed order: warning header, class
    /// opening, data members, constants, `encode()`, the `hash` property,
    /// `_compute_hash`, class closing.
    ///
    /// # Errors
    /// Returns `CodegenError` if a constant has an illegal type or a member
    /// references a struct missing from the IR.
    pub fn generate_struct(&self, def: &StructDef) -> Result<String, CodegenError> {
        let members = MemberGenerator::new(def);
        let hash = HashGenerator::new(self.ir, def);
        let mut output = String::new();

        output.push_str(AUTO_GENERATED_WARNING);
        emit_comment(&mut output, 0, def.comment.as_deref());
        output.push_str(&format!("public class {} : Lcm.IMessage {{\n", def.name));

        output.push_str(&members.generate_data_members());
        output.push_str(&members.generate_constants()?);

        output.push_str(&hash.generate_encode());
        output.push_str(&hash.generate_hash_property());
        output.push_str(&hash.generate_compute_hash()?);

        output.push_str("}\n");

        Ok(output)
    }

    /// Generates every struct in IR order, paired with its name.
    ///
    /// # Errors
    /// Returns the first `CodegenError` raised by [`Self::generate_struct`].
    pub fn generate(&self) -> Result<Vec<(&'a str, String)>, CodegenError> {
        self.ir
            .structs()
            .iter()
            .map(|def| Ok((def.name.as_str(), self.generate_struct(def)?)))
            .collect()
    }
}
