//! Encode entry point and structural hash generation.
//!
//! The emitted `_compute_hash` mirrors [`SchemaIr::fingerprint`]: the base
//! hash plus the fingerprint of every struct-typed member, rotated left by
//! one bit. Recursion is cut by a list of the class types currently being
//! hashed, keyed on `typeof(...)` so that each class guards only itself.

use crate::error::CodegenError;
use lcmgen_schema::ir::SchemaIr;
use lcmgen_schema::structs::StructDef;

/// Generator for the encode entry point and hash members of a class.
pub struct HashGenerator<'a> {
    ir: &'a SchemaIr,
    def: &'a StructDef,
}

impl<'a> HashGenerator<'a> {
    /// Creates a new hash generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, def: &'a StructDef) -> Self {
        Self { ir, def }
    }

    /// Generates `encode()`: an 8-byte hash prefix followed by the no-hash
    /// body. `_encoded_size_no_hash` and `_encode_no_hash` are not generated
    /// here.
    #[must_use]
    pub fn generate_encode(&self) -> String {
        let mut output = String::new();

        output.push_str("    public void[] encode() throws Lcm.MessageError {\n");
        output.push_str("        Posix.off_t pos = 0;\n");
        output.push_str("        int64 hash_ = this.hash;\n");
        output.push_str("        var buf = new void[this._encoded_size_no_hash + 8];\n");
        output.push('\n');
        output.push_str("        pos += Lcm.CoreTypes.int64_encode_array(buf, pos, &hash_, 1);\n");
        output.push_str("        this._encode_no_hash(buf, pos);\n");
        output.push('\n');
        output.push_str("        return buf;\n");
        output.push_str("    }\n\n");

        output
    }

    /// Generates the read-only `hash` property and its lazily computed
    /// static backing field.
    #[must_use]
    pub fn generate_hash_property(&self) -> String {
        let mut output = String::new();

        output.push_str("    private static int64 _hash = _compute_hash(null);\n");
        output.push_str("    public int64 hash {\n");
        output.push_str("        get { return _hash; }\n");
        output.push_str("    }\n\n");

        output
    }

    /// Generates the static `_compute_hash` function.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownType` if a struct-typed member names a
    /// struct that is not in the IR.
    pub fn generate_compute_hash(&self) -> Result<String, CodegenError> {
        let mut output = String::new();
        let name = &self.def.name;

        output.push_str("    public static int64 _compute_hash(GLib.Type[]? parents) {\n");
        output.push_str(&format!("        if (typeof({}) in parents)\n", name));
        output.push_str("            return 0;\n");
        output.push('\n');

        match self.def.last_complex_member() {
            Some(last) => {
                output.push_str("        GLib.Type[] cp = parents;\n");
                output.push_str(&format!("        cp += typeof({});\n", name));
                output.push('\n');
                output.push_str(&format!(
                    "        int64 hash_ = 0x{:016x} +\n",
                    self.def.base_hash
                ));

                for (index, member) in self.def.members.iter().enumerate().take(last + 1) {
                    let Some(nested) = member.type_ref.struct_name() else {
                        continue;
                    };
                    if !self.ir.has_struct(nested) {
                        return Err(CodegenError::UnknownType {
                            type_name: nested.to_string(),
                            field: format!("{}.{}", name, member.name),
                        });
                    }
                    let separator = if index == last { ";" } else { " +" };
                    output.push_str(&format!(
                        "             {}._compute_hash(cp){}\n",
                        nested, separator
                    ));
                }
            }
            None => {
                output.push_str(&format!(
                    "        int64 hash_ = 0x{:016x};\n",
                    self.def.base_hash
                ));
            }
        }

        output.push('\n');
        output.push_str("        return (hash_ << 1) + ((hash_ >> 63) & 1);\n");
        output.push_str("    }\n");

        Ok(output)
    }
}
