//! Data member and constant declarations.

use crate::error::CodegenError;
use crate::vala::comments::emit_comment;
use crate::vala::types::{make_dynarray_type, map_type_name};
use lcmgen_schema::structs::{ConstantDef, MemberDef, StructDef};

/// Generator for the field and constant sections of a class.
pub struct MemberGenerator<'a> {
    def: &'a StructDef,
}

impl<'a> MemberGenerator<'a> {
    /// Creates a new member generator.
    #[must_use]
    pub fn new(def: &'a StructDef) -> Self {
        Self { def }
    }

    /// Generates the data member section.
    #[must_use]
    pub fn generate_data_members(&self) -> String {
        let mut output = String::new();

        if self.def.members.is_empty() {
            output.push_str("    // no data members\n\n");
            return output;
        }

        output.push_str("    // data members @{\n");
        for member in &self.def.members {
            emit_comment(&mut output, 1, member.comment.as_deref());
            output.push_str(&generate_member_declaration(member));
        }
        output.push_str("    // @}\n\n");

        output
    }

    /// Generates the constant section. Empty when the struct declares no
    /// constants.
    ///
    /// # Errors
    /// Returns `CodegenError::IllegalConstantType` if a constant is declared
    /// with a type that cannot hold a literal.
    pub fn generate_constants(&self) -> Result<String, CodegenError> {
        let mut output = String::new();

        if self.def.constants.is_empty() {
            return Ok(output);
        }

        output.push_str("    // constants @{\n");
        for constant in &self.def.constants {
            emit_comment(&mut output, 1, constant.comment.as_deref());
            output.push_str(&self.generate_constant_declaration(constant)?);
        }
        output.push_str("    // @}\n\n");

        Ok(output)
    }

    /// Generates one `public const` line.
    fn generate_constant_declaration(&self, constant: &ConstantDef) -> Result<String, CodegenError> {
        if !constant.type_ref.is_legal_const_type() {
            return Err(CodegenError::IllegalConstantType {
                constant: format!("{}.{}", self.def.name, constant.name),
                type_name: constant.type_ref.name().to_string(),
            });
        }

        let vala_type = map_type_name(constant.type_ref.name());
        Ok(format!(
            "    public const {:<10} {} = ({}) {};\n",
            vala_type, constant.name, vala_type, constant.value
        ))
    }
}

/// Generates the declaration line of one member.
///
/// Scalars are declared as-is. Arrays whose dimensions are all literal keep
/// the sizes in the declaration (`name[3, 4]`); any variable dimension makes
/// the whole member a dynamic array whose type carries the dimension count.
#[must_use]
pub fn generate_member_declaration(member: &MemberDef) -> String {
    let vala_type = map_type_name(member.type_ref.name());

    if member.ndim() == 0 {
        return format!("    public {:<10} {};\n", vala_type, member.name);
    }

    if member.is_constant_size() {
        let sizes: Vec<&str> = member.dimensions.iter().map(|d| d.size.as_str()).collect();
        return format!(
            "    public {:<10} {}[{}];\n",
            vala_type,
            member.name,
            sizes.join(", ")
        );
    }

    format!(
        "    public {:<10} {};\n",
        make_dynarray_type(vala_type, member.ndim()),
        member.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lcmgen_schema::types::{DimensionDef, PrimitiveType, TypeRef};

    #[test]
    fn test_no_data_members() {
        let def = StructDef::new("Empty");
        let output = MemberGenerator::new(&def).generate_data_members();
        assert_eq!(output, "    // no data members\n\n");

        let comment_lines = output.lines().filter(|l| l.trim_start().starts_with("//")).count();
        let field_lines = output.lines().filter(|l| l.contains("public")).count();
        assert_eq!(comment_lines, 1);
        assert_eq!(field_lines, 0);
    }

    #[test]
    fn test_scalar_members() {
        let mut def = StructDef::new("Point");
        def.add_member(MemberDef::new("x", PrimitiveType::Double));
        def.add_member(MemberDef::new("valid", PrimitiveType::Boolean).with_comment("set when fixed"));
        let output = MemberGenerator::new(&def).generate_data_members();

        assert_eq!(
            output,
            "    // data members @{\n\
             \x20   public double     x;\n\
             \x20   //! set when fixed\n\
             \x20   public bool       valid;\n\
             \x20   // @}\n\n"
        );
    }

    #[test]
    fn test_constant_size_array() {
        let member = MemberDef::new("cov", PrimitiveType::Double)
            .with_dimension(DimensionDef::constant(3))
            .with_dimension(DimensionDef::constant(4));
        let line = generate_member_declaration(&member);
        assert_eq!(line, "    public double     cov[3, 4];\n");
        assert!(line.contains("[3, 4]"));
    }

    #[test]
    fn test_variable_size_arrays() {
        for (ndim, expected) in [(1, "int32[]"), (2, "int32[,]"), (3, "int32[,,]")] {
            let mut member = MemberDef::new("data", PrimitiveType::Int32);
            for d in 0..ndim {
                let dim = if d == 0 {
                    DimensionDef::variable("n")
                } else {
                    DimensionDef::constant(2)
                };
                member = member.with_dimension(dim);
            }
            let line = generate_member_declaration(&member);
            assert_eq!(line, format!("    public {:<10} data;\n", expected));
            assert_eq!(line.matches(',').count(), ndim - 1);
        }
    }

    #[test]
    fn test_struct_typed_member() {
        let member = MemberDef::new("points", TypeRef::Struct("Point".to_string()))
            .with_dimension(DimensionDef::variable("num_points"));
        assert_eq!(
            generate_member_declaration(&member),
            "    public Point[]    points;\n"
        );
    }

    #[test]
    fn test_wide_type_not_truncated() {
        let member = MemberDef::new("pose", TypeRef::Struct("geometry.PoseWithCovariance".to_string()));
        assert_eq!(
            generate_member_declaration(&member),
            "    public geometry.PoseWithCovariance pose;\n"
        );
    }

    #[test]
    fn test_no_constants_emits_nothing() {
        let def = StructDef::new("Empty");
        assert_eq!(MemberGenerator::new(&def).generate_constants().expect("constants"), "");
    }

    #[test]
    fn test_constants() {
        let mut def = StructDef::new("Limits");
        def.add_constant(ConstantDef::new("MAX", PrimitiveType::Int64, "9000000000").with_comment("hard cap"));
        def.add_constant(ConstantDef::new("SCALE", PrimitiveType::Float, "1.5"));
        let output = MemberGenerator::new(&def).generate_constants().expect("constants");

        assert_eq!(
            output,
            "    // constants @{\n\
             \x20   //! hard cap\n\
             \x20   public const int64      MAX = (int64) 9000000000;\n\
             \x20   public const float      SCALE = (float) 1.5;\n\
             \x20   // @}\n\n"
        );
    }

    #[test]
    fn test_illegal_constant_type() {
        let mut def = StructDef::new("Bad");
        def.add_constant(ConstantDef::new("ORIGIN", TypeRef::Struct("Point".to_string()), "0"));
        let result = MemberGenerator::new(&def).generate_constants();
        assert!(matches!(
            result,
            Err(CodegenError::IllegalConstantType { constant, .. }) if constant == "Bad.ORIGIN"
        ));
    }
}
