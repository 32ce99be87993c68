//! Schema validation utilities.
//!
//! Code generators assume a validated IR: every struct reference resolves,
//! constants carry legal types, and every array dimension can be sized.

use crate::error::SchemaError;
use crate::ir::SchemaIr;
use crate::structs::{MemberDef, StructDef};
use crate::types::DimensionMode;
use std::collections::HashSet;

/// Validates an IR for correctness.
///
/// # Arguments
/// * `ir` - The IR to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue found.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_schema(ir: &SchemaIr) -> Result<(), SchemaError> {
    for def in ir.structs() {
        validate_struct(ir, def)?;
    }
    Ok(())
}

/// Validates one struct definition.
fn validate_struct(ir: &SchemaIr, def: &StructDef) -> Result<(), SchemaError> {
    let mut seen_names = HashSet::new();

    for (index, member) in def.members.iter().enumerate() {
        if !seen_names.insert(member.name.as_str()) {
            return Err(SchemaError::duplicate(
                "member",
                format!("{}.{}", def.name, member.name),
            ));
        }

        if let Some(nested) = member.type_ref.struct_name() {
            if !ir.has_struct(nested) {
                return Err(SchemaError::StructNotFound {
                    name: nested.to_string(),
                    referenced_by: format!("{}.{}", def.name, member.name),
                });
            }
        }

        validate_dimensions(def, index, member)?;
    }

    for constant in &def.constants {
        if !seen_names.insert(constant.name.as_str()) {
            return Err(SchemaError::duplicate(
                "constant",
                format!("{}.{}", def.name, constant.name),
            ));
        }

        if !constant.type_ref.is_legal_const_type() {
            return Err(SchemaError::IllegalConstantType {
                constant: format!("{}.{}", def.name, constant.name),
                type_name: constant.type_ref.name().to_string(),
            });
        }
    }

    Ok(())
}

/// Validates the dimensions of the member at `index`.
///
/// A constant dimension must be a non-negative integer literal. A variable
/// dimension must name an integer scalar declared earlier in the struct.
fn validate_dimensions(def: &StructDef, index: usize, member: &MemberDef) -> Result<(), SchemaError> {
    let qualified = || format!("{}.{}", def.name, member.name);

    for dim in &member.dimensions {
        match dim.mode {
            DimensionMode::Constant => {
                if dim.size.parse::<u64>().is_err() {
                    return Err(SchemaError::invalid_dimension(
                        qualified(),
                        &dim.size,
                        "constant size is not a non-negative integer",
                    ));
                }
            }
            DimensionMode::Variable => {
                let sizer = def.members[..index].iter().find(|m| m.name == dim.size);
                match sizer {
                    None => {
                        return Err(SchemaError::invalid_dimension(
                            qualified(),
                            &dim.size,
                            "size member is not declared before the array",
                        ));
                    }
                    Some(m) if m.ndim() > 0 || !m.type_ref.primitive().is_some_and(|p| p.is_integer()) => {
                        return Err(SchemaError::invalid_dimension(
                            qualified(),
                            &dim.size,
                            "size member is not an integer scalar",
                        ));
                    }
                    Some(_) => {}
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::ConstantDef;
    use crate::types::{DimensionDef, PrimitiveType, TypeRef};

    fn ir_of(defs: Vec<StructDef>) -> SchemaIr {
        SchemaIr::from_structs(defs).expect("no duplicate structs")
    }

    #[test]
    fn test_validate_valid_schema() {
        let mut point = StructDef::new("Point");
        point.add_member(MemberDef::new("x", PrimitiveType::Double));
        let mut path = StructDef::new("Path");
        path.add_member(MemberDef::new("num_points", PrimitiveType::Int32));
        path.add_member(
            MemberDef::new("points", TypeRef::Struct("Point".to_string()))
                .with_dimension(DimensionDef::variable("num_points")),
        );
        path.add_member(
            MemberDef::new("cov", PrimitiveType::Double)
                .with_dimension(DimensionDef::constant(3))
                .with_dimension(DimensionDef::constant(3)),
        );
        path.add_constant(ConstantDef::new("MAX_POINTS", PrimitiveType::Int32, "1024"));

        assert!(validate_schema(&ir_of(vec![point, path])).is_ok());
    }

    #[test]
    fn test_validate_unknown_struct() {
        let mut def = StructDef::new("Robot");
        def.add_member(MemberDef::new("pose", TypeRef::Struct("Pose".to_string())));
        let result = validate_schema(&ir_of(vec![def]));
        assert!(matches!(result, Err(SchemaError::StructNotFound { name, .. }) if name == "Pose"));
    }

    #[test]
    fn test_validate_self_reference_allowed() {
        let mut def = StructDef::new("Node");
        def.add_member(MemberDef::new("next", TypeRef::Struct("Node".to_string())));
        assert!(validate_schema(&ir_of(vec![def])).is_ok());
    }

    #[test]
    fn test_validate_duplicate_member() {
        let mut def = StructDef::new("Dup");
        def.add_member(MemberDef::new("x", PrimitiveType::Double));
        def.add_member(MemberDef::new("x", PrimitiveType::Float));
        let result = validate_schema(&ir_of(vec![def]));
        assert!(matches!(result, Err(SchemaError::DuplicateDefinition { .. })));
    }

    #[test]
    fn test_validate_illegal_constant_type() {
        let mut def = StructDef::new("Bad");
        def.add_constant(ConstantDef::new("ORIGIN", TypeRef::Struct("Point".to_string()), "0"));
        let result = validate_schema(&ir_of(vec![def]));
        assert!(matches!(result, Err(SchemaError::IllegalConstantType { .. })));
    }

    #[test]
    fn test_validate_variable_dimension_must_precede() {
        let mut def = StructDef::new("Late");
        def.add_member(
            MemberDef::new("data", PrimitiveType::Byte).with_dimension(DimensionDef::variable("len")),
        );
        def.add_member(MemberDef::new("len", PrimitiveType::Int32));
        let result = validate_schema(&ir_of(vec![def]));
        assert!(matches!(result, Err(SchemaError::InvalidDimension { .. })));
    }

    #[test]
    fn test_validate_variable_dimension_must_be_integer() {
        let mut def = StructDef::new("Floaty");
        def.add_member(MemberDef::new("len", PrimitiveType::Double));
        def.add_member(
            MemberDef::new("data", PrimitiveType::Byte).with_dimension(DimensionDef::variable("len")),
        );
        let result = validate_schema(&ir_of(vec![def]));
        assert!(matches!(result, Err(SchemaError::InvalidDimension { .. })));
    }

    #[test]
    fn test_validate_constant_dimension_must_be_integer() {
        let mut def = StructDef::new("Weird");
        def.add_member(MemberDef::new("data", PrimitiveType::Byte).with_dimension(DimensionDef {
            mode: DimensionMode::Constant,
            size: "-1".to_string(),
        }));
        let result = validate_schema(&ir_of(vec![def]));
        assert!(matches!(result, Err(SchemaError::InvalidDimension { .. })));
    }
}
