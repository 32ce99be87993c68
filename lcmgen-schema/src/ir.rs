//! Intermediate representation consumed by the code generators.
//!
//! The IR is an ordered set of struct definitions with name lookup. It is
//! read-only once built: generators borrow it for a whole emission pass.

use crate::error::SchemaError;
use crate::hash::rotate_fingerprint;
use crate::structs::StructDef;
use std::collections::HashMap;

/// Intermediate representation of a schema run.
#[derive(Debug, Clone, Default)]
pub struct SchemaIr {
    /// Struct definitions in declaration order.
    structs: Vec<StructDef>,
    /// Struct lookup map (name to index).
    struct_map: HashMap<String, usize>,
}

impl SchemaIr {
    /// Creates an empty IR.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a struct definition.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateDefinition` if a struct with the same
    /// name was already added.
    pub fn add_struct(&mut self, def: StructDef) -> Result<(), SchemaError> {
        if self.struct_map.contains_key(&def.name) {
            return Err(SchemaError::duplicate("struct", &def.name));
        }
        self.struct_map.insert(def.name.clone(), self.structs.len());
        self.structs.push(def);
        Ok(())
    }

    /// Builds an IR from struct definitions.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateDefinition` on repeated struct names.
    pub fn from_structs(defs: impl IntoIterator<Item = StructDef>) -> Result<Self, SchemaError> {
        let mut ir = Self::new();
        for def in defs {
            ir.add_struct(def)?;
        }
        Ok(ir)
    }

    /// Gets a struct definition by name.
    #[must_use]
    pub fn get_struct(&self, name: &str) -> Option<&StructDef> {
        self.struct_map.get(name).map(|&idx| &self.structs[idx])
    }

    /// Returns true if a struct with the given name exists.
    #[must_use]
    pub fn has_struct(&self, name: &str) -> bool {
        self.struct_map.contains_key(name)
    }

    /// Struct definitions in declaration order.
    #[must_use]
    pub fn structs(&self) -> &[StructDef] {
        &self.structs
    }

    /// Number of structs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.structs.len()
    }

    /// Returns true if the IR holds no structs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.structs.is_empty()
    }

    /// Computes the structural fingerprint of the named struct.
    ///
    /// This is the reference the emitted `_compute_hash` functions must
    /// agree with. Returns `None` if `name` (or any struct reachable from
    /// it) is not defined.
    #[must_use]
    pub fn fingerprint(&self, name: &str) -> Option<u64> {
        self.fingerprint_with_parents(name, &[])
    }

    /// Computes the fingerprint of `name` as reached through the chain of
    /// structs in `parents`. A struct already in the chain contributes 0.
    #[must_use]
    pub fn fingerprint_with_parents(&self, name: &str, parents: &[&str]) -> Option<u64> {
        if parents.contains(&name) {
            return Some(0);
        }

        let def = self.get_struct(name)?;
        let mut chain = parents.to_vec();
        chain.push(def.name.as_str());

        let mut h = def.base_hash;
        for member in def.complex_members() {
            let nested = member.type_ref.struct_name()?;
            h = h.wrapping_add(self.fingerprint_with_parents(nested, &chain)?);
        }

        Some(rotate_fingerprint(h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::MemberDef;
    use crate::types::{PrimitiveType, TypeRef};

    fn point() -> StructDef {
        let mut def = StructDef::new("Point");
        def.add_member(MemberDef::new("x", PrimitiveType::Double));
        def.add_member(MemberDef::new("y", PrimitiveType::Double));
        def.with_base_hash(0x1122_3344_5566_7788)
    }

    fn struct_ref(name: &str) -> TypeRef {
        TypeRef::Struct(name.to_string())
    }

    #[test]
    fn test_schema_ir_lookup_and_order() {
        let mut b = StructDef::new("B");
        b.add_member(MemberDef::new("p", struct_ref("Point")));
        let ir = SchemaIr::from_structs([b, point()]).expect("valid IR");

        assert_eq!(ir.len(), 2);
        assert!(!ir.is_empty());
        assert!(ir.has_struct("Point"));
        assert!(!ir.has_struct("Missing"));
        let names: Vec<_> = ir.structs().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["B", "Point"]);
        assert_eq!(ir.get_struct("Point").map(|s| s.members.len()), Some(2));
    }

    #[test]
    fn test_duplicate_struct_rejected() {
        let mut ir = SchemaIr::new();
        ir.add_struct(point()).expect("first insert");
        let result = ir.add_struct(point());
        assert!(matches!(
            result,
            Err(SchemaError::DuplicateDefinition { .. })
        ));
    }

    #[test]
    fn test_fingerprint_primitive_only() {
        let ir = SchemaIr::from_structs([point()]).expect("valid IR");
        assert_eq!(ir.fingerprint("Point"), Some(0x2244_6688_AACC_EF10));
        assert_eq!(ir.fingerprint("Missing"), None);
    }

    #[test]
    fn test_fingerprint_nested_adds_child() {
        let mut line = StructDef::new("Line");
        line.add_member(MemberDef::new("a", struct_ref("Point")));
        line.add_member(MemberDef::new("b", struct_ref("Point")));
        let line = line.with_base_hash(100);
        let ir = SchemaIr::from_structs([point(), line]).expect("valid IR");

        let p = ir.fingerprint("Point").expect("point");
        let expected = rotate_fingerprint(100u64.wrapping_add(p).wrapping_add(p));
        assert_eq!(ir.fingerprint("Line"), Some(expected));
    }

    #[test]
    fn test_fingerprint_depth_sensitive() {
        // A wrapper whose only contribution is a struct that contributes 0
        // still differs from the wrapped struct alone.
        let mut wrapper = StructDef::new("Wrapper");
        wrapper.add_member(MemberDef::new("p", struct_ref("Point")));
        let wrapper = wrapper.with_base_hash(0);
        let ir = SchemaIr::from_structs([point(), wrapper]).expect("valid IR");

        let p = ir.fingerprint("Point").expect("point");
        assert_eq!(ir.fingerprint("Wrapper"), Some(rotate_fingerprint(p)));
        assert_ne!(ir.fingerprint("Wrapper"), Some(p));
    }

    #[test]
    fn test_fingerprint_cycle_terminates() {
        let mut a = StructDef::new("A");
        a.add_member(MemberDef::new("b", struct_ref("B")));
        let a = a.with_base_hash(0xA);
        let mut b = StructDef::new("B");
        b.add_member(MemberDef::new("a", struct_ref("A")));
        let b = b.with_base_hash(0xB);
        let ir = SchemaIr::from_structs([a, b]).expect("valid IR");

        // A already on the chain returns 0 without recursing.
        assert_eq!(ir.fingerprint_with_parents("A", &["A"]), Some(0));
        assert_eq!(ir.fingerprint_with_parents("A", &["B", "A"]), Some(0));

        // B reached from A: B's own hash plus nothing for the A back edge.
        let b_in_a = ir.fingerprint_with_parents("B", &["A"]).expect("b");
        assert_eq!(b_in_a, rotate_fingerprint(0xB));

        // A from scratch: A + (B reached from A), B does not re-add A.
        let expected = rotate_fingerprint(0xAu64.wrapping_add(b_in_a));
        assert_eq!(ir.fingerprint("A"), Some(expected));
    }

    #[test]
    fn test_fingerprint_self_reference() {
        let mut node = StructDef::new("Node");
        node.add_member(MemberDef::new("value", PrimitiveType::Int32));
        node.add_member(MemberDef::new("next", struct_ref("Node")));
        let node = node.with_base_hash(7);
        let ir = SchemaIr::from_structs([node]).expect("valid IR");

        assert_eq!(ir.fingerprint("Node"), Some(rotate_fingerprint(7)));
    }

    #[test]
    fn test_fingerprint_distinct_structs_in_cycle_not_conflated() {
        // A -> B -> C -> A: the guard is per struct, so B and C both
        // contribute when computing A.
        let mut a = StructDef::new("A");
        a.add_member(MemberDef::new("b", struct_ref("B")));
        let mut b = StructDef::new("B");
        b.add_member(MemberDef::new("c", struct_ref("C")));
        let mut c = StructDef::new("C");
        c.add_member(MemberDef::new("a", struct_ref("A")));
        let ir = SchemaIr::from_structs([
            a.with_base_hash(1),
            b.with_base_hash(2),
            c.with_base_hash(3),
        ])
        .expect("valid IR");

        let c_fp = rotate_fingerprint(3);
        let b_fp = rotate_fingerprint(2 + c_fp);
        let a_fp = rotate_fingerprint(1 + b_fp);
        assert_eq!(ir.fingerprint("A"), Some(a_fp));
    }

    #[test]
    fn test_fingerprint_unresolved_member() {
        let mut a = StructDef::new("A");
        a.add_member(MemberDef::new("ghost", struct_ref("Ghost")));
        let ir = SchemaIr::from_structs([a]).expect("valid IR");
        assert_eq!(ir.fingerprint("A"), None);
    }
}
