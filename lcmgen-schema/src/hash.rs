//! Struct base hash.
//!
//! The base hash summarizes a struct's own members (names, primitive types
//! and dimensions). Nested struct contents are folded in later, when the
//! structural fingerprint is computed. All arithmetic is signed 64-bit with
//! wrapping overflow, so every backend can reproduce it bit for bit.

use crate::structs::StructDef;

/// Initial value of the base hash.
pub const HASH_SEED: i64 = 0x1234_5678;

/// Mixes one signed byte into the hash.
#[must_use]
pub const fn hash_update(v: i64, c: i8) -> i64 {
    ((v << 8) ^ (v >> 55)).wrapping_add(c as i64)
}

/// Mixes a string into the hash: its length, then each byte.
#[must_use]
pub fn hash_string_update(v: i64, s: &str) -> i64 {
    let v = hash_update(v, s.len() as i8);
    s.bytes().fold(v, |v, b| hash_update(v, b as i8))
}

/// Computes the base hash of a struct.
///
/// The struct name is not part of the hash, and neither are the names of
/// member types that are themselves structs: renaming a struct must not
/// change the hash of the structs containing it.
#[must_use]
pub fn compute_base_hash(def: &StructDef) -> u64 {
    let mut v = HASH_SEED;

    for member in &def.members {
        v = hash_string_update(v, &member.name);

        if member.type_ref.is_primitive() {
            v = hash_string_update(v, member.type_ref.name());
        }

        v = hash_update(v, member.ndim() as i8);
        for dim in &member.dimensions {
            v = hash_update(v, dim.mode.tag() as i8);
            v = hash_string_update(v, &dim.size);
        }
    }

    v as u64
}

/// Final mixing step of the structural fingerprint: a one-bit left rotation
/// over 64 bits, written the way generated code spells it.
#[must_use]
pub const fn rotate_fingerprint(h: u64) -> u64 {
    let signed = h as i64;
    (signed << 1).wrapping_add((signed >> 63) & 1) as u64
}
