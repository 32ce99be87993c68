//! Vala type names.

/// Maps a schema type name to its Vala spelling.
///
/// Names without an entry pass through unchanged: `float`, `double` and
/// `string` are spelled the same in both languages, and struct names are
/// already valid Vala class names.
#[must_use]
pub fn map_type_name(name: &str) -> &str {
    match name {
        "byte" | "int8_t" => "int8",
        "boolean" => "bool",
        "int16_t" => "int16",
        "int32_t" => "int32",
        "int64_t" => "int64",
        _ => name,
    }
}

/// Builds the Vala type of a variable-size array: one bracket group with
/// `ndim - 1` commas, e.g. `int32[]` or `double[,,]`.
#[must_use]
pub fn make_dynarray_type(type_name: &str, ndim: usize) -> String {
    let mut output = String::with_capacity(type_name.len() + ndim + 2);
    output.push_str(type_name);
    output.push('[');
    for _ in 1..ndim {
        output.push(',');
    }
    output.push(']');
    output
}
