//! Comment and header emission.

/// Header written at the top of every generated file.
pub const AUTO_GENERATED_WARNING: &str = "/* THIS IS AN AUTOMATICALLY GENERATED FILE.\n \
                                          * DO NOT MODIFY BY HAND!!\n \
                                          *\n \
                                          * Generated by lcm-gen\n \
                                          */\n\n";

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Returns the leading whitespace for an indentation level.
#[must_use]
pub fn indent(level: usize) -> String {
    " ".repeat(level * INDENT_WIDTH)
}

/// Appends a schema comment at the given indentation level.
///
/// A single line becomes `//! text`. Several lines become a `/** ... */`
/// block with one ` * ` line each; blank lines keep a bare ` *`. An empty
/// comment has no lines and renders as an empty block. Nothing is emitted
/// when there is no comment.
pub fn emit_comment(output: &mut String, level: usize, comment: Option<&str>) {
    let Some(comment) = comment else {
        return;
    };
    let pad = indent(level);
    let lines: Vec<&str> = if comment.is_empty() {
        Vec::new()
    } else {
        comment.split('\n').collect()
    };

    if let [line] = lines.as_slice() {
        output.push_str(&format!("{pad}//! {line}\n"));
        return;
    }

    output.push_str(&format!("{pad}/**\n"));
    for line in lines {
        if line.is_empty() {
            output.push_str(&format!("{pad} *\n"));
        } else {
            output.push_str(&format!("{pad} * {line}\n"));
        }
    }
    output.push_str(&format!("{pad} */\n"));
}
