//! Bracketed C array literals for glyph matrices.
//!
//! The output is meant to be pasted into C source verbatim, so spacing and
//! comma placement are fixed.
use crate::{GlyphMatrix, CHARACTER_SET};

fn push_rows(out: &mut String, matrix: &GlyphMatrix, indent: &str) {
    for (i, row) in matrix.rows().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push_str(indent);
        out.push('{');
        for (j, bit) in row.iter().enumerate() {
            if j > 0 {
                out.push_str(", ");
            }
            out.push(char::from(b'0' + bit));
        }
        out.push('}');
    }
}

/// Format a matrix sequence as an initializer literal.
///
/// - no matrices: empty string
/// - one matrix: 2-D literal, rows indented by 4 spaces
/// - several: 3-D literal, one brace block per matrix
///
/// Nothing follows the closing brace.
pub fn format_c_array(matrices: &[GlyphMatrix]) -> String {
    let mut out = String::new();
    match matrices {
        [] => {}
        [matrix] => {
            out.push_str("{\n");
            push_rows(&mut out, matrix, "    ");
            out.push_str("\n}");
        }
        _ => {
            out.push_str("{\n");
            for (i, matrix) in matrices.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                out.push_str("    {\n");
                push_rows(&mut out, matrix, "        ");
                out.push_str("\n    }");
            }
            out.push_str("\n}");
        }
    }
    out
}

/// Format a full `const uint8_t` declaration with one comment per matrix.
///
/// The comment above matrix `i` is `CHARACTER_SET[i]`, counted over the
/// matrices actually passed in. When characters were skipped upstream the
/// labels no longer line up with the glyphs; callers relying on labels must
/// pass all 64 matrices. Indices past the set are labelled numerically.
pub fn format_c_3d_array(array_name: &str, matrices: &[GlyphMatrix]) -> String {
    let Some(first) = matrices.first() else {
        return String::new();
    };
    let size = first.size();
    debug_assert!(matrices.iter().all(|m| m.size() == size));

    let mut out = format!(
        "const uint8_t {array_name}[{}][{size}][{size}] = {{\n",
        matrices.len()
    );
    for (i, matrix) in matrices.iter().enumerate() {
        let label = match CHARACTER_SET.chars().nth(i) {
            Some(ch) => ch.to_string(),
            None => i.to_string(),
        };
        out.push_str(&format!("    // {label}\n"));
        out.push_str("    {\n");
        push_rows(&mut out, matrix, "        ");
        out.push_str("\n    }");
        if i + 1 < matrices.len() {
            out.push_str(",\n\n");
        } else {
            out.push('\n');
        }
    }
    out.push_str("};");
    out
}
