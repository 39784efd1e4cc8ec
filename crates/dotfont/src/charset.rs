//! Batch export of the fixed 64-symbol character set.
use std::io::Write;

use crate::{format_c_3d_array, rasterize, GlyphMatrix, GlyphSource, Result};

/// Export order: A-Z (0-25), a-z (26-51), 0-9 (52-61), `!` (62), `?` (63).
///
/// Exported files label each block by position in this string, so neither its
/// order nor its members may change.
pub const CHARACTER_SET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!?";

/// Rasterize the character set in order, dropping characters without ink.
pub fn charset_matrices<S: GlyphSource + ?Sized>(font: &S, size: usize) -> Vec<GlyphMatrix> {
    let mut matrices = Vec::with_capacity(CHARACTER_SET.len());
    for (index, ch) in CHARACTER_SET.chars().enumerate() {
        match rasterize(ch, font, size) {
            Some(matrix) => matrices.push(matrix),
            None => log::warn!("{ch:?} (index {index}) has no glyph at {size}x{size}, omitted"),
        }
    }
    matrices
}

/// Build the `const uint8_t` declaration for the whole character set.
///
/// Skipped characters shorten the array and shift the comment labels of every
/// later block.
pub fn export_charset<S: GlyphSource + ?Sized>(font: &S, size: usize, array_name: &str) -> String {
    let matrices = charset_matrices(font, size);
    log::info!(
        "exported {}/{} characters as {array_name}[{}][{size}][{size}]",
        matrices.len(),
        CHARACTER_SET.len(),
        matrices.len()
    );
    format_c_3d_array(array_name, &matrices)
}

/// Write a standalone C source file around `declaration`.
pub fn write_c_source<W: Write>(mut writer: W, title: &str, declaration: &str) -> Result<()> {
    writer.write_all(b"#include <stdint.h>\n\n")?;
    writeln!(writer, "// --- {title} ---")?;
    writer.write_all(declaration.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
