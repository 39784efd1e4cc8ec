use std::path::Path;

use crate::{Canvas, FontResource, GlyphMatrix, GlyphSource, Result};

/// Rasterize one character into a `size × size` binary matrix, centering its
/// ink box on the canvas.
///
/// Returns `None` when the character has no visible ink in `font` (missing
/// glyph, whitespace) or when `size` is zero. Ink that falls outside the
/// canvas is clipped.
pub fn rasterize<S: GlyphSource + ?Sized>(ch: char, font: &S, size: usize) -> Option<GlyphMatrix> {
    if size == 0 {
        return None;
    }
    let bbox = font.measure(ch)?;
    if bbox.is_empty() {
        return None;
    }

    let size_px = size as i32;
    // floor division: oversized glyphs round toward the top-left
    let x_offset = (size_px - bbox.width()).div_euclid(2) - bbox.left;
    let y_offset = (size_px - bbox.height()).div_euclid(2) - bbox.top;
    log::trace!("{ch:?}: ink {bbox:?}, offset ({x_offset}, {y_offset})");

    let mut canvas = Canvas::new(size);
    font.draw(&mut canvas, ch, x_offset, y_offset);
    Some(canvas.into_matrix())
}

/// Rasterize every character of `text` in order, skipping those without ink.
pub fn rasterize_str<S: GlyphSource + ?Sized>(text: &str, font: &S, size: usize) -> Vec<GlyphMatrix> {
    text.chars()
        .filter_map(|ch| {
            let matrix = rasterize(ch, font, size);
            if matrix.is_none() {
                log::debug!("skipping {ch:?}: no ink at {size}x{size}");
            }
            matrix
        })
        .collect()
}

/// Open the font at `path` with `size` as point size and rasterize `ch`.
///
/// Fails with [`crate::FontError::ResourceNotFound`] before any drawing when
/// the file is missing.
pub fn rasterize_path(ch: char, path: impl AsRef<Path>, size: usize) -> Result<Option<GlyphMatrix>> {
    let font = FontResource::open(path, size as u32)?;
    Ok(rasterize(ch, &font, size))
}
