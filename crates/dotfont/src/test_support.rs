//! Test support utilities for dotfont.
//!
//! `BitmapFont` lets tests and benches drive the rasterizer without a font
//! file on disk.

use std::collections::HashMap;

use crate::{Canvas, GlyphSource, InkBox};

#[derive(Clone, Debug)]
struct BitmapGlyph {
    left: i32,
    top: i32,
    rows: Vec<Vec<bool>>,
}

impl BitmapGlyph {
    fn ink(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &on)| on)
                .map(move |(x, _)| (x as i32, y as i32))
        })
    }
}

/// An in-memory dot font whose glyphs are drawn with `#` characters.
///
/// Each glyph is placed at a bearing `(left, top)` relative to the draw
/// origin, so measured ink boxes need not start at zero.
#[derive(Clone, Debug, Default)]
pub struct BitmapFont {
    glyphs: HashMap<char, BitmapGlyph>,
}

impl BitmapFont {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a glyph from text rows. `#` is ink, anything else is background.
    pub fn add_raw_char(&mut self, ch: char, left: i32, top: i32, raw_lines: &[&str]) {
        let rows = raw_lines
            .iter()
            .map(|line| line.chars().map(|c| c == '#').collect())
            .collect();
        self.glyphs.insert(ch, BitmapGlyph { left, top, rows });
    }

    /// A font where every character of `chars` is a solid `width × height` box.
    pub fn with_boxes(chars: &str, width: usize, height: usize) -> Self {
        let line = "#".repeat(width);
        let lines = vec![line.as_str(); height];
        let mut font = Self::new();
        for ch in chars.chars() {
            font.add_raw_char(ch, 0, 0, &lines);
        }
        font
    }

    pub fn remove_char(&mut self, ch: char) {
        self.glyphs.remove(&ch);
    }

    pub fn has_char(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }
}

impl GlyphSource for BitmapFont {
    fn measure(&self, ch: char) -> Option<InkBox> {
        let glyph = self.glyphs.get(&ch)?;
        let mut ink = glyph.ink();
        let (x, y) = ink.next()?;
        let (mut x0, mut y0, mut x1, mut y1) = (x, y, x, y);
        for (x, y) in ink {
            x0 = x0.min(x);
            y0 = y0.min(y);
            x1 = x1.max(x);
            y1 = y1.max(y);
        }
        Some(InkBox::new(
            glyph.left + x0,
            glyph.top + y0,
            glyph.left + x1 + 1,
            glyph.top + y1 + 1,
        ))
    }

    fn draw(&self, canvas: &mut Canvas, ch: char, x: i32, y: i32) {
        let Some(glyph) = self.glyphs.get(&ch) else {
            return;
        };
        for (gx, gy) in glyph.ink() {
            canvas.set(x + glyph.left + gx, y + glyph.top + gy);
        }
    }
}
