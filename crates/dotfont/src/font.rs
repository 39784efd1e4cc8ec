use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::{point, Font as _, FontVec, OutlinedGlyph, PxScale, ScaleFont as _};

use crate::{error::FontError, Canvas, Result};

/// Minimum pixel coverage for an outline pixel to count as foreground.
pub const COVERAGE_THRESHOLD: f32 = 0.5;

/// Tight ink bounding box of a glyph, in pixels relative to the draw origin.
///
/// The origin is the top-left corner of the line box; `right`/`bottom` are
/// exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InkBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl InkBox {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

/// The two primitives the rasterizer needs from a font backend.
pub trait GlyphSource {
    /// Measure the ink of `ch` drawn at `(0, 0)`.
    ///
    /// `None` means the font has nothing visible for this character.
    fn measure(&self, ch: char) -> Option<InkBox>;

    /// Draw `ch` with its origin at `(x, y)`. Only fully binary output may
    /// reach the canvas.
    fn draw(&self, canvas: &mut Canvas, ch: char, x: i32, y: i32);
}

/// An outline (TrueType/OpenType) font loaded from disk at a fixed point size.
///
/// The file is read into memory once, so no handle stays open after `open`
/// returns.
pub struct FontResource {
    path: PathBuf,
    point_size: u32,
    font: FontVec,
    scale: PxScale,
    baseline: f32,
}

/// Scale giving an em of exactly `point_size` pixels (1pt == 1px).
///
/// `PxScale` measures ascent to descent, not the em, so it is stretched by
/// `height / units_per_em`. `Font::pt_to_px_scale` is not used since it
/// assumes 96 DPI.
fn em_scale(point_size: u32, height_unscaled: f32, units_per_em: Option<f32>) -> PxScale {
    let pt = point_size as f32;
    match units_per_em {
        Some(upem) if upem > 0.0 => PxScale::from(pt * height_unscaled / upem),
        _ => PxScale::from(pt),
    }
}

impl FontResource {
    pub fn open(path: impl AsRef<Path>, point_size: u32) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FontError::ResourceNotFound(path.to_path_buf()));
        }
        let bytes = fs::read(path)?;
        let font = FontVec::try_from_vec(bytes)?;

        let scale = em_scale(point_size, font.height_unscaled(), font.units_per_em());
        let baseline = font.as_scaled(scale).ascent().round();
        log::debug!(
            "opened {} at {point_size}pt (px scale {:.2}, baseline {baseline})",
            path.display(),
            scale.y
        );

        Ok(Self {
            path: path.to_path_buf(),
            point_size,
            font,
            scale,
            baseline,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn point_size(&self) -> u32 {
        self.point_size
    }

    /// File stem of the font, used as a human readable label.
    pub fn name(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    fn outline(&self, ch: char, x: f32, y: f32) -> Option<OutlinedGlyph> {
        let id = self.font.glyph_id(ch);
        // .notdef would draw a replacement box
        if id.0 == 0 {
            return None;
        }
        let glyph = id.with_scale_and_position(self.scale, point(x, y + self.baseline));
        self.font.outline_glyph(glyph)
    }
}

impl GlyphSource for FontResource {
    /// Ink box of the pixels that pass [`COVERAGE_THRESHOLD`], which can be
    /// tighter than the outline's pixel bounds.
    fn measure(&self, ch: char) -> Option<InkBox> {
        let outline = self.outline(ch, 0.0, 0.0)?;
        let bounds = outline.px_bounds();
        let (left, top) = (bounds.min.x as i32, bounds.min.y as i32);
        let mut ink: Option<InkBox> = None;
        outline.draw(|px, py, coverage| {
            if coverage < COVERAGE_THRESHOLD {
                return;
            }
            let (x, y) = (left + px as i32, top + py as i32);
            ink = Some(match ink {
                None => InkBox::new(x, y, x + 1, y + 1),
                Some(b) => InkBox::new(
                    b.left.min(x),
                    b.top.min(y),
                    b.right.max(x + 1),
                    b.bottom.max(y + 1),
                ),
            });
        });
        ink
    }

    fn draw(&self, canvas: &mut Canvas, ch: char, x: i32, y: i32) {
        let Some(outline) = self.outline(ch, x as f32, y as f32) else {
            return;
        };
        let bounds = outline.px_bounds();
        let (left, top) = (bounds.min.x as i32, bounds.min.y as i32);
        outline.draw(|px, py, coverage| {
            if coverage >= COVERAGE_THRESHOLD {
                canvas.set(left + px as i32, top + py as i32);
            }
        });
    }
}
