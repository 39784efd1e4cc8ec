//! dotfont: dot font glyph rasterizer.
//! Renders single characters into fixed-size 0/1 matrices and formats them as
//! C array initializers for font ROMs.

pub mod charset;
mod error;
mod font;
pub mod format;
mod matrix;
mod raster;
pub use charset::{charset_matrices, export_charset, write_c_source, CHARACTER_SET};
pub use error::{FontError, Result};
pub use font::{FontResource, GlyphSource, InkBox, COVERAGE_THRESHOLD};
pub use format::{format_c_3d_array, format_c_array};
pub use matrix::{Canvas, GlyphMatrix};
pub use raster::{rasterize, rasterize_path, rasterize_str};

// Test utilities
pub mod test_support;
