/// Mutable square drawing surface used while a glyph is being rasterized.
///
/// Every cell starts as background (0). Writes outside the surface are
/// clipped, so glyphs larger than the canvas simply lose their overflow.
#[derive(Clone, Debug)]
pub struct Canvas {
    size: usize,
    cells: Vec<u8>,
}

impl Canvas {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `(x, y)`, or 0 outside the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        if x < self.size && y < self.size {
            self.cells[y * self.size + x]
        } else {
            0
        }
    }

    /// Marks `(x, y)` as foreground. Out of range coordinates are ignored.
    pub fn set(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.size && y < self.size {
            self.cells[y * self.size + x] = 1;
        }
    }

    /// Freezes the canvas into a matrix. Cells keep their row-major order.
    pub fn into_matrix(self) -> GlyphMatrix {
        GlyphMatrix {
            size: self.size,
            cells: self.cells,
        }
    }
}

/// Binary `size × size` raster of one glyph, row-major with the origin at the
/// top-left. Cells are always exactly 0 or 1.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphMatrix {
    size: usize,
    cells: Vec<u8>,
}

impl GlyphMatrix {
    pub fn blank(size: usize) -> Self {
        Canvas::new(size).into_matrix()
    }

    /// Builds a matrix from explicit rows. Any non-zero value becomes 1.
    ///
    /// Returns `None` unless the rows form a square.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Option<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return None;
            }
            cells.extend(row.iter().map(|&v| u8::from(v != 0)));
        }
        Some(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[y * self.size + x]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks(0) panics, and a zero sized matrix has no rows anyway
        self.cells.chunks(self.size.max(1))
    }

    pub fn ink_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    pub fn is_blank(&self) -> bool {
        self.ink_count() == 0
    }

    /// Inclusive `(min_x, min_y, max_x, max_y)` of all foreground cells.
    pub fn ink_bounds(&self) -> Option<(usize, usize, usize, usize)> {
        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for (y, row) in self.rows().enumerate() {
            for (x, _) in row.iter().enumerate().filter(|&(_, &c)| c == 1) {
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_clips_out_of_range_writes() {
        let mut canvas = Canvas::new(4);
        canvas.set(-1, 0);
        canvas.set(0, -3);
        canvas.set(4, 1);
        canvas.set(1, 4);
        canvas.set(2, 3);
        let m = canvas.into_matrix();
        assert_eq!(m.ink_count(), 1);
        assert_eq!(m.get(2, 3), 1);
    }

    #[test]
    fn canvas_pixels_start_as_background() {
        let mut canvas = Canvas::new(3);
        assert_eq!(canvas.size(), 3);
        assert!((0..3).all(|y| (0..3).all(|x| canvas.pixel(x, y) == 0)));
        canvas.set(1, 2);
        assert_eq!(canvas.pixel(1, 2), 1);
        assert_eq!(canvas.pixel(2, 1), 0);
        assert_eq!(canvas.pixel(3, 0), 0);
        assert_eq!(canvas.into_matrix().get(1, 2), 1);
    }

    #[test]
    fn from_rows_normalizes_and_rejects_non_square() {
        let m = GlyphMatrix::from_rows(&[[0u8, 7], [255, 0]]).unwrap();
        assert_eq!(m.rows().collect::<Vec<_>>(), vec![&[0u8, 1][..], &[1, 0][..]]);
        assert!(GlyphMatrix::from_rows(&[vec![0u8, 1, 0], vec![1, 0, 0]]).is_none());
    }

    #[test]
    fn ink_bounds_of_blank_is_none() {
        assert_eq!(GlyphMatrix::blank(8).ink_bounds(), None);
        let m = GlyphMatrix::from_rows(&[[0u8, 0, 0], [0, 1, 1], [0, 1, 0]]).unwrap();
        assert_eq!(m.ink_bounds(), Some((1, 1, 2, 2)));
    }
}
