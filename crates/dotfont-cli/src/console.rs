use dotfont::GlyphMatrix;

const INK: char = '█';
const BLANK: char = '·';

/// Render matrices side by side as text, one line per raster row.
pub fn render_preview(matrices: &[GlyphMatrix]) -> String {
    let height = matrices.iter().map(GlyphMatrix::size).max().unwrap_or(0);
    let mut out = String::new();
    for y in 0..height {
        if y > 0 {
            out.push('\n');
        }
        for m in matrices {
            for x in 0..m.size() {
                let on = y < m.size() && m.get(x, y) == 1;
                out.push(if on { INK } else { BLANK });
            }
        }
    }
    out
}
