use std::path::{Path, PathBuf};

use dotfont::{format_c_array, rasterize, rasterize_path, FontError, FontResource, GlyphSource};

#[test]
fn missing_font_is_resource_not_found() {
    let path = Path::new("/nonexistent/dotfont/misaki_gothic_2nd.ttf");
    let err = FontResource::open(path, 8).err().unwrap();
    assert!(matches!(&err, FontError::ResourceNotFound(p) if p == path));
    assert!(err.to_string().contains("/nonexistent/dotfont/misaki_gothic_2nd.ttf"));
}

#[test]
fn rasterize_path_checks_font_before_drawing() {
    let err = rasterize_path('A', "/nonexistent/dotfont/DotGothic16.ttf", 16).unwrap_err();
    assert!(matches!(err, FontError::ResourceNotFound(_)));
}

#[test]
fn garbage_font_is_invalid() {
    let path = std::env::temp_dir().join(format!("dotfont-invalid-{}.ttf", std::process::id()));
    std::fs::write(&path, b"definitely not a font").unwrap();
    let result = FontResource::open(&path, 8);
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(result, Err(FontError::InvalidFont(_))));
}

fn system_font() -> Option<PathBuf> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .find(|p| p.exists())
}

#[test]
fn system_font_smoke() {
    let Some(path) = system_font() else {
        return;
    };
    let font = FontResource::open(&path, 16).unwrap();
    assert_eq!(font.point_size(), 16);
    assert_eq!(font.name(), "DejaVuSans");
    assert!(font.measure(' ').is_none());

    let m = rasterize('A', &font, 16).unwrap();
    assert!(!m.is_blank());
    assert!(m.rows().flatten().all(|&b| b <= 1));
    assert_eq!(rasterize('A', &font, 16), Some(m));
    assert!(rasterize(' ', &font, 16).is_none());
}

// Cap height of DejaVu Sans is 1493/2048 em: about 11.7px at 16pt, 5.8px at 8pt.
#[test]
fn system_font_em_matches_point_size() {
    let Some(path) = system_font() else {
        return;
    };
    for (size, lo, hi) in [(16, 10, 13), (8, 5, 7)] {
        let font = FontResource::open(&path, size).unwrap();
        let h = font.measure('H').unwrap().height();
        assert!((lo..=hi).contains(&h), "H is {h}px tall at {size}pt");
        for ch in ['A', 'O', 'H', '0'] {
            let bbox = font.measure(ch).unwrap();
            assert!(bbox.height() < size as i32, "{ch:?} is {}px tall at {size}pt", bbox.height());
            assert!(bbox.width() < size as i32, "{ch:?} is {}px wide at {size}pt", bbox.width());
        }
    }
}

#[test]
fn system_font_centers_symmetric_glyphs() {
    let Some(path) = system_font() else {
        return;
    };
    for size in [8, 16] {
        let font = FontResource::open(&path, size as u32).unwrap();
        for ch in ['O', '0'] {
            let m = rasterize(ch, &font, size).unwrap();
            let (x0, y0, x1, y1) = m.ink_bounds().unwrap();
            let (right, bottom) = (size - 1 - x1, size - 1 - y1);
            assert!(x0.abs_diff(right) <= 1, "{ch:?} at {size}: left {x0}, right {right}");
            assert!(y0.abs_diff(bottom) <= 1, "{ch:?} at {size}: top {y0}, bottom {bottom}");
            assert!(x0 > 0 && right > 0 && y0 > 0 && bottom > 0, "{ch:?} at {size} touches an edge");
        }
    }
}

#[test]
fn system_font_a_at_8_formats_as_8_rows() {
    let Some(path) = system_font() else {
        return;
    };
    let font = FontResource::open(&path, 8).unwrap();
    let m = rasterize('A', &font, 8).unwrap();
    assert!(!m.is_blank());
    let text = format_c_array(&[m]);
    assert!(text.starts_with("{\n"));
    assert!(text.ends_with("\n}"));
    let rows: Vec<&str> = text.lines().filter(|l| l.starts_with("    {")).collect();
    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|r| r.matches(", ").count() == 7));
}
