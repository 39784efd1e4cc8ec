use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("font file not found: {}", .0.display())]
    ResourceNotFound(PathBuf),
    #[error("font read error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    InvalidFont(#[from] ab_glyph::InvalidFont),
}

pub type Result<T> = std::result::Result<T, FontError>;
