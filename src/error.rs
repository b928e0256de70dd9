use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("input image not found or unreadable: {}: {source}", path.display())]
    InputMissing {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: png::DecodingError,
    },

    #[error(
        "cannot decode image {}: unsupported pixel layout {color_type:?}/{bit_depth:?}",
        path.display()
    )]
    UnsupportedLayout {
        path: PathBuf,
        color_type: png::ColorType,
        bit_depth: png::BitDepth,
    },

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),

    #[error("image has {actual} pixels but the constant is declared with {declared}")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("cannot write output {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type ExportResult<T> = Result<T, ExportError>;
