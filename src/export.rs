use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use log::info;

use crate::config::ExportConfig;
use crate::error::{ExportError, ExportResult};
use crate::literal::write_literal;
use crate::raster::Raster;

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    /// (height, width) as decoded
    pub source_dim: (usize, usize),
    /// (height, width) after the dimension swap
    pub reshaped_dim: (usize, usize),
    pub pixel_count: usize,
    pub output: PathBuf,
}

/// Decode `config.input` and write it to `config.output` as a constant.
///
/// The output file is only created once the image has been decoded and its
/// pixel count matches `config.declared_len`. An existing file is
/// overwritten.
pub fn export(config: &ExportConfig) -> ExportResult<ExportSummary> {
    let raster = Raster::open(&config.input)?;
    let source_dim = raster.dim();
    info!("{}: {}x{}", config.input.display(), source_dim.1, source_dim.0);

    let raster = raster.reshape_swapped()?;
    let reshaped_dim = raster.dim();
    info!("reshaped to {} rows of {}", reshaped_dim.0, reshaped_dim.1);

    let pixels = raster.pixels(config.channel_order);

    if pixels.len() != config.declared_len {
        return Err(ExportError::LengthMismatch {
            declared: config.declared_len,
            actual: pixels.len(),
        });
    }

    let write_err = |source| ExportError::Write {
        path: config.output.clone(),
        source,
    };

    let file = File::create(&config.output).map_err(write_err)?;
    let mut w = BufWriter::new(file);
    write_literal(&mut w, &config.const_name, config.declared_len, &pixels).map_err(write_err)?;
    w.flush().map_err(write_err)?;

    info!("wrote {} pixels to {}", pixels.len(), config.output.display());

    Ok(ExportSummary {
        source_dim,
        reshaped_dim,
        pixel_count: pixels.len(),
        output: config.output.clone(),
    })
}
