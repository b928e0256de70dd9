use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use ndarray::prelude::*;

use crate::config::ChannelOrder;
use crate::error::{ExportError, ExportResult};

pub type Pixel = (u8, u8, u8);

/// Decoded 8-bit RGB image, shape (height, width, 3), row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pixels: Array3<u8>,
}

/// Widen or narrow one 8-bit frame to three channels per pixel.
fn to_rgb(color_type: png::ColorType, data: &[u8]) -> Option<Vec<u8>> {
    use png::ColorType::*;

    match color_type {
        Rgb => Some(data.to_vec()),
        Rgba => Some(data.chunks_exact(4).flat_map(|px| px[..3].to_vec()).collect()),
        Grayscale => Some(data.iter().flat_map(|&l| vec![l, l, l]).collect()),
        GrayscaleAlpha => Some(data.chunks_exact(2).flat_map(|px| vec![px[0]; 3]).collect()),
        Indexed => None,
    }
}

impl Raster {
    pub fn from_rgb(height: usize, width: usize, data: Vec<u8>) -> ExportResult<Raster> {
        Ok(Raster {
            pixels: Array3::from_shape_vec((height, width, 3), data)?,
        })
    }

    pub fn open(path: impl AsRef<Path>) -> ExportResult<Raster> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| ExportError::InputMissing {
            path: path.to_owned(),
            source,
        })?;
        let decode_err = |source| ExportError::Decode {
            path: path.to_owned(),
            source,
        };

        let mut decoder = png::Decoder::new(BufReader::new(file));
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
        let mut reader = decoder.read_info().map_err(decode_err)?;

        let mut buf = vec![0; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut buf).map_err(decode_err)?;
        let data = &buf[..frame.buffer_size()];

        debug!(
            "{}: {:?}/{:?}, {} bytes per row",
            path.display(),
            frame.color_type,
            frame.bit_depth,
            frame.line_size
        );

        if frame.bit_depth != png::BitDepth::Eight {
            return Err(ExportError::UnsupportedLayout {
                path: path.to_owned(),
                color_type: frame.color_type,
                bit_depth: frame.bit_depth,
            });
        }

        let rgb = to_rgb(frame.color_type, data).ok_or_else(|| ExportError::UnsupportedLayout {
            path: path.to_owned(),
            color_type: frame.color_type,
            bit_depth: frame.bit_depth,
        })?;

        Raster::from_rgb(frame.height as usize, frame.width as usize, rgb)
    }

    /// (height, width)
    pub fn dim(&self) -> (usize, usize) {
        let (h, w, _) = self.pixels.dim();
        (h, w)
    }

    #[cfg(test)]
    fn view(&self) -> ArrayView3<'_, u8> {
        self.pixels.view()
    }

    /// Relabel the flat buffer from (h, w, 3) to (w, h, 3).
    ///
    /// This is not a transpose. No value moves, so for a non-square image
    /// pixels end up at positions that do not correspond to where they were
    /// in the picture. Downstream code depends on this exact layout, so keep
    /// it as is.
    pub fn reshape_swapped(self) -> ExportResult<Raster> {
        let (h, w, c) = self.pixels.dim();
        let pixels = self.pixels.into_shape((w, h, c))?;
        Ok(Raster { pixels })
    }

    /// All pixels in row-major order.
    pub fn pixels(&self, order: ChannelOrder) -> Vec<Pixel> {
        self.pixels
            .outer_iter()
            .flat_map(|row| {
                row.outer_iter()
                    .map(|px| match order {
                        ChannelOrder::Rgb => (px[0], px[1], px[2]),
                        ChannelOrder::Bgr => (px[2], px[1], px[0]),
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}
