//! Capture reader built on the `image` crate.
//!
//! The polarization camera exports its mosaic as a 16-bit grayscale PNG (TIFF
//! works too). The decoded samples are kept at their native depth; anything
//! that does not decode to a single 16-bit channel is rejected instead of being
//! converted, since a conversion would scramble the interleaved mosaic.

use image::DynamicImage;
use tracing::debug;

use crate::image_pipeline::common::error::{AnalysisError, Result};
use crate::image_pipeline::raw::reader::RawImageReader;
use crate::image_pipeline::raw::types::RawImageData;

/// Bit width of the only container layout the reader accepts.
const LUMA16_BITS: u32 = 16;

/// Reader for 16-bit single-channel images in any format `image` can decode.
pub struct ImageCrateReader;

impl RawImageReader for ImageCrateReader {
    fn read_raw(&self, data: &[u8]) -> Result<RawImageData> {
        debug!("Decoding capture, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| AnalysisError::DecodeError(e.to_string()))?;

        let buffer = match decoded {
            DynamicImage::ImageLuma16(buffer) => buffer,
            other => {
                return Err(AnalysisError::UnsupportedFormat(format!(
                    "expected 16-bit grayscale, got {:?}",
                    other.color()
                )));
            }
        };

        let (width, height) = buffer.dimensions();
        debug!("Decoded capture: {}x{}", width, height);

        Ok(RawImageData {
            width: width as usize,
            height: height as usize,
            data: buffer.into_raw(),
            bits_per_sample: LUMA16_BITS,
        })
    }
}
