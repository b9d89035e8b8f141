use tracing::debug;

use crate::image_pipeline::common::error::{AnalysisError, Result};
use crate::image_pipeline::polarization::types::{
    POLARIZER_LAYOUT, PolarizationAngle, PolarizationFrame, PolarizationSet, PolarizerLayout,
};
use crate::image_pipeline::raw::types::{RawImageData, SensorFormat};

/// Splits a polarization mosaic into its four angle channels.
pub struct PolarizationExtractor {
    format: SensorFormat,
    layout: PolarizerLayout,
}

impl PolarizationExtractor {
    pub fn new(format: SensorFormat) -> Self {
        Self {
            format,
            layout: POLARIZER_LAYOUT,
        }
    }

    /// De-interleaves `raw` into one frame per polarization angle.
    ///
    /// Every frame is `width / 2` x `height / 2`, taken from every other row and
    /// column starting at the angle's phase, with the container padding shifted
    /// out of each sample.
    ///
    /// # Errors
    ///
    /// * `InvalidDimensions` - width or height is zero or odd
    /// * `BufferSizeMismatch` - `raw.data` does not hold `width * height` samples
    pub fn extract(&self, raw: &RawImageData) -> Result<PolarizationSet> {
        validate_mosaic(raw)?;

        debug!(
            "Extracting polarization channels from {}x{} mosaic, shift={}",
            raw.width,
            raw.height,
            self.format.padding_shift()
        );

        let frames = PolarizationAngle::ALL.map(|angle| self.extract_angle(raw, angle));
        Ok(PolarizationSet::from_ordered(frames))
    }

    fn extract_angle(&self, raw: &RawImageData, angle: PolarizationAngle) -> PolarizationFrame {
        let phase = self.layout.offset(angle);
        let shift = self.format.padding_shift();

        let data: Vec<u16> = raw
            .data
            .chunks_exact(raw.width)
            .skip(phase.row)
            .step_by(2)
            .flat_map(|line| {
                line.iter()
                    .skip(phase.col)
                    .step_by(2)
                    .map(move |&sample| sample.checked_shr(shift).unwrap_or(0))
            })
            .collect();

        PolarizationFrame {
            angle,
            width: raw.width / 2,
            height: raw.height / 2,
            data,
            bits_per_sample: self.format.sensor_bits,
        }
    }
}

fn validate_mosaic(raw: &RawImageData) -> Result<()> {
    let (width, height) = (raw.width, raw.height);

    if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
        return Err(AnalysisError::InvalidDimensions(width, height));
    }

    let expected = width * height;
    if raw.data.len() != expected {
        return Err(AnalysisError::BufferSizeMismatch {
            expected,
            actual: raw.data.len(),
        });
    }

    Ok(())
}
