use std::io::Cursor;

use bayer::{BayerDepth, CFA, Demosaic, RasterDepth, RasterMut};
use tracing::debug;

use crate::image_pipeline::common::error::{AnalysisError, Result};
use crate::image_pipeline::debayer::types::{DemosaicAlgorithm, RgbImageData};
use crate::image_pipeline::polarization::PolarizationFrame;

/// Color filter arrangement of every polarization frame: red at the origin,
/// green beside and below it, blue on the diagonal.
pub const MOSAIC_PATTERN: CFA = CFA::RGGB;

/// Smallest mosaic the interpolating algorithms accept on either axis.
const MIN_MOSAIC_SIDE: usize = 2;

pub struct CpuDebayer {
    algorithm: DemosaicAlgorithm,
}

impl CpuDebayer {
    pub fn new(algorithm: DemosaicAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> DemosaicAlgorithm {
        self.algorithm
    }

    pub fn process(&self, frame: &PolarizationFrame) -> Result<RgbImageData> {
        let width = frame.width;
        let height = frame.height;
        debug!(
            "Debayering {} frame {}x{} with {:?}",
            frame.angle, width, height, self.algorithm
        );

        if width < MIN_MOSAIC_SIDE || height < MIN_MOSAIC_SIDE {
            return Err(AnalysisError::DemosaicError(format!(
                "{} frame is {}x{}, need at least {}x{}",
                frame.angle, width, height, MIN_MOSAIC_SIDE, MIN_MOSAIC_SIDE
            )));
        }
        if frame.data.len() != width * height {
            return Err(AnalysisError::DemosaicError(format!(
                "{} frame holds {} samples for {}x{}",
                frame.angle,
                frame.data.len(),
                width,
                height
            )));
        }

        // bayer crate only supports 8 and 16 bit
        let (bayer_depth, raster_depth, bytes_per_pixel) = if frame.bits_per_sample <= 8 {
            (BayerDepth::Depth8, RasterDepth::Depth8, 1)
        } else {
            (BayerDepth::Depth16LE, RasterDepth::Depth16, 2)
        };

        let bayer_bytes: Vec<u8> = if bytes_per_pixel == 1 {
            frame.data.iter().map(|&val| val as u8).collect()
        } else {
            frame.data.iter().flat_map(|&val| val.to_le_bytes()).collect()
        };

        let mut output_buf = vec![0u8; width * height * 3 * bytes_per_pixel];
        let mut cursor = Cursor::new(&bayer_bytes[..]);

        {
            let mut output_raster = RasterMut::new(width, height, raster_depth, &mut output_buf);

            bayer::run_demosaic(
                &mut cursor,
                bayer_depth,
                MOSAIC_PATTERN,
                self.demosaic(),
                &mut output_raster,
            )
            .map_err(|e| AnalysisError::DemosaicError(format!("{:?}", e)))?;
        }

        // 16-bit raster rows are written as native-endian u16
        let data: Vec<u16> = if bytes_per_pixel == 1 {
            output_buf.iter().map(|&val| val as u16).collect()
        } else {
            output_buf
                .chunks_exact(2)
                .map(|bytes| u16::from_ne_bytes([bytes[0], bytes[1]]))
                .collect()
        };

        Ok(RgbImageData {
            width,
            height,
            data,
            bits_per_sample: frame.bits_per_sample,
        })
    }

    fn demosaic(&self) -> Demosaic {
        match self.algorithm {
            DemosaicAlgorithm::NearestNeighbour => Demosaic::NearestNeighbour,
            DemosaicAlgorithm::Linear => Demosaic::Linear,
            DemosaicAlgorithm::Cubic => Demosaic::Cubic,
        }
    }
}

impl Default for CpuDebayer {
    fn default() -> Self {
        Self::new(DemosaicAlgorithm::Linear)
    }
}
