//! Analysis configuration types

use std::path::PathBuf;

use crate::image_pipeline::debayer::types::DemosaicAlgorithm;
use crate::image_pipeline::raw::types::SensorFormat;
use crate::image_pipeline::tiff::types::TiffCompression;

/// Default location of the capture analysed when no path is given.
pub const DEFAULT_INPUT_PATH: &str = "Images/image_192900067.png";

/// Default directory the viewer writes into.
pub const DEFAULT_OUTPUT_DIR: &str = "polarization_views";

/// Configuration for a polarization analysis run
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// How sensor samples sit inside the decoded container
    pub sensor_format: SensorFormat,
    /// Interpolation used to rebuild the color planes
    pub demosaic: DemosaicAlgorithm,
    /// Directory receiving the grid PNG and the labeled TIFF
    pub output_dir: PathBuf,
    /// Black border in pixels between grid panels
    pub gutter: u32,
    /// Compression of the labeled TIFF
    pub compression: TiffCompression,
    /// Whether to write the labeled multi-page TIFF next to the grid
    pub write_tiff: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sensor_format: SensorFormat::default(),
            demosaic: DemosaicAlgorithm::Linear,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            gutter: 8,
            compression: TiffCompression::None,
            write_tiff: true,
        }
    }
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }
}

/// Builder for AnalysisConfig
#[derive(Default)]
pub struct AnalysisConfigBuilder {
    sensor_format: Option<SensorFormat>,
    demosaic: Option<DemosaicAlgorithm>,
    output_dir: Option<PathBuf>,
    gutter: Option<u32>,
    compression: Option<TiffCompression>,
    write_tiff: Option<bool>,
}

impl AnalysisConfigBuilder {
    pub fn sensor_format(mut self, format: SensorFormat) -> Self {
        self.sensor_format = Some(format);
        self
    }

    pub fn demosaic(mut self, algorithm: DemosaicAlgorithm) -> Self {
        self.demosaic = Some(algorithm);
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn gutter(mut self, pixels: u32) -> Self {
        self.gutter = Some(pixels);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn write_tiff(mut self, enable: bool) -> Self {
        self.write_tiff = Some(enable);
        self
    }

    pub fn build(self) -> AnalysisConfig {
        let default = AnalysisConfig::default();
        AnalysisConfig {
            sensor_format: self.sensor_format.unwrap_or(default.sensor_format),
            demosaic: self.demosaic.unwrap_or(default.demosaic),
            output_dir: self.output_dir.unwrap_or(default.output_dir),
            gutter: self.gutter.unwrap_or(default.gutter),
            compression: self.compression.unwrap_or(default.compression),
            write_tiff: self.write_tiff.unwrap_or(default.write_tiff),
        }
    }
}
