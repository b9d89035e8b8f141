//! Image processing pipeline module
//!
//! This module splits polarization camera captures into their four polarizer
//! channels, with separate modules for reading, channel extraction,
//! debayering, presentation and orchestration.

pub mod analysis;
pub mod common;
pub mod debayer;
pub mod polarization;
pub mod raw;
pub mod tiff;
pub mod viewer;

pub use common::{
    AnalysisConfig,
    AnalysisConfigBuilder,
    AnalysisError,
    PipelineTimings,
    Result,
};

pub use raw::{
    ImageCrateReader,
    RawImageData,
    RawImageReader,
    SensorFormat,
};

pub use polarization::{
    PolarizationAngle,
    PolarizationExtractor,
    PolarizationFrame,
    PolarizationSet,
    SaturationReport,
};

pub use debayer::{
    CpuDebayer,
    DemosaicAlgorithm,
    RgbImageData,
};

pub use self::tiff::{
    StandardTiffWriter,
    TiffCompression,
    TiffWriter,
};

pub use viewer::{
    FileViewWriter,
    PolarizationView,
    ViewWriter,
};

pub use analysis::{
    AnalysisReport,
    PolarizationPipeline,
};
