//! Analysis result types

use crate::image_pipeline::common::timing::PipelineTimings;
use crate::image_pipeline::polarization::{PolarizationSet, SaturationReport};
use crate::image_pipeline::viewer::PolarizationView;

/// Everything computed from one capture.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Width of the raw mosaic in pixels
    pub width: usize,
    /// Height of the raw mosaic in pixels
    pub height: usize,
    /// The four polarization mosaics, before demosaicing
    pub channels: PolarizationSet,
    /// Demosaiced channels, ordered 0°, 45°, 90°, 135°
    pub views: Vec<PolarizationView>,
    pub saturation: SaturationReport,
    pub timings: PipelineTimings,
}
