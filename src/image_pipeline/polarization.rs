//! Polarization channel extraction
//!
//! The sensor overlays a 2x2 polarizer pattern (0°, 45°, 90°, 135°) on top of
//! the Bayer color filter, at twice its period. This module separates the four
//! polarizer phases into half-resolution Bayer mosaics and checks them for
//! over-exposure.

mod extractor;
mod saturation;
pub mod types;

#[cfg(test)]
mod tests;

pub use extractor::PolarizationExtractor;
pub use saturation::{SATURATION_ANGLE, SaturationReport, check_saturation};
pub use types::{
    POLARIZER_LAYOUT, PhaseOffset, PolarizationAngle, PolarizationFrame, PolarizationSet,
    PolarizerLayout,
};
