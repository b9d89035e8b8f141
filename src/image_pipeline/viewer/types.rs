//! Viewer types

use crate::image_pipeline::debayer::types::RgbImageData;
use crate::image_pipeline::polarization::types::PolarizationAngle;

/// A demosaiced polarization channel ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolarizationView {
    pub angle: PolarizationAngle,
    pub image: RgbImageData,
}

/// Panel cell of an angle in the 2x2 grid, as (row, col).
///
/// ```text
///   0°    45°
///  90°   135°
/// ```
pub fn grid_cell(angle: PolarizationAngle) -> (u32, u32) {
    let index = angle.index() as u32;
    (index / 2, index % 2)
}
