use tracing::{info, warn};

use crate::image_pipeline::polarization::types::{PolarizationAngle, PolarizationFrame};

/// Channel inspected for over-exposure.
pub const SATURATION_ANGLE: PolarizationAngle = PolarizationAngle::Deg0;

/// Outcome of scanning one frame for saturated pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaturationReport {
    pub angle: PolarizationAngle,
    /// Brightest sample in the frame
    pub max_value: u16,
    /// Sensor saturation level the frame was compared against
    pub threshold: u16,
    pub saturated: bool,
}

impl SaturationReport {
    /// Emits the over-exposure warning, or the brightest value when the frame
    /// is not saturated.
    pub fn log(&self) {
        if self.saturated {
            warn!(
                angle = %self.angle,
                threshold = self.threshold,
                "Image has over-exposed pixels"
            );
        } else {
            info!("Max pixel: {}", self.max_value);
        }
    }
}

/// Compares the brightest sample of `frame` with `threshold`.
///
/// `threshold` must be expressed in the same bit depth as the frame, i.e. the
/// sensor's native saturation level once the container padding is removed.
pub fn check_saturation(frame: &PolarizationFrame, threshold: u16) -> SaturationReport {
    let max_value = frame.max_value().unwrap_or(0);

    SaturationReport {
        angle: frame.angle,
        max_value,
        threshold,
        saturated: max_value >= threshold,
    }
}
