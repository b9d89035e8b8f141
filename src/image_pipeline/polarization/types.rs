//! Polarization channel types

use std::fmt;

/// Orientation of the on-chip polarizer above a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarizationAngle {
    Deg0,
    Deg45,
    Deg90,
    Deg135,
}

impl PolarizationAngle {
    /// All angles, in the order used by [`PolarizationSet`] and the viewer grid.
    pub const ALL: [PolarizationAngle; 4] = [
        PolarizationAngle::Deg0,
        PolarizationAngle::Deg45,
        PolarizationAngle::Deg90,
        PolarizationAngle::Deg135,
    ];

    pub fn degrees(self) -> u16 {
        match self {
            PolarizationAngle::Deg0 => 0,
            PolarizationAngle::Deg45 => 45,
            PolarizationAngle::Deg90 => 90,
            PolarizationAngle::Deg135 => 135,
        }
    }

    pub fn index(self) -> usize {
        match self {
            PolarizationAngle::Deg0 => 0,
            PolarizationAngle::Deg45 => 1,
            PolarizationAngle::Deg90 => 2,
            PolarizationAngle::Deg135 => 3,
        }
    }

    /// Panel title, e.g. `Polarization 45°`.
    pub fn label(self) -> String {
        format!("Polarization {}°", self.degrees())
    }

    /// 7-bit variant of [`label`](Self::label) for ASCII-only metadata.
    pub fn ascii_label(self) -> String {
        format!("Polarization {} deg", self.degrees())
    }
}

impl fmt::Display for PolarizationAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Row and column phase of one angle inside each 2x2 polarizer super-pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseOffset {
    pub row: usize,
    pub col: usize,
}

impl PhaseOffset {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Maps every polarization angle to its phase in the sensor mosaic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolarizerLayout {
    offsets: [PhaseOffset; 4],
}

impl PolarizerLayout {
    /// `offsets` is indexed by [`PolarizationAngle::index`].
    pub const fn new(offsets: [PhaseOffset; 4]) -> Self {
        Self { offsets }
    }

    pub fn offset(&self, angle: PolarizationAngle) -> PhaseOffset {
        self.offsets[angle.index()]
    }
}

/// Polarizer alignment of the camera's sensor:
///
/// ```text
///        col 0   col 1
/// row 0   90°     45°
/// row 1  135°      0°
/// ```
pub const POLARIZER_LAYOUT: PolarizerLayout = PolarizerLayout::new([
    PhaseOffset::new(1, 1), // 0°
    PhaseOffset::new(0, 1), // 45°
    PhaseOffset::new(0, 0), // 90°
    PhaseOffset::new(1, 0), // 135°
]);

/// Half-resolution mosaic seen through one polarizer orientation.
///
/// Each frame still carries the Bayer color pattern and holds true sensor
/// values (padding bits already removed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolarizationFrame {
    pub angle: PolarizationAngle,
    pub width: usize,
    pub height: usize,
    /// Row-major samples
    pub data: Vec<u16>,
    /// Significant bits per sample
    pub bits_per_sample: u32,
}

impl PolarizationFrame {
    pub fn get(&self, row: usize, col: usize) -> u16 {
        self.data[row * self.width + col]
    }

    /// Brightest sample, `None` for an empty frame.
    pub fn max_value(&self) -> Option<u16> {
        self.data.iter().copied().max()
    }
}

/// The four polarization frames of one capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolarizationSet {
    frames: [PolarizationFrame; 4],
}

impl PolarizationSet {
    /// `frames` must be ordered as [`PolarizationAngle::ALL`].
    pub(crate) fn from_ordered(frames: [PolarizationFrame; 4]) -> Self {
        debug_assert!(
            frames
                .iter()
                .zip(PolarizationAngle::ALL)
                .all(|(frame, angle)| frame.angle == angle)
        );
        Self { frames }
    }

    pub fn get(&self, angle: PolarizationAngle) -> &PolarizationFrame {
        &self.frames[angle.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PolarizationFrame> {
        self.frames.iter()
    }
}
