//! RAW image data types

/// Represents a decoded single-channel polarization mosaic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Row-major samples (polarizer and Bayer pattern interleaved)
    pub data: Vec<u16>,
    /// Bits per sample of the decoded container (16 for a 16-bit PNG)
    pub bits_per_sample: u32,
}

impl RawImageData {
    pub fn new(width: usize, height: usize, data: Vec<u16>, bits_per_sample: u32) -> Self {
        Self {
            width,
            height,
            data,
            bits_per_sample,
        }
    }

    /// Sample at (row, col). Panics when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> u16 {
        self.data[row * self.width + col]
    }
}

/// Placement of the sensor's significant bits inside the sample container.
///
/// The camera delivers 12-bit values left-justified in 16-bit words, so the
/// low `container_bits - sensor_bits` bits are padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorFormat {
    /// Width of the stored sample word
    pub container_bits: u32,
    /// Native bit depth of the sensor
    pub sensor_bits: u32,
}

/// Bit depth of the display range the viewer targets.
const DISPLAY_BITS: u32 = 8;

impl SensorFormat {
    pub const fn new(container_bits: u32, sensor_bits: u32) -> Self {
        Self {
            container_bits,
            sensor_bits,
        }
    }

    /// Right shift that drops the padding bits and yields true sensor values.
    pub fn padding_shift(&self) -> u32 {
        self.container_bits.saturating_sub(self.sensor_bits)
    }

    /// Largest value a sensor sample can take once the padding is removed.
    pub fn saturation_level(&self) -> u16 {
        ((1u32 << self.sensor_bits.min(16)) - 1) as u16
    }

    /// Right shift that maps sensor values onto 8-bit display values.
    pub fn display_shift(&self) -> u32 {
        self.sensor_bits.saturating_sub(DISPLAY_BITS)
    }
}

impl Default for SensorFormat {
    fn default() -> Self {
        Self::new(16, 12)
    }
}
