//! Types for debayering operations

/// RGB image data after debayering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGB pixel data interleaved [R, G, B, R, G, B, ...]
    pub data: Vec<u16>,
    /// Significant bits per sample, inherited from the mosaic
    pub bits_per_sample: u32,
}

impl RgbImageData {
    /// `[r, g, b]` at (row, col).
    pub fn pixel(&self, row: usize, col: usize) -> [u16; 3] {
        let i = (row * self.width + col) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    pub fn pixels(&self) -> impl Iterator<Item = &[u16]> {
        self.data.chunks_exact(3)
    }
}

/// Interpolation used to fill in the missing color samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemosaicAlgorithm {
    /// Copy the nearest sample of each color
    NearestNeighbour,
    /// Bilinear interpolation (default)
    Linear,
    /// Bicubic interpolation
    Cubic,
}
