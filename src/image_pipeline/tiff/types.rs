//! TIFF export types

use crate::image_pipeline::debayer::types::RgbImageData;

/// TIFF compression methods
#[derive(Debug, Clone, Copy)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level (good speed/size balance)
    DeflateFast,
    /// Deflate compression - best compression (slower)
    DeflateBest,
    /// Deflate compression - balanced
    DeflateBalanced,
}

/// One TIFF page: a color frame and the description stored with it.
#[derive(Debug, Clone, Copy)]
pub struct LabeledFrame<'a> {
    /// ASCII page description
    pub label: &'a str,
    pub image: &'a RgbImageData,
}
