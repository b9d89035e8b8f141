//! RAW image reading module
//!
//! This module turns encoded capture files into single-channel sample grids.

mod reader;
mod image_crate_reader;
pub mod types;

#[cfg(test)]
mod tests;

pub use reader::RawImageReader;
pub use image_crate_reader::ImageCrateReader;
pub use types::{RawImageData, SensorFormat};
