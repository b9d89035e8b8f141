//! Debayering module for converting Bayer pattern mosaics to RGB

pub mod cpu_debayer;
pub mod types;

#[cfg(test)]
mod tests;

pub use cpu_debayer::{CpuDebayer, MOSAIC_PATTERN};
pub use types::{DemosaicAlgorithm, RgbImageData};
