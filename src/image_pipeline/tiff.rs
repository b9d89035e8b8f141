//! TIFF writing module
//!
//! Writes the color frames of a capture as a labeled multi-page 16-bit TIFF.

mod writer;
mod standard_tiff_writer;
pub mod types;

pub use writer::TiffWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{LabeledFrame, TiffCompression};
