//! Presentation of the demosaiced polarization channels
//!
//! The four channels are tiled into a 2x2 grid scaled to 8-bit, and written
//! alongside a labeled 16-bit TIFF holding one page per angle.

mod file_view_writer;
mod grid;
mod writer;
pub mod types;


pub use file_view_writer::{FileViewWriter, GRID_FILE_NAME, TIFF_FILE_NAME};
pub use grid::compose_grid;
pub use types::{PolarizationView, grid_cell};
pub use writer::ViewWriter;
