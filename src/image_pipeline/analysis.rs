//! Pipeline orchestration
//!
//! Ties reading, polarization extraction, the saturation check, demosaicing
//! and the viewer into a single pass over one capture.

mod polarization_pipeline;
pub mod types;


pub use polarization_pipeline::PolarizationPipeline;
pub use types::AnalysisReport;
