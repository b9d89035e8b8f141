//! Common utilities module
//!
//! This module contains shared utilities used across the image pipeline:
//! the error type, the analysis configuration and stage timing.

pub mod config;
pub mod error;
pub mod timing;

pub use config::{AnalysisConfig, AnalysisConfigBuilder};
pub use error::{AnalysisError, Result};
pub use timing::{PipelineTimings, StepTiming, Timer};
