use crate::image_pipeline::common::config::AnalysisConfig;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::viewer::types::PolarizationView;

pub trait ViewWriter {
    fn write_views(&self, views: &[PolarizationView], config: &AnalysisConfig) -> Result<()>;
}
