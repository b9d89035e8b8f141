use polarview::image_pipeline::common::config::DEFAULT_INPUT_PATH;
use polarview::image_pipeline::{AnalysisConfig, PolarizationPipeline};
use polarview::logger;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_INPUT_PATH.to_string());

    let pipeline = PolarizationPipeline::new(AnalysisConfig::default());

    info!("Polarization pipeline initialized");
    info!("Sensor format: {:?}", pipeline.config().sensor_format);
    info!("Demosaic: {:?}", pipeline.config().demosaic);
    info!("Output directory: {}", pipeline.config().output_dir.display());

    match pipeline.run_file(&input) {
        Ok(report) => {
            info!(
                "Analysis of {} successful ({}x{})",
                input, report.width, report.height
            );
            Ok(())
        }
        Err(e) => {
            error!("Analysis failed: {}", e);
            Err(e.into())
        }
    }
}
