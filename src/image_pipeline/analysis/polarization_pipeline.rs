use std::path::Path;

use tracing::{info, instrument};

use crate::image_pipeline::{
    analysis::types::AnalysisReport,
    common::{
        config::AnalysisConfig,
        error::{AnalysisError, Result},
        timing::{PipelineTimings, Timer},
    },
    debayer::CpuDebayer,
    polarization::{PolarizationExtractor, SATURATION_ANGLE, check_saturation},
    raw::{ImageCrateReader, RawImageReader},
    viewer::{FileViewWriter, PolarizationView, ViewWriter},
};

pub struct PolarizationPipeline<R: RawImageReader, W: ViewWriter> {
    reader: R,
    writer: W,
    config: AnalysisConfig,
}

impl PolarizationPipeline<ImageCrateReader, FileViewWriter> {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            writer: FileViewWriter::new(),
            config,
        }
    }
}

impl<R: RawImageReader, W: ViewWriter> PolarizationPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: AnalysisConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Decodes `input_data` and computes every polarization channel.
    ///
    /// Nothing is written; see [`render`](Self::render).
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn analyze(&self, input_data: &[u8]) -> Result<AnalysisReport> {
        let mut timings = PipelineTimings::new();
        info!("Starting polarization analysis");

        let raw_image = {
            let _span = tracing::info_span!("decode_raw").entered();
            let timer = Timer::start("decode_raw");
            let raw_image = self.reader.read_raw(input_data)?;
            timings.record(timer);
            raw_image
        };

        let channels = {
            let _span = tracing::info_span!(
                "extract_polarization",
                width = raw_image.width,
                height = raw_image.height
            )
            .entered();
            let timer = Timer::start("extract_polarization");
            let channels = PolarizationExtractor::new(self.config.sensor_format).extract(&raw_image)?;
            timings.record(timer);
            channels
        };

        let saturation = check_saturation(
            channels.get(SATURATION_ANGLE),
            self.config.sensor_format.saturation_level(),
        );
        saturation.log();

        let views = {
            let _span = tracing::info_span!("demosaic").entered();
            let timer = Timer::start("demosaic");
            let debayer = CpuDebayer::new(self.config.demosaic);
            let views = channels
                .iter()
                .map(|frame| -> Result<PolarizationView> {
                    Ok(PolarizationView {
                        angle: frame.angle,
                        image: debayer.process(frame)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            timings.record(timer);
            views
        };

        info!(
            width = raw_image.width,
            height = raw_image.height,
            "Analysis complete in {:.3}ms",
            timings.total_duration().as_secs_f64() * 1000.0
        );
        timings.log_summary();

        Ok(AnalysisReport {
            width: raw_image.width,
            height: raw_image.height,
            channels,
            views,
            saturation,
            timings,
        })
    }

    #[instrument(skip(self, input_path))]
    pub fn analyze_file<P: AsRef<Path>>(&self, input_path: P) -> Result<AnalysisReport> {
        let input_path = input_path.as_ref();
        info!(input = %input_path.display(), "Analyzing file");

        let timer = Timer::start("read_input_file");
        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                AnalysisError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };
        let (name, duration) = timer.stop();

        let mut report = self.analyze(&input_data)?;
        report.timings.add_step(name, duration);
        Ok(report)
    }

    /// Hands the demosaiced channels of `report` to the view writer.
    pub fn render(&self, report: &AnalysisReport) -> Result<()> {
        let _span = tracing::info_span!("render").entered();
        self.writer.write_views(&report.views, &self.config)
    }

    /// Analyzes `input_path` and renders the result.
    pub fn run_file<P: AsRef<Path>>(&self, input_path: P) -> Result<AnalysisReport> {
        let report = self.analyze_file(input_path)?;
        self.render(&report)?;
        Ok(report)
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnalysisConfig) {
        self.config = config;
    }
}
