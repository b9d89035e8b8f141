use std::fs::File;
use std::path::Path;

use image::ImageFormat;
use tracing::{debug, info};

use crate::image_pipeline::common::config::AnalysisConfig;
use crate::image_pipeline::common::error::{AnalysisError, Result};
use crate::image_pipeline::tiff::{LabeledFrame, StandardTiffWriter, TiffWriter};
use crate::image_pipeline::viewer::grid::compose_grid;
use crate::image_pipeline::viewer::types::{PolarizationView, grid_cell};
use crate::image_pipeline::viewer::writer::ViewWriter;

pub const GRID_FILE_NAME: &str = "polarization_grid.png";
pub const TIFF_FILE_NAME: &str = "polarization_views.tiff";

/// Writes the grid PNG and, when enabled, the labeled TIFF into
/// `config.output_dir`.
pub struct FileViewWriter<T: TiffWriter = StandardTiffWriter> {
    tiff_writer: T,
}

impl FileViewWriter<StandardTiffWriter> {
    pub fn new() -> Self {
        Self {
            tiff_writer: StandardTiffWriter,
        }
    }
}

impl Default for FileViewWriter<StandardTiffWriter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TiffWriter> FileViewWriter<T> {
    pub fn with_tiff_writer(tiff_writer: T) -> Self {
        Self { tiff_writer }
    }

    fn write_grid(&self, views: &[PolarizationView], config: &AnalysisConfig, path: &Path) -> Result<()> {
        let grid = compose_grid(views, config.sensor_format.display_shift(), config.gutter)?;

        grid.save_with_format(path, ImageFormat::Png)
            .map_err(|e| AnalysisError::EncodeError(format!("{}: {}", path.display(), e)))?;

        for view in views {
            let (row, col) = grid_cell(view.angle);
            debug!(row, col, "Panel '{}'", view.angle.label());
        }
        info!(
            path = %path.display(),
            width = grid.width(),
            height = grid.height(),
            "Wrote polarization grid"
        );
        Ok(())
    }

    fn write_tiff(&self, views: &[PolarizationView], config: &AnalysisConfig, path: &Path) -> Result<()> {
        let labels: Vec<String> = views.iter().map(|view| view.angle.ascii_label()).collect();
        let pages: Vec<LabeledFrame<'_>> = views
            .iter()
            .zip(&labels)
            .map(|(view, label)| LabeledFrame {
                label,
                image: &view.image,
            })
            .collect();

        let mut file = File::create(path)
            .map_err(|e| AnalysisError::OutputWriteError(format!("{}: {}", path.display(), e)))?;
        self.tiff_writer
            .write_pages(&pages, &mut file, config.compression)?;

        info!(path = %path.display(), pages = pages.len(), "Wrote labeled TIFF");
        Ok(())
    }
}

impl<T: TiffWriter> ViewWriter for FileViewWriter<T> {
    fn write_views(&self, views: &[PolarizationView], config: &AnalysisConfig) -> Result<()> {
        let dir = &config.output_dir;
        std::fs::create_dir_all(dir)
            .map_err(|e| AnalysisError::OutputWriteError(format!("{}: {}", dir.display(), e)))?;

        {
            let _span = tracing::info_span!("write_grid").entered();
            self.write_grid(views, config, &dir.join(GRID_FILE_NAME))?;
        }

        if config.write_tiff {
            let _span = tracing::info_span!("write_tiff").entered();
            self.write_tiff(views, config, &dir.join(TIFF_FILE_NAME))?;
        }

        Ok(())
    }
}
