use image::{Rgb, RgbImage};

use crate::image_pipeline::common::error::{AnalysisError, Result};
use crate::image_pipeline::viewer::types::{PolarizationView, grid_cell};

/// Tiles `views` into a 2x2 grid of 8-bit RGB panels.
///
/// Every sample is shifted right by `display_shift` and clamped to 255; all
/// panels share that one scale. Panels are separated by `gutter` black pixels.
/// Cells without a view stay black.
///
/// # Errors
///
/// * `InvalidDimensions` - no views, or views of different sizes
pub fn compose_grid(views: &[PolarizationView], display_shift: u32, gutter: u32) -> Result<RgbImage> {
    let Some(first) = views.first() else {
        return Err(AnalysisError::InvalidDimensions(0, 0));
    };
    let (panel_width, panel_height) = (first.image.width, first.image.height);

    if let Some(mismatch) = views
        .iter()
        .find(|view| view.image.width != panel_width || view.image.height != panel_height)
    {
        return Err(AnalysisError::InvalidDimensions(
            mismatch.image.width,
            mismatch.image.height,
        ));
    }

    let (panel_width, panel_height) = (panel_width as u32, panel_height as u32);
    let mut canvas = RgbImage::new(2 * panel_width + gutter, 2 * panel_height + gutter);

    for view in views {
        let (cell_row, cell_col) = grid_cell(view.angle);
        let x0 = cell_col * (panel_width + gutter);
        let y0 = cell_row * (panel_height + gutter);

        for (i, rgb) in view.image.pixels().enumerate() {
            let x = x0 + (i as u32 % panel_width);
            let y = y0 + (i as u32 / panel_width);
            canvas.put_pixel(
                x,
                y,
                Rgb([
                    to_display(rgb[0], display_shift),
                    to_display(rgb[1], display_shift),
                    to_display(rgb[2], display_shift),
                ]),
            );
        }
    }

    Ok(canvas)
}

fn to_display(sample: u16, shift: u32) -> u8 {
    sample.checked_shr(shift).unwrap_or(0).min(u8::MAX as u16) as u8
}
