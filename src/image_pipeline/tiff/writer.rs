use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::tiff::types::{LabeledFrame, TiffCompression};

pub trait TiffWriter {
    /// Writes every frame as one page of a multi-page TIFF.
    fn write_pages(
        &self,
        pages: &[LabeledFrame<'_>],
        output: &mut dyn Write,
        compression: TiffCompression,
    ) -> Result<()>;
}
