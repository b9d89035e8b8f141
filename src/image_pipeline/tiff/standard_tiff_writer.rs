use std::io::{Cursor, Write};

use tiff::encoder::colortype::RGB16;
use tiff::encoder::compression::DeflateLevel;
use tiff::encoder::{Compression, TiffEncoder};
use tiff::tags::Tag;
use tracing::debug;

use crate::image_pipeline::common::error::{AnalysisError, Result};
use crate::image_pipeline::tiff::types::{LabeledFrame, TiffCompression};
use crate::image_pipeline::tiff::writer::TiffWriter;

pub struct StandardTiffWriter;

fn encode_error(e: tiff::TiffError) -> AnalysisError {
    AnalysisError::EncodeError(e.to_string())
}

impl TiffWriter for StandardTiffWriter {
    fn write_pages(
        &self,
        pages: &[LabeledFrame<'_>],
        output: &mut dyn Write,
        compression: TiffCompression,
    ) -> Result<()> {
        debug!("Encoding {} TIFF pages", pages.len());

        let compression = match compression {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::DeflateFast => Compression::Deflate(DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => Compression::Deflate(DeflateLevel::Balanced),
            TiffCompression::DeflateBest => Compression::Deflate(DeflateLevel::Best),
        };

        let mut buffer = Vec::new();
        {
            let mut encoder = TiffEncoder::new(Cursor::new(&mut buffer))
                .map_err(encode_error)?
                .with_compression(compression);

            for page in pages {
                let mut image = encoder
                    .new_image::<RGB16>(page.image.width as u32, page.image.height as u32)
                    .map_err(encode_error)?;
                image
                    .encoder()
                    .write_tag(Tag::ImageDescription, page.label)
                    .map_err(encode_error)?;
                image.write_data(&page.image.data).map_err(encode_error)?;
                debug!(
                    "Wrote page '{}' {}x{}",
                    page.label, page.image.width, page.image.height
                );
            }
        }

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
