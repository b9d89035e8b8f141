use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageBuffer, ImageFormat, Luma};

use crate::image_pipeline::common::error::AnalysisError;
use crate::image_pipeline::raw::{ImageCrateReader, RawImageReader, SensorFormat};

fn encode_png(image: DynamicImage) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png).unwrap();
    bytes.into_inner()
}

#[test]
fn test_reads_sixteen_bit_png_without_downcast() {
    let mut image = ImageBuffer::<Luma<u16>, Vec<u16>>::new(4, 2);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        *pixel = Luma([0xFFF0 - (y * 4 + x) as u16 * 16]);
    }

    let raw = ImageCrateReader.read_raw(&encode_png(DynamicImage::ImageLuma16(image.clone())))
        .unwrap();

    assert_eq!((raw.width, raw.height), (4, 2));
    assert_eq!(raw.bits_per_sample, 16);
    assert_eq!(raw.get(0, 0), 0xFFF0);
    assert_eq!(raw.get(1, 3), 0xFFF0 - 7 * 16);
    assert_eq!(raw.data, image.into_raw());
}

#[test]
fn test_rejects_eight_bit_input() {
    let image = GrayImage::new(4, 4);

    let result = ImageCrateReader.read_raw(&encode_png(DynamicImage::ImageLuma8(image)));

    assert!(matches!(result, Err(AnalysisError::UnsupportedFormat(_))));
}

#[test]
fn test_rejects_undecodable_bytes() {
    let result = ImageCrateReader.read_raw(b"definitely not a png");

    assert!(matches!(result, Err(AnalysisError::DecodeError(_))));
}

#[test]
fn test_sensor_format_shifts() {
    let format = SensorFormat::new(16, 10);

    assert_eq!(format.padding_shift(), 6);
    assert_eq!(format.saturation_level(), 1023);
    assert_eq!(format.display_shift(), 2);

    let full = SensorFormat::new(16, 16);
    assert_eq!(full.padding_shift(), 0);
    assert_eq!(full.saturation_level(), u16::MAX);
}
