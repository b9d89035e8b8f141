use crate::image_pipeline::common::error::AnalysisError;
use crate::image_pipeline::debayer::{CpuDebayer, DemosaicAlgorithm};
use crate::image_pipeline::polarization::{PolarizationAngle, PolarizationFrame};

fn frame(width: usize, height: usize, data: Vec<u16>) -> PolarizationFrame {
    PolarizationFrame {
        angle: PolarizationAngle::Deg0,
        width,
        height,
        data,
        bits_per_sample: 12,
    }
}

/// RGGB mosaic whose red, green and blue sites hold one constant each.
fn channel_mosaic(width: usize, height: usize, rgb: [u16; 3]) -> PolarizationFrame {
    let data = (0..height)
        .flat_map(|row| {
            (0..width).map(move |col| match (row % 2, col % 2) {
                (0, 0) => rgb[0],
                (1, 1) => rgb[2],
                _ => rgb[1],
            })
        })
        .collect();
    frame(width, height, data)
}

#[test]
fn test_uniform_mosaic_stays_uniform() {
    let debayer = CpuDebayer::new(DemosaicAlgorithm::Linear);
    let mosaic = frame(8, 6, vec![1000; 48]);

    let rgb = debayer.process(&mosaic).unwrap();

    assert_eq!((rgb.width, rgb.height), (8, 6));
    assert_eq!(rgb.data.len(), 8 * 6 * 3);
    assert_eq!(rgb.bits_per_sample, 12);
    assert!(rgb.data.iter().all(|&v| v == 1000));
}

#[test]
fn test_channels_follow_rggb_pattern() {
    let debayer = CpuDebayer::default();
    let mosaic = channel_mosaic(6, 6, [100, 200, 300]);

    let rgb = debayer.process(&mosaic).unwrap();

    for row in 1..5 {
        for col in 1..5 {
            assert_eq!(rgb.pixel(row, col), [100, 200, 300], "pixel ({row}, {col})");
        }
    }
}

#[test]
fn test_demosaic_is_deterministic() {
    let debayer = CpuDebayer::new(DemosaicAlgorithm::Linear);
    let data = (0..64u16).map(|v| v * 61 % 4096).collect();
    let mosaic = frame(8, 8, data);

    let first = debayer.process(&mosaic).unwrap();
    let second = debayer.process(&mosaic).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_single_pixel_frame_is_rejected() {
    let debayer = CpuDebayer::default();

    let result = debayer.process(&frame(1, 1, vec![7]));

    assert!(matches!(result, Err(AnalysisError::DemosaicError(_))));
}

#[test]
fn test_mismatched_buffer_is_rejected() {
    let debayer = CpuDebayer::default();

    let result = debayer.process(&frame(4, 4, vec![0; 10]));

    assert!(matches!(result, Err(AnalysisError::DemosaicError(_))));
}
