use std::collections::HashSet;

use crate::image_pipeline::common::error::AnalysisError;
use crate::image_pipeline::polarization::{
    POLARIZER_LAYOUT, PhaseOffset, PolarizationAngle, PolarizationExtractor, check_saturation,
};
use crate::image_pipeline::raw::{RawImageData, SensorFormat};

fn extractor() -> PolarizationExtractor {
    PolarizationExtractor::new(SensorFormat::default())
}

fn mosaic(width: usize, height: usize, data: Vec<u16>) -> RawImageData {
    RawImageData::new(width, height, data, 16)
}

#[test]
fn test_layout_table() {
    assert_eq!(POLARIZER_LAYOUT.offset(PolarizationAngle::Deg0), PhaseOffset::new(1, 1));
    assert_eq!(POLARIZER_LAYOUT.offset(PolarizationAngle::Deg45), PhaseOffset::new(0, 1));
    assert_eq!(POLARIZER_LAYOUT.offset(PolarizationAngle::Deg90), PhaseOffset::new(0, 0));
    assert_eq!(POLARIZER_LAYOUT.offset(PolarizationAngle::Deg135), PhaseOffset::new(1, 0));
}

#[test]
fn test_two_by_two_mosaic_maps_each_angle() {
    let raw = mosaic(2, 2, vec![10, 20, 30, 40]);

    let set = extractor().extract(&raw).unwrap();

    assert_eq!(set.get(PolarizationAngle::Deg90).data, vec![0]);
    assert_eq!(set.get(PolarizationAngle::Deg45).data, vec![1]);
    assert_eq!(set.get(PolarizationAngle::Deg135).data, vec![1]);
    assert_eq!(set.get(PolarizationAngle::Deg0).data, vec![2]);
    for frame in set.iter() {
        assert_eq!((frame.width, frame.height), (1, 1));
    }
}

#[test]
fn test_frames_partition_the_mosaic() {
    let (width, height) = (8, 6);
    // Tag every position with its index above the padding bits so the shift
    // recovers the index.
    let data = (0..width * height).map(|i| (i as u16) << 4).collect();
    let raw = mosaic(width, height, data);

    let set = extractor().extract(&raw).unwrap();

    let mut seen = HashSet::new();
    for frame in set.iter() {
        assert_eq!((frame.width, frame.height), (width / 2, height / 2));
        assert_eq!(frame.data.len(), width * height / 4);
        let phase = POLARIZER_LAYOUT.offset(frame.angle);
        for (i, &index) in frame.data.iter().enumerate() {
            let index = index as usize;
            assert_eq!(index / width, 2 * (i / frame.width) + phase.row);
            assert_eq!(index % width, 2 * (i % frame.width) + phase.col);
            assert!(seen.insert(index), "position {} sampled twice", index);
        }
    }
    assert_eq!(seen.len(), width * height);
}

#[test]
fn test_constant_mosaic_is_shifted_everywhere() {
    let constant = 0xABCD;
    let raw = mosaic(6, 4, vec![constant; 24]);

    let set = extractor().extract(&raw).unwrap();

    for frame in set.iter() {
        assert_eq!(frame.bits_per_sample, 12);
        assert!(frame.data.iter().all(|&v| v == constant >> 4));
    }
}

#[test]
fn test_odd_dimensions_are_rejected() {
    let odd_width = mosaic(3, 2, vec![0; 6]);
    let odd_height = mosaic(2, 5, vec![0; 10]);

    assert!(matches!(
        extractor().extract(&odd_width),
        Err(AnalysisError::InvalidDimensions(3, 2))
    ));
    assert!(matches!(
        extractor().extract(&odd_height),
        Err(AnalysisError::InvalidDimensions(2, 5))
    ));
}

#[test]
fn test_empty_mosaic_is_rejected() {
    let raw = mosaic(0, 4, Vec::new());

    assert!(matches!(
        extractor().extract(&raw),
        Err(AnalysisError::InvalidDimensions(0, 4))
    ));
}

#[test]
fn test_short_buffer_is_rejected() {
    let raw = mosaic(4, 4, vec![0; 15]);

    assert!(matches!(
        extractor().extract(&raw),
        Err(AnalysisError::BufferSizeMismatch {
            expected: 16,
            actual: 15
        })
    ));
}

#[test]
fn test_saturated_zero_degree_sample_warns() {
    let mut data = vec![0x1000; 16];
    // (1, 1) lies on the 0° lattice; 0xFFF0 >> 4 == 4095.
    data[4 + 1] = 0xFFF0;
    let raw = mosaic(4, 4, data);
    let format = SensorFormat::default();

    let set = PolarizationExtractor::new(format).extract(&raw).unwrap();
    let report = check_saturation(set.get(PolarizationAngle::Deg0), format.saturation_level());

    assert!(report.saturated);
    assert_eq!(report.max_value, 4095);
    assert_eq!(report.angle, PolarizationAngle::Deg0);
}

#[test]
fn test_unsaturated_frame_reports_max_value() {
    let mut data = vec![0x1000; 16];
    data[3 * 4 + 3] = 0xFFE0;
    let raw = mosaic(4, 4, data);
    let format = SensorFormat::default();

    let set = PolarizationExtractor::new(format).extract(&raw).unwrap();
    let report = check_saturation(set.get(PolarizationAngle::Deg0), format.saturation_level());

    assert!(!report.saturated);
    assert_eq!(report.max_value, 4094);
    assert_eq!(report.threshold, 4095);
}

#[test]
fn test_saturation_on_other_angles_is_ignored() {
    let mut data = vec![0; 16];
    // (0, 0) belongs to 90°.
    data[0] = 0xFFFF;
    let raw = mosaic(4, 4, data);
    let format = SensorFormat::default();

    let set = PolarizationExtractor::new(format).extract(&raw).unwrap();

    assert!(check_saturation(set.get(PolarizationAngle::Deg90), 4095).saturated);
    assert!(!check_saturation(set.get(PolarizationAngle::Deg0), 4095).saturated);
}

#[test]
fn test_angle_labels() {
    let labels: Vec<String> = PolarizationAngle::ALL.iter().map(|a| a.label()).collect();

    assert_eq!(
        labels,
        vec![
            "Polarization 0°",
            "Polarization 45°",
            "Polarization 90°",
            "Polarization 135°"
        ]
    );
}
