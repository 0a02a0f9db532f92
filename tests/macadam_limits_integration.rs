//! Integration tests for the MacAdam limits membership test.
//!
//! Covers the reference scenarios for the built-in illuminants, query shapes,
//! error reporting, tolerance handling and cache behaviour.

use macadam::prelude::*;
use macadam::volume::datasets::optimal_colour_stimuli::{
    ILLUMINANT_A_OPTIMAL_COLOUR_STIMULI, OPTIMAL_COLOUR_STIMULI_SAMPLES,
};
use std::sync::Arc;
use std::thread;

const ILLUMINANTS: [&str; 3] = ["A", "C", "D65"];

// =============================================================================
// REFERENCE SCENARIOS
// =============================================================================

#[test]
fn reference_colours_for_illuminant_a() {
    assert!(is_within_macadam_limits(&[0.4476, 0.4075, 0.5], "A", None).unwrap());
    assert!(!is_within_macadam_limits(&[0.0005, 0.0031, 0.001], "A", None).unwrap());
}

#[test]
fn reference_batch_for_illuminant_a() {
    let batch = [[0.3205, 0.4131, 0.51], [0.0005, 0.0031, 0.001]];
    assert_eq!(
        is_within_macadam_limits(&batch, "A", None).unwrap(),
        [true, false]
    );
    assert_eq!(
        is_within_macadam_limits(&batch.to_vec(), "A", None).unwrap(),
        vec![true, false]
    );
}

#[test]
fn reference_colours_for_all_builtin_illuminants() {
    for illuminant in ILLUMINANTS {
        let results = is_within_macadam_limits(
            &[
                [0.4476, 0.4075, 0.5],
                [0.3205, 0.4131, 0.51],
                [0.0005, 0.0031, 0.001],
                [0.7, 0.25, 0.1],
            ],
            illuminant,
            None,
        )
        .unwrap();
        assert_eq!(results, [true, true, false, false], "illuminant {illuminant}");
    }
}

#[test]
fn white_point_dependence() {
    // Mid-grey at the D65 chromaticity is too blue for illuminant A.
    let grey = [0.3127, 0.329, 0.5];
    assert!(!is_within_macadam_limits(&grey, "A", None).unwrap());
    assert!(is_within_macadam_limits(&grey, "C", None).unwrap());
    assert!(is_within_macadam_limits(&grey, "D65", None).unwrap());
}

#[test]
fn impossible_colours_are_outside() {
    for illuminant in ILLUMINANTS {
        let results = is_within_macadam_limits(
            &[
                // Brighter than the perfect reflector.
                [0.33, 0.33, 1.5],
                // Negative luminance.
                [0.33, 0.33, -0.1],
                // Outside the spectrum locus.
                [0.05, 0.05, 0.05],
                // y = 0 with non-zero luminance has no XYZ representation.
                [0.3, 0.0, 0.5],
            ],
            illuminant,
            None,
        )
        .unwrap();
        assert_eq!(results, [false; 4], "illuminant {illuminant}");
    }
}

#[test]
fn black_is_within_limits() {
    assert!(is_within_macadam_limits(&[0.3, 0.3, 0.0], "A", None).unwrap());
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn unknown_illuminant_is_not_false() {
    let err = is_within_macadam_limits(&[0.4476, 0.4075, 0.5], "Z", None).unwrap_err();
    match &err {
        VolumeError::NotFound {
            illuminant,
            available,
        } => {
            assert_eq!(illuminant, "Z");
            assert_eq!(available, &["A", "C", "D65"]);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains("\"Z\""));
    assert!(message.contains("A, C, D65"));

    assert!(matches!(
        xyz_optimal_colour_stimuli("Z"),
        Err(VolumeError::NotFound { .. })
    ));
    assert!(matches!(
        optimal_colour_stimuli_triangulation("Z"),
        Err(VolumeError::NotFound { .. })
    ));
}

#[test]
fn invalid_tolerances_are_rejected() {
    for tolerance in [-1e-12, -1.0, f64::NAN] {
        let result = is_within_macadam_limits(&[0.4476, 0.4075, 0.5], "A", Some(tolerance));
        assert!(
            matches!(result, Err(VolumeError::InvalidTolerance { .. })),
            "tolerance {tolerance}"
        );
    }
}

// =============================================================================
// TOLERANCE
// =============================================================================

/// A colour just beyond the boundary sample `index` of illuminant A, pushed
/// outwards from the centre of the solid by a relative `1e-9`.
fn just_outside_boundary_sample(index: usize) -> [f64; 3] {
    let whitepoint = illuminant_chromaticity("A").unwrap();
    let centre = [0.5 * 1.0984, 0.5, 0.5 * 0.3558];
    let vertex = xyy_to_xyz(ILLUMINANT_A_OPTIMAL_COLOUR_STIMULI[index]).map(|c| c / 100.0);
    let outside: [f64; 3] =
        std::array::from_fn(|i| centre[i] + (1.0 + 1e-9) * (vertex[i] - centre[i]));
    xyz_to_xyy(outside, whitepoint)
}

#[test]
fn tolerance_admits_colours_near_the_boundary() {
    for index in [300, 800, 1200] {
        let query = just_outside_boundary_sample(index);
        for tolerance in [0.0, 1e-12] {
            assert!(
                !is_within_macadam_limits(&query, "A", Some(tolerance)).unwrap(),
                "sample {index}, tolerance {tolerance}"
            );
        }
        for tolerance in [1e-6, 1e-3, 1e-1] {
            assert!(
                is_within_macadam_limits(&query, "A", Some(tolerance)).unwrap(),
                "sample {index}, tolerance {tolerance}"
            );
        }
    }
}

#[test]
fn boundary_samples_are_within_limits() {
    let samples: Vec<[f64; 3]> = ILLUMINANT_A_OPTIMAL_COLOUR_STIMULI
        .iter()
        .step_by(37)
        .map(|xyy| [xyy[0], xyy[1], xyy[2] / 100.0])
        .collect();
    let results = is_within_macadam_limits(&samples, "A", None).unwrap();
    assert!(results.iter().all(|inside| *inside));
}

// =============================================================================
// CACHES
// =============================================================================

#[test]
fn stimuli_are_normalized_and_shared() {
    let points = xyz_optimal_colour_stimuli("D65").unwrap();
    assert_eq!(points.len(), OPTIMAL_COLOUR_STIMULI_SAMPLES);
    assert_eq!(points[0].coords(), &[0.0, 0.0, 0.0]);
    let white = points[points.len() - 1];
    assert!((white.y() - 1.0).abs() < 1e-12);

    let again = xyz_optimal_colour_stimuli("D65").unwrap();
    assert!(Arc::ptr_eq(&points, &again));
}

#[test]
fn triangulations_are_valid_and_shared() {
    for illuminant in ILLUMINANTS {
        let tri = optimal_colour_stimuli_triangulation(illuminant).unwrap();
        assert!(tri.is_valid().is_ok(), "illuminant {illuminant}");
        assert!(tri.number_of_cells() > 0);
        assert!(tri.number_of_vertices() <= OPTIMAL_COLOUR_STIMULI_SAMPLES);
        let again = optimal_colour_stimuli_triangulation(illuminant).unwrap();
        assert!(Arc::ptr_eq(&tri, &again));
    }
}

#[test]
fn repeated_queries_do_not_rebuild() {
    let limits = MacAdamLimits::default();
    let query = [0.4476, 0.4075, 0.5];
    for _ in 0..5 {
        assert!(limits.is_within_macadam_limits(&query, "A", None).unwrap());
    }
    assert!(limits.is_within_macadam_limits(&query, "C", None).unwrap());
    assert_eq!(limits.stimuli_cache().build_count(), 2);
    assert_eq!(limits.triangulation_cache().build_count(), 2);
    assert_eq!(limits.triangulation_cache().keys(), vec!["A", "C"]);
}

#[test]
fn dataset_changes_take_effect_after_reset() {
    let limits = MacAdamLimits::default();
    let query = [0.4476, 0.4075, 0.5];
    assert!(limits.is_within_macadam_limits(&query, "A", None).unwrap());

    // Shrink illuminant A to its darker half.
    limits.update_dataset(|dataset| {
        let dark: Vec<[f64; 3]> = ILLUMINANT_A_OPTIMAL_COLOUR_STIMULI
            .iter()
            .map(|&[x, y, luminance]| [x, y, luminance * 0.5])
            .collect();
        dataset.insert("A", dark);
    });
    assert!(limits.is_within_macadam_limits(&query, "A", None).unwrap());

    limits.reset_caches();
    assert!(limits.stimuli_cache().is_empty());
    assert!(!limits.is_within_macadam_limits(&query, "A", None).unwrap());
    assert_eq!(limits.triangulation_cache().build_count(), 2);
}

#[test]
fn independent_instances_agree() {
    let first = MacAdamLimits::default();
    let second = MacAdamLimits::default();
    let queries: Vec<[f64; 3]> = (0..200)
        .map(|i| {
            let t = f64::from(i);
            [
                0.15 + 0.5 * (t * 0.37).sin().abs(),
                0.05 + 0.55 * (t * 0.73).cos().abs(),
                (t * 0.11).sin().abs(),
            ]
        })
        .collect();
    for illuminant in ILLUMINANTS {
        let a = first.is_within_macadam_limits(&queries, illuminant, None).unwrap();
        let b = second.is_within_macadam_limits(&queries, illuminant, None).unwrap();
        assert_eq!(a, b, "illuminant {illuminant}");
        // Warm caches answer the same as cold ones.
        let again = first.is_within_macadam_limits(&queries, illuminant, None).unwrap();
        assert_eq!(a, again);
    }
}

#[test]
fn concurrent_first_queries_build_once() {
    let limits = Arc::new(MacAdamLimits::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let limits = Arc::clone(&limits);
            thread::spawn(move || {
                limits
                    .is_within_macadam_limits(&[0.3205, 0.4131, 0.51], "D65", None)
                    .unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert_eq!(limits.triangulation_cache().build_count(), 1);
    assert_eq!(limits.stimuli_cache().build_count(), 1);
}

#[test]
fn global_reset_rebuilds_on_demand() {
    assert!(is_within_macadam_limits(&[0.4476, 0.4075, 0.5], "A", None).unwrap());
    reset_macadam_limits_caches();
    assert!(is_within_macadam_limits(&[0.4476, 0.4075, 0.5], "A", None).unwrap());
    assert!(macadam_limits().triangulation_cache().get("A").is_some());
}
