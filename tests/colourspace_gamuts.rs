//! RGB colourspace gamuts against the MacAdam limits.
//!
//! Exercises the colour model pipeline end to end: RGB to XYZ through the
//! normalised primary matrix, XYZ to xyY and the membership test.

use macadam::prelude::*;
use macadam::models::rgb::dataset::{BT2020, SRGB};

/// Linear RGB cube corners other than black and white.
const CORNERS: [[f64; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 1.0],
    [1.0, 0.0, 1.0],
];

fn xyy_corners(name: &str) -> Vec<[f64; 3]> {
    let space = rgb_colourspace(name).unwrap();
    CORNERS
        .iter()
        .map(|rgb| xyz_to_xyy(space.rgb_to_xyz(*rgb, false), space.whitepoint()))
        .collect()
}

#[test]
fn srgb_gamut_is_within_d65_limits() {
    let corners = xyy_corners(SRGB);
    let inside = is_within_macadam_limits(&corners, "D65", None).unwrap();
    assert_eq!(inside, vec![true; CORNERS.len()]);
}

#[test]
fn bt2020_primaries_exceed_d65_limits() {
    let corners = xyy_corners(BT2020);
    let inside = is_within_macadam_limits(&corners, "D65", None).unwrap();
    assert_eq!(inside, vec![false; CORNERS.len()]);
}

#[test]
fn greys_are_within_limits_for_every_colourspace() {
    let greys: Vec<[f64; 3]> = [0.05, 0.5, 0.9]
        .iter()
        .map(|g| {
            let space = rgb_colourspace(BT2020).unwrap();
            xyz_to_xyy(space.rgb_to_xyz([*g; 3], false), space.whitepoint())
        })
        .collect();
    assert_eq!(
        is_within_macadam_limits(&greys, "D65", None).unwrap(),
        vec![true; 3]
    );
}

#[test]
fn encoded_values_decode_before_conversion() {
    let space = rgb_colourspace(SRGB).unwrap();
    let encoded = space.xyz_to_rgb([0.2, 0.3, 0.25], true);
    let xyz = space.rgb_to_xyz(encoded, true);
    for (a, b) in xyz.iter().zip([0.2, 0.3, 0.25]) {
        assert!((a - b).abs() < 1e-12, "{a} != {b}");
    }
    let xyy = xyz_to_xyy(xyz, space.whitepoint());
    assert!(is_within_macadam_limits(&xyy, "D65", None).unwrap());
}

#[test]
fn bt2020_red_stays_outside_d65_limits_at_any_rounding() {
    // The D65 solid is no brighter than Y = 0.084 near this chromaticity.
    for x in [0.708, 0.708_000_000_000_000_1] {
        for luminance in [0.1, 0.2, 0.26, 0.2627] {
            assert!(
                !is_within_macadam_limits(&[x, 0.292, luminance], "D65", None).unwrap(),
                "x = {x}, Y = {luminance}"
            );
        }
    }
}

#[test]
fn flat_cells_on_the_long_wavelength_edge_reject_distant_points() {
    let tri = optimal_colour_stimuli_triangulation("D65").unwrap();
    for z in [-4.994e-17, -1e-17, 0.0, 1e-17] {
        let red = Point::new([0.636_953_506_785_074_2, 0.262_698_338_956_556, z]);
        let result = tri.locate(&red, &LocateOptions::default(), None).unwrap();
        assert_eq!(result, LocateResult::Outside, "z = {z}");
    }
}
