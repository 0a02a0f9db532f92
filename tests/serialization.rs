//! Serialization of configuration and reports with serde.

use macadam::core::triangulation::BoundingBox;
use macadam::prelude::*;

fn unit_cube() -> Vec<Point> {
    let mut points = Vec::new();
    for x in [0.0, 1.0] {
        for y in [0.0, 1.0] {
            for z in [0.0, 1.0] {
                points.push(Point::new([x, y, z]));
            }
        }
    }
    points
}

#[test]
fn locator_configuration_from_json() {
    let json = r#"{
        "triangulation": { "remove_duplicates": true, "max_walk_steps": 64 },
        "locate": { "tolerance": 1e-6, "max_walk_steps": 32 }
    }"#;
    let locator: DelaunayLocator = serde_json::from_str(json).unwrap();
    assert_eq!(locator.triangulation.max_walk_steps, 64);
    assert_eq!(locator.locate.tolerance, 1e-6);
    assert_eq!(locator.locate.max_walk_steps, Some(32));

    // A short construction walk falls back to scanning and still builds.
    let limits = MacAdamLimits::with_locator(OptimalColourStimuliDataset::default(), locator);
    assert!(
        limits
            .is_within_macadam_limits(&[0.4476, 0.4075, 0.5], "A", None)
            .unwrap()
    );
    assert!(limits.optimal_colour_stimuli_triangulation("A").unwrap().is_valid().is_ok());

    let back: DelaunayLocator =
        serde_json::from_str(&serde_json::to_string(&locator).unwrap()).unwrap();
    assert_eq!(back, locator);
}

#[test]
fn deserialized_tolerance_is_still_validated() {
    // Deserialization bypasses the builder; queries reject the value instead.
    let options: LocateOptions =
        serde_json::from_str(r#"{ "tolerance": -1.0, "max_walk_steps": null }"#).unwrap();
    let tri = Triangulation::new(&unit_cube()).unwrap();
    assert_eq!(
        tri.locate(&Point::new([0.5, 0.5, 0.5]), &options, None),
        Err(LocateError::InvalidTolerance { tolerance: -1.0 })
    );
}

#[test]
fn construction_statistics_export() {
    let mut points = unit_cube();
    points.push(Point::new([0.0, 0.0, 0.0]));
    let tri = Triangulation::new(&points).unwrap();

    let value = serde_json::to_value(tri.statistics()).unwrap();
    assert_eq!(value["input_points"], 9);
    assert_eq!(value["duplicates_removed"], 1);
    assert_eq!(value["finite_cells"], tri.number_of_cells());

    let back: ConstructionStatistics = serde_json::from_value(value).unwrap();
    assert_eq!(&back, tri.statistics());
}

#[test]
fn bounding_box_serializes_as_corner_arrays() {
    let tri = Triangulation::new(&unit_cube()).unwrap();
    let value = serde_json::to_value(tri.bounding_box()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "min": [0.0, 0.0, 0.0],
            "max": [1.0, 1.0, 1.0]
        })
    );
    let back: BoundingBox = serde_json::from_value(value).unwrap();
    assert_eq!(&back, tri.bounding_box());
}

#[test]
fn colourspaces_roundtrip_through_json() {
    let srgb = rgb_colourspace("sRGB").unwrap();
    let json = serde_json::to_string(srgb).unwrap();
    assert!(json.contains("\"Srgb\""));
    let back: RgbColourspace = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, srgb);
    // Derived matrices come back bit for bit, not just approximately.
    for (row, expected) in back.xyz_to_rgb_matrix().iter().zip(srgb.xyz_to_rgb_matrix()) {
        for (value, expected) in row.iter().zip(expected) {
            assert_eq!(value.to_bits(), expected.to_bits());
        }
    }

    let bt2020 = TransferFunction::Bt2020 {
        is_12_bits_system: true,
    };
    assert_eq!(
        serde_json::to_value(bt2020).unwrap(),
        serde_json::json!({ "Bt2020": { "is_12_bits_system": true } })
    );
}
