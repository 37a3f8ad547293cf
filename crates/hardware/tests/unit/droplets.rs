//! # Droplet Tests
//!
//! Parsing, face counting and scatter export of droplet scans.

use std::fs;

use rstest::rstest;

use clocksim_core::Error;
use clocksim_core::common::DropletError;
use clocksim_core::droplets::{
    Droplet, Scatter, exterior_surface_area, load_scan, parse_droplet, parse_scan, surface_area,
};

use crate::common::fixtures::DROPLET_EXAMPLE;

#[test]
fn test_parse_droplet() {
    assert_eq!(parse_droplet("2,2,2", 1), Ok(Droplet::new(2, 2, 2)));
    assert_eq!(parse_droplet(" -1 , 0,7 ", 1), Ok(Droplet::new(-1, 0, 7)));
    assert_eq!("3,2,5".parse::<Droplet>(), Ok(Droplet::new(3, 2, 5)));
}

#[rstest]
#[case("1,2", 2)]
#[case("1,2,3,4", 4)]
#[case("", 1)]
fn test_parse_droplet_field_count(#[case] text: &str, #[case] found: usize) {
    assert_eq!(
        parse_droplet(text, 6),
        Err(DropletError::FieldCount { line: 6, found })
    );
}

#[test]
fn test_parse_droplet_bad_coordinate() {
    match parse_droplet("1,y,3", 2) {
        Err(DropletError::InvalidCoordinate { line, field, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(field, "y");
        }
        other => panic!("expected invalid coordinate, got {other:?}"),
    }
}

#[test]
fn test_parse_scan_skips_blank_lines_and_keeps_line_numbers() {
    let scan = parse_scan("1,1,1\n\n2,1,1\n").unwrap();
    assert_eq!(scan, vec![Droplet::new(1, 1, 1), Droplet::new(2, 1, 1)]);

    let err = parse_scan("1,1,1\n\n2,1\n").unwrap_err();
    assert_eq!(err, DropletError::FieldCount { line: 3, found: 2 });
}

#[test]
fn test_neighbours() {
    let around = Droplet::new(0, 0, 0).neighbours();
    assert!(around.iter().all(Option::is_some));
    assert!(around.contains(&Some(Droplet::new(0, 0, -1))));
    assert!(around.contains(&Some(Droplet::new(1, 0, 0))));
}

#[test]
fn test_neighbours_at_range_edge() {
    let around = Droplet::new(i64::MAX, 0, i64::MIN).neighbours();
    assert_eq!(around[0], None);
    assert_eq!(around[1], Some(Droplet::new(i64::MAX - 1, 0, i64::MIN)));
    assert_eq!(around[4], Some(Droplet::new(i64::MAX, 0, i64::MIN + 1)));
    assert_eq!(around[5], None);
}

#[rstest]
#[case("9223372036854775807,0,0")]
#[case("-9223372036854775808,0,0")]
#[case("0,9223372036854775807,-9223372036854775808")]
fn test_extreme_coordinates_are_fully_exposed(#[case] line: &str) {
    let scan = parse_scan(line).unwrap();
    assert_eq!(surface_area(&scan), 6);
    assert_eq!(exterior_surface_area(&scan), 6);
}

#[test]
fn test_adjacent_pair_at_range_edge() {
    let scan = [
        Droplet::new(i64::MAX, i64::MIN, 0),
        Droplet::new(i64::MAX - 1, i64::MIN, 0),
    ];
    assert_eq!(surface_area(&scan), 10);
    assert_eq!(exterior_surface_area(&scan), 10);
}

#[rstest]
#[case(&[], 0)]
#[case(&[Droplet::new(1, 1, 1)], 6)]
#[case(&[Droplet::new(1, 1, 1), Droplet::new(2, 1, 1)], 10)]
#[case(&[Droplet::new(1, 1, 1), Droplet::new(1, 1, 1)], 6)]
fn test_surface_area_small(#[case] scan: &[Droplet], #[case] expected: usize) {
    assert_eq!(surface_area(scan), expected);
}

#[test]
fn test_example_surface_area() {
    let scan = parse_scan(DROPLET_EXAMPLE).unwrap();
    assert_eq!(scan.len(), 13);
    assert_eq!(surface_area(&scan), 64);
}

#[test]
fn test_example_exterior_surface_area() {
    let scan = parse_scan(DROPLET_EXAMPLE).unwrap();
    assert_eq!(exterior_surface_area(&scan), 58);
}

#[test]
fn test_hollow_cube_hides_inner_faces() {
    let mut scan = Vec::new();
    for x in 0..3 {
        for y in 0..3 {
            for z in 0..3 {
                if (x, y, z) != (1, 1, 1) {
                    scan.push(Droplet::new(x, y, z));
                }
            }
        }
    }
    assert_eq!(surface_area(&scan), 54 + 6);
    assert_eq!(exterior_surface_area(&scan), 54);
}

#[test]
fn test_exterior_of_empty_scan() {
    assert_eq!(exterior_surface_area(&[]), 0);
}

#[test]
fn test_load_scan() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scan.txt");
    fs::write(&path, DROPLET_EXAMPLE).unwrap();
    assert_eq!(load_scan(&path).unwrap().len(), 13);

    fs::write(&path, "1,2,x\n").unwrap();
    assert!(matches!(load_scan(&path), Err(Error::Droplet(_))));
}

#[test]
fn test_scatter_keeps_scan_order() {
    let scan = parse_scan(DROPLET_EXAMPLE).unwrap();
    let scatter = Scatter::from_droplets(&scan);
    assert_eq!(scatter.len(), 13);
    assert_eq!(&scatter.x[..3], &[2, 1, 3]);
    assert_eq!(&scatter.z[..3], &[2, 2, 2]);
}

#[test]
fn test_scatter_json_shape() {
    let scatter = Scatter::from_droplets(&[Droplet::new(1, 2, 3)]);
    let value: serde_json::Value = serde_json::from_str(&scatter.to_json_pretty().unwrap()).unwrap();
    assert_eq!(value, serde_json::json!({ "x": [1], "y": [2], "z": [3] }));

    let back: Scatter = serde_json::from_str(&scatter.to_json().unwrap()).unwrap();
    assert_eq!(back, scatter);
}

#[test]
fn test_empty_scatter() {
    let scatter = Scatter::from_droplets(&[]);
    assert!(scatter.is_empty());
    assert_eq!(scatter.to_json().unwrap(), r#"{"x":[],"y":[],"z":[]}"#);
}
