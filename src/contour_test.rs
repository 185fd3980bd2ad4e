use super::*;

use crate::grid::Grid;
use crate::region;

fn polygons(text: &str) -> Vec<Vec<Point>> {
    let coloring = region::color(&Grid::pad(text));
    trace_all(&coloring)
        .expect("trace")
        .into_iter()
        .map(|c| match c {
            DrawCommand::FilledPolygon { points } => points,
            other => panic!("expected polygon, got {other:?}"),
        })
        .collect()
}

#[test]
fn box_traces_to_its_four_wall_corners() {
    let polys = polygons("+--+\n|  |\n+--+");
    assert_eq!(
        polys,
        vec![vec![
            Point::new(0, 0),
            Point::new(3, 0),
            Point::new(3, 2),
            Point::new(0, 2),
        ]]
    );
}

#[test]
fn divided_box_traces_each_chamber_once() {
    let polys = polygons("+-+-+\n| | |\n+-+-+");
    assert_eq!(
        polys,
        vec![
            vec![Point::new(0, 0), Point::new(2, 0), Point::new(2, 2), Point::new(0, 2)],
            vec![Point::new(2, 0), Point::new(4, 0), Point::new(4, 2), Point::new(2, 2)],
        ]
    );
}

#[test]
fn l_shape_traces_all_six_wall_corners() {
    let polys = polygons("+--+  \n|  |  \n|  +-+\n|    |\n+----+");
    assert_eq!(
        polys,
        vec![vec![
            Point::new(0, 0),
            Point::new(3, 0),
            Point::new(3, 2),
            Point::new(5, 2),
            Point::new(5, 4),
            Point::new(0, 4),
        ]]
    );
}

#[test]
fn one_corner_wide_region_closes_via_dead_end_reversals() {
    // Two adjacent vertical walls leave a region a single corner wide.
    let polys = polygons("++\n||\n++");
    assert_eq!(
        polys,
        vec![vec![
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(1, 2),
            Point::new(0, 2),
        ]]
    );
}

#[test]
fn exterior_is_never_traced() {
    assert!(polygons("hello").is_empty());
    assert!(polygons("").is_empty());
}

#[test]
fn isolated_corner_region_is_reported_stuck() {
    // A field of `+` seals every decided corner into its own singleton
    // region, which no walk can leave.
    let coloring = region::color(&Grid::pad("+++\n+++\n+++"));
    let err = trace_all(&coloring).expect_err("stuck");
    assert!(matches!(err, ConvertError::ContourStuck { region: 1, .. }));
}

#[test]
fn every_polygon_has_at_least_four_vertices() {
    for text in ["+--+\n|  |\n+--+", "+-+-+\n| | |\n+-+-+", "++\n||\n++"] {
        for points in polygons(text) {
            assert!(points.len() >= 4, "{text:?}: {points:?}");
        }
    }
}
