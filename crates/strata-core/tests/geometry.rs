// File: crates/strata-core/tests/geometry.rs
// Purpose: Station projection math on axis polylines.

use approx::assert_relative_eq;
use strata_core::{Point, Polyline};

#[test]
fn station_on_horizontal_axis() {
    let axis = Polyline::from_xy(&[(0.0, 0.0), (10.0, 0.0)]);
    assert_relative_eq!(axis.station_of(&Point::new(5.0, 2.0)), 5.0);
    assert_relative_eq!(axis.station_of(&Point::new(0.0, -3.0)), 0.0);
}

#[test]
fn station_clamps_beyond_line_ends() {
    let axis = Polyline::from_xy(&[(0.0, 0.0), (10.0, 0.0)]);
    assert_relative_eq!(axis.station_of(&Point::new(-4.0, 1.0)), 0.0);
    assert_relative_eq!(axis.station_of(&Point::new(12.0, 1.0)), 10.0);
}

#[test]
fn station_accumulates_over_segments() {
    // L-shaped axis: 10 along x, then 10 up y.
    let axis = Polyline::from_xy(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    assert_relative_eq!(axis.station_of(&Point::new(11.0, 5.0)), 15.0);
    assert_relative_eq!(axis.length(), 20.0);
}

#[test]
fn station_on_oblique_axis() {
    let axis = Polyline::from_xy(&[(0.0, 0.0), (10.0, 10.0)]);
    // Point on the line a quarter of the way along.
    let station = axis.station_of(&Point::new(2.5, 2.5));
    assert_relative_eq!(station, (2.5f64 * 2.5 + 2.5 * 2.5).sqrt(), epsilon = 1e-9);
}

#[test]
fn vertical_prefers_measure_over_y() {
    assert_relative_eq!(Point::with_z(1.0, 2.0, 9.0).vertical(), 9.0);
    assert_relative_eq!(Point::new(1.0, 2.0).vertical(), 2.0);
}
