// File: crates/strata-examples/src/bin/basic.rs
// Summary: Minimal example that builds a profile grid from inline data.

use strata_core::{
    create_profile_grid, Feature, Field, Geometry, MemoryLayer, Point, Polyline, Value,
    FIELD_AXIS_ID, FIELD_POSITION, FIELD_STEP,
};

fn main() {
    // Two survey axes; boreholes only along the first one.
    let mut axes = MemoryLayer::new("axes", vec![Field::new(FIELD_AXIS_ID, "integer")]).with_crs(32630);
    axes.push(Feature::new(
        Geometry::Line(Polyline::from_xy(&[(0.0, 0.0), (120.0, 0.0)])),
        vec![Value::Int(1)],
    ));
    axes.push(Feature::new(
        Geometry::Line(Polyline::from_xy(&[(0.0, 40.0), (120.0, 40.0)])),
        vec![Value::Int(2)],
    ));

    let mut profile = MemoryLayer::new(
        "boreholes",
        vec![Field::new(FIELD_AXIS_ID, "integer"), Field::new("altitude", "double")],
    )
    .with_crs(32630);
    for &(x, alt) in &[(5.0, 102.5), (38.0, 99.1), (71.0, 96.4), (110.0, 101.8)] {
        profile.push(Feature::new(
            Geometry::Point(Point::new(x, 1.5)),
            vec![Value::Int(1), Value::Double(alt)],
        ));
    }

    let grid = create_profile_grid(&profile, &axes, 2.0, 10.0, true, None, 32630)
        .expect("build profile grid");

    println!("{} grid lines (crs EPSG:{})", grid.feature_count(), grid.crs().unwrap_or(0));
    for feat in grid.features() {
        let id = grid.attribute(feat, FIELD_AXIS_ID).and_then(Value::as_i64).unwrap_or(-1);
        let step = grid.attribute(feat, FIELD_STEP).and_then(Value::as_i64).unwrap_or(-1);
        let pos = grid.attribute(feat, FIELD_POSITION).and_then(Value::as_f64).unwrap_or(f64::NAN);
        println!("axis {id} step {step:>2} at {pos:>6.1} m");
    }
}
