// File: crates/strata-core/src/grid.rs
// Summary: Profile grid builder: per-axis extent, stepped cross-section lines.

use std::collections::HashMap;

use log::debug;

use crate::error::GridError;
use crate::extent::ProfileExtent;
use crate::feature::{Feature, Geometry, MemoryLayer, Value};
use crate::field::{list_numeric_fields, Field};
use crate::geometry::{Point, Polyline};
use crate::progress::ProgressReporter;
use crate::scale::VerticalScale;
use crate::types::{AxisId, EpsgCode, FIELD_AXIS_ID, FIELD_POSITION, FIELD_STEP, STEP_EPSILON};

/// Stations stepped by `interval` across `[min, max]`.
/// Emits `floor(span / interval) + 1` stations starting at `min`; with
/// `extremities`, a final station exactly at `max` is appended when the last
/// regular step falls short of it.
pub fn stations(min: f64, max: f64, interval: f64, extremities: bool) -> Vec<f64> {
    let count = ((max - min) / interval + STEP_EPSILON).floor() as usize;
    let mut out = Vec::with_capacity(count + 2);
    for k in 0..=count {
        out.push(min + k as f64 * interval);
    }
    if extremities {
        if let Some(&last) = out.last() {
            if max - last > STEP_EPSILON {
                out.push(max);
            }
        }
    }
    out
}

/// Build a profile grid layer: for each axis, the extent spanned by its
/// profile points and a sequence of evenly spaced vertical cross-section
/// lines covering that extent, scaled by `vertical_exaggeration`.
///
/// Axes with no matching profile points are skipped entirely; no extent is
/// computed for them and no lines are emitted. Empty inputs produce an empty
/// grid layer, not an error.
///
/// Output geometry lives in profile-plot space: x = station along the axis,
/// y = measured value times the exaggeration. Each line carries `axis_id`,
/// `step` and `position` attributes, and the layer is tagged with `crs`.
pub fn create_profile_grid(
    profile: &MemoryLayer,
    axes: &MemoryLayer,
    vertical_exaggeration: f64,
    interval: f64,
    extremities: bool,
    progress: Option<&dyn ProgressReporter>,
    crs: EpsgCode,
) -> Result<MemoryLayer, GridError> {
    if !(interval.is_finite() && interval > 0.0) {
        return Err(GridError::InvalidInterval(interval));
    }
    if !(vertical_exaggeration.is_finite() && vertical_exaggeration > 0.0) {
        return Err(GridError::InvalidExaggeration(vertical_exaggeration));
    }
    let profile_key = profile
        .field_index(FIELD_AXIS_ID)
        .ok_or_else(|| GridError::MissingField {
            layer: profile.name().to_string(),
            field: FIELD_AXIS_ID.to_string(),
        })?;
    let axis_key = axes
        .field_index(FIELD_AXIS_ID)
        .ok_or_else(|| GridError::MissingField {
            layer: axes.name().to_string(),
            field: FIELD_AXIS_ID.to_string(),
        })?;
    let value_idx = measurement_field(profile);

    // Group profile points by axis id: one pass over the profile layer.
    // A group entry exists only if at least one usable point was seen.
    let mut groups: HashMap<AxisId, Vec<(Point, f64)>> = HashMap::new();
    for feat in profile.features() {
        let Some(point) = feat.geometry.as_point() else {
            debug!("profile feature without point geometry ignored");
            continue;
        };
        let Some(id) = feat.attrs.get(profile_key).and_then(Value::as_i64) else {
            debug!("profile point without axis id ignored");
            continue;
        };
        let value = value_idx
            .and_then(|i| feat.attrs.get(i))
            .and_then(Value::as_f64)
            .unwrap_or_else(|| point.vertical());
        groups.entry(id).or_default().push((*point, value));
    }

    let scale = VerticalScale::new(vertical_exaggeration);
    let mut grid = MemoryLayer::new(
        "profile_grid",
        vec![
            Field::new(FIELD_AXIS_ID, "integer"),
            Field::new(FIELD_STEP, "integer"),
            Field::new(FIELD_POSITION, "double"),
        ],
    )
    .with_crs(crs);

    let total = axes.feature_count();
    for (i, feat) in axes.features().iter().enumerate() {
        let axis_id = feat.attrs.get(axis_key).and_then(Value::as_i64);
        let Some(line) = feat.geometry.as_line() else {
            return Err(GridError::DegenerateAxis { axis_id, vertices: 0 });
        };
        if line.points.len() < 2 {
            return Err(GridError::DegenerateAxis { axis_id, vertices: line.points.len() });
        }
        let Some(axis_id) = axis_id else {
            debug!("axis without id skipped");
            report(progress, i + 1, total);
            continue;
        };
        // Empty group: skip before any extent arithmetic can see an
        // unbounded value.
        let Some(group) = groups.get(&axis_id) else {
            debug!("axis {axis_id}: no profile points, skipped");
            report(progress, i + 1, total);
            continue;
        };
        let samples: Vec<(f64, f64)> = group
            .iter()
            .map(|(p, v)| (line.station_of(p), *v))
            .collect();
        let Some(extent) = ProfileExtent::from_samples(&samples) else {
            report(progress, i + 1, total);
            continue;
        };
        let v0 = scale.to_plot(extent.value_min);
        let v1 = scale.to_plot(extent.value_max);
        for (step, &s) in stations(extent.station_min, extent.station_max, interval, extremities)
            .iter()
            .enumerate()
        {
            grid.push(Feature::new(
                Geometry::Line(Polyline::new(vec![Point::new(s, v0), Point::new(s, v1)])),
                vec![Value::Int(axis_id), Value::Int(step as i64), Value::Double(s)],
            ));
        }
        report(progress, i + 1, total);
    }

    debug!("profile grid: {} lines across {} axes", grid.feature_count(), total);
    Ok(grid)
}

fn report(progress: Option<&dyn ProgressReporter>, done: usize, total: usize) {
    if let Some(p) = progress {
        p.report(done, total);
    }
}

/// Attribute index of the measurement field: the first numeric field of the
/// profile schema (lexicographic, per `list_numeric_fields`) that is not the
/// axis key. `None` when the schema has no usable measurement field; the
/// vertical value then falls back to the point geometry.
fn measurement_field(profile: &MemoryLayer) -> Option<usize> {
    let names = list_numeric_fields(Some(profile.fields()))?;
    let name = names.into_iter().find(|n| n != FIELD_AXIS_ID)?;
    profile.field_index(&name)
}
