// File: crates/demo/src/main.rs
// Summary: Demo loads a survey CSV (axis_id,x,y[,measurement]), synthesizes one
// straight axis per axis id, builds the profile grid and writes it back as CSV.

use anyhow::{Context, Result};
use log::info;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use strata_core::{
    create_profile_grid, Feature, Field, Geometry, MemoryLayer, Point, Polyline,
    ProgressReporter, Value, FIELD_AXIS_ID, FIELD_POSITION, FIELD_STEP,
};

const DEMO_CRS: u32 = 32630;

struct SurveyRow {
    axis_id: i64,
    x: f64,
    y: f64,
    value: Option<f64>,
}

/// Reporter that logs axis progress.
struct LogReporter;

impl ProgressReporter for LogReporter {
    fn report(&self, done: usize, total: usize) {
        info!("processed axis {done}/{total}");
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Accept path plus optional interval / exaggeration from CLI.
    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| "survey_points.csv".to_string());
    let interval: f64 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("bad interval '{s}'"))?,
        None => 5.0,
    };
    let exaggeration: f64 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("bad exaggeration '{s}'"))?,
        None => 1.0,
    };

    let path = PathBuf::from(&raw);
    println!("Using input file: {}", path.display());

    let (rows, value_header) = load_survey_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} survey points", rows.len());
    if rows.is_empty() {
        anyhow::bail!("no survey points loaded; check headers/delimiter.");
    }

    let (profile, axes) = build_layers(&rows, value_header.as_deref());
    println!("Synthesized {} axes", axes.feature_count());

    let grid = create_profile_grid(
        &profile,
        &axes,
        exaggeration,
        interval,
        true,
        Some(&LogReporter),
        DEMO_CRS,
    )?;
    println!(
        "Built {} grid lines (interval {interval}, exaggeration {exaggeration})",
        grid.feature_count()
    );

    let out = out_name(&path);
    write_grid_csv(&grid, &out).with_context(|| format!("writing '{}'", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Load survey rows. Header sniffing tolerates common column spellings; rows
/// with unparseable coordinates are dropped.
/// Returns the rows plus the header name of the measurement column, if any.
fn load_survey_csv(path: &Path) -> Result<(Vec<SurveyRow>, Option<String>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_axis = idx(&["axis_id", "axis", "section"]);
    let i_x = idx(&["x", "easting", "lon"]);
    let i_y = idx(&["y", "northing", "lat"]);
    let i_value = idx(&["altitude", "elevation", "depth", "z", "value"]);

    let (Some(i_axis), Some(i_x), Some(i_y)) = (i_axis, i_x, i_y) else {
        anyhow::bail!("need axis_id, x and y columns; got headers {headers:?}");
    };

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let cell = |i: usize| rec.get(i).map(str::trim);
        let axis_id = cell(i_axis).and_then(|s| s.parse::<i64>().ok());
        let x = cell(i_x).and_then(|s| s.parse::<f64>().ok());
        let y = cell(i_y).and_then(|s| s.parse::<f64>().ok());
        let value = i_value.and_then(|i| cell(i)).and_then(|s| s.parse::<f64>().ok());
        if let (Some(axis_id), Some(x), Some(y)) = (axis_id, x, y) {
            rows.push(SurveyRow { axis_id, x, y, value });
        }
    }
    Ok((rows, i_value.map(|i| headers[i].clone())))
}

/// Build the profile layer from the rows and synthesize one straight
/// west-east axis per axis id, spanning that id's x range.
fn build_layers(rows: &[SurveyRow], value_header: Option<&str>) -> (MemoryLayer, MemoryLayer) {
    let mut fields = vec![Field::new(FIELD_AXIS_ID, "integer")];
    if let Some(name) = value_header {
        fields.push(Field::new(name, "double"));
    }
    let mut profile = MemoryLayer::new("survey_points", fields).with_crs(DEMO_CRS);

    // (min_x, max_x, sum_y, count) per axis; BTreeMap keeps axis output ordered.
    let mut spans: BTreeMap<i64, (f64, f64, f64, usize)> = BTreeMap::new();
    for row in rows {
        let mut attrs = vec![Value::Int(row.axis_id)];
        if value_header.is_some() {
            attrs.push(row.value.map_or(Value::Null, Value::Double));
        }
        profile.push(Feature::new(Geometry::Point(Point::new(row.x, row.y)), attrs));

        let entry = spans.entry(row.axis_id).or_insert((row.x, row.x, 0.0, 0));
        entry.0 = entry.0.min(row.x);
        entry.1 = entry.1.max(row.x);
        entry.2 += row.y;
        entry.3 += 1;
    }

    let mut axes =
        MemoryLayer::new("axes", vec![Field::new(FIELD_AXIS_ID, "integer")]).with_crs(DEMO_CRS);
    for (axis_id, (min_x, max_x, sum_y, n)) in spans {
        let y = sum_y / n as f64;
        // A single-column axis still needs two distinct vertices.
        let (x0, x1) = if min_x < max_x { (min_x, max_x) } else { (min_x - 0.5, max_x + 0.5) };
        axes.push(Feature::new(
            Geometry::Line(Polyline::from_xy(&[(x0, y), (x1, y)])),
            vec![Value::Int(axis_id)],
        ));
    }
    (profile, axes)
}

/// Output file name like target/out/grid_<stem>.csv
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("survey");
    let out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.join(format!("grid_{stem}.csv"))
}

fn write_grid_csv(grid: &MemoryLayer, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["axis_id", "step", "position", "v0", "v1"])?;
    for feat in grid.features() {
        let axis_id = grid.attribute(feat, FIELD_AXIS_ID).and_then(Value::as_i64).unwrap_or(-1);
        let step = grid.attribute(feat, FIELD_STEP).and_then(Value::as_i64).unwrap_or(-1);
        let pos = grid
            .attribute(feat, FIELD_POSITION)
            .and_then(Value::as_f64)
            .unwrap_or(f64::NAN);
        let (v0, v1) = match feat.geometry.as_line() {
            Some(line) if line.points.len() == 2 => (line.points[0].y, line.points[1].y),
            _ => (f64::NAN, f64::NAN),
        };
        wtr.write_record([
            axis_id.to_string(),
            step.to_string(),
            format!("{pos}"),
            format!("{v0}"),
            format!("{v1}"),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
