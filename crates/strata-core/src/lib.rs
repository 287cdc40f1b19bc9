// File: crates/strata-core/src/lib.rs
// Summary: Core library entry point; exports the profile data model and grid builder.

pub mod feature;
pub mod field;
pub mod geometry;
pub mod extent;
pub mod grid;
pub mod scale;
pub mod progress;
pub mod error;
pub mod types;

pub use feature::{Feature, Geometry, MemoryLayer, Value};
pub use field::{list_field_names, list_numeric_fields, Field, NUMERIC_FIELD_TYPE_NAMES};
pub use geometry::{Point, Polyline};
pub use extent::ProfileExtent;
pub use grid::{create_profile_grid, stations};
pub use scale::VerticalScale;
pub use progress::{CountingReporter, ProgressReporter};
pub use error::GridError;
pub use types::{AxisId, EpsgCode, FIELD_AXIS_ID, FIELD_POSITION, FIELD_STEP};
