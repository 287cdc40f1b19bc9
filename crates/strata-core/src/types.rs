// File: crates/strata-core/src/types.rs
// Summary: Shared aliases and field-name constants.

/// Identifier tying a profile point to its axis.
pub type AxisId = i64;
/// EPSG-style spatial reference code. Tag only; never used to transform coordinates.
pub type EpsgCode = u32;

/// Name of the axis foreign-key field on profile and axis layers.
pub const FIELD_AXIS_ID: &str = "axis_id";
/// Name of the step-index field on the output grid layer.
pub const FIELD_STEP: &str = "step";
/// Name of the along-axis position field on the output grid layer.
pub const FIELD_POSITION: &str = "position";

/// Tolerance added before flooring the step count, so a span that is an
/// exact interval multiple (up to float drift) still emits its boundary line.
pub const STEP_EPSILON: f64 = 1e-9;
