// File: crates/strata-core/src/error.rs
// Summary: Error taxonomy for grid building.

use crate::types::AxisId;
use thiserror::Error;

/// Failures that abort a grid build. Empty layers and axes without profile
/// data are not errors; they simply produce fewer (or zero) output features.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    /// Step interval must be a positive, finite number.
    #[error("interval must be positive and finite, got {0}")]
    InvalidInterval(f64),
    /// Vertical exaggeration must be a positive, finite number.
    #[error("vertical exaggeration must be positive and finite, got {0}")]
    InvalidExaggeration(f64),
    /// Axis geometry needs at least two vertices to define a direction.
    #[error("axis {axis_id:?} has {vertices} vertices, need at least 2")]
    DegenerateAxis { axis_id: Option<AxisId>, vertices: usize },
    /// A layer schema lacks a required field.
    #[error("layer '{layer}' is missing required field '{field}'")]
    MissingField { layer: String, field: String },
}
