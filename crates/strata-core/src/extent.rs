// File: crates/strata-core/src/extent.rs
// Summary: Finite station/value extent folded from a profile group.

/// Bounding interval pair of a profile group: along-axis stations and
/// vertical values. An extent exists only for a non-empty group; bounds are
/// always taken from actual samples, so no unbounded placeholder can reach
/// the stepping arithmetic downstream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileExtent {
    pub station_min: f64,
    pub station_max: f64,
    pub value_min: f64,
    pub value_max: f64,
}

impl ProfileExtent {
    /// Fold an extent from `(station, value)` samples.
    /// Empty input yields `None`.
    pub fn from_samples(samples: &[(f64, f64)]) -> Option<Self> {
        let (&(s0, v0), rest) = samples.split_first()?;
        let mut extent = Self { station_min: s0, station_max: s0, value_min: v0, value_max: v0 };
        for &(s, v) in rest {
            extent.include(s, v);
        }
        Some(extent)
    }

    fn include(&mut self, station: f64, value: f64) {
        self.station_min = self.station_min.min(station);
        self.station_max = self.station_max.max(station);
        self.value_min = self.value_min.min(value);
        self.value_max = self.value_max.max(value);
    }

    pub fn station_span(&self) -> f64 {
        self.station_max - self.station_min
    }
    pub fn value_span(&self) -> f64 {
        self.value_max - self.value_min
    }
    /// A single-sample group collapses to a zero-width extent. Valid input;
    /// it produces exactly one grid line.
    pub fn is_degenerate(&self) -> bool {
        self.station_span() == 0.0
    }
}
