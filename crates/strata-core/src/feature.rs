// File: crates/strata-core/src/feature.rs
// Summary: Attribute values, features, and the in-memory vector layer.

use crate::field::Field;
use crate::geometry::{Point, Polyline};
use crate::types::EpsgCode;

/// Attribute value as stored on a feature.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Double(f64),
    Text(String),
    Null,
}

impl Value {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// Feature geometry: profile points are points, axes and grid lines are lines.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Point),
    Line(Polyline),
}

impl Geometry {
    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Geometry::Point(p) => Some(p),
            _ => None,
        }
    }
    pub fn as_line(&self) -> Option<&Polyline> {
        match self {
            Geometry::Line(l) => Some(l),
            _ => None,
        }
    }
}

/// One feature: geometry plus attribute values positionally aligned with the
/// owning layer's field schema.
#[derive(Clone, Debug)]
pub struct Feature {
    pub geometry: Geometry,
    pub attrs: Vec<Value>,
}

impl Feature {
    pub fn new(geometry: Geometry, attrs: Vec<Value>) -> Self {
        Self { geometry, attrs }
    }
}

/// In-memory feature collection with a field schema and a CRS tag.
/// The grid builder reads two of these and returns a fresh one.
#[derive(Clone, Debug)]
pub struct MemoryLayer {
    name: String,
    fields: Vec<Field>,
    features: Vec<Feature>,
    crs: Option<EpsgCode>,
}

impl MemoryLayer {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self { name: name.into(), fields, features: Vec::new(), crs: None }
    }

    pub fn with_crs(mut self, crs: EpsgCode) -> Self {
        self.crs = Some(crs);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
    pub fn features(&self) -> &[Feature] {
        &self.features
    }
    pub fn crs(&self) -> Option<EpsgCode> {
        self.crs
    }
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Index of the field named `name`, if the schema has one.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == name)
    }

    /// Attribute of `feature` by field name.
    pub fn attribute<'a>(&self, feature: &'a Feature, name: &str) -> Option<&'a Value> {
        self.field_index(name).and_then(|i| feature.attrs.get(i))
    }

    /// Append a feature. Attributes must align with the layer schema.
    pub fn push(&mut self, feature: Feature) {
        debug_assert_eq!(feature.attrs.len(), self.fields.len());
        self.features.push(feature);
    }
}
