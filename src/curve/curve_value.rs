use crate::value::*;

use serde::{Serialize, Deserialize};

use std::fmt;

///
/// The kinds of value a curve can animate
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CurveType {
    Float,
    Color,
    Transform,
    Filter
}

///
/// Trait implemented by values that can be stored in the keyframes of a curve
///
pub trait CurveValue : Blend+Clone+fmt::Debug+Send+Sync+'static {
    /// The type of curve that animates this kind of value
    const CURVE_TYPE: CurveType;
}

impl CurveValue for f64 {
    const CURVE_TYPE: CurveType = CurveType::Float;
}

impl CurveValue for Color {
    const CURVE_TYPE: CurveType = CurveType::Color;
}

impl CurveValue for TransformOperations {
    const CURVE_TYPE: CurveType = CurveType::Transform;
}

impl CurveValue for FilterOperations {
    const CURVE_TYPE: CurveType = CurveType::Filter;
}
