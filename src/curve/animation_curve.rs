use super::curve_value::*;
use super::keyframed_curve::*;
use crate::error::*;

use std::fmt;
use std::any::{Any};

///
/// Trait implemented by curves of any value type
///
/// This is the interface for code that schedules animations and so holds curves without knowing
/// what kind of value they animate. The `as_*_curve` functions recover the typed curve.
///
pub trait AnimationCurve : Send+Sync+fmt::Debug {
    ///
    /// The time of the first keyframe of this curve
    ///
    fn start_time(&self) -> Result<f64, CurveError>;

    ///
    /// The time between the first and last keyframes of this curve
    ///
    fn duration(&self) -> Result<f64, CurveError>;

    ///
    /// The kind of value this curve animates
    ///
    fn curve_type(&self) -> CurveType;

    ///
    /// Creates an independent copy of this curve
    ///
    fn clone_curve(&self) -> Box<dyn AnimationCurve>;

    ///
    /// Returns this curve as an 'Any' reference, so it can be converted back to its concrete type
    ///
    fn as_any(&self) -> &dyn Any;
}

impl<V: CurveValue> AnimationCurve for KeyframedCurve<V> {
    fn start_time(&self) -> Result<f64, CurveError> {
        KeyframedCurve::start_time(self)
    }

    fn duration(&self) -> Result<f64, CurveError> {
        KeyframedCurve::duration(self)
    }

    fn curve_type(&self) -> CurveType {
        V::CURVE_TYPE
    }

    fn clone_curve(&self) -> Box<dyn AnimationCurve> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Clone for Box<dyn AnimationCurve> {
    fn clone(&self) -> Box<dyn AnimationCurve> {
        self.clone_curve()
    }
}

impl<'a> dyn AnimationCurve + 'a {
    pub fn as_float_curve(&self) -> Option<&FloatCurve> {
        self.as_any().downcast_ref()
    }

    pub fn as_color_curve(&self) -> Option<&ColorCurve> {
        self.as_any().downcast_ref()
    }

    pub fn as_transform_curve(&self) -> Option<&TransformCurve> {
        self.as_any().downcast_ref()
    }

    pub fn as_filter_curve(&self) -> Option<&FilterCurve> {
        self.as_any().downcast_ref()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::keyframe::*;

    #[test]
    pub fn downcast_to_original_type() {
        let curve: Box<dyn AnimationCurve> = Box::new(FloatCurve::with_keyframes(vec![Keyframe::linear(0.0, 1.0), Keyframe::linear(2.0, 3.0)]).unwrap());

        assert!(curve.curve_type() == CurveType::Float);
        assert!(curve.start_time().unwrap() == 0.0);
        assert!(curve.duration().unwrap() == 2.0);
        assert!(curve.as_float_curve().is_some());
        assert!(curve.as_color_curve().is_none());
        assert!(curve.as_float_curve().unwrap().value_at(1.0).unwrap() == 2.0);
    }

    fn is_float_curve(curve: &dyn AnimationCurve) -> bool {
        curve.as_float_curve().is_some()
    }

    #[test]
    pub fn downcast_borrowed_curve() {
        let curve = FloatCurve::with_keyframes(vec![Keyframe::linear(0.0, 1.0)]).unwrap();

        assert!(is_float_curve(&curve));
        assert!(!is_float_curve(&ColorCurve::new()));
    }

    #[test]
    pub fn cloned_curve_keeps_type() {
        let curve: Box<dyn AnimationCurve> = Box::new(FilterCurve::new());
        let clone = curve.clone();

        assert!(clone.curve_type() == CurveType::Filter);
        assert!(clone.as_filter_curve().is_some());
    }
}
