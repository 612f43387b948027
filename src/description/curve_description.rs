use super::timing_function_description::*;
use crate::error::*;
use crate::curve::*;
use crate::value::*;

use serde::{Serialize, Deserialize};
use serde::de::{DeserializeOwned};
use serde_json as json;

///
/// Describes a keyframe in a curve
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyframeDescription<V> {
    /// The time of this keyframe, in seconds
    pub time: f64,

    /// The value the curve has at this keyframe
    pub value: V,

    /// The timing function for the segment that starts at this keyframe
    pub timing_function: Option<TimingFunctionDescription>
}

///
/// Describes a keyframed curve that can be constructed later on
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveDescription<V> {
    /// The keyframes for this curve (these don't need to be in order)
    pub keyframes: Vec<KeyframeDescription<V>>,

    /// The timing function for the curve as a whole
    pub timing_function: Option<TimingFunctionDescription>
}

///
/// Describes a curve with any type of value
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AnyCurveDescription {
    Float(CurveDescription<f64>),
    Color(CurveDescription<Color>),
    Transform(CurveDescription<TransformOperations>),
    Filter(CurveDescription<FilterOperations>)
}

impl<V> KeyframeDescription<V> {
    ///
    /// Creates a description of a keyframe
    ///
    pub fn new(time: f64, value: V, timing_function: Option<TimingFunctionDescription>) -> KeyframeDescription<V> {
        KeyframeDescription { time, value, timing_function }
    }
}

impl<V: CurveValue> KeyframeDescription<V> {
    ///
    /// Creates the keyframe that this describes
    ///
    pub fn to_keyframe(&self) -> Result<Keyframe<V>, CurveError> {
        let timing_function = self.timing_function.map(|timing_function| timing_function.to_timing_function()).transpose()?;

        Ok(Keyframe::new(self.time, self.value.clone(), timing_function))
    }
}

impl<V: CurveValue> CurveDescription<V> {
    ///
    /// Creates the curve that this describes
    ///
    pub fn to_curve(&self) -> Result<KeyframedCurve<V>, CurveError> {
        debug!("Building {:?} curve with {} keyframes", V::CURVE_TYPE, self.keyframes.len());

        let keyframes   = self.keyframes.iter()
            .map(|keyframe| keyframe.to_keyframe())
            .collect::<Result<Vec<_>, _>>()?;

        let mut curve   = KeyframedCurve::with_keyframes(keyframes)?;
        curve.set_timing_function(self.timing_function.map(|timing_function| timing_function.to_timing_function()).transpose()?);

        Ok(curve)
    }
}

impl<V: DeserializeOwned> CurveDescription<V> {
    ///
    /// Reads a curve description from a JSON string
    ///
    pub fn from_json(text: &str) -> Result<CurveDescription<V>, CurveError> {
        Ok(json::from_str(text)?)
    }
}

impl AnyCurveDescription {
    ///
    /// The type of curve this describes
    ///
    pub fn curve_type(&self) -> CurveType {
        match self {
            AnyCurveDescription::Float(_)       => CurveType::Float,
            AnyCurveDescription::Color(_)       => CurveType::Color,
            AnyCurveDescription::Transform(_)   => CurveType::Transform,
            AnyCurveDescription::Filter(_)      => CurveType::Filter
        }
    }

    ///
    /// Creates the curve that this describes
    ///
    pub fn to_curve(&self) -> Result<Box<dyn AnimationCurve>, CurveError> {
        let curve: Box<dyn AnimationCurve> = match self {
            AnyCurveDescription::Float(description)     => Box::new(description.to_curve()?),
            AnyCurveDescription::Color(description)     => Box::new(description.to_curve()?),
            AnyCurveDescription::Transform(description) => Box::new(description.to_curve()?),
            AnyCurveDescription::Filter(description)    => Box::new(description.to_curve()?)
        };

        Ok(curve)
    }

    ///
    /// Reads a curve description from a JSON string
    ///
    pub fn from_json(text: &str) -> Result<AnyCurveDescription, CurveError> {
        Ok(json::from_str(text)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn missing_timing_function_is_linear() {
        let description = CurveDescription::<f64>::from_json(r#"{ "keyframes": [ { "time": 0.0, "value": 1.0 }, { "time": 1.0, "value": 3.0 } ] }"#).unwrap();
        let curve       = description.to_curve().unwrap();

        assert!(curve.timing_function().is_none());
        assert!(curve.value_at(0.5).unwrap() == 2.0);
    }

    #[test]
    pub fn invalid_timing_function_is_rejected() {
        let description = CurveDescription {
            keyframes:          vec![KeyframeDescription::new(0.0, 1.0, Some(TimingFunctionDescription::Steps(0, crate::timing::StepPosition::End)))],
            timing_function:    None
        };

        assert!(match description.to_curve() { Err(CurveError::InvalidTimingFunction(_)) => true, _ => false });
    }

    #[test]
    pub fn bad_json_is_an_error() {
        assert!(match AnyCurveDescription::from_json("{ \"Float\": ") { Err(CurveError::Json(_)) => true, _ => false });
    }
}
