use crate::error::*;
use crate::timing::*;

use serde::{Serialize, Deserialize};

///
/// Describes a timing function that can be constructed later on
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TimingFunctionDescription {
    /// Progress is unchanged
    Linear,

    /// The CSS 'ease' curve
    Ease,

    /// The CSS 'ease-in' curve
    EaseIn,

    /// The CSS 'ease-out' curve
    EaseOut,

    /// The CSS 'ease-in-out' curve
    EaseInOut,

    /// A cubic bezier curve with the specified control points (x1, y1, x2, y2)
    CubicBezier(f64, f64, f64, f64),

    /// Jumps between a number of evenly spaced values
    Steps(u32, StepPosition)
}

impl TimingFunctionDescription {
    ///
    /// Creates the timing function that this describes
    ///
    pub fn to_timing_function(&self) -> Result<Box<dyn TimingFunction>, CurveError> {
        use self::TimingFunctionDescription::*;

        let timing_function: Box<dyn TimingFunction> = match self {
            Linear                          => Box::new(LinearTimingFunction::new()),
            Ease                            => Box::new(CubicBezierTimingFunction::ease()),
            EaseIn                          => Box::new(CubicBezierTimingFunction::ease_in()),
            EaseOut                         => Box::new(CubicBezierTimingFunction::ease_out()),
            EaseInOut                       => Box::new(CubicBezierTimingFunction::ease_in_out()),
            CubicBezier(x1, y1, x2, y2)     => Box::new(CubicBezierTimingFunction::custom(*x1, *y1, *x2, *y2)?),
            Steps(count, position)          => Box::new(StepsTimingFunction::new(*count, *position)?)
        };

        Ok(timing_function)
    }
}
