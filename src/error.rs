use serde_json;

use std::fmt;
use std::error::Error;

///
/// Errors that can occur while building or evaluating a keyframed curve
///
#[derive(Debug)]
pub enum CurveError {
    /// The curve has no keyframes, so it has no duration and no value
    EmptyCurve,

    /// A keyframe was given a time that is not a finite number
    InvalidTime(f64),

    /// A timing function description cannot be turned into a timing function
    InvalidTimingFunction(String),

    /// A curve description could not be parsed
    Json(serde_json::Error)
}

impl From<serde_json::Error> for CurveError {
    fn from(err: serde_json::Error) -> CurveError {
        CurveError::Json(err)
    }
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CurveError::EmptyCurve                  => write!(f, "the curve has no keyframes"),
            CurveError::InvalidTime(time)           => write!(f, "{} is not a valid keyframe time", time),
            CurveError::InvalidTimingFunction(msg)  => write!(f, "invalid timing function: {}", msg),
            CurveError::Json(err)                   => write!(f, "could not read curve description: {}", err)
        }
    }
}

impl Error for CurveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CurveError::Json(err)   => Some(err),
            _                       => None
        }
    }
}
