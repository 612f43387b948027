use super::timing_function::*;
use crate::error::*;

use serde::{Serialize, Deserialize};

///
/// Where the jump happens within each step of a steps timing function
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum StepPosition {
    /// The value jumps at the start of each step
    Start,

    /// The value jumps half way through each step
    Middle,

    /// The value jumps at the end of each step
    End
}

///
/// Timing function that moves through a fixed number of discrete steps
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct StepsTimingFunction {
    steps:      u32,
    position:   StepPosition
}

impl StepsTimingFunction {
    ///
    /// Creates a new steps timing function. There must be at least one step.
    ///
    pub fn new(steps: u32, position: StepPosition) -> Result<StepsTimingFunction, CurveError> {
        if steps == 0 {
            return Err(CurveError::InvalidTimingFunction("a steps timing function needs at least one step".to_string()));
        }

        Ok(StepsTimingFunction { steps, position })
    }

    ///
    /// The number of steps in this function
    ///
    pub fn steps(&self) -> u32 { self.steps }

    ///
    /// Where the jump happens within each step
    ///
    pub fn position(&self) -> StepPosition { self.position }

    ///
    /// Amount added to the progress before it's rounded down to a step
    ///
    fn start_offset(&self) -> f64 {
        match self.position {
            StepPosition::Start     => 1.0,
            StepPosition::Middle    => 0.5,
            StepPosition::End       => 0.0
        }
    }
}

impl TimingFunction for StepsTimingFunction {
    fn value(&self, progress: f64) -> f64 {
        let steps   = self.steps as f64;
        let step    = (progress * steps + self.start_offset()).floor();

        // Stay within 0-1 unless the input itself is outside that range
        let value   = step / steps;
        if progress >= 0.0 && progress <= 1.0 {
            value.max(0.0).min(1.0)
        } else {
            value
        }
    }

    #[inline] fn velocity(&self, _progress: f64) -> f64 { 0.0 }
    #[inline] fn range(&self) -> (f64, f64) { (0.0, 1.0) }

    fn clone_box(&self) -> Box<dyn TimingFunction> {
        Box::new(*self)
    }
}
