use super::timing_function::*;

///
/// Timing function that leaves progress unchanged
///
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct LinearTimingFunction;

impl LinearTimingFunction {
    pub fn new() -> LinearTimingFunction {
        LinearTimingFunction
    }
}

impl TimingFunction for LinearTimingFunction {
    #[inline] fn value(&self, progress: f64) -> f64 { progress }
    #[inline] fn velocity(&self, _progress: f64) -> f64 { 1.0 }
    #[inline] fn range(&self) -> (f64, f64) { (0.0, 1.0) }

    fn clone_box(&self) -> Box<dyn TimingFunction> {
        Box::new(*self)
    }
}
