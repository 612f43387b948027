use crate::timing::*;

///
/// A keyframe: a value that a curve passes through at a particular time
///
/// The timing function eases the segment that starts at this keyframe. The timing function of
/// the last keyframe in a curve is never used.
///
#[derive(Clone, Debug)]
pub struct Keyframe<V> {
    time:               f64,
    value:              V,
    timing_function:    Option<Box<dyn TimingFunction>>
}

impl<V> Keyframe<V> {
    ///
    /// Creates a new keyframe
    ///
    pub fn new(time: f64, value: V, timing_function: Option<Box<dyn TimingFunction>>) -> Keyframe<V> {
        Keyframe { time, value, timing_function }
    }

    ///
    /// Creates a keyframe that moves linearly towards the next keyframe
    ///
    pub fn linear(time: f64, value: V) -> Keyframe<V> {
        Keyframe { time, value, timing_function: None }
    }

    ///
    /// Creates a keyframe whose segment is eased by the specified timing function
    ///
    pub fn eased<TFn: 'static+TimingFunction>(time: f64, value: V, timing_function: TFn) -> Keyframe<V> {
        Keyframe { time, value, timing_function: Some(Box::new(timing_function)) }
    }

    #[inline] pub fn time(&self) -> f64 { self.time }
    #[inline] pub fn value(&self) -> &V { &self.value }

    pub fn timing_function(&self) -> Option<&dyn TimingFunction> {
        self.timing_function.as_ref().map(|timing_function| &**timing_function)
    }
}
