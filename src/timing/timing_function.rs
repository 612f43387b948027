use std::fmt;

///
/// Trait implemented by functions that remap a progress value
///
/// Progress is nominally in the range 0-1, but timing functions are free to return values outside
/// of this range (eg, for a curve that overshoots its target and then settles back)
///
pub trait TimingFunction : Send+Sync+fmt::Debug {
    ///
    /// Maps a progress value through this timing function
    ///
    fn value(&self, progress: f64) -> f64;

    ///
    /// The rate of change of the output of this function at the specified progress
    ///
    fn velocity(&self, progress: f64) -> f64;

    ///
    /// The minimum and maximum values this function can produce for inputs in the range 0-1
    ///
    fn range(&self) -> (f64, f64);

    ///
    /// Creates an independent copy of this timing function
    ///
    fn clone_box(&self) -> Box<dyn TimingFunction>;
}

impl Clone for Box<dyn TimingFunction> {
    fn clone(&self) -> Box<dyn TimingFunction> {
        self.clone_box()
    }
}
