use super::keyframed_curve::*;

impl FilterCurve {
    ///
    /// True if any of the keyframes in this curve has a filter that can move pixels
    ///
    pub fn has_filter_that_moves_pixels(&self) -> bool {
        self.keyframes().iter().any(|keyframe| keyframe.value().has_filter_that_moves_pixels())
    }
}
