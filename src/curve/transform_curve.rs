use super::keyframed_curve::*;
use crate::value::*;

use itertools::*;

impl TransformCurve {
    ///
    /// Works out the bounds that a box passes through over the whole of this curve
    ///
    /// Returns None if the bounds can't be determined for any of the segments of the curve (eg, because the
    /// operations in two keyframes don't match up)
    ///
    pub fn animated_bounds_for_box(&self, bounds: &Bounds3) -> Option<Bounds3> {
        if self.is_empty() {
            warn!("Requested animated bounds for a transform curve with no keyframes");
            return None;
        }

        if self.len() == 1 {
            let only = self.keyframes()[0].value();
            return Some(only.apply().map_bounds(bounds));
        }

        let keyframes       = self.keyframes();
        let last_segment    = keyframes.len() - 2;

        // The curve timing function can move the time before the first keyframe or after the last one, which
        // extrapolates the end segments
        let (min_time, max_time) = self.extrapolated_time_range();
        let mut result: Option<Bounds3> = None;

        for (index, (from, to)) in keyframes.iter().tuple_windows().enumerate() {
            let length              = to.time() - from.time();
            let mut min_linear      = 0.0;
            let mut max_linear      = 1.0;

            if length > 0.0 {
                if index == 0 && min_time < from.time()         { min_linear = (min_time - from.time()) / length; }
                if index == last_segment && max_time > to.time() { max_linear = (max_time - from.time()) / length; }
            }

            // Overshooting timing functions can take the segment outside of the 0-1 range
            let (min_progress, max_progress) = match from.timing_function() {
                Some(timing_function) => {
                    let (min_eased, max_eased)  = timing_function.range();
                    let at_min                  = timing_function.value(min_linear);
                    let at_max                  = timing_function.value(max_linear);

                    (min_eased.min(at_min).min(at_max), max_eased.max(at_min).max(at_max))
                }

                None => (min_linear, max_linear)
            };

            let segment_bounds = match to.value().blended_bounds_for_box(bounds, from.value(), min_progress, max_progress) {
                Some(segment_bounds)    => segment_bounds,
                None                    => {
                    warn!("Could not determine the bounds of segment {} of a transform curve", index);
                    return None;
                }
            };

            result = Some(match result {
                Some(result)    => result.union(segment_bounds),
                None            => segment_bounds
            });
        }

        result
    }

    ///
    /// The earliest and latest times that the curve timing function can map a time within this curve to
    ///
    fn extrapolated_time_range(&self) -> (f64, f64) {
        let keyframes   = self.keyframes();
        let start       = keyframes[0].time();
        let end         = keyframes[keyframes.len()-1].time();

        match self.timing_function() {
            Some(timing_function)   => {
                let (min_progress, max_progress) = timing_function.range();
                let duration = end - start;

                (start + duration * min_progress.min(0.0), start + duration * max_progress.max(1.0))
            }

            None                    => (start, end)
        }
    }

    ///
    /// True if any of the keyframes in this curve changes the scale
    ///
    pub fn affects_scale(&self) -> bool {
        self.keyframes().iter().any(|keyframe| keyframe.value().affects_scale())
    }

    ///
    /// True if every keyframe in this curve is a translation
    ///
    pub fn is_translation(&self) -> bool {
        self.keyframes().iter().all(|keyframe| keyframe.value().is_translation())
    }

    ///
    /// True if every keyframe in this curve keeps axis-aligned rectangles axis-aligned
    ///
    pub fn preserves_axis_alignment(&self) -> bool {
        self.keyframes().iter().all(|keyframe| keyframe.value().preserves_axis_alignment())
    }

    ///
    /// The largest scale factor of the keyframe where the animation starts (the first keyframe when running forwards,
    /// or the last when running backwards)
    ///
    pub fn animation_start_scale(&self, forward_direction: bool) -> Option<f64> {
        let start = if forward_direction { self.keyframes().first() } else { self.keyframes().last() };

        let start = match start {
            Some(start) => start,
            None        => {
                warn!("Requested the start scale of a transform curve with no keyframes");
                return None;
            }
        };

        start.value().scale_component().map(|scale| max_component(&scale))
    }

    ///
    /// The largest scale factor of any of the keyframes that the animation moves towards
    ///
    /// The keyframe where the animation starts (the first when running forwards, the last when running backwards) is
    /// not included.
    ///
    pub fn maximum_target_scale(&self, forward_direction: bool) -> Option<f64> {
        if self.is_empty() {
            warn!("Requested the target scale of a transform curve with no keyframes");
            return None;
        }

        let keyframes   = self.keyframes();
        let targets     = if forward_direction { &keyframes[1..] } else { &keyframes[..keyframes.len()-1] };

        targets.iter()
            .try_fold(0.0, |max_scale: f64, keyframe| {
                keyframe.value().scale_component()
                    .map(|scale| max_scale.max(max_component(&scale)))
            })
    }
}

///
/// The largest absolute component of a scale vector
///
#[inline]
fn max_component(scale: &Vector3) -> f64 {
    scale.x().abs().max(scale.y().abs()).max(scale.z().abs())
}
