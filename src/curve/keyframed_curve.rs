use super::keyframe::*;
use super::curve_value::*;
use crate::error::*;
use crate::timing::*;
use crate::value::*;

///
/// A curve that moves through a series of keyframes
///
/// Keyframes are kept sorted by time. Asking for the value at a time before the first keyframe or after
/// the last one returns the value of that keyframe: the curve never extrapolates past its ends.
///
#[derive(Clone, Debug)]
pub struct KeyframedCurve<V> {
    /// The keyframes for this curve, in time order
    keyframes: Vec<Keyframe<V>>,

    /// Timing function that applies to the curve as a whole
    timing_function: Option<Box<dyn TimingFunction>>
}

/// Curve that animates a single number
pub type FloatCurve = KeyframedCurve<f64>;

/// Curve that animates a colour
pub type ColorCurve = KeyframedCurve<Color>;

/// Curve that animates a list of transform operations
pub type TransformCurve = KeyframedCurve<TransformOperations>;

/// Curve that animates a list of filter operations
pub type FilterCurve = KeyframedCurve<FilterOperations>;

impl<V: CurveValue> Default for KeyframedCurve<V> {
    fn default() -> KeyframedCurve<V> {
        KeyframedCurve::new()
    }
}

impl<V: CurveValue> KeyframedCurve<V> {
    ///
    /// Creates a curve with no keyframes
    ///
    pub fn new() -> KeyframedCurve<V> {
        KeyframedCurve {
            keyframes:          vec![],
            timing_function:    None
        }
    }

    ///
    /// Creates a curve from a set of keyframes (which can be in any order)
    ///
    pub fn with_keyframes<Keyframes: IntoIterator<Item=Keyframe<V>>>(keyframes: Keyframes) -> Result<KeyframedCurve<V>, CurveError> {
        let mut curve = KeyframedCurve::new();

        for keyframe in keyframes {
            curve.add_keyframe(keyframe)?;
        }

        Ok(curve)
    }

    ///
    /// Adds a keyframe to this curve
    ///
    /// Keyframes can be added in any order. A keyframe with the same time as an existing one is placed after it, which
    /// makes the curve jump from one value to the other at that time.
    ///
    pub fn add_keyframe(&mut self, keyframe: Keyframe<V>) -> Result<(), CurveError> {
        if !keyframe.time().is_finite() {
            return Err(CurveError::InvalidTime(keyframe.time()));
        }

        let after_last = self.keyframes.last()
            .map(|last| keyframe.time() >= last.time())
            .unwrap_or(true);

        if after_last {
            // Keyframes are usually added in order
            self.keyframes.push(keyframe);
        } else {
            let index = self.keyframes.partition_point(|existing| existing.time() <= keyframe.time());
            self.keyframes.insert(index, keyframe);
        }

        Ok(())
    }

    ///
    /// The keyframes in this curve, in time order
    ///
    pub fn keyframes(&self) -> &[Keyframe<V>] {
        &self.keyframes
    }

    #[inline] pub fn len(&self) -> usize { self.keyframes.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.keyframes.is_empty() }

    ///
    /// Sets a timing function that eases the whole curve (in addition to any easing on the individual keyframes)
    ///
    pub fn set_timing_function(&mut self, timing_function: Option<Box<dyn TimingFunction>>) {
        self.timing_function = timing_function;
    }

    pub fn timing_function(&self) -> Option<&dyn TimingFunction> {
        self.timing_function.as_ref().map(|timing_function| &**timing_function)
    }

    ///
    /// The time of the first keyframe
    ///
    pub fn start_time(&self) -> Result<f64, CurveError> {
        self.keyframes.first()
            .map(|first| first.time())
            .ok_or(CurveError::EmptyCurve)
    }

    ///
    /// The time between the first and last keyframes
    ///
    pub fn duration(&self) -> Result<f64, CurveError> {
        match (self.keyframes.first(), self.keyframes.last()) {
            (Some(first), Some(last))   => Ok(last.time() - first.time()),
            _                           => Err(CurveError::EmptyCurve)
        }
    }

    ///
    /// Returns the value of this curve at the specified time
    ///
    pub fn value_at(&self, time: f64) -> Result<V, CurveError> {
        if time.is_nan() {
            return Err(CurveError::InvalidTime(time));
        }

        let (first, last) = match (self.keyframes.first(), self.keyframes.last()) {
            (Some(first), Some(last))   => (first, last),
            _                           => return Err(CurveError::EmptyCurve)
        };

        // Times outside the curve take the value of the nearest end
        if time <= first.time() {
            return Ok(first.value().clone());
        }
        if time >= last.time() {
            return Ok(last.value().clone());
        }

        // The curve timing function can push the time outside of the curve, in which case the end segments are extrapolated
        let time        = self.curve_time(time, first.time(), last.time());

        let index       = self.segment_index(time);
        let progress    = self.segment_progress(index, time);

        let from        = &self.keyframes[index];
        let to          = &self.keyframes[index+1];

        Ok(to.value().blend(from.value(), progress))
    }

    ///
    /// Maps a time through the curve's timing function
    ///
    fn curve_time(&self, time: f64, start: f64, end: f64) -> f64 {
        match &self.timing_function {
            Some(timing_function)   => {
                let duration = end - start;
                start + duration * timing_function.value((time - start) / duration)
            }

            None                    => time
        }
    }

    ///
    /// Finds the index of the keyframe that starts the segment containing the specified time
    ///
    /// The curve must have at least two keyframes. Times before the first keyframe are in the first segment and times
    /// after the last keyframe are in the last segment.
    ///
    fn segment_index(&self, time: f64) -> usize {
        let interior = &self.keyframes[1..self.keyframes.len()-1];

        interior.iter()
            .take_while(|keyframe| time >= keyframe.time())
            .count()
    }

    ///
    /// Works out the eased progress through the segment starting at the specified keyframe
    ///
    fn segment_progress(&self, index: usize, time: f64) -> f64 {
        let start       = &self.keyframes[index];
        let end_time    = self.keyframes[index+1].time();
        let length      = end_time - start.time();

        let progress    = if length > 0.0 {
            (time - start.time()) / length
        } else {
            trace!("Zero-length segment at time {}", start.time());

            if time >= end_time { 1.0 } else { 0.0 }
        };

        match start.timing_function() {
            Some(timing_function)   => timing_function.value(progress),
            None                    => progress
        }
    }
}
