use std::time::{Duration};

///
/// Converts a Duration to a curve time (in seconds)
///
pub fn seconds_from_duration(time: Duration) -> f64 {
    let nanos   = time.as_nanos();
    let seconds = (nanos as f64) / 1_000_000_000.0;

    seconds
}

///
/// Converts a curve time (in seconds) to a Duration
///
/// Durations can't be negative, so times before 0 are clamped to zero
///
pub fn duration_from_seconds(time: f64) -> Duration {
    if time <= 0.0 || !time.is_finite() {
        Duration::from_nanos(0)
    } else {
        let nanos = time * 1_000_000_000.0;
        Duration::from_nanos(nanos.round() as u64)
    }
}
