//!
//! Timing functions remap the progress through a segment (or a whole curve) so that
//! interpolation doesn't have to be linear.
//!

mod timing_function;
mod linear;
mod cubic_bezier;
mod steps;

pub use self::timing_function::*;
pub use self::linear::*;
pub use self::cubic_bezier::*;
pub use self::steps::*;
