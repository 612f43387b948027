//!
//! `flo_keyframes` evaluates keyframed animation curves.
//!
//! A curve is an ordered list of keyframes, each holding a time, a value and an optional
//! timing function that eases the segment starting at that keyframe. Asking a curve for
//! its value at a time finds the active segment and blends the values at either end of it.
//! Curves exist for scalars, colours, lists of transform operations and lists of filter
//! operations.
//!
//! Curves can also be built from serializable descriptions (see `CurveDescription`), which
//! is the usual way to load them from a file.
//!

#![warn(bare_trait_objects)]

#[macro_use] extern crate log;

mod error;
mod time;
pub mod timing;
pub mod value;
mod curve;
mod description;

pub use self::error::*;
pub use self::time::*;
pub use self::timing::*;
pub use self::value::*;
pub use self::curve::*;
pub use self::description::*;
