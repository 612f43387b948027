//!
//! The kinds of value that a keyframed curve can animate
//!

mod blend;
mod color;
mod geometry;
mod transform;
mod filter;

pub use self::blend::*;
pub use self::color::*;
pub use self::geometry::*;
pub use self::transform::*;
pub use self::filter::*;
