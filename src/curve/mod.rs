mod curve_value;
mod keyframe;
mod keyframed_curve;
mod animation_curve;
mod transform_curve;
mod filter_curve;

pub use self::curve_value::*;
pub use self::keyframe::*;
pub use self::keyframed_curve::*;
pub use self::animation_curve::*;
