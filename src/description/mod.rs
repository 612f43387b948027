mod timing_function_description;
mod curve_description;

pub use self::timing_function_description::*;
pub use self::curve_description::*;
