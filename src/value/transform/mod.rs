mod matrix;
mod decomposed;
mod transform_operation;
mod transform_operations;

pub use self::matrix::*;
pub use self::decomposed::*;
pub use self::transform_operation::*;
pub use self::transform_operations::*;
