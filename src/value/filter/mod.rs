mod filter_operation;
mod filter_operations;

pub use self::filter_operation::*;
pub use self::filter_operations::*;
