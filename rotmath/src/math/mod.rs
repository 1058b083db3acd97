pub mod error;
pub mod mat33;
pub mod quat;

pub use error::*;
pub use mat33::*;
pub use quat::*;
