pub mod days;
pub mod plan;

pub use days::*;
pub use plan::*;
