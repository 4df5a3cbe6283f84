//! Floating point traits and slice arithmetic used by the constraint
//! storage types and the projection solvers.

mod floats;
mod math_traits;
mod utils;
mod vecmath;

pub use floats::*;
pub use math_traits::*;
pub(crate) use utils::*;
