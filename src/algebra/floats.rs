#![allow(non_snake_case)]
use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Main trait for floating point types used in the projection solvers.
///
/// All internal arithmetic on constraint coefficients, weights and solution
/// vectors is carried out on values implementing `FloatT`.  Implementations
/// exist for every type satisfying the bounds, in practice `f32` and `f64`.
///
/// `FloatT` relies on [`num_traits`](num_traits) for most of its constituent
/// trait bounds.  The `Send + Sync` bounds allow a constraint set to be shared
/// between threads that each run their own solve.
pub trait FloatT:
    'static
    + Send
    + Sync
    + Float
    + NumAssign
    + Default
    + FromPrimitive
    + Display
    + LowerExp
    + Debug
    + std::iter::Sum
    + Sized
{
}

impl<T> FloatT for T where
    T: 'static
        + Send
        + Sync
        + Float
        + NumAssign
        + Default
        + FromPrimitive
        + Display
        + LowerExp
        + Debug
        + std::iter::Sum
        + Sized
{
}

/// Trait for converting Rust primitives to [`FloatT`](crate::algebra::FloatT)
///
/// Used for converting constants and settings defaults, so that we can
/// write things like `(1e-2).as_T()` rather than `T::from_f64(1e-2).unwrap()`.
pub trait AsFloatT<T>: 'static {
    fn as_T(&self) -> T;
}

impl<T> AsFloatT<T> for f64
where
    T: FromPrimitive + 'static,
{
    #[inline]
    fn as_T(&self) -> T {
        T::from_f64(*self).unwrap()
    }
}
