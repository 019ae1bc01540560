//! Path cost abstraction.
//!
//! Costs must be totally ordered and additive with a zero value. Floating
//! point costs go through [`OrderedFloat`] so the open list can rely on `Ord`.

use std::fmt::Debug;
use std::ops::Add;

use ordered_float::OrderedFloat;

/// A non-negative, totally ordered, additive path cost.
///
/// Edge costs handed to the engine must never be below [`Cost::zero`].
pub trait Cost: Copy + Ord + Add<Output = Self> + Debug {
    /// The additive identity (cost of an empty path).
    fn zero() -> Self;

    /// Whether this value is a legal edge cost (`>= zero`).
    #[must_use]
    fn is_non_negative(self) -> bool {
        self >= Self::zero()
    }
}

macro_rules! impl_integer_cost {
    ($($t:ty),* $(,)?) => {
        $(
            impl Cost for $t {
                fn zero() -> Self {
                    0
                }
            }
        )*
    };
}

impl_integer_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Cost for OrderedFloat<f32> {
    fn zero() -> Self {
        OrderedFloat(0.0)
    }
}

impl Cost for OrderedFloat<f64> {
    fn zero() -> Self {
        OrderedFloat(0.0)
    }
}
