use crate::simd::traits::SimdFloat;

/// An input split into a table index and a small remainder.
///
/// `y == index + dy` holds exactly for every lane with `y <= 36`; above that the
/// index is clamped to 36 so the table lookup stays in bounds, and the lane is
/// always overridden by the large-argument or overflow region.
#[derive(Debug, Clone, Copy)]
pub struct ReducedArgument<V: SimdFloat> {
    /// Sign of the input. Cosh is even, so only odd functions would consume it.
    pub negative: V::Mask,
    /// `|x|`.
    pub y: V,
    /// `min(trunc(y), 36)`.
    pub index: V::Index,
    /// `y - index`, in `[0, 1)` for every in-table lane.
    pub dy: V,
}

/// Strips the sign of `x` and splits the magnitude at its integer part.
///
/// Never fails: NaN yields index 0 and a NaN remainder, infinity yields
/// index 36 and an infinite remainder.
#[inline(always)]
pub fn reduce<V: SimdFloat>(x: V) -> ReducedArgument<V> {
    let y = x.abs();
    let index = y.seed_index();
    let dy = y - V::index_value(index);

    ReducedArgument {
        negative: x.is_sign_negative(),
        y,
        index,
        dy,
    }
}
