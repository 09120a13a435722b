use crate::math::poly::Residuals;
use crate::math::CoshFloat;
use crate::simd::traits::SimdFloat;

/// Rebuilds `cosh(i + dy)` from the tabulated seeds of `i` and the remainders of `dy`.
///
/// Uses `cosh(i + dy) = cosh(i) * (1 + cdy) + sinh(i) * (dy + sdy)` with
/// every seed split as `head + tail`. The small products are accumulated
/// first in one FMA chain and the cosh head is added last, so the result is
/// rounded essentially once.
#[inline(always)]
pub fn combine<V: SimdFloat>(index: V::Index, dy: V, residuals: Residuals<V>) -> V {
    let seeds = <V::Scalar as CoshFloat>::seeds();

    let sinh_head = V::gather(&seeds.sinh_head, index);
    let sinh_tail = V::gather(&seeds.sinh_tail, index);
    let cosh_head = V::gather(&seeds.cosh_head, index);
    let cosh_tail = V::gather(&seeds.cosh_tail, index);

    let Residuals {
        sinh: sdy,
        cosh: cdy,
    } = residuals;

    let mut z = sinh_tail.mul_add(sdy, cosh_tail * cdy);
    z = sinh_tail.mul_add(dy, z);
    z = cosh_head.mul_add(cdy, z) + cosh_tail;
    z = sinh_head.mul_add(sdy, z);
    z = sinh_head.mul_add(dy, z);

    z + cosh_head
}
