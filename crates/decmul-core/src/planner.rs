//! Transform size planning.

use decmul_ntt::MAX_TRANSFORM_LEN;

use crate::error::MulError;

/// Pick the minimal power-of-two transform length covering the convolution
/// of operands with `len_a` and `len_b` digits.
///
/// The bound `n >= len_a + len_b - 1` keeps distinct convolution terms from
/// aliasing into the same bin; an under-provisioned transform corrupts the
/// product silently rather than loudly, so the bound is enforced here and
/// re-checked by the convolution stage.
pub fn plan_transform_len(len_a: usize, len_b: usize) -> Result<usize, MulError> {
    debug_assert!(len_a > 0 && len_b > 0);
    let needed = len_a + len_b - 1;
    let n = needed.next_power_of_two();
    if n > MAX_TRANSFORM_LEN {
        return Err(MulError::TransformOverflow {
            needed: n,
            max: MAX_TRANSFORM_LEN,
        });
    }
    Ok(n)
}
