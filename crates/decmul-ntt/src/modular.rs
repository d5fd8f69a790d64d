//! Modular arithmetic over the NTT prime field.
//!
//! All operations take and return values in `[0, MODULUS - 1]`. The modulus
//! was chosen for its factorization: `MODULUS - 1 = 119 * 2^23`, so the field
//! admits power-of-two transform lengths up to 2^23.

/// The NTT-friendly prime modulus.
pub const MODULUS: u64 = 998_244_353;

/// A primitive root of [`MODULUS`]; its powers supply the transform's roots
/// of unity.
pub const PRIMITIVE_ROOT: u64 = 3;

/// Largest power-of-two transform length dividing `MODULUS - 1`.
pub const MAX_TRANSFORM_LEN: usize = 1 << 23;

/// Modular addition.
#[inline]
#[must_use]
pub fn add_mod(x: u64, y: u64) -> u64 {
    let sum = x + y;
    if sum >= MODULUS {
        sum - MODULUS
    } else {
        sum
    }
}

/// Modular subtraction.
#[inline]
#[must_use]
pub fn sub_mod(x: u64, y: u64) -> u64 {
    if x >= y {
        x - y
    } else {
        x + MODULUS - y
    }
}

/// Modular multiplication through a widened accumulator.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn mul_mod(x: u64, y: u64) -> u64 {
    ((u128::from(x) * u128::from(y)) % u128::from(MODULUS)) as u64
}

/// Square-and-multiply exponentiation; `pow_mod(_, 0) == 1`.
#[must_use]
pub fn pow_mod(base: u64, mut exponent: u64) -> u64 {
    let mut base = base % MODULUS;
    let mut result = 1;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = mul_mod(result, base);
        }
        base = mul_mod(base, base);
        exponent >>= 1;
    }
    result
}

/// Multiplicative inverse via Fermat's little theorem.
///
/// `x` must be nonzero in the field.
#[must_use]
pub fn inv_mod(x: u64) -> u64 {
    pow_mod(x, MODULUS - 2)
}
