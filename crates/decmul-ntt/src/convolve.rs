//! Digit-sequence convolution through the transform.
//!
//! Load both operands little-endian into zero-padded buffers, transform,
//! multiply pointwise, transform back. The caller plans the buffer length so
//! the true convolution sums stay below the modulus.

use rayon::prelude::*;
use tracing::trace;

use crate::modular::mul_mod;
use crate::transform::{ntt_forward, ntt_inverse};

/// Element count above which pointwise products run on the rayon pool.
const PARALLEL_THRESHOLD: usize = 1 << 16;

/// Convolve two digit sequences (most-significant digit first) through a
/// transform of length `n`, returning the raw coefficient sums.
///
/// `n` must be a power of two with `n >= a.len() + b.len() - 1`; a shorter
/// transform would alias distinct convolution terms into the same bin.
#[must_use]
pub fn convolve_digits(a: &[u8], b: &[u8], n: usize) -> Vec<u64> {
    debug_assert!(n.is_power_of_two());
    debug_assert!(n >= a.len() + b.len() - 1);
    trace!(len_a = a.len(), len_b = b.len(), n, "convolving digit sequences");

    let mut buf_a = load_little_endian(a, n);
    let mut buf_b = load_little_endian(b, n);

    ntt_forward(&mut buf_a);
    ntt_forward(&mut buf_b);

    pointwise_multiply(&mut buf_a, &buf_b);

    ntt_inverse(&mut buf_a);
    buf_a
}

/// Spread digits into a zero-padded buffer, least significant digit first.
fn load_little_endian(digits: &[u8], n: usize) -> Vec<u64> {
    let mut buf = vec![0u64; n];
    for (slot, &digit) in buf.iter_mut().zip(digits.iter().rev()) {
        *slot = u64::from(digit);
    }
    buf
}

/// Pointwise product of two transformed buffers, accumulated into `a`.
pub fn pointwise_multiply(a: &mut [u64], b: &[u64]) {
    debug_assert_eq!(a.len(), b.len());
    if a.len() >= PARALLEL_THRESHOLD {
        a.par_iter_mut()
            .zip(b.par_iter())
            .for_each(|(x, &y)| *x = mul_mod(*x, y));
    } else {
        for (x, &y) in a.iter_mut().zip(b) {
            *x = mul_mod(*x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reverses_digit_order() {
        // "123" -> coefficients [3, 2, 1, 0]
        let buf = load_little_endian(&[1, 2, 3], 4);
        assert_eq!(buf, vec![3, 2, 1, 0]);
    }

    #[test]
    fn load_pads_with_zeros() {
        let buf = load_little_endian(&[9], 8);
        assert_eq!(buf, vec![9, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn pointwise_small() {
        let mut a = vec![3, 5, 7];
        let b = vec![11, 13, 0];
        pointwise_multiply(&mut a, &b);
        assert_eq!(a, vec![33, 65, 0]);
    }

    #[test]
    fn convolution_of_12_and_34() {
        // 12 * 34: coefficient sums before carrying are [8, 10, 3, 0].
        let coeffs = convolve_digits(&[1, 2], &[3, 4], 4);
        assert_eq!(coeffs, vec![8, 10, 3, 0]);
    }

    #[test]
    fn convolution_of_repeated_nines() {
        // 999 * 999: [81, 162, 243, 162, 81, 0, 0, 0].
        let coeffs = convolve_digits(&[9, 9, 9], &[9, 9, 9], 8);
        assert_eq!(coeffs, vec![81, 162, 243, 162, 81, 0, 0, 0]);
    }

    #[test]
    fn convolution_single_digits() {
        let coeffs = convolve_digits(&[9], &[9], 1);
        assert_eq!(coeffs, vec![81]);
    }
}
