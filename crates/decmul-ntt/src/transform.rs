//! Forward and inverse transforms.
//!
//! In-place iterative Cooley-Tukey over a power-of-two buffer of field
//! elements. Forward and inverse differ only in the root (g vs g^-1) and in
//! the final `1/n` scaling of the inverse.

use crate::modular::{
    add_mod, inv_mod, mul_mod, pow_mod, sub_mod, MAX_TRANSFORM_LEN, MODULUS, PRIMITIVE_ROOT,
};
use crate::rev_cache;

/// Forward transform in place.
///
/// `data.len()` must be a power of two no greater than
/// [`MAX_TRANSFORM_LEN`]. Buffers of length <= 1 are returned unchanged.
pub fn ntt_forward(data: &mut [u64]) {
    transform(data, false);
}

/// Inverse transform in place, including the `1/n` scaling.
///
/// Applying [`ntt_forward`] then [`ntt_inverse`] reproduces the original
/// buffer exactly.
pub fn ntt_inverse(data: &mut [u64]) {
    transform(data, true);
}

fn transform(data: &mut [u64], invert: bool) {
    let n = data.len();
    if n <= 1 {
        return;
    }
    debug_assert!(n.is_power_of_two());
    debug_assert!(n <= MAX_TRANSFORM_LEN);

    bit_reverse_permute(data);

    let root = if invert {
        inv_mod(PRIMITIVE_ROOT)
    } else {
        PRIMITIVE_ROOT
    };

    // Butterfly passes over doubling segment lengths.
    let mut len = 2;
    while len <= n {
        // Twiddle generator of order `len`: root^((p-1)/len).
        let wlen = pow_mod(root, (MODULUS - 1) / (len as u64));
        for block in data.chunks_exact_mut(len) {
            let (lo, hi) = block.split_at_mut(len / 2);
            let mut w = 1u64;
            for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
                let u = *a;
                let v = mul_mod(*b, w);
                *a = add_mod(u, v);
                *b = sub_mod(u, v);
                w = mul_mod(w, wlen);
            }
        }
        len <<= 1;
    }

    if invert {
        let n_inv = inv_mod(n as u64);
        for elem in data.iter_mut() {
            *elem = mul_mod(*elem, n_inv);
        }
    }
}

/// Apply the bit-reversal permutation using the shared table cache.
fn bit_reverse_permute(data: &mut [u64]) {
    let table = rev_cache::shared().table_for(data.len());
    for (i, &rev) in table.iter().enumerate() {
        let rev = rev as usize;
        if i < rev {
            data.swap(i, rev);
        }
    }
}
