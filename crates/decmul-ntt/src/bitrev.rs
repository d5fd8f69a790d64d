//! Bit-reversal permutation tables.

/// Build the bit-reversal table for a transform of length `n`.
///
/// `n` must be a power of two. Entry `i` holds `i` with its `log2(n)` low
/// bits reversed, so the iterative transform can permute a buffer with a
/// single pass of conditional swaps.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn build_table(n: usize) -> Vec<u32> {
    debug_assert!(n.is_power_of_two());
    if n <= 1 {
        return vec![0; n];
    }
    let bits = n.trailing_zeros();
    (0..n as u32)
        .map(|i| i.reverse_bits() >> (u32::BITS - bits))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_length_one() {
        assert_eq!(build_table(1), vec![0]);
    }

    #[test]
    fn table_length_two() {
        assert_eq!(build_table(2), vec![0, 1]);
    }

    #[test]
    fn table_length_eight() {
        // 3-bit reversals: 000 100 010 110 001 101 011 111
        assert_eq!(build_table(8), vec![0, 4, 2, 6, 1, 5, 3, 7]);
    }

    #[test]
    fn table_is_involution() {
        let table = build_table(64);
        for (i, &rev) in table.iter().enumerate() {
            assert_eq!(table[rev as usize] as usize, i);
        }
    }

    #[test]
    fn table_is_permutation() {
        let mut table = build_table(256);
        table.sort_unstable();
        let expected: Vec<u32> = (0..256).collect();
        assert_eq!(table, expected);
    }
}
