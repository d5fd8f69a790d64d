//! Operand limits and process exit codes.

/// Maximum supported decimal digits per operand.
///
/// At this ceiling the largest convolution coefficient is 81 * 10^6, well
/// below the field modulus, so carry extraction never sees a wrapped sum,
/// and the planned transform length tops out at 2^21 against the 2^23
/// field capacity.
pub const MAX_OPERAND_DIGITS: usize = 1_000_000;

/// Exit codes for the command-line front end.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Malformed or oversized input.
    pub const ERROR_INPUT: i32 = 2;
    /// Planned transform exceeds the field capacity.
    pub const ERROR_CAPACITY: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;
    use decmul_ntt::{MAX_TRANSFORM_LEN, MODULUS};

    #[test]
    fn coefficients_stay_below_modulus_at_ceiling() {
        // Worst case: every digit 9 in both operands.
        let max_coefficient = 81u64 * MAX_OPERAND_DIGITS as u64;
        assert!(max_coefficient < MODULUS);
    }

    #[test]
    fn ceiling_fits_the_transform_capacity() {
        let needed = 2 * MAX_OPERAND_DIGITS - 1;
        assert!(needed.next_power_of_two() <= MAX_TRANSFORM_LEN);
    }
}
