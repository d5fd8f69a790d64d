//! Exit-code mapping for pipeline errors.

use decmul_core::{exit_codes, MulError};

/// Map an error chain to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<MulError>() {
        Some(MulError::MalformedInput(_) | MulError::InputTooLarge { .. }) => {
            exit_codes::ERROR_INPUT
        }
        Some(MulError::TransformOverflow { .. }) => exit_codes::ERROR_CAPACITY,
        None => exit_codes::ERROR_GENERIC,
    }
}
