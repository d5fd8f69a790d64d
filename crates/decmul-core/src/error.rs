//! Error taxonomy for the multiplication pipeline.

/// Error type for decimal multiplication.
///
/// Every failure is a deterministic function of input size and shape,
/// reported before any output is produced. Successful paths never error.
#[derive(Debug, thiserror::Error)]
pub enum MulError {
    /// Input was not two plain decimal tokens.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Operand exceeds the supported digit count.
    #[error("operand is {len} digits long, above the {max}-digit maximum")]
    InputTooLarge { len: usize, max: usize },

    /// The planned transform does not fit the field's power-of-two capacity.
    #[error("transform length {needed} exceeds the supported maximum {max}")]
    TransformOverflow { needed: usize, max: usize },
}
