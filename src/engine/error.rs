use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Error type covering the different failure cases that can occur when the
/// engine validates operands, computes, or talks to a text store.
///
/// The display strings are part of the public contract: callers and tests
/// assert on the exact message text, so changing a message is a breaking
/// change.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Raised when a variadic operation receives an empty operand sequence.
    /// Carries the operation name so the message names the caller's intent.
    #[error("At least one number must be provided to {0}.")]
    EmptyOperands(&'static str),

    /// Raised when a sequence operand is infinite or not a number.
    #[error("Invalid input: all numbers must be a finite number. Received: {0}")]
    NonFiniteOperand(String),

    /// Raised by two-operand operations when either side is absent or not
    /// finite. Both operands are referenced in call order, even when both
    /// are invalid.
    #[error("Invalid input: all numbers must be a finite number. Received: {0} and {1}")]
    NonFiniteOperandPair(String, String),

    /// Raised by division once both operands pass the finiteness check.
    #[error("Division by zero is not allowed.")]
    DivisionByZero,

    /// Raised when lenient parsing of a text source leaves no usable tokens.
    #[error("No valid numbers found in the file.")]
    NoValidNumbers,

    /// Uniform wrapper for every failure path of the file summation
    /// operation; the underlying message is embedded verbatim.
    #[error("Failed to sum numbers from file: {0}")]
    SumFromFile(String),

    /// Wrapper for failures of the text destination collaborator.
    #[error("Failed to write to file: {0}")]
    WriteFile(String),
}
