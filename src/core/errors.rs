use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GateError {
    #[error("Matrix is not Unitary (U†U != I)")]
    NonUnitary,

    #[error("Matrix must be square")]
    NotSquareMatrix,

    #[error("Invalid dimensions: single-qubit gates must be 2x2")]
    InvalidDimensions,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    #[error("Amplitudes are not normalized. Norm squared: {0}")]
    NotNormalized(f64),

    #[error("Qubit has already been measured")]
    AlreadyCollapsed,

    #[error("Gate error: {0}")]
    GateError(#[from] GateError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegisterError {
    #[error("Register must hold at least one qubit")]
    EmptyRegister,

    #[error("Sequence length mismatch: register holds {expected} qubits, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("Register has already been measured")]
    AlreadyMeasured,

    #[error("State error: {0}")]
    StateError(#[from] StateError),
}
