use thiserror::Error;

/// Failure of a single invocation at the host boundary.
///
/// None of these are retried; the host sees the display text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BridgeError {
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: &'static str, got: String },

    #[error("type mismatch at element {index}: expected {expected}, got {got}")]
    ElementMismatch {
        index: usize,
        expected: &'static str,
        got: String,
    },

    #[error("{function}() is missing argument {index}")]
    MissingArgument { function: String, index: usize },

    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// The host refused a binding or a value conversion.
    #[error("host error: {0}")]
    Host(String),
}

impl From<String> for BridgeError {
    fn from(s: String) -> Self {
        BridgeError::Host(s)
    }
}
