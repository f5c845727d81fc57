use thiserror::Error;

/// Represents the different types of errors that can occur in the text classifier.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Classification was requested for an empty document
    #[error("Input text cannot be empty")]
    EmptyInput,
    /// No category produced a score above zero
    #[error("Could not determine a category for the text")]
    NoMatch,
    /// A tokenizer pipeline stage failed to start or panicked
    #[error("Tokenizer error: {0}")]
    TokenizerError(String),
    /// The frequency model could not be accessed
    #[error("Model error: {0}")]
    ModelError(String),
    /// Error occurred during the build phase
    #[error("Build error: {0}")]
    BuildError(String),
    /// Error occurred due to invalid input parameters
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl<T> From<std::sync::PoisonError<T>> for ClassifierError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        ClassifierError::ModelError(format!("frequency model lock poisoned: {}", err))
    }
}
