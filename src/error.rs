use thiserror::Error;

/// Failures while reading the question file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
    #[error("question #{index} is invalid: {reason}")]
    Invalid { index: usize, reason: String },
    #[error("question file contains no questions")]
    Empty,
}

/// Rejected console input. The message is shown to the player as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a valid number.")]
    NotANumber,
    #[error("Please enter valid numbers separated by commas.")]
    NotNumbers,
    #[error("Please enter a number between {min} and {max}")]
    OutOfRange { min: usize, max: usize },
    #[error("Please enter numbers between {min} and {max} separated by commas")]
    SelectionOutOfRange { min: usize, max: usize },
    #[error("Please select at least one option.")]
    NoSelection,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("console error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed before the quiz was finished")]
    InputClosed,
}
