use thiserror::Error;

/// Errors that can occur while converting the source field.
///
/// None of these are fatal. The form is left unchanged and the user may
/// correct the input and convert again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The source field does not hold a finite real number.
    #[error("invalid input {text:?}: {reason}")]
    InvalidInput {
        /// The rejected text, as entered.
        text: String,

        /// Why the text was rejected.
        reason: InvalidInputReason,
    },
}

impl FormError {
    pub(crate) fn invalid_input(text: impl Into<String>, reason: InvalidInputReason) -> Self {
        Self::InvalidInput {
            text: text.into(),
            reason,
        }
    }
}

/// The reason a [`FormError::InvalidInput`] was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInputReason {
    #[error("field is empty")]
    Empty,
    #[error("not a number")]
    NotANumber,
    #[error("value must be finite")]
    NotFinite,
}
