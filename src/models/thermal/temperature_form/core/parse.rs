use crate::support::constraint::{Constrained, Finite};

use super::{FormError, InvalidInputReason};

/// Parses field text into a finite temperature value.
///
/// Leading and trailing whitespace is ignored.
///
/// # Errors
///
/// Returns [`FormError::InvalidInput`] if the text is empty, is not a number,
/// or names a non-finite value such as `inf` or `NaN`.
pub(crate) fn parse_temperature(text: &str) -> Result<Constrained<f64, Finite>, FormError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FormError::invalid_input(text, InvalidInputReason::Empty));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| FormError::invalid_input(text, InvalidInputReason::NotANumber))?;

    Finite::new(value).map_err(|_| FormError::invalid_input(text, InvalidInputReason::NotFinite))
}
