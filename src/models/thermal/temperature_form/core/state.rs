use crate::support::constraint::{Constrained, Finite};

use super::{FormError, FormMode, InvalidInputReason};

/// The state of a temperature form: which field is the source.
///
/// [`FormState::convert`] reads the mode and [`FormState::flip`] is the only
/// transition. Flipping never recomputes a value; whatever the derived field
/// last showed stays in place until the next conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormState {
    mode: FormMode,
}

impl FormState {
    /// Creates a state with Celsius as the source field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state starting in the given mode.
    #[must_use]
    pub fn with_mode(mode: FormMode) -> Self {
        Self { mode }
    }

    /// The current mode.
    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Converts a source-field value into the derived field's scale.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidInput`] if the result does not fit in an `f64`.
    pub fn convert(&self, source: Constrained<f64, Finite>) -> Result<f64, FormError> {
        let source = source.into_inner();
        Finite::new(self.mode.apply(source))
            .map(Constrained::into_inner)
            .map_err(|_| {
                FormError::invalid_input(source.to_string(), InvalidInputReason::NotFinite)
            })
    }

    /// Converts an unchecked source-field value.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidInput`] if `source` is `NaN` or infinite,
    /// or if the result does not fit in an `f64`.
    pub fn try_convert(&self, source: f64) -> Result<f64, FormError> {
        let source = Constrained::<f64, Finite>::new(source).map_err(|_| {
            FormError::invalid_input(source.to_string(), InvalidInputReason::NotFinite)
        })?;
        self.convert(source)
    }

    /// Swaps the source and derived roles and returns the new mode.
    pub fn flip(&mut self) -> FormMode {
        self.mode = self.mode.flipped();
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_celsius_as_source() {
        assert_eq!(FormState::new().mode(), FormMode::CelsiusIsSource);
    }

    #[test]
    fn flip_toggles_and_returns_new_mode() {
        let mut state = FormState::new();
        assert_eq!(state.flip(), FormMode::FahrenheitIsSource);
        assert_eq!(state.mode(), FormMode::FahrenheitIsSource);
        assert_eq!(state.flip(), FormMode::CelsiusIsSource);
        assert_eq!(state.mode(), FormMode::CelsiusIsSource);
    }

    #[test]
    fn convert_follows_mode() {
        let mut state = FormState::new();
        assert_eq!(state.convert(Finite::new(0.0).unwrap()), Ok(32.0));

        state.flip();
        assert_eq!(state.convert(Finite::new(32.0).unwrap()), Ok(0.0));
    }

    #[test]
    fn convert_does_not_change_mode() {
        let state = FormState::with_mode(FormMode::FahrenheitIsSource);
        let _ = state.convert(Finite::new(212.0).unwrap());
        assert_eq!(state.mode(), FormMode::FahrenheitIsSource);
    }

    #[test]
    fn try_convert_rejects_non_finite() {
        let state = FormState::new();
        assert_eq!(state.try_convert(100.0), Ok(212.0));

        let err = state.try_convert(f64::NAN).unwrap_err();
        assert_eq!(
            err,
            FormError::InvalidInput {
                text: "NaN".into(),
                reason: InvalidInputReason::NotFinite,
            }
        );
        assert!(state.try_convert(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn out_of_range_results_are_rejected() {
        let mut state = FormState::new();
        for source in [1e308, -1e308] {
            assert_eq!(
                state.try_convert(source),
                Err(FormError::InvalidInput {
                    text: source.to_string(),
                    reason: InvalidInputReason::NotFinite,
                })
            );
        }

        state.flip();
        for source in [1e308, -1e308, f64::MAX] {
            let celsius = state.try_convert(source).unwrap();
            assert!(celsius.is_finite());
            assert_eq!(celsius.signum(), source.signum());
        }
    }
}
