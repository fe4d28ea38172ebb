use twine_core::Model;

use super::{FormError, FormMode, FormState};

/// A [`Model`] that converts a temperature in one fixed direction.
///
/// This is a thin adapter over [`FormState::try_convert`], for callers that
/// compose the conversion with other Twine models instead of driving a form.
///
/// ```
/// use twine_core::Model;
/// use twine_temperature_form::models::thermal::temperature_form::TemperatureConverter;
///
/// let model = TemperatureConverter::celsius_to_fahrenheit();
/// assert_eq!(model.call(&100.0).unwrap(), 212.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemperatureConverter {
    state: FormState,
}

impl TemperatureConverter {
    /// Creates a converter reading values in `mode`'s source scale.
    #[must_use]
    pub fn new(mode: FormMode) -> Self {
        Self {
            state: FormState::with_mode(mode),
        }
    }

    /// Creates a converter from Celsius to Fahrenheit.
    #[must_use]
    pub fn celsius_to_fahrenheit() -> Self {
        Self::new(FormMode::CelsiusIsSource)
    }

    /// Creates a converter from Fahrenheit to Celsius.
    #[must_use]
    pub fn fahrenheit_to_celsius() -> Self {
        Self::new(FormMode::FahrenheitIsSource)
    }

    /// The direction this converter applies.
    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.state.mode()
    }
}

impl From<FormState> for TemperatureConverter {
    fn from(state: FormState) -> Self {
        Self { state }
    }
}

impl Model for TemperatureConverter {
    type Input = f64;
    type Output = f64;
    type Error = FormError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.state.try_convert(*input)
    }
}
