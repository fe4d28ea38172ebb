use tracing::debug;
use uom::si::f64::ThermodynamicTemperature;

use super::{
    FormConfig, FormError, FormMode, FormState, InvalidInputReason, TemperatureConverter,
    core::{Field, parse_temperature},
};

/// A headless Celsius/Fahrenheit form.
///
/// Owns the [`FormState`] and the text of both fields. The host renders
/// [`text`](Self::text) and [`is_enabled`](Self::is_enabled) for each
/// [`Field`] and forwards user actions to [`enter`](Self::enter),
/// [`convert`](Self::convert) and [`flip`](Self::flip).
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureForm {
    state: FormState,
    config: FormConfig,
    celsius: String,
    fahrenheit: String,
}

impl Default for TemperatureForm {
    fn default() -> Self {
        Self::new()
    }
}

impl TemperatureForm {
    /// Creates an empty form with Celsius as the source field.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    /// Creates an empty form from a configuration.
    #[must_use]
    pub fn with_config(config: FormConfig) -> Self {
        debug!(mode = ?config.initial_mode, "temperature form created");
        Self {
            state: FormState::with_mode(config.initial_mode),
            config,
            celsius: String::new(),
            fahrenheit: String::new(),
        }
    }

    /// The current mode.
    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.state.mode()
    }

    /// The configuration this form was created with.
    #[must_use]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Returns `true` if `field` is the editable source field.
    #[must_use]
    pub fn is_enabled(&self, field: Field) -> bool {
        self.mode().source() == field
    }

    /// The current text of `field`.
    #[must_use]
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Celsius => &self.celsius,
            Field::Fahrenheit => &self.fahrenheit,
        }
    }

    /// Replaces the text of the enabled field.
    ///
    /// The derived field is read-only; it only changes through [`convert`](Self::convert).
    pub fn enter(&mut self, text: impl Into<String>) {
        let source = self.mode().source();
        *self.text_mut(source) = text.into();
    }

    /// Converts the source field and writes the result into the derived field.
    ///
    /// Returns the converted value.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidInput`] if the source text is not a finite
    /// number or converts to a value beyond the range of `f64`.
    /// Both fields are left unchanged.
    pub fn convert(&mut self) -> Result<f64, FormError> {
        let mode = self.mode();
        let input = self.text(mode.source());
        let (source, result) = parse_temperature(input)
            .and_then(|source| {
                self.state
                    .convert(source)
                    .map(|result| (source, result))
                    .map_err(|_| FormError::invalid_input(input, InvalidInputReason::NotFinite))
            })
            .inspect_err(|error| {
                debug!(?mode, %error, "temperature conversion rejected");
            })?;

        let text = self.config.format(result);
        *self.text_mut(mode.derived()) = text;

        debug!(?mode, source = source.into_inner(), result, "temperature converted");
        Ok(result)
    }

    /// Swaps which field is editable and returns the new mode.
    ///
    /// No value is recomputed: the previously derived text stays in place,
    /// now in the editable field, until the next [`convert`](Self::convert).
    pub fn flip(&mut self) -> FormMode {
        let mode = self.state.flip();
        debug!(?mode, "temperature form flipped");
        mode
    }

    /// Parses the source field as a typed temperature.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidInput`] if the source text is not a finite number.
    pub fn source_temperature(&self) -> Result<ThermodynamicTemperature, FormError> {
        let field = self.mode().source();
        let value = parse_temperature(self.text(field))?;
        Ok(field.temperature(value.into_inner()))
    }

    /// A [`twine_core::Model`] converting in the form's current direction.
    #[must_use]
    pub fn converter(&self) -> TemperatureConverter {
        TemperatureConverter::from(self.state)
    }

    fn text_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Celsius => &mut self.celsius,
            Field::Fahrenheit => &mut self.fahrenheit,
        }
    }
}
