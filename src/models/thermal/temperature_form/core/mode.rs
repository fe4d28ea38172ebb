use uom::si::{
    f64::ThermodynamicTemperature,
    thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
};

use super::conversion::{celsius_to_fahrenheit, fahrenheit_to_celsius};

/// One of the two fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Celsius,
    Fahrenheit,
}

impl Field {
    /// Returns the other field.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }

    /// Interprets `value` in this field's scale as a typed temperature.
    ///
    /// ```
    /// use twine_temperature_form::models::thermal::temperature_form::Field;
    /// use uom::si::thermodynamic_temperature::kelvin;
    ///
    /// let t = Field::Celsius.temperature(0.0);
    /// assert!((t.get::<kelvin>() - 273.15).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn temperature(self, value: f64) -> ThermodynamicTemperature {
        match self {
            Self::Celsius => ThermodynamicTemperature::new::<degree_celsius>(value),
            Self::Fahrenheit => ThermodynamicTemperature::new::<degree_fahrenheit>(value),
        }
    }
}

/// Which field is currently the editable source.
///
/// The form starts in [`FormMode::CelsiusIsSource`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormMode {
    /// Celsius is editable; Fahrenheit is derived.
    #[default]
    CelsiusIsSource,

    /// Fahrenheit is editable; Celsius is derived.
    FahrenheitIsSource,
}

impl FormMode {
    /// Returns the opposite mode.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::CelsiusIsSource => Self::FahrenheitIsSource,
            Self::FahrenheitIsSource => Self::CelsiusIsSource,
        }
    }

    /// The field the user edits in this mode.
    #[must_use]
    pub fn source(self) -> Field {
        match self {
            Self::CelsiusIsSource => Field::Celsius,
            Self::FahrenheitIsSource => Field::Fahrenheit,
        }
    }

    /// The read-only field that receives conversion results in this mode.
    #[must_use]
    pub fn derived(self) -> Field {
        self.source().other()
    }

    /// Converts a source-field value into the derived field's scale.
    ///
    /// Celsius values near `f64::MAX` overflow to infinity.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::CelsiusIsSource => celsius_to_fahrenheit(value),
            Self::FahrenheitIsSource => fahrenheit_to_celsius(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::kelvin;

    #[test]
    fn source_and_derived_are_disjoint() {
        for mode in [FormMode::CelsiusIsSource, FormMode::FahrenheitIsSource] {
            assert_ne!(mode.source(), mode.derived());
            assert_eq!(mode.flipped().source(), mode.derived());
        }
    }

    #[test]
    fn flipped_has_period_two() {
        let mode = FormMode::default();
        assert_eq!(mode, FormMode::CelsiusIsSource);
        assert_eq!(mode.flipped(), FormMode::FahrenheitIsSource);
        assert_eq!(mode.flipped().flipped(), mode);
    }

    #[test]
    fn apply_follows_direction() {
        assert_eq!(FormMode::CelsiusIsSource.apply(0.0), 32.0);
        assert_eq!(FormMode::FahrenheitIsSource.apply(32.0), 0.0);
    }

    #[test]
    fn field_temperatures() {
        let boiling_c = Field::Celsius.temperature(100.0);
        let boiling_f = Field::Fahrenheit.temperature(212.0);
        assert_relative_eq!(
            boiling_c.get::<kelvin>(),
            boiling_f.get::<kelvin>(),
            epsilon = 1e-9
        );
    }
}
