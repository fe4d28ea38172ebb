/// Converts a Celsius temperature to Fahrenheit.
///
/// Results beyond `f64::MAX` in magnitude overflow to infinity.
///
/// ```
/// use twine_temperature_form::models::thermal::temperature_form::celsius_to_fahrenheit;
///
/// assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
/// ```
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius / 5.0 * 9.0 + 32.0
}

/// Converts a Fahrenheit temperature to Celsius.
///
/// This is the inverse of [`celsius_to_fahrenheit`] up to floating-point rounding.
/// Every finite input has a finite result.
#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) / 9.0 * 5.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::ThermodynamicTemperature,
        thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
    };

    #[test]
    fn fixed_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
        assert_eq!(fahrenheit_to_celsius(212.0), 100.0);

        // The two scales cross at -40.
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
        assert_eq!(fahrenheit_to_celsius(-40.0), -40.0);
    }

    #[test]
    fn roundtrip() {
        for c in [-273.15, -40.0, -1e-3, 0.0, 1e-3, 21.7, 37.0, 1e6, 1e12] {
            let back = fahrenheit_to_celsius(celsius_to_fahrenheit(c));
            assert_relative_eq!(back, c, epsilon = 1e-9, max_relative = 1e-12);
        }

        for f in [-459.67, 0.0, 98.6, 451.0] {
            let back = celsius_to_fahrenheit(fahrenheit_to_celsius(f));
            assert_relative_eq!(back, f, epsilon = 1e-9, max_relative = 1e-12);
        }
    }

    #[test]
    fn extreme_inputs() {
        assert!(fahrenheit_to_celsius(f64::MAX).is_finite());
        assert!(fahrenheit_to_celsius(f64::MIN).is_finite());
        assert_relative_eq!(
            fahrenheit_to_celsius(1e308),
            1e308 / 9.0 * 5.0,
            max_relative = 1e-12
        );
        assert!(celsius_to_fahrenheit(1e307).is_finite());

        // 1e308 °C is beyond the largest representable Fahrenheit value.
        assert!(celsius_to_fahrenheit(1e308).is_infinite());
    }

    #[test]
    fn agrees_with_uom() {
        for c in [-40.0, 0.0, 25.0, 37.0, 100.0] {
            let t = ThermodynamicTemperature::new::<degree_celsius>(c);
            assert_relative_eq!(
                celsius_to_fahrenheit(c),
                t.get::<degree_fahrenheit>(),
                epsilon = 1e-9
            );
        }

        let body = ThermodynamicTemperature::new::<degree_fahrenheit>(98.6);
        assert_relative_eq!(
            fahrenheit_to_celsius(98.6),
            body.get::<degree_celsius>(),
            epsilon = 1e-9
        );
    }
}
