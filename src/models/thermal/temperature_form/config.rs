use super::FormMode;

/// Configuration for a [`TemperatureForm`](super::TemperatureForm).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormConfig {
    /// Mode the form starts in.
    pub initial_mode: FormMode,

    /// Number of decimal places written into the derived field.
    ///
    /// `None` writes the shortest text that parses back to the same value.
    pub precision: Option<u8>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            initial_mode: FormMode::CelsiusIsSource,
            precision: None,
        }
    }
}

impl FormConfig {
    /// Formats a conversion result for display in the derived field.
    pub(super) fn format(&self, value: f64) -> String {
        match self.precision {
            Some(precision) => {
                let precision = usize::from(precision);
                format!("{value:.precision$}")
            }
            None => value.to_string(),
        }
    }
}
