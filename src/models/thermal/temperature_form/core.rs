//! Conversion math and form state.
//!
//! Everything here is pure: no text, no formatting, no logging.
//! The form and the model adapter in the parent module build on this API.

mod conversion;
mod error;
mod mode;
mod parse;
mod state;

pub use conversion::{celsius_to_fahrenheit, fahrenheit_to_celsius};
pub use error::{FormError, InvalidInputReason};
pub use mode::{Field, FormMode};
pub use state::FormState;

pub(super) use parse::parse_temperature;
