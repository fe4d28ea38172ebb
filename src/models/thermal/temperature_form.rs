//! Celsius/Fahrenheit conversion form.
//!
//! The form holds two fields. Exactly one of them is the editable *source*
//! field; the other is the read-only *derived* field that receives the result
//! of a conversion. Which is which is decided by a single [`FormMode`], and
//! field enablement is always projected from it.
//!
//! A host UI creates a [`TemperatureForm`] when its screen is created, drops
//! it when the screen is destroyed, and forwards its two buttons to
//! [`TemperatureForm::convert`] and [`TemperatureForm::flip`].
//!
//! ```
//! use twine_temperature_form::models::thermal::temperature_form::{
//!     Field, TemperatureForm,
//! };
//!
//! let mut form = TemperatureForm::new();
//! form.enter("100");
//! form.convert().unwrap();
//! assert_eq!(form.text(Field::Fahrenheit), "212");
//!
//! form.flip();
//! assert!(form.is_enabled(Field::Fahrenheit));
//! assert!(!form.is_enabled(Field::Celsius));
//! ```
//!
//! The conversion itself is also available as a [`twine_core::Model`]
//! through [`TemperatureConverter`].

mod config;
mod converter;
pub(crate) mod core;
mod form;

pub use config::FormConfig;
pub use converter::TemperatureConverter;
pub use self::core::{
    Field, FormError, FormMode, FormState, InvalidInputReason, celsius_to_fahrenheit,
    fahrenheit_to_celsius,
};
pub use form::TemperatureForm;
