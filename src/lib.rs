//! # Twine Temperature Form
//!
//! A headless Celsius/Fahrenheit conversion form for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! The form has two fields. One is the editable source, the other is the
//! read-only derived field. A host UI forwards its "convert" and "flip"
//! buttons to [`TemperatureForm`](models::thermal::temperature_form::TemperatureForm)
//! and renders the field text and enablement it exposes.
//!
//! ## Crate layout
//!
//! - [`models`]: The form and its [`twine_core::Model`] adapter.
//! - [`support`]: Supporting utilities used by models.
//!
//! Note: Only utilities at the crate-level (in [`support`]) are part of the public API.
//! Model-specific utility code remains private.

pub mod models;
pub mod support;
