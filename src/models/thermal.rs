//! Thermal models.
//!
//! This module contains the temperature conversion form.

pub mod temperature_form;
