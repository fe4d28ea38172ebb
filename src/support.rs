//! Supporting utilities used by models.
//!
//! These modules are public because they're useful outside a single model,
//! but their APIs are not stable.

pub mod constraint;
