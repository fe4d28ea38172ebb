use num_traits::Float;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a floating-point value is finite.
///
/// Use this type with [`Constrained<T, Finite>`] to rule out `NaN` and
/// infinities at the type level.
///
/// # Examples
///
/// ```
/// use twine_temperature_form::support::constraint::{Constrained, ConstraintError, Finite};
///
/// // Generic constructor:
/// let x = Constrained::<_, Finite>::new(-40.0).unwrap();
/// assert_eq!(x.into_inner(), -40.0);
///
/// // Associated constructor:
/// let y = Finite::new(98.6_f32).unwrap();
/// assert_eq!(y.into_inner(), 98.6);
///
/// // Error cases:
/// assert_eq!(Finite::new(f64::NAN), Err(ConstraintError::NotANumber));
/// assert_eq!(Finite::new(f64::INFINITY), Err(ConstraintError::Infinite));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Finite;

impl Finite {
    /// Constructs a [`Constrained<T, Finite>`] if the value is finite.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is `NaN` or infinite.
    pub fn new<T: Float>(value: T) -> Result<Constrained<T, Finite>, ConstraintError> {
        Constrained::<T, Finite>::new(value)
    }
}

impl<T: Float> Constraint<T> for Finite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else {
            Ok(())
        }
    }
}
