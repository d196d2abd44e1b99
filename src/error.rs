use thiserror::Error;

/// Contract violations surfaced by the mover core.
///
/// Numeric bounding (attraction distance clamps, steering caps) is not an
/// error and never shows up here.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// A vector was divided by zero.
    #[error("attempted to divide a vector by zero")]
    DivideByZero,
    /// Mass is used as a divisor when applying forces, so it must be positive and finite.
    #[error("mass must be positive and finite, got {0}")]
    NonPositiveMass(f32),
    /// Strict normalization of a zero-length vector.
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,
    /// A limit, radius or bound that must be non-negative and finite.
    #[error("`{name}` must be non-negative and finite, got {value}")]
    OutOfRange { name: &'static str, value: f32 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Rejects negative, NaN or infinite values for a named parameter.
pub(crate) fn non_negative(name: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::OutOfRange { name, value })
    }
}

pub(crate) fn positive_mass(mass: f32) -> Result<f32> {
    if mass.is_finite() && mass > 0.0 {
        Ok(mass)
    } else {
        Err(Error::NonPositiveMass(mass))
    }
}
