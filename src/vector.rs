//! Vector helpers on top of [`ultraviolet::Vec2`].
//!
//! `Vec2` is `Copy` and its arithmetic returns new values, so every mover
//! keeps its own vectors and nothing is shared by accident. The extension
//! trait below adds the operations the steering code needs that
//! ultraviolet does not provide, with defined behavior for zero vectors.

pub use ultraviolet::Vec2;

use crate::error::{Error, Result};

pub trait VecExt: Sized {
    /// Divides by a scalar, failing instead of producing infinities.
    fn try_div(self, k: f32) -> Result<Self>;

    /// Unit vector in the same direction. Fails for a zero (or non-finite) magnitude.
    fn try_normalized(self) -> Result<Self>;

    /// Unit vector in the same direction, or the zero vector if the magnitude is zero.
    fn normalized_or_zero(self) -> Self;

    /// Clamps the magnitude to at most `max`, keeping the direction.
    fn limit(self, max: f32) -> Self;

    /// Rescales to exactly magnitude `mag`. A zero vector stays zero.
    fn with_mag(self, mag: f32) -> Self;

    fn distance(self, other: Self) -> f32;

    /// Angle from the +x axis in radians. `0.0` for the zero vector.
    fn heading(self) -> f32;
}

impl VecExt for Vec2 {
    #[inline]
    fn try_div(self, k: f32) -> Result<Self> {
        if k == 0.0 {
            return Err(Error::DivideByZero);
        }
        Ok(self / k)
    }

    #[inline]
    fn try_normalized(self) -> Result<Self> {
        let mag = self.mag();
        if mag == 0.0 || !mag.is_finite() {
            return Err(Error::DegenerateVector);
        }
        Ok(self / mag)
    }

    #[inline]
    fn normalized_or_zero(self) -> Self {
        self.try_normalized().unwrap_or_else(|_| Vec2::zero())
    }

    #[inline]
    fn limit(self, max: f32) -> Self {
        let mag_sq = self.mag_sq();
        if mag_sq > max * max {
            self * (max / mag_sq.sqrt())
        } else {
            self
        }
    }

    #[inline]
    fn with_mag(self, mag: f32) -> Self {
        self.normalized_or_zero() * mag
    }

    #[inline]
    fn distance(self, other: Self) -> f32 {
        (self - other).mag()
    }

    #[inline]
    fn heading(self) -> f32 {
        // atan2(0, 0) is 0 on every platform we target
        self.y.atan2(self.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn divide_by_zero_is_rejected() {
        assert_eq!(Vec2::new(1.0, 2.0).try_div(0.0), Err(Error::DivideByZero));
        assert_eq!(Vec2::new(2.0, 4.0).try_div(2.0), Ok(Vec2::new(1.0, 2.0)));
    }

    #[test]
    fn zero_vector_normalizes_to_zero() {
        assert_eq!(Vec2::zero().normalized_or_zero(), Vec2::zero());
        assert_eq!(Vec2::zero().try_normalized(), Err(Error::DegenerateVector));
    }

    #[test]
    fn limit_only_shrinks() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.limit(10.0), v);
        let limited = v.limit(1.0);
        assert!((limited.mag() - 1.0).abs() < EPS);
        assert!((limited.x - 0.6).abs() < EPS);
        assert!((limited.y - 0.8).abs() < EPS);
        assert_eq!(v.limit(0.0), Vec2::zero());
    }

    #[test]
    fn with_mag_keeps_direction() {
        let v = Vec2::new(0.0, -2.0).with_mag(5.0);
        assert!((v.y + 5.0).abs() < EPS);
        assert_eq!(v.x, 0.0);
        assert_eq!(Vec2::zero().with_mag(5.0), Vec2::zero());
    }

    #[test]
    fn heading_and_distance() {
        assert_eq!(Vec2::zero().heading(), 0.0);
        assert!((Vec2::new(0.0, 1.0).heading() - std::f32::consts::FRAC_PI_2).abs() < EPS);
        assert!((Vec2::new(1.0, 1.0).distance(Vec2::new(4.0, 5.0)) - 5.0).abs() < EPS);
    }
}
