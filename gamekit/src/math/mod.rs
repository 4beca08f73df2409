//! Scalar math helpers
//!
//! Extension methods for `f32` and `f64` covering the clamp / interpolate /
//! remap family used throughout gameplay code, plus degree-based trig.
//!
//! # Example
//! ```
//! use gamekit_core::Scalar;
//!
//! assert_eq!(1.5f32.clamp01(), 1.0);
//! assert_eq!(<f64 as Scalar>::lerp(0.0, 10.0, 0.25), 2.5);
//! assert_eq!(5.0f64.remap(0.0, 10.0, 100.0, 200.0), 150.0);
//! assert_eq!((-2.5f64).round_half_up(), -2.0);
//! ```

/// Float extension methods
pub trait Scalar: Copy + PartialOrd {
    const ZERO: Self;
    const ONE: Self;

    /// Clamp into `[min, max]`, accepting the bounds in either order
    fn clamp_between(self, min: Self, max: Self) -> Self;

    /// Clamp into `[0, 1]`
    fn clamp01(self) -> Self {
        self.clamp_between(Self::ZERO, Self::ONE)
    }

    /// Interpolate from `a` to `b`, with `t` clamped to `[0, 1]`
    fn lerp(a: Self, b: Self, t: Self) -> Self {
        Self::lerp_unclamped(a, b, t.clamp01())
    }

    fn lerp_unclamped(a: Self, b: Self, t: Self) -> Self;

    /// Where `value` sits between `a` and `b`, clamped to `[0, 1]`
    ///
    /// Returns 0 when `a == b`.
    fn inverse_lerp(a: Self, b: Self, value: Self) -> Self;

    /// Map from `[from_min, from_max]` onto `[to_min, to_max]`, unclamped
    fn remap(self, from_min: Self, from_max: Self, to_min: Self, to_max: Self) -> Self;

    /// Round to nearest, ties toward positive infinity
    fn round_half_up(self) -> Self;

    /// Equal within a magnitude-scaled epsilon
    fn approximately(self, other: Self) -> bool;

    /// Step toward `target` by at most `max_delta`
    fn move_towards(self, target: Self, max_delta: Self) -> Self;

    /// Wrap into `[0, length)`
    fn repeat(self, length: Self) -> Self;

    /// Bounce between 0 and `length`
    fn ping_pong(self, length: Self) -> Self;

    fn sin_deg(self) -> Self;
    fn cos_deg(self) -> Self;
    fn tan_deg(self) -> Self;

    /// `atan2(self, x)` in degrees
    fn atan2_deg(self, x: Self) -> Self;
}

macro_rules! impl_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn clamp_between(self, min: Self, max: Self) -> Self {
                let (lo, hi) = if max < min { (max, min) } else { (min, max) };
                if self < lo {
                    lo
                } else if self > hi {
                    hi
                } else {
                    self
                }
            }

            fn lerp_unclamped(a: Self, b: Self, t: Self) -> Self {
                a + (b - a) * t
            }

            fn inverse_lerp(a: Self, b: Self, value: Self) -> Self {
                if a == b {
                    return 0.0;
                }
                ((value - a) / (b - a)).clamp01()
            }

            fn remap(self, from_min: Self, from_max: Self, to_min: Self, to_max: Self) -> Self {
                if from_min == from_max {
                    return to_min;
                }
                let t = (self - from_min) / (from_max - from_min);
                Self::lerp_unclamped(to_min, to_max, t)
            }

            fn round_half_up(self) -> Self {
                (self + 0.5).floor()
            }

            fn approximately(self, other: Self) -> bool {
                let scale = self.abs().max(other.abs()).max(1.0);
                (self - other).abs() <= scale * <$ty>::EPSILON * 8.0
            }

            fn move_towards(self, target: Self, max_delta: Self) -> Self {
                if (target - self).abs() <= max_delta {
                    target
                } else {
                    self + (target - self).signum() * max_delta
                }
            }

            fn repeat(self, length: Self) -> Self {
                (self - (self / length).floor() * length).clamp_between(0.0, length)
            }

            fn ping_pong(self, length: Self) -> Self {
                let t = self.repeat(length * 2.0);
                length - (t - length).abs()
            }

            fn sin_deg(self) -> Self {
                self.to_radians().sin()
            }

            fn cos_deg(self) -> Self {
                self.to_radians().cos()
            }

            fn tan_deg(self) -> Self {
                self.to_radians().tan()
            }

            fn atan2_deg(self, x: Self) -> Self {
                self.atan2(x).to_degrees()
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);

/// Round half up and convert to an integer
///
/// Saturates at the `i64` range; NaN maps to 0.
pub fn round_half_up_to_int(value: f64) -> i64 {
    value.round_half_up() as i64
}
