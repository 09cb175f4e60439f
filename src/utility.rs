use std::f64::consts::PI;

use num::Float;

use crate::ThisOrThat;

pub(crate) mod dms {
    /// Degrees per half turn
    pub const HD: f64 = 180.;
    /// Degrees per turn
    pub const TD: f64 = 2. * HD;
}

/// Modulo whose result takes the sign of the divisor, so that for a positive
/// `denom` the result always lies in `[0, denom)`.
///
/// This differs from Rust's `%`, which keeps the sign of the dividend.
///
/// # Usage
///
/// ```
/// use utmzone::utility::mod_floor;
///
/// assert_eq!(mod_floor(7.0, 3.0), 1.0);
/// assert_eq!(mod_floor(-7.0, 3.0), 2.0);
/// assert_eq!(-7.0_f64 % 3.0, -1.0);
/// ```
pub fn mod_floor<T: Float>(num: T, denom: T) -> T {
    let rem = num % denom;
    let adjust = rem != T::zero() && (rem < T::zero()) != (denom < T::zero());

    adjust.ternary(rem + denom, rem)
}

pub trait GeoMath {
    /// Reduces an angle in radians to `[-π, π)`.
    fn ang_normalize(&self) -> Self;
    /// Reduces an angle in degrees to `[-180, 180)`.
    fn deg_normalize(&self) -> Self;
}

impl GeoMath for f64 {
    fn ang_normalize(&self) -> f64 {
        mod_floor(*self + PI, 2. * PI) - PI
    }

    fn deg_normalize(&self) -> f64 {
        mod_floor(*self + dms::HD, dms::TD) - dms::HD
    }
}
