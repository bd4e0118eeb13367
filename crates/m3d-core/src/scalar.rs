//! Scalar helpers shared by every m3d crate.
//!
//! Angle conversion and float tolerance comparisons. All angles taken by
//! the public API are documented as either degrees or radians; these
//! helpers convert through [`consts::DEG2RAD`] and [`consts::RAD2DEG`].

/// Common math constants.
pub mod consts {
    /// Pi constant.
    pub const PI: f32 = std::f32::consts::PI;
    /// Degrees to radians conversion factor.
    pub const DEG2RAD: f32 = PI / 180.0;
    /// Radians to degrees conversion factor.
    pub const RAD2DEG: f32 = 180.0 / PI;
    /// Tolerance used to classify a quaternion as pure.
    pub const PURE_EPSILON: f32 = 1e-5;
}

/// Converts degrees to radians.
///
/// # Example
///
/// ```rust
/// use m3d_core::deg_to_rad;
///
/// assert!((deg_to_rad(180.0) - std::f32::consts::PI).abs() < 1e-6);
/// ```
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * consts::DEG2RAD
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * consts::RAD2DEG
}

/// Returns `true` when `a` and `b` differ by at most `epsilon`.
///
/// NaN never compares equal.
#[inline]
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_deg_rad_roundtrip() {
        for deg in [-270.0f32, -45.0, 0.0, 30.0, 90.0, 360.0] {
            assert_abs_diff_eq!(rad_to_deg(deg_to_rad(deg)), deg, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_known_angles() {
        assert_eq!(deg_to_rad(1.0), consts::DEG2RAD);
        assert_eq!(rad_to_deg(1.0), consts::RAD2DEG);
        assert_abs_diff_eq!(deg_to_rad(90.0), consts::PI / 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(deg_to_rad(45.0), std::f32::consts::FRAC_PI_4, epsilon = 1e-6);
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0 + 1e-7, 1e-6));
        assert!(!approx_eq(1.0, 1.1, 1e-6));
        assert!(!approx_eq(f32::NAN, f32::NAN, 1.0));
    }
}
