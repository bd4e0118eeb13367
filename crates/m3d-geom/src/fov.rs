//! Planar field-of-view test.
//!
//! A sentry sees a target when the target is no farther than the sentry's
//! range and the angle between the sentry's facing and the direction to the
//! target is at most the half-angle of its view cone.

use m3d_core::deg_to_rad;
use m3d_math::Vec2;
use tracing::trace;

/// Returns `true` when `target` lies inside the view cone of a sentry at
/// `sentry_pos` facing `sentry_dir`.
///
/// * `range` - maximum viewing distance
/// * `half_angle` - half of the cone's opening angle, in **radians**
///
/// The range is checked first on squared distances, so the square root and
/// `acos` are only paid for targets in range. `sentry_dir` need not be unit
/// length but must not be zero. A target standing exactly on the sentry is
/// considered visible.
///
/// # Example
///
/// ```rust
/// use m3d_geom::is_within_range_2d;
/// use m3d_math::Vec2;
/// use std::f32::consts::FRAC_PI_4;
///
/// // Slightly behind a sentry facing +X: in range, but not in view.
/// let seen = is_within_range_2d(Vec2::ZERO, Vec2::X, 1.5, FRAC_PI_4, Vec2::new(-0.1, 0.0));
/// assert!(!seen);
/// ```
pub fn is_within_range_2d(
    sentry_pos: Vec2,
    sentry_dir: Vec2,
    range: f32,
    half_angle: f32,
    target: Vec2,
) -> bool {
    let to_target = target - sentry_pos;
    let dist_sq = to_target.length_squared();
    trace!(dist_sq, range, half_angle, "is_within_range_2d");

    if dist_sq > range * range {
        return false;
    }
    if dist_sq == 0.0 {
        return true;
    }

    let cos_angle = sentry_dir.dot(to_target) / (sentry_dir.length() * to_target.length());
    // Rounding can push the ratio just past +-1, where acos is NaN.
    let angle = cos_angle.clamp(-1.0, 1.0).acos();
    angle <= half_angle
}

/// A sentry's view cone, bundling the parameters of [`is_within_range_2d`].
///
/// # Example
///
/// ```rust
/// use m3d_geom::FieldOfView;
/// use m3d_math::Vec2;
///
/// let fov = FieldOfView::from_degrees(Vec2::ZERO, Vec2::X, 1.5, 45.0);
/// assert!(fov.contains(Vec2::new(1.0, 0.5)));
/// assert!(!fov.contains(Vec2::new(-0.1, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldOfView {
    /// Sentry position.
    pub position: Vec2,
    /// Facing direction (any non-zero length).
    pub direction: Vec2,
    /// Maximum viewing distance.
    pub range: f32,
    /// Half of the cone's opening angle, in radians.
    pub half_angle: f32,
}

impl FieldOfView {
    /// Creates a view cone with the half-angle in radians.
    pub fn new(position: Vec2, direction: Vec2, range: f32, half_angle: f32) -> Self {
        Self {
            position,
            direction,
            range,
            half_angle,
        }
    }

    /// Creates a view cone with the half-angle in degrees.
    pub fn from_degrees(position: Vec2, direction: Vec2, range: f32, half_angle_deg: f32) -> Self {
        Self::new(position, direction, range, deg_to_rad(half_angle_deg))
    }

    /// Returns `true` when `target` is visible.
    #[inline]
    pub fn contains(&self, target: Vec2) -> bool {
        is_within_range_2d(
            self.position,
            self.direction,
            self.range,
            self.half_angle,
            target,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn test_directly_behind_is_hidden() {
        assert!(!is_within_range_2d(
            Vec2::ZERO,
            Vec2::X,
            1.5,
            FRAC_PI_4,
            Vec2::new(-0.1, 0.0)
        ));
    }

    #[test]
    fn test_ahead_in_range_is_seen() {
        assert!(is_within_range_2d(Vec2::ZERO, Vec2::X, 1.5, FRAC_PI_4, Vec2::new(1.0, 0.0)));
        assert!(is_within_range_2d(Vec2::ZERO, Vec2::X, 1.5, FRAC_PI_4, Vec2::new(1.0, 0.9)));
    }

    #[test]
    fn test_outside_cone() {
        assert!(!is_within_range_2d(Vec2::ZERO, Vec2::X, 1.5, FRAC_PI_4, Vec2::new(0.5, 1.0)));
    }

    #[test]
    fn test_out_of_range() {
        assert!(!is_within_range_2d(Vec2::ZERO, Vec2::X, 1.5, FRAC_PI_4, Vec2::new(1.6, 0.0)));
        // Range boundary is inclusive.
        assert!(is_within_range_2d(Vec2::ZERO, Vec2::X, 1.5, FRAC_PI_4, Vec2::new(1.5, 0.0)));
    }

    #[test]
    fn test_non_unit_direction_and_offset_sentry() {
        let fov = FieldOfView::from_degrees(Vec2::new(2.0, 2.0), Vec2::new(0.0, -10.0), 3.0, 30.0);
        assert!(fov.contains(Vec2::new(2.5, 0.0)));
        assert!(!fov.contains(Vec2::new(4.0, 1.0)));
        assert!(!fov.contains(Vec2::new(2.0, 4.0)));
    }

    #[test]
    fn test_coincident_target_is_seen() {
        assert!(is_within_range_2d(Vec2::ONE, Vec2::X, 1.0, 0.1, Vec2::ONE));
    }
}
