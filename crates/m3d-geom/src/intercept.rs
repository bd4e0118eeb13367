//! Pursuit and interception.
//!
//! The target's velocity is split into a component parallel to the line of
//! sight (pursuer to target) and an orthogonal remainder. An intercepting
//! pursuer must match the orthogonal component exactly; whatever speed is
//! left over closes the distance along the line of sight:
//!
//! ```text
//! v_ortho   = v_target - (v_target . d) d
//! v_closing = sqrt(speed^2 - |v_ortho|^2)
//! heading   = normalize(v_ortho + v_closing * d)
//! ```

use m3d_core::{Error, Result};
use m3d_math::Vec3;
use tracing::{debug, trace};

/// Pursuer velocity that matches the target's orthogonal motion, or `None`
/// when that motion alone is faster than the pursuer.
fn matched_velocity(line_of_sight: Vec3, speed: f32, target_vel: Vec3) -> Option<Vec3> {
    let parallel = target_vel.dot(line_of_sight) * line_of_sight;
    let orthogonal = target_vel - parallel;
    let ortho_speed = orthogonal.length();

    if ortho_speed > speed {
        debug!(ortho_speed, speed, "orthogonal target speed exceeds pursuer speed");
        return None;
    }

    let closing = (speed * speed - ortho_speed * ortho_speed).sqrt();
    Some(orthogonal + closing * line_of_sight)
}

/// Unit heading a missile at `missile_pos` flying at constant `missile_speed`
/// should take to meet a target at `target_pos` moving with `target_vel`.
///
/// When no intercept exists because the target's orthogonal speed exceeds
/// the missile's, the target's own heading is returned instead. Coincident
/// positions produce NaN; see [`try_target_intercept`] for checked input.
///
/// # Example
///
/// ```rust
/// use m3d_geom::target_intercept;
/// use m3d_math::Vec3;
///
/// // Stationary target: fly straight at it.
/// let h = target_intercept(Vec3::ZERO, 2.0, Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO);
/// assert_eq!(h, Vec3::Y);
/// ```
pub fn target_intercept(
    missile_pos: Vec3,
    missile_speed: f32,
    target_pos: Vec3,
    target_vel: Vec3,
) -> Vec3 {
    trace!(missile_speed, "target_intercept");

    let line_of_sight = (target_pos - missile_pos).normalized();
    matched_velocity(line_of_sight, missile_speed, target_vel)
        .unwrap_or(target_vel)
        .normalized()
}

/// Checked [`target_intercept`].
///
/// # Errors
///
/// - [`Error::DegenerateVector`] if the missile and target share a position
/// - [`Error::UnreachableIntercept`] if the missile has no speed, cannot
///   match the target's orthogonal motion, or cannot outrun the target
///   along the line of sight
pub fn try_target_intercept(
    missile_pos: Vec3,
    missile_speed: f32,
    target_pos: Vec3,
    target_vel: Vec3,
) -> Result<Vec3> {
    trace!(missile_speed, "try_target_intercept");

    if !(missile_speed > 0.0) {
        return Err(Error::unreachable(format!(
            "missile speed {} is not positive",
            missile_speed
        )));
    }

    let line_of_sight = (target_pos - missile_pos)
        .try_normalized()
        .map_err(|_| Error::degenerate("missile and target share a position"))?;

    let velocity = matched_velocity(line_of_sight, missile_speed, target_vel).ok_or_else(|| {
        Error::unreachable(format!(
            "target moves across the line of sight faster than {}",
            missile_speed
        ))
    })?;

    let missile_closing = velocity.dot(line_of_sight);
    let target_receding = target_vel.dot(line_of_sight);
    if missile_closing <= target_receding {
        debug!(missile_closing, target_receding, "target recedes at least as fast as missile closes");
        return Err(Error::unreachable(
            "target recedes along the line of sight at least as fast as the missile closes",
        ));
    }

    Ok(velocity / missile_speed)
}

/// Time until two entities meet, measured along the line between them.
///
/// Both velocities are projected onto the unit direction from `pos1` to
/// `pos2`; the initial distance is divided by the magnitude of the
/// difference of those projections. The magnitude is unsigned, so entities
/// moving apart also get a positive time.
///
/// # Errors
///
/// - [`Error::DegenerateVector`] if `pos1 == pos2`
/// - [`Error::UnreachableIntercept`] if there is no relative motion along
///   the line between them, up to rounding relative to the speeds
///
/// # Example
///
/// ```rust
/// use m3d_geom::intercept_time;
/// use m3d_math::Vec3;
///
/// let t = intercept_time(
///     Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0),
///     Vec3::new(10.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0),
/// ).unwrap();
/// assert_eq!(t, 5.0);
/// ```
pub fn intercept_time(pos1: Vec3, vel1: Vec3, pos2: Vec3, vel2: Vec3) -> Result<f32> {
    trace!("intercept_time");

    let offset = pos2 - pos1;
    let dir = offset
        .try_normalized()
        .map_err(|_| Error::degenerate("entities share a position"))?;

    let parallel1 = vel1.dot(dir) * dir;
    let parallel2 = vel2.dot(dir) * dir;
    let closing_speed = (parallel2 - parallel1).length();

    // Projection rounding leaves a residue proportional to the speeds.
    let tolerance = 8.0 * f32::EPSILON * (vel1.length() + vel2.length()).max(1.0);
    if closing_speed <= tolerance {
        debug!("no relative motion along the line of sight");
        return Err(Error::unreachable(
            "no relative motion along the line of sight",
        ));
    }

    Ok(offset.length() / closing_speed)
}

/// Where the first entity is when the two meet, `pos1 + time * vel1`.
///
/// # Errors
///
/// Same as [`intercept_time`].
pub fn intercept_point(pos1: Vec3, vel1: Vec3, pos2: Vec3, vel2: Vec3) -> Result<Vec3> {
    let time = intercept_time(pos1, vel1, pos2, vel2)?;
    Ok(pos1 + time * vel1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_intercept_stationary_target() {
        let h = target_intercept(Vec3::ONE, 3.0, Vec3::new(1.0, 1.0, -4.0), Vec3::ZERO);
        assert!(h.approx_eq(-Vec3::Z, 1e-6));
    }

    #[test]
    fn test_intercept_crossing_target() {
        // Target 10 ahead on Y, crossing along X at 3; missile speed 5.
        let target_vel = Vec3::new(3.0, 0.0, 0.0);
        let h = try_target_intercept(Vec3::ZERO, 5.0, Vec3::new(0.0, 10.0, 0.0), target_vel)
            .unwrap();
        assert!(h.approx_eq(Vec3::new(0.6, 0.8, 0.0), 1e-6));
        assert_eq!(h, target_intercept(Vec3::ZERO, 5.0, Vec3::new(0.0, 10.0, 0.0), target_vel));

        // Both arrive at (7.5, 10, 0) after 2.5 time units.
        let t = 10.0 / (5.0 * h.y);
        assert!((5.0 * t * h).approx_eq(Vec3::new(0.0, 10.0, 0.0) + t * target_vel, 1e-4));
    }

    #[test]
    fn test_intercept_falls_back_to_target_heading() {
        let target_vel = Vec3::new(8.0, 0.0, 0.0);
        let h = target_intercept(Vec3::ZERO, 2.0, Vec3::new(0.0, 10.0, 0.0), target_vel);
        assert_eq!(h, Vec3::X);

        let err = try_target_intercept(Vec3::ZERO, 2.0, Vec3::new(0.0, 10.0, 0.0), target_vel)
            .unwrap_err();
        assert!(err.is_unreachable());
    }

    #[test]
    fn test_intercept_receding_target() {
        let err = try_target_intercept(
            Vec3::ZERO,
            2.0,
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::new(0.0, 3.0, 0.0),
        )
        .unwrap_err();
        assert!(err.is_unreachable());
    }

    #[test]
    fn test_intercept_degenerate_inputs() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(try_target_intercept(p, 1.0, p, Vec3::X).unwrap_err().is_degenerate());
        assert!(try_target_intercept(Vec3::ZERO, 0.0, p, Vec3::X).unwrap_err().is_unreachable());
        assert!(!target_intercept(p, 1.0, p, Vec3::X).is_finite());
    }

    #[test]
    fn test_intercept_time_head_on() {
        let t = intercept_time(
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
        )
        .unwrap();
        assert_abs_diff_eq!(t, 5.0);
    }

    #[test]
    fn test_intercept_point() {
        let p = intercept_point(
            Vec3::ZERO,
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(9.0, 0.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
        )
        .unwrap();
        assert!(p.approx_eq(Vec3::new(6.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn test_intercept_time_ignores_orthogonal_motion() {
        let t = intercept_time(
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 7.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(-1.0, 5.0, 0.0),
        )
        .unwrap();
        assert_abs_diff_eq!(t, 2.0);
    }

    #[test]
    fn test_intercept_time_errors() {
        let err = intercept_time(Vec3::ZERO, Vec3::X, Vec3::ZERO, Vec3::Y).unwrap_err();
        assert!(err.is_degenerate());

        // Same velocity: never closes.
        let err = intercept_time(Vec3::ZERO, Vec3::X, Vec3::new(5.0, 0.0, 0.0), Vec3::X)
            .unwrap_err();
        assert!(err.is_unreachable());
    }

    #[test]
    fn test_intercept_time_off_axis_orthogonal_difference() {
        // Velocities differ only across an oblique line of sight.
        let pos2 = Vec3::new(1.0, 2.0, 3.0);
        let dir = pos2.normalized();
        let vel1 = Vec3::new(0.4, -1.1, 2.5);
        let vel2 = vel1 + dir.cross(Vec3::new(0.3, -0.7, 0.2));

        let err = intercept_time(Vec3::ZERO, vel1, pos2, vel2).unwrap_err();
        assert!(err.is_unreachable());
        assert!(intercept_point(Vec3::ZERO, vel1, pos2, vel2).is_err());

        // A small but real closing speed still resolves.
        let t = intercept_time(Vec3::ZERO, vel1, pos2, vel2 - 0.01 * dir).unwrap();
        assert_abs_diff_eq!(t, pos2.length() / 0.01, epsilon = 1.0);
    }
}
