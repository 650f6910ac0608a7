//! Planar motion solver: camera-relative drive vector, airborne wall
//! deflection and the jump decision.
//!
//! Collision probes are injected as closures; this module never casts anything
//! itself. Horizontal vectors are `Vec2` in the XZ plane (`y` holds world z).

use glam::{Vec2, Vec3};

const INPUT_EPS_SQ: f32 = 1e-8;
/// Sweeps use a slightly shrunk sphere so resting contact does not self-hit.
pub const WALL_SWEEP_RADIUS_SCALE: f32 = 0.98;
/// Floor for the sweep length even when the configured distance is zero.
const MIN_WALL_CHECK_DIST: f32 = 0.01;

/// Immutable per-actor motion tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub move_speed: f32,
    pub jump_force: f32,
    pub ground_check_distance: f32,
    pub wall_check_distance: f32,
    pub sphere_radius: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 8.0,
            jump_force: 5.0,
            ground_check_distance: 0.1,
            wall_check_distance: 0.6,
            sphere_radius: 0.5,
        }
    }
}

impl MotionConfig {
    /// Clamp nonsensical negatives instead of rejecting them.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.move_speed = self.move_speed.max(0.0);
        self.jump_force = self.jump_force.max(0.0);
        self.ground_check_distance = self.ground_check_distance.max(0.0);
        self.wall_check_distance = self.wall_check_distance.max(0.0);
        self.sphere_radius = self.sphere_radius.max(0.01);
        self
    }
}

/// Transient per-tick motion state, recomputed from host physics each tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    pub is_grounded: bool,
    pub horizontal_vel: Vec2,
}

/// Jump outcome for the tick. `vertical_override` zeroes residual downward
/// velocity before the impulse so jump height is consistent out of resting
/// contact.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct JumpDecision {
    pub apply: bool,
    pub vertical_override: Option<f32>,
    pub impulse: f32,
}

/// Ask the injected downward probe whether the actor stands on ground.
/// The cast length is `sphere_radius + ground_check_distance`.
#[must_use]
pub fn grounded<F>(probe_down: F, cfg: &MotionConfig) -> bool
where
    F: FnOnce(f32) -> bool,
{
    probe_down(cfg.sphere_radius + cfg.ground_check_distance)
}

/// Combine analog axes with the camera basis into an XZ drive vector.
///
/// The basis vectors are flattened to the horizontal plane and renormalized
/// (world +Z / +X when degenerate). Magnitudes above 1 are normalized; shorter
/// vectors keep their analog magnitude.
#[must_use]
pub fn desired_direction(h: f32, v: f32, cam_forward: Vec3, cam_right: Vec3) -> Vec2 {
    let fwd = flatten_or(cam_forward, Vec2::new(0.0, 1.0));
    let right = flatten_or(cam_right, Vec2::new(1.0, 0.0));
    let mut dir = right * h + fwd * v;
    if dir.length_squared() > 1.0 {
        dir = dir.normalize();
    }
    dir
}

fn flatten_or(v: Vec3, fallback: Vec2) -> Vec2 {
    let xz = Vec2::new(v.x, v.z);
    if xz.length_squared() < INPUT_EPS_SQ {
        fallback
    } else {
        xz.normalize()
    }
}

/// While airborne, slide the drive vector along an obstructing wall.
///
/// `sweep(dir, radius, dist)` casts a sphere and returns the surface normal of
/// the nearest hit, if any. Only movement *into* the surface is deflected, and
/// only once per tick; grounded actors and negligible inputs pass through.
#[must_use]
pub fn deflect_against_walls<F>(
    desired: Vec2,
    is_grounded: bool,
    cfg: &MotionConfig,
    sweep: F,
) -> Vec2
where
    F: FnOnce(Vec2, f32, f32) -> Option<Vec3>,
{
    if is_grounded || desired.length_squared() < INPUT_EPS_SQ {
        return desired;
    }
    let radius = WALL_SWEEP_RADIUS_SCALE * cfg.sphere_radius;
    let dist = cfg.wall_check_distance.max(MIN_WALL_CHECK_DIST);
    let Some(normal) = sweep(desired, radius, dist) else {
        return desired;
    };
    let dir3 = Vec3::new(desired.x, 0.0, desired.y);
    let into = dir3.dot(normal);
    if into >= 0.0 {
        return desired;
    }
    let slid = dir3 - normal * into;
    Vec2::new(slid.x, slid.z)
}

/// Velocity-space correction toward `desired * move_speed`; the host applies
/// it as an instantaneous impulse leaving the vertical component untouched.
#[must_use]
pub fn velocity_delta(desired: Vec2, move_speed: f32, current_xz: Vec2) -> Vec2 {
    desired * move_speed - current_xz
}

/// Jump only when grounded and requested this tick.
#[must_use]
pub fn decide_jump(
    is_grounded: bool,
    jump_pressed: bool,
    vertical_vel: f32,
    jump_force: f32,
) -> JumpDecision {
    if !is_grounded || !jump_pressed {
        return JumpDecision::default();
    }
    JumpDecision {
        apply: true,
        vertical_override: (vertical_vel < 0.0).then_some(0.0),
        impulse: jump_force,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grounded_uses_combined_cast_length() {
        let cfg = MotionConfig {
            sphere_radius: 0.5,
            ground_check_distance: 0.1,
            ..Default::default()
        };
        let mut seen = 0.0f32;
        let hit = grounded(
            |len| {
                seen = len;
                true
            },
            &cfg,
        );
        assert!(hit);
        assert!((seen - 0.6).abs() < 1e-6);
    }

    #[test]
    fn deflection_skipped_on_ground() {
        let cfg = MotionConfig::default();
        let out = deflect_against_walls(Vec2::X, true, &cfg, |_, _, _| {
            Some(Vec3::new(-1.0, 0.0, 0.0))
        });
        assert_eq!(out, Vec2::X);
    }

    #[test]
    fn sanitize_floors_radius() {
        let cfg = MotionConfig {
            sphere_radius: -3.0,
            ..Default::default()
        }
        .sanitized();
        assert!(cfg.sphere_radius > 0.0);
    }
}
