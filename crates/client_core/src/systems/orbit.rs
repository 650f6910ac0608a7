//! Orbit camera solver: yaw/pitch/distance state and a smoothed follow pose.
//!
//! Angles live in degrees (yaw normalized to `(-180, 180]`, pitch positive
//! looks down, yaw 0 puts the camera behind the target at -Z). All inputs are
//! clamped, never rejected.

use glam::{Mat3, Quat, Vec3};

/// Squared-length floor below which a look vector counts as degenerate.
pub const LOOK_EPS_SQ: f32 = 1e-8;
/// Scroll magnitudes below this are float jitter, not input.
const SCROLL_EPS: f32 = 1e-4;
/// Minimum pitch range kept open by `OrbitConfig::sanitized`.
const PITCH_RANGE_EPS_DEG: f32 = 0.1;

/// Immutable orbit camera tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitConfig {
    /// Offset from the target position to the point the camera orbits.
    pub focus_offset: Vec3,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Degrees per pointer count per second.
    pub yaw_sensitivity: f32,
    pub pitch_sensitivity: f32,
    pub min_pitch_deg: f32,
    pub max_pitch_deg: f32,
    pub invert_y: bool,
    pub zoom_sensitivity: f32,
    /// `0` snaps the follow point; otherwise exponential smoothing in `(0, 1]`.
    pub follow_smoothing: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            focus_offset: Vec3::new(0.0, 0.5, 0.0),
            min_distance: 2.0,
            max_distance: 12.0,
            yaw_sensitivity: 120.0,
            pitch_sensitivity: 90.0,
            min_pitch_deg: -80.0,
            max_pitch_deg: 80.0,
            invert_y: false,
            zoom_sensitivity: 2.0,
            follow_smoothing: 0.15,
        }
    }
}

impl OrbitConfig {
    /// Repair out-of-order bounds and out-of-range smoothing instead of
    /// rejecting them.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        if self.min_distance > self.max_distance {
            std::mem::swap(&mut self.min_distance, &mut self.max_distance);
        }
        self.min_distance = self.min_distance.max(0.01);
        self.max_distance = self.max_distance.max(self.min_distance);
        if self.max_pitch_deg < self.min_pitch_deg + PITCH_RANGE_EPS_DEG {
            self.max_pitch_deg = self.min_pitch_deg + PITCH_RANGE_EPS_DEG;
        }
        self.follow_smoothing = self.follow_smoothing.clamp(0.0, 1.0);
        self
    }
}

/// Per-camera orbit state, mutated once per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitState {
    pub yaw_deg: f32,
    pub pitch_deg: f32,
    pub distance: f32,
    pub follow: Vec3,
}

/// Read-only camera pose for renderer consumption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub look_dir: Vec3,
    pub up: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            look_dir: Vec3::Z,
            up: Vec3::Y,
        }
    }
}

impl CameraPose {
    #[inline]
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.look_dir
    }

    /// Horizontal-plane right vector; world +X when the camera looks straight
    /// up or down.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        let r = Vec3::Y.cross(self.look_dir);
        if r.length_squared() < LOOK_EPS_SQ {
            Vec3::X
        } else {
            r.normalize()
        }
    }

    /// Orientation as a quaternion (forward = `look_dir`, up re-orthogonalized).
    #[must_use]
    pub fn rotation(&self) -> Quat {
        let fwd = self.look_dir.normalize_or_zero();
        if fwd.length_squared() < LOOK_EPS_SQ {
            return Quat::IDENTITY;
        }
        let right = self.right();
        let up = fwd.cross(right);
        Quat::from_mat3(&Mat3::from_cols(right, up, fwd))
    }
}

impl OrbitState {
    /// Derive initial orbit angles from an existing camera placement.
    ///
    /// The yaw/pitch come from `camera_pos - (target_pos + focus_offset)`; a
    /// near-zero offset keeps the fallback angles instead of feeding asin/atan2
    /// a degenerate vector. The sign convention is the one that makes
    /// [`compute_pose`] reproduce `camera_pos` exactly.
    #[must_use]
    pub fn from_pose(
        camera_pos: Vec3,
        target_pos: Vec3,
        cfg: &OrbitConfig,
        fallback_yaw_deg: f32,
        fallback_pitch_deg: f32,
    ) -> Self {
        let focus = target_pos + cfg.focus_offset;
        let off = camera_pos - focus;
        let (yaw_deg, pitch_deg) = if off.length_squared() < LOOK_EPS_SQ {
            (fallback_yaw_deg, fallback_pitch_deg)
        } else {
            let u = off / off.length();
            let pitch = -u.y.clamp(-1.0, 1.0).asin();
            let yaw = (-u.x).atan2(-u.z);
            (yaw.to_degrees(), pitch.to_degrees())
        };
        Self {
            yaw_deg: normalize_yaw_deg(yaw_deg),
            pitch_deg: pitch_deg.clamp(cfg.min_pitch_deg, cfg.max_pitch_deg),
            distance: off.length().clamp(cfg.min_distance, cfg.max_distance),
            follow: focus,
        }
    }
}

/// Wrap an angle into `(-180, 180]` degrees. Idempotent.
#[must_use]
pub fn normalize_yaw_deg(a: f32) -> f32 {
    let mut x = a;
    while x > 180.0 {
        x -= 360.0;
    }
    while x <= -180.0 {
        x += 360.0;
    }
    x
}

/// Integrate pointer deltas into yaw/pitch; pitch clamps, yaw wraps.
pub fn apply_look_input(state: &mut OrbitState, dx: f32, dy: f32, dt: f32, cfg: &OrbitConfig) {
    let y_sign = if cfg.invert_y { 1.0 } else { -1.0 };
    state.yaw_deg = normalize_yaw_deg(state.yaw_deg + dx * cfg.yaw_sensitivity * dt);
    state.pitch_deg = (state.pitch_deg + dy * cfg.pitch_sensitivity * y_sign * dt)
        .clamp(cfg.min_pitch_deg, cfg.max_pitch_deg);
}

/// Apply a scroll delta to the boom length, staying inside the distance bounds.
pub fn apply_zoom_input(state: &mut OrbitState, scroll: f32, cfg: &OrbitConfig) {
    if scroll.abs() < SCROLL_EPS {
        return;
    }
    state.distance = (state.distance - scroll * cfg.zoom_sensitivity)
        .clamp(cfg.min_distance, cfg.max_distance);
}

/// Move the follow point toward `target_pos + focus_offset`.
///
/// Smoothing is frame-rate independent: `t = 1 - (1 - s)^(dt * 60)` reproduces
/// the reference 60 Hz curve at any tick rate. `s == 0` snaps.
pub fn advance_follow(state: &mut OrbitState, target_pos: Vec3, dt: f32, cfg: &OrbitConfig) {
    let desired = target_pos + cfg.focus_offset;
    if cfg.follow_smoothing <= 0.0 {
        state.follow = desired;
        return;
    }
    let t = 1.0 - (1.0 - cfg.follow_smoothing).powf(dt * 60.0);
    state.follow = state.follow.lerp(desired, t);
}

/// Place the camera on the boom and aim it at the follow point.
///
/// The look direction is re-derived from the final eye position so the camera
/// faces the follow point exactly, independent of accumulated rounding in the
/// angle state.
#[must_use]
pub fn compute_pose(state: &OrbitState) -> CameraPose {
    let (sy, cy) = state.yaw_deg.to_radians().sin_cos();
    let (sp, cp) = state.pitch_deg.to_radians().sin_cos();
    let offset = Vec3::new(-cp * sy, -sp, -cp * cy) * state.distance;
    let eye = state.follow + offset;
    CameraPose {
        eye,
        look_dir: (state.follow - eye).normalize_or_zero(),
        up: Vec3::Y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_is_clamped() {
        let cfg = OrbitConfig {
            min_pitch_deg: -30.0,
            max_pitch_deg: 30.0,
            pitch_sensitivity: 1.0,
            ..Default::default()
        };
        let mut s = OrbitState::from_pose(Vec3::new(0.0, 0.0, -6.0), Vec3::ZERO, &cfg, 0.0, 0.0);
        apply_look_input(&mut s, 0.0, -1e5, 1.0, &cfg);
        assert!(s.pitch_deg >= cfg.min_pitch_deg - 1e-6);
        apply_look_input(&mut s, 0.0, 1e5, 1.0, &cfg);
        assert!(s.pitch_deg <= cfg.max_pitch_deg + 1e-6);
    }

    #[test]
    fn sanitize_repairs_swapped_distance_bounds() {
        let cfg = OrbitConfig {
            min_distance: 9.0,
            max_distance: 3.0,
            ..Default::default()
        }
        .sanitized();
        assert!(cfg.min_distance <= cfg.max_distance);
    }

    #[test]
    fn degenerate_offset_keeps_fallback_angles() {
        let cfg = OrbitConfig {
            focus_offset: Vec3::ZERO,
            ..Default::default()
        };
        let s = OrbitState::from_pose(Vec3::ZERO, Vec3::ZERO, &cfg, 42.0, -10.0);
        assert!((s.yaw_deg - 42.0).abs() < 1e-6);
        assert!((s.pitch_deg + 10.0).abs() < 1e-6);
    }
}
