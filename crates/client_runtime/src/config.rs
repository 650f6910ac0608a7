//! Bridge the TOML schemas in `data_runtime` into solver configs.
//!
//! Missing keys fall back to the solver defaults; the result is sanitized so
//! inverted bounds from a hand-edited file never reach the solvers.

use client_core::systems::motion::MotionConfig;
use client_core::systems::orbit::OrbitConfig;
use data_runtime::configs::motion::MotionCfg;
use data_runtime::configs::orbit_camera::OrbitCameraCfg;
use glam::Vec3;

#[must_use]
pub fn orbit_config(cfg: &OrbitCameraCfg) -> OrbitConfig {
    let d = OrbitConfig::default();
    OrbitConfig {
        focus_offset: cfg.focus_offset.map_or(d.focus_offset, Vec3::from_array),
        min_distance: cfg.min_distance.unwrap_or(d.min_distance),
        max_distance: cfg.max_distance.unwrap_or(d.max_distance),
        yaw_sensitivity: cfg.yaw_sens_deg_per_count.unwrap_or(d.yaw_sensitivity),
        pitch_sensitivity: cfg.pitch_sens_deg_per_count.unwrap_or(d.pitch_sensitivity),
        min_pitch_deg: cfg.min_pitch_deg.unwrap_or(d.min_pitch_deg),
        max_pitch_deg: cfg.max_pitch_deg.unwrap_or(d.max_pitch_deg),
        invert_y: cfg.invert_y.unwrap_or(d.invert_y),
        zoom_sensitivity: cfg.zoom_sens.unwrap_or(d.zoom_sensitivity),
        follow_smoothing: cfg.follow_smoothing.unwrap_or(d.follow_smoothing),
    }
    .sanitized()
}

#[must_use]
pub fn motion_config(cfg: &MotionCfg) -> MotionConfig {
    let d = MotionConfig::default();
    MotionConfig {
        move_speed: cfg.move_speed.unwrap_or(d.move_speed),
        jump_force: cfg.jump_force.unwrap_or(d.jump_force),
        ground_check_distance: cfg.ground_check_distance.unwrap_or(d.ground_check_distance),
        wall_check_distance: cfg.wall_check_distance.unwrap_or(d.wall_check_distance),
        sphere_radius: cfg.sphere_radius.unwrap_or(d.sphere_radius),
    }
    .sanitized()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_schema_yields_sane_defaults() {
        let cfg = OrbitCameraCfg {
            focus_offset: None,
            min_distance: None,
            max_distance: None,
            yaw_sens_deg_per_count: None,
            pitch_sens_deg_per_count: None,
            min_pitch_deg: None,
            max_pitch_deg: None,
            invert_y: None,
            zoom_sens: None,
            follow_smoothing: None,
        };
        let out = orbit_config(&cfg);
        assert!(out.min_distance <= out.max_distance);
        assert!(out.min_pitch_deg < out.max_pitch_deg);
    }

    #[test]
    fn inverted_file_bounds_are_repaired() {
        let cfg = OrbitCameraCfg {
            min_distance: Some(20.0),
            max_distance: Some(1.0),
            ..Default::default()
        };
        let out = orbit_config(&cfg);
        assert!(out.min_distance <= out.max_distance);
    }

    #[test]
    fn negative_motion_values_are_clamped() {
        let cfg = MotionCfg {
            move_speed: Some(-1.0),
            sphere_radius: Some(-0.5),
            ..Default::default()
        };
        let out = motion_config(&cfg);
        assert!(out.move_speed >= 0.0);
        assert!(out.sphere_radius > 0.0);
    }
}
