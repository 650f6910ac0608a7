use approx::assert_abs_diff_eq;
use client_core::systems::orbit::{
    self, OrbitConfig, OrbitState, apply_look_input, apply_zoom_input, compute_pose,
    normalize_yaw_deg,
};
use glam::Vec3;

fn cfg() -> OrbitConfig {
    OrbitConfig {
        focus_offset: Vec3::new(0.0, 0.5, 0.0),
        follow_smoothing: 0.0,
        ..Default::default()
    }
}

#[test]
fn init_then_pose_round_trips_camera_position() {
    let cam = Vec3::new(0.0, 2.0, -6.0);
    let s = OrbitState::from_pose(cam, Vec3::ZERO, &cfg(), 0.0, 0.0);
    let pose = compute_pose(&s);
    assert_abs_diff_eq!(pose.eye.x, cam.x, epsilon = 1e-4);
    assert_abs_diff_eq!(pose.eye.y, cam.y, epsilon = 1e-4);
    assert_abs_diff_eq!(pose.eye.z, cam.z, epsilon = 1e-4);
    // The pose always faces the follow point exactly.
    let to_follow = (s.follow - pose.eye).normalize();
    assert_abs_diff_eq!(pose.look_dir.dot(to_follow), 1.0, epsilon = 1e-5);
}

#[test]
fn camera_above_and_behind_yields_negative_pitch() {
    let s = OrbitState::from_pose(Vec3::new(0.0, 2.0, -6.0), Vec3::ZERO, &cfg(), 0.0, 0.0);
    assert!(s.pitch_deg < 0.0, "pitch={}", s.pitch_deg);
    assert_abs_diff_eq!(s.yaw_deg, 0.0, epsilon = 1e-4);
}

#[test]
fn distance_is_recoverable_from_pose() {
    let mut s = OrbitState::from_pose(Vec3::new(0.0, 2.0, -6.0), Vec3::ZERO, &cfg(), 0.0, 0.0);
    s.distance = 6.0;
    let pose = compute_pose(&s);
    assert_abs_diff_eq!(pose.eye.distance(s.follow), 6.0, epsilon = 1e-4);
}

#[test]
fn yaw_normalization_is_idempotent_and_in_range() {
    for a in [-720.0f32, -180.0, -179.9, 0.0, 179.9, 180.0, 361.5, 9000.0] {
        let n = normalize_yaw_deg(a);
        assert!(n > -180.0 && n <= 180.0, "{a} -> {n}");
        assert_abs_diff_eq!(normalize_yaw_deg(n), n, epsilon = 1e-6);
    }
}

#[test]
fn look_input_keeps_pitch_in_bounds_for_any_magnitude() {
    let c = cfg();
    let mut s = OrbitState::from_pose(Vec3::new(0.0, 2.0, -6.0), Vec3::ZERO, &c, 0.0, 0.0);
    for dy in [-1e6f32, -3.0, 0.0, 3.0, 1e6] {
        apply_look_input(&mut s, 17.0, dy, 0.016, &c);
        assert!(s.pitch_deg >= c.min_pitch_deg && s.pitch_deg <= c.max_pitch_deg);
        assert!(s.yaw_deg > -180.0 && s.yaw_deg <= 180.0);
    }
}

#[test]
fn zoom_stays_in_bounds_and_zero_scroll_is_identity() {
    let c = cfg();
    let mut s = OrbitState::from_pose(Vec3::new(0.0, 2.0, -6.0), Vec3::ZERO, &c, 0.0, 0.0);
    let before = s.distance;
    apply_zoom_input(&mut s, 0.0, &c);
    assert_abs_diff_eq!(s.distance, before, epsilon = 1e-6);
    for _ in 0..100 {
        apply_zoom_input(&mut s, 1.0, &c);
    }
    assert_abs_diff_eq!(s.distance, c.min_distance, epsilon = 1e-4);
    for _ in 0..100 {
        apply_zoom_input(&mut s, -1.0, &c);
    }
    assert_abs_diff_eq!(s.distance, c.max_distance, epsilon = 1e-4);
}

#[test]
fn follow_smoothing_is_tick_rate_independent() {
    let c = OrbitConfig {
        follow_smoothing: 0.25,
        ..cfg()
    };
    let target = Vec3::new(10.0, 0.0, -4.0);
    let start = OrbitState::from_pose(Vec3::new(0.0, 2.0, -6.0), Vec3::ZERO, &c, 0.0, 0.0);

    // Two 1/120 s steps must land where one 1/60 s step does.
    let mut coarse = start;
    orbit::advance_follow(&mut coarse, target, 1.0 / 60.0, &c);
    let mut fine = start;
    orbit::advance_follow(&mut fine, target, 1.0 / 120.0, &c);
    orbit::advance_follow(&mut fine, target, 1.0 / 120.0, &c);

    assert_abs_diff_eq!(coarse.follow.x, fine.follow.x, epsilon = 1e-4);
    assert_abs_diff_eq!(coarse.follow.y, fine.follow.y, epsilon = 1e-4);
    assert_abs_diff_eq!(coarse.follow.z, fine.follow.z, epsilon = 1e-4);
}

#[test]
fn zero_smoothing_snaps_follow_point() {
    let c = cfg();
    let mut s = OrbitState::from_pose(Vec3::new(0.0, 2.0, -6.0), Vec3::ZERO, &c, 0.0, 0.0);
    let target = Vec3::new(3.0, 1.0, 7.0);
    orbit::advance_follow(&mut s, target, 0.016, &c);
    let want = target + c.focus_offset;
    assert_abs_diff_eq!(s.follow.x, want.x, epsilon = 1e-6);
    assert_abs_diff_eq!(s.follow.y, want.y, epsilon = 1e-6);
    assert_abs_diff_eq!(s.follow.z, want.z, epsilon = 1e-6);
}
