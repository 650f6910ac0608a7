use client_core::systems::motion::decide_jump;

#[test]
fn grounded_press_with_downward_velocity_zeroes_then_jumps() {
    let d = decide_jump(true, true, -3.0, 5.0);
    assert!(d.apply);
    assert_eq!(d.vertical_override, Some(0.0));
    assert!((d.impulse - 5.0).abs() < 1e-6);
}

#[test]
fn grounded_press_without_downward_velocity_keeps_vertical() {
    let d = decide_jump(true, true, 0.0, 5.0);
    assert!(d.apply);
    assert_eq!(d.vertical_override, None);
}

#[test]
fn airborne_press_is_ignored() {
    let d = decide_jump(false, true, -3.0, 5.0);
    assert!(!d.apply);
    assert!((d.impulse).abs() < 1e-6);
}

#[test]
fn grounded_without_press_is_ignored() {
    let d = decide_jump(true, false, 0.0, 5.0);
    assert!(!d.apply);
}
