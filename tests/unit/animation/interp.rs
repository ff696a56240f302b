use super::*;
use crate::foundation::core::DURATION_FPS;

#[test]
fn clamps_outside_keyframe_range() {
    let ts = [1.0, 2.0];
    let vs = [10.0, 20.0];
    assert_eq!(KeyframeInterpolator::at_seconds(0.0).interpolate(&ts, &vs, Ease::InOut), 10.0);
    assert_eq!(KeyframeInterpolator::at_seconds(5.0).interpolate(&ts, &vs, Ease::InOut), 20.0);
}

#[test]
fn boundaries_return_first_and_last_values() {
    let ts = [0.5, 1.0, 3.0];
    let vs = [4.0, -2.0, 7.0];
    assert_eq!(KeyframeInterpolator::at_seconds(0.5).interpolate(&ts, &vs, Ease::InOut), 4.0);
    assert_eq!(KeyframeInterpolator::at_seconds(3.0).interpolate(&ts, &vs, Ease::InOut), 7.0);
    assert_eq!(KeyframeInterpolator::at_seconds(1.0).interpolate(&ts, &vs, Ease::InOut), -2.0);
}

#[test]
fn eases_between_bracketing_pair() {
    let ts = [0.0, 1.0, 2.0];
    let vs = [0.0, 100.0, 0.0];
    let lin = KeyframeInterpolator::at_seconds(1.25).interpolate(&ts, &vs, Ease::Linear);
    assert!((lin - 75.0).abs() < 1e-9);
    let mid = KeyframeInterpolator::at_seconds(0.5).interpolate(&ts, &vs, Ease::InOut);
    assert!((mid - 50.0).abs() < 1e-9);
    let early = KeyframeInterpolator::at_seconds(0.25).interpolate(&ts, &vs, Ease::InOut);
    assert!(early < 25.0);
}

#[test]
fn zero_length_segment_holds() {
    let ts = [0.0, 1.0, 1.0, 2.0];
    let vs = [0.0, 1.0, 5.0, 5.0];
    assert_eq!(KeyframeInterpolator::at_seconds(1.0).interpolate(&ts, &vs, Ease::Linear), 5.0);
}

#[test]
fn degenerate_inputs_do_not_panic() {
    assert_eq!(KeyframeInterpolator::at_seconds(1.0).interpolate(&[], &[], Ease::Linear), 0.0);
    assert_eq!(
        KeyframeInterpolator::at_seconds(1.0).interpolate(&[0.0, 2.0], &[3.0], Ease::Linear),
        3.0
    );
}

#[test]
fn frame_constructor_uses_fps() {
    let interp = KeyframeInterpolator::at_frame(45, DURATION_FPS);
    assert!((interp.time_sec - 1.5).abs() < 1e-12);
}

#[test]
fn closures_are_interpolators() {
    let first = |_: &[f64], values: &[f64], _: Ease| values[0];
    assert_eq!(first.interpolate(&[0.0, 1.0], &[9.0, 1.0], Ease::InOut), 9.0);
}
