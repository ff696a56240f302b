use super::*;
use crate::animation::interp::KeyframeInterpolator;
use crate::blueprint::value::parse_property_value;

fn animated(raw: &str) -> PropertyValue {
    parse_property_value("prop", raw).unwrap()
}

fn at(t: f64) -> KeyframeInterpolator {
    KeyframeInterpolator::at_seconds(t)
}

#[test]
fn constants_pass_through() {
    let v = PropertyValue::constant("red");
    assert_eq!(resolve_property(&v, &at(3.0)), Scalar::from("red"));
}

#[test]
fn numeric_boundaries_match_first_and_last_values() {
    let v = animated("@animate[1,2,4]:[10,-5,30]");
    assert_eq!(resolve_property(&v, &at(1.0)), Scalar::Number(10.0));
    assert_eq!(resolve_property(&v, &at(4.0)), Scalar::Number(30.0));
    assert_eq!(resolve_property(&v, &at(0.0)), Scalar::Number(10.0));
    assert_eq!(resolve_property(&v, &at(9.0)), Scalar::Number(30.0));
}

#[test]
fn numeric_track_delegates_with_in_out_easing() {
    let seen = std::cell::RefCell::new(Vec::new());
    let probe = |ts: &[f64], vs: &[f64], ease: Ease| {
        seen.borrow_mut().push((ts.to_vec(), vs.to_vec(), ease));
        42.0
    };
    let v = animated("@animate[0,2]:[1,3]");
    assert_eq!(resolve_property(&v, &probe), Scalar::Number(42.0));
    assert_eq!(seen.into_inner(), vec![(vec![0.0, 2.0], vec![1.0, 3.0], Ease::InOut)]);
}

#[test]
fn hex_color_midpoint() {
    let v = animated("@animate[0,1]:[#000000,#FFFFFF]");
    assert_eq!(resolve_property(&v, &at(0.5)), Scalar::from("#808080"));
    assert_eq!(resolve_property(&v, &at(0.0)), Scalar::from("#000000"));
    assert_eq!(resolve_property(&v, &at(1.0)), Scalar::from("#ffffff"));
}

#[test]
fn hex_color_channels_are_independent_and_clamped() {
    let v = animated("@animate[0,1]:[#ff0000,#0000ff]");
    assert_eq!(resolve_property(&v, &at(0.5)), Scalar::from("#800080"));

    let overshoot = |_: &[f64], vs: &[f64], _: Ease| vs[1] * 2.0 - 10.0;
    assert_eq!(resolve_property(&v, &overshoot), Scalar::from("#0000ff"));
}

#[test]
fn compound_strings_interpolate_each_run() {
    let v = animated("@animate[0,1]:[rotate(0deg) scale(1),rotate(90deg) scale(2)]");
    assert_eq!(
        resolve_property(&v, &at(0.5)),
        Scalar::from("rotate(45deg) scale(1.5)")
    );
    assert_eq!(
        resolve_property(&v, &at(1.0)),
        Scalar::from("rotate(90deg) scale(2)")
    );
}

#[test]
fn compound_strings_keep_first_template_literals() {
    let v = animated("@animate[0,1]:[blur(0px),BLUR(10px)]");
    assert_eq!(resolve_property(&v, &at(0.5)), Scalar::from("blur(5px)"));
}

#[test]
fn run_count_mismatch_returns_first_value() {
    let v = animated("@animate[0,1]:[10px 20px,30px]");
    assert_eq!(resolve_property(&v, &at(0.5)), Scalar::from("10px 20px"));
}

#[test]
fn strings_without_numbers_hold_first_value() {
    let v = animated("@animate[0,1]:[hidden,visible]");
    assert_eq!(resolve_property(&v, &at(1.0)), Scalar::from("hidden"));
}

#[test]
fn mixed_types_return_first_value() {
    let v = animated("@animate[0,1]:[1,#ffffff]");
    assert_eq!(resolve_property(&v, &at(1.0)), Scalar::Number(1.0));
    let v = animated("@animate[0,1]:[true,false]");
    assert_eq!(resolve_property(&v, &at(1.0)), Scalar::Bool(true));
}

#[test]
fn partially_hex_strings_fall_back_to_templates() {
    let v = animated("@animate[0,1]:[#000000,black]");
    assert_eq!(resolve_property(&v, &at(1.0)), Scalar::from("#000000"));
}

#[test]
fn hand_built_empty_animation_does_not_panic() {
    let v = PropertyValue::Animated {
        timestamps: Vec::new(),
        values: Vec::new(),
    };
    assert_eq!(resolve_property(&v, &at(0.0)), Scalar::Number(0.0));
}

#[test]
fn source_relative_pairs() {
    assert!(is_source_relative("Video", "startFrom"));
    assert!(is_source_relative("Audio", "endAt"));
    assert!(is_source_relative("OffthreadVideo", "startFrom"));
    assert!(!is_source_relative("Video", "opacity"));
    assert!(!is_source_relative("div", "startFrom"));
}

#[test]
fn hex_parser_is_strict() {
    assert_eq!(parse_hex_rgb("#0aFf10"), Some([0x0a, 0xff, 0x10]));
    assert_eq!(parse_hex_rgb("0aff10"), None);
    assert_eq!(parse_hex_rgb("#fff"), None);
    assert_eq!(parse_hex_rgb("#gggggg"), None);
    assert_eq!(parse_hex_rgb("#0aff1000"), None);
}
