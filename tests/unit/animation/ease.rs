use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn endpoints_are_fixed() {
    for ease in [
        Ease::Linear,
        Ease::Ease,
        Ease::EaseIn,
        Ease::EaseOut,
        Ease::EaseInOut,
        Ease::CubicBezier([0.1, 0.7, 1.0, 0.1]),
    ] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn ease_in_out_is_symmetric() {
    assert!(approx(Ease::EaseInOut.apply(0.5), 0.5));
    let a = Ease::EaseInOut.apply(0.25);
    let b = Ease::EaseInOut.apply(0.75);
    assert!(approx(a + b, 1.0));
    assert!(a < 0.25);
}

#[test]
fn linear_bezier_matches_identity() {
    let e = Ease::CubicBezier([0.0, 0.0, 1.0, 1.0]);
    for t in [0.1, 0.33, 0.5, 0.9] {
        assert!(approx(e.apply(t), t));
    }
}

#[test]
fn steps_jump_end_and_start() {
    let end = Ease::Steps {
        count: 4,
        position: StepPosition::JumpEnd,
    };
    assert_eq!(end.apply(0.0), 0.0);
    assert_eq!(end.apply(0.3), 0.25);
    assert_eq!(end.apply(1.0), 1.0);

    let start = Ease::Steps {
        count: 4,
        position: StepPosition::JumpStart,
    };
    assert_eq!(start.apply(0.0), 0.25);
    assert_eq!(start.apply(0.3), 0.5);
}

#[test]
fn validate_rejects_bad_parameters() {
    assert!(Ease::CubicBezier([1.5, 0.0, 0.5, 1.0]).validate().is_err());
    assert!(
        Ease::Steps {
            count: 1,
            position: StepPosition::JumpNone
        }
        .validate()
        .is_err()
    );
    assert!(Ease::EaseOut.validate().is_ok());
}

#[test]
fn serde_uses_css_names() {
    let e: Ease = serde_json::from_str("\"ease-in-out\"").unwrap();
    assert_eq!(e, Ease::EaseInOut);
    let e: Ease = serde_json::from_str(r#"{"cubic-bezier":[0.1,0.2,0.3,0.4]}"#).unwrap();
    assert_eq!(e, Ease::CubicBezier([0.1, 0.2, 0.3, 0.4]));
}
