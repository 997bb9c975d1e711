use super::*;

const EASES: [Ease; 7] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
];

#[test]
fn ease_endpoints_are_stable() {
    for ease in EASES {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn ease_monotonic_spot_check() {
    for ease in EASES {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn smooth_hits_endpoints_and_midpoint() {
    assert!(smooth(0.0).abs() < 1e-12);
    assert!((smooth(1.0) - 1.0).abs() < 1e-12);
    assert!((smooth(0.5) - 0.5).abs() < 1e-12);
    assert!(smooth(0.25) < 0.25);
}

#[test]
fn squish_holds_outside_window() {
    let r = RateFunc::squished_smooth();
    assert_eq!(r.apply(0.1), RateFunc::Smooth.apply(0.0));
    assert_eq!(r.apply(0.9), RateFunc::Smooth.apply(1.0));
    assert!((r.apply(0.5) - 0.5).abs() < 1e-12);

    let flat = RateFunc::squish(RateFunc::Linear, 0.3, 0.3);
    assert_eq!(flat.apply(0.9), 0.3);
}

#[test]
fn there_and_back_returns_home() {
    let r = RateFunc::ThereAndBack;
    assert!(r.apply(0.0).abs() < 1e-12);
    assert!((r.apply(0.5) - 1.0).abs() < 1e-12);
    assert!(r.apply(1.0).abs() < 1e-12);
}

#[test]
fn rate_func_deserializes_from_json() {
    let r: RateFunc = serde_json::from_str(r#"{"squish":{"inner":"linear","a":0.0,"b":0.5}}"#)
        .unwrap();
    assert!((r.apply(0.25) - 0.5).abs() < 1e-12);
    let e: RateFunc = serde_json::from_str(r#"{"ease":"InQuad"}"#).unwrap();
    assert_eq!(e, RateFunc::Ease(Ease::InQuad));
}

#[test]
fn rush_into_starts_slow_and_lands_on_one() {
    let r = RateFunc::RushInto;
    assert!(r.apply(0.0).abs() < 1e-12);
    assert!((r.apply(1.0) - 1.0).abs() < 1e-12);
    assert!(r.apply(0.5) < 0.5);
}

#[test]
fn rush_from_starts_fast_and_lands_on_one() {
    let r = RateFunc::RushFrom;
    assert!(r.apply(0.0).abs() < 1e-12);
    assert!((r.apply(1.0) - 1.0).abs() < 1e-12);
    assert!(r.apply(0.5) > 0.5);
}
