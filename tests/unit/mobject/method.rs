use super::*;
use serde_json::json;

fn unit_square() -> Mobject {
    Mobject::new(vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ])
}

#[test]
fn scale_call_takes_trailing_options() {
    let m = MobjectMethod::from_call("scale", &[json!(2.0), json!({"about_point": [0, 0]})])
        .unwrap();
    let mut sq = unit_square();
    m.apply(&mut sq).unwrap();
    assert_eq!(sq.points[2], Point3::new(2.0, 2.0, 0.0));
    assert_eq!(m.name(), "scale");
}

#[test]
fn color_accepts_hex_and_arrays() {
    let hex = MobjectMethod::from_call("set_color", &[json!("#ff8000")]).unwrap();
    let arr = MobjectMethod::from_call("set_color", &[json!([255, 128, 0])]).unwrap();
    let (mut a, mut b) = (unit_square(), unit_square());
    hex.apply(&mut a).unwrap();
    arr.apply(&mut b).unwrap();
    assert_eq!(a.color, Rgba8Premul::opaque(255, 128, 0));
    assert_eq!(a.color, b.color);

    assert!(MobjectMethod::from_call("set_color", &[json!("ff8000")]).is_err());
    assert!(MobjectMethod::from_call("set_color", &[json!([300, 0, 0])]).is_err());
}

#[test]
fn rotate_defaults_axis_to_out() {
    let m = MobjectMethod::from_call("rotate", &[json!(std::f64::consts::PI)]).unwrap();
    match m {
        MobjectMethod::Rotate {
            axis, about_point, ..
        } => {
            assert_eq!(axis, OUT);
            assert_eq!(about_point, None);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn apply_matrix_call_promotes_two_by_two() {
    let m = MobjectMethod::from_call("apply_matrix", &[json!([[0, -1], [1, 0]])]).unwrap();
    let mut p = Mobject::new(vec![Point3::new(1.0, 0.0, 0.0)]);
    m.apply(&mut p).unwrap();
    assert!((p.points[0] - Point3::new(0.0, 1.0, 0.0)).length() < 1e-12);

    let identity4 = json!([[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]]);
    let bad = MobjectMethod::from_call("apply_matrix", &[identity4]);
    assert!(matches!(bad, Err(MorphError::Configuration(_))));
}

#[test]
fn invalid_calls_are_configuration_errors() {
    for (name, args) in [
        ("teleport", vec![]),
        ("scale", vec![]),
        ("scale", vec![json!("big")]),
        ("scale", vec![json!(2.0), json!({"about": [0, 0]})]),
        ("shift", vec![json!([1.0])]),
        ("restore", vec![json!(1)]),
        ("apply_function", vec![]),
    ] {
        let err = MobjectMethod::from_call(name, &args).unwrap_err();
        assert!(
            matches!(err, MorphError::Configuration(_)),
            "{name}: {err}"
        );
    }
}

#[test]
fn restore_method_surfaces_missing_state() {
    let mut sq = unit_square();
    assert!(MobjectMethod::Restore.apply(&mut sq).is_err());
    sq.save_state();
    sq.shift(Point3::X);
    MobjectMethod::Restore.apply(&mut sq).unwrap();
    assert_eq!(sq.points, unit_square().points);
}
