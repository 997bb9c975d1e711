use std::rc::Rc;

use serde_json::json;

use super::*;
use crate::animation::lifecycle::{Animation, Scene, SceneList};
use crate::transform::path::PathFunc;

fn dot(x: f64, y: f64) -> Mobject {
    Mobject::new(vec![Point3::new(x, y, 0.0)])
}

fn line(x0: f64, n: usize) -> Mobject {
    Mobject::new((0..n).map(|i| Point3::new(x0 + i as f64, 0.0, 0.0)).collect())
}

fn close(a: Point3, b: Point3) -> bool {
    (a - b).length() < 1e-9
}

fn center(m: &SharedMobject) -> Point3 {
    m.borrow().get_center().unwrap()
}

#[test]
fn replacement_transform_leaves_the_target_in_the_scene() {
    let mob = line(0.0, 2).into_shared();
    let target = line(5.0, 3).into_shared();
    let mut scene = SceneList::new();
    scene.add(mob.clone());

    let mut t = replacement_transform(mob.clone(), target.clone());
    assert_eq!(t.name(), "ReplacementTransform");
    t.begin().unwrap();
    t.finish().unwrap();
    t.clean_up_from_scene(&mut scene).unwrap();

    assert_eq!(scene.mobjects().len(), 1);
    assert!(Rc::ptr_eq(&scene.mobjects()[0], &target));
}

#[test]
fn transform_from_copy_is_the_reverse_transform() {
    let (a, b) = (line(0.0, 2), line(4.0, 3));

    let b_live = b.clone().into_shared();
    let mut from_copy = transform_from_copy(a.clone().into_shared(), b_live.clone());
    let b_ref = b.clone().into_shared();
    let mut reverse = transform(b_ref.clone(), a.clone().into_shared());
    from_copy.begin().unwrap();
    reverse.begin().unwrap();

    for t in [0.0, 0.3, 0.5, 0.9, 1.0] {
        from_copy.interpolate(t).unwrap();
        reverse.interpolate(1.0 - t).unwrap();
        assert_eq!(*b_live.borrow(), *b_ref.borrow(), "alpha {t}");
    }
    // Played forward, the live object ends as itself.
    from_copy.interpolate(1.0).unwrap();
    assert_eq!(b_live.borrow().points, b.points);
}

#[test]
fn directional_variants_set_their_arcs() {
    let cw = clockwise_transform(dot(0.0, 0.0).into_shared(), dot(1.0, 0.0).into_shared());
    assert_eq!(cw.transform_config().path_arc, -PI);
    let ccw = counterclockwise_transform(dot(0.0, 0.0).into_shared(), dot(1.0, 0.0).into_shared());
    assert_eq!(ccw.transform_config().path_arc, PI);
    assert!(matches!(ccw.path_func(), PathFunc::Arc { .. }));
}

#[test]
fn move_to_target_needs_a_stashed_target() {
    let mob = dot(0.0, 0.0).into_shared();
    let err = move_to_target(mob.clone()).unwrap_err();
    assert!(matches!(err, MorphError::Configuration(_)));

    mob.borrow_mut().generate_target().shift(Point3::new(3.0, 0.0, 0.0));
    let mut t = move_to_target(mob.clone()).unwrap();
    t.begin().unwrap();
    t.finish().unwrap();
    assert_eq!(mob.borrow().points[0], Point3::new(3.0, 0.0, 0.0));
}

#[test]
fn apply_method_call_parses_up_front() {
    let mob = dot(1.0, 1.0).into_shared();
    let mut t = apply_method_call(mob.clone(), "shift", &[json!([1.0, 2.0])]).unwrap();
    t.begin().unwrap();
    t.finish().unwrap();
    assert_eq!(mob.borrow().points[0], Point3::new(2.0, 3.0, 0.0));

    assert!(apply_method_call(mob.clone(), "explode", &[]).is_err());
    assert!(apply_method_call(mob, "scale", &[json!(2.0), json!({"pivot": 1})]).is_err());
}

#[test]
fn pointwise_variants_default_to_three_seconds() {
    let t = apply_pointwise_function(|p| p * 2.0, dot(1.0, 0.0).into_shared());
    assert_eq!(t.run_time(), DEFAULT_POINTWISE_FUNCTION_RUN_TIME);
    let m = apply_matrix(&[vec![1.0, 0.0], vec![0.0, 1.0]], dot(1.0, 0.0).into_shared()).unwrap();
    assert_eq!(m.run_time(), DEFAULT_POINTWISE_FUNCTION_RUN_TIME);
    let plain = fade_to_color(dot(0.0, 0.0).into_shared(), Rgba8Premul::transparent());
    assert_eq!(plain.run_time(), 1.0);

    let faster = t.configure(|c| c.animation.run_time = 0.5).unwrap();
    assert_eq!(faster.run_time(), 0.5);
}

#[test]
fn apply_pointwise_function_maps_every_point() {
    let mob = line(1.0, 2).into_shared();
    let mut t = apply_pointwise_function(|p| Point3::new(p.x * p.x, p.y, p.z), mob.clone());
    t.begin().unwrap();
    t.finish().unwrap();
    assert_eq!(
        mob.borrow().points,
        vec![Point3::new(1.0, 0.0, 0.0), Point3::new(4.0, 0.0, 0.0)]
    );
}

#[test]
fn pointwise_to_center_reads_the_center_at_begin() {
    let mob = line(0.0, 3).into_shared();
    let mut t = apply_pointwise_function_to_center(|c| c + Point3::new(0.0, 5.0, 0.0), mob.clone());
    // Moved after construction: the target must follow.
    mob.borrow_mut().shift(Point3::new(10.0, 0.0, 0.0));
    t.begin().unwrap();
    t.finish().unwrap();
    assert!(close(center(&mob), Point3::new(11.0, 5.0, 0.0)));
    // Shape is preserved.
    assert_eq!(mob.borrow().points.len(), 3);
}

#[test]
fn apply_matrix_promotes_two_by_two() {
    let mob = Mobject::new(vec![Point3::new(1.0, 0.0, 7.0)]).into_shared();
    let mut t = apply_matrix(&[vec![0.0, -1.0], vec![1.0, 0.0]], mob.clone()).unwrap();
    t.begin().unwrap();
    t.finish().unwrap();
    assert!(close(mob.borrow().points[0], Point3::new(0.0, 1.0, 7.0)));

    let rows = vec![vec![1.0, 0.0, 0.0, 0.0]; 4];
    let err = apply_matrix(&rows, mob).unwrap_err();
    assert!(matches!(err, MorphError::Configuration(_)));
}

#[test]
fn apply_complex_function_defaults_to_the_rotation_at_one() {
    let mob = dot(1.0, 0.0).into_shared();
    let mut t = apply_complex_function(|z| z * Complex::I, mob.clone());
    assert!((t.transform_config().path_arc - PI / 2.0).abs() < 1e-12);
    t.begin().unwrap();
    t.finish().unwrap();
    assert!(close(mob.borrow().points[0], Point3::new(0.0, 1.0, 0.0)));

    let flat = apply_complex_function(|z| z * 2.0, dot(1.0, 0.0).into_shared());
    assert!(flat.path_func().is_straight());

    let degenerate = apply_complex_function(
        |_| Complex::new(f64::NAN, f64::NAN),
        dot(1.0, 0.0).into_shared(),
    );
    assert_eq!(degenerate.transform_config().path_arc, 0.0);
}

#[test]
fn scale_variants_work_about_the_center() {
    let mob = line(0.0, 3).into_shared();
    let mut t = scale_in_place(mob.clone(), 2.0);
    t.begin().unwrap();
    t.finish().unwrap();
    assert_eq!(mob.borrow().points[0], Point3::new(-1.0, 0.0, 0.0));
    assert_eq!(mob.borrow().points[2], Point3::new(3.0, 0.0, 0.0));

    let mob = line(0.0, 3).into_shared();
    let mut t = shrink_to_center(mob.clone());
    t.begin().unwrap();
    t.finish().unwrap();
    assert!(mob.borrow().points.iter().all(|p| close(*p, Point3::new(1.0, 0.0, 0.0))));
}

#[test]
fn fade_to_color_only_changes_color() {
    let mob = line(0.0, 2).into_shared();
    let red = Rgba8Premul::opaque(255, 0, 0);
    let mut t = fade_to_color(mob.clone(), red);
    t.begin().unwrap();
    t.finish().unwrap();
    assert_eq!(mob.borrow().color, red);
    assert_eq!(mob.borrow().points, line(0.0, 2).points);
}

#[test]
fn restore_needs_a_saved_state() {
    let mob = dot(0.0, 0.0).into_shared();
    let err = restore(mob.clone()).begin().unwrap_err();
    assert!(matches!(err, MorphError::Configuration(_)));

    mob.borrow_mut().save_state().shift(Point3::new(4.0, 0.0, 0.0));
    let mut t = restore(mob.clone());
    t.begin().unwrap();
    t.finish().unwrap();
    assert_eq!(mob.borrow().points[0], Point3::ZERO);
}

#[test]
fn apply_function_failure_surfaces_at_begin() {
    let mob = dot(0.0, 0.0).into_shared();
    let mut t = apply_function(|_| anyhow::bail!("no shape"), mob);
    let err = t.begin().unwrap_err();
    assert!(matches!(err, MorphError::Configuration(_)));
    assert_eq!(t.state(), crate::transform::base::TransformState::Constructed);

    let mob = dot(1.0, 1.0).into_shared();
    let mut t = apply_function(
        |mut m| {
            m.move_to(Point3::ZERO);
            Ok(m)
        },
        mob.clone(),
    );
    t.begin().unwrap();
    assert!(t.target_mobject().is_some());
    t.finish().unwrap();
    assert_eq!(mob.borrow().points[0], Point3::ZERO);
}

#[test]
fn cyclic_replace_rotates_positions_and_writes_back() {
    let members: Vec<SharedMobject> = (0..3).map(|i| dot(i as f64, 0.0).into_shared()).collect();
    let mut t = cyclic_replace(members.clone());
    assert!((t.transform_config().path_arc - PI / 2.0).abs() < 1e-12);
    t.begin().unwrap();

    t.interpolate(0.5).unwrap();
    // Mid-arc, members leave the x axis.
    assert!(members.iter().any(|m| center(m).y.abs() > 1e-3));

    t.finish().unwrap();
    assert!(close(center(&members[0]), Point3::new(1.0, 0.0, 0.0)));
    assert!(close(center(&members[1]), Point3::new(2.0, 0.0, 0.0)));
    assert!(close(center(&members[2]), Point3::new(0.0, 0.0, 0.0)));
}

#[test]
fn swap_exchanges_two_positions() {
    let a = dot(0.0, 0.0).into_shared();
    let b = dot(0.0, 4.0).into_shared();
    let mut t = swap(a.clone(), b.clone());
    assert_eq!(t.kind(), "Swap");
    t.begin().unwrap();
    t.finish().unwrap();
    assert!(close(center(&a), Point3::new(0.0, 4.0, 0.0)));
    assert!(close(center(&b), Point3::ZERO));
}
