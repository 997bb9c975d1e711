use super::*;
use crate::foundation::core::Point3;

fn line(n: usize) -> Mobject {
    Mobject::new((0..n).map(|i| Point3::new(i as f64, 0.0, 0.0)).collect())
}

#[test]
fn point_counts_grow_to_the_larger_side() {
    let mut a = line(2);
    let mut b = line(5);
    a.align_data(&mut b).unwrap();
    assert_eq!(a.num_points(), 5);
    assert_eq!(b.num_points(), 5);
    // Order is preserved and the endpoints survive.
    assert_eq!(a.points.first(), Some(&Point3::new(0.0, 0.0, 0.0)));
    assert_eq!(a.points.last(), Some(&Point3::new(1.0, 0.0, 0.0)));
    assert_eq!(b.points, line(5).points);
}

#[test]
fn alignment_is_symmetric() {
    let tree = || Mobject::group(vec![line(3), Mobject::group(vec![line(1), line(4)])]);
    let other = || Mobject::group(vec![line(2), line(6), line(2)]);

    let (mut a1, mut b1) = (tree(), other());
    a1.align_data(&mut b1).unwrap();
    let (mut a2, mut b2) = (tree(), other());
    b2.align_data(&mut a2).unwrap();

    assert!(is_congruent(&a1, &b1));
    assert_eq!(a1, a2);
    assert_eq!(b1, b2);
}

#[test]
fn short_child_lists_are_padded_with_duplicates() {
    let mut a = Mobject::group(vec![line(1), line(2)]);
    let mut b = Mobject::group(vec![line(1), line(1), line(1), line(1)]);
    a.align_data(&mut b).unwrap();
    assert_eq!(a.submobjects.len(), 4);
    assert_eq!(a.submobjects[0], a.submobjects[1]);
    assert_eq!(a.submobjects[2], a.submobjects[3]);
    assert!(is_congruent(&a, &b));
}

#[test]
fn points_on_one_side_only_are_pushed_into_a_child() {
    let mut a = line(3);
    let mut b = Mobject::group(vec![line(2), line(2)]);
    a.align_data(&mut b).unwrap();
    assert!(a.points.is_empty());
    assert_eq!(a.submobjects.len(), 2);
    assert!(is_congruent(&a, &b));
}

#[test]
fn empty_against_non_empty_is_a_structural_error() {
    let mut empty = Mobject::default().with_name("nothing");
    let mut b = line(3);
    let err = empty.align_data(&mut b).unwrap_err();
    assert!(matches!(err, MorphError::Structural(_)));
    assert!(err.to_string().contains("nothing"));
}

#[test]
fn two_empty_trees_are_already_congruent() {
    let mut a = Mobject::default();
    let mut b = Mobject::default();
    a.align_data(&mut b).unwrap();
    assert!(is_congruent(&a, &b));
}

#[test]
fn ensure_congruent_names_the_offender() {
    let a = line(2);
    let b = line(3);
    assert!(ensure_congruent(&[("a", &a), ("a2", &a.clone())]).is_ok());
    let err = ensure_congruent(&[("a", &a), ("b", &b)]).unwrap_err();
    assert!(err.to_string().contains("'b'"));
}

#[test]
fn align_all_reaches_a_common_shape() {
    let mut a = line(2);
    let mut b = Mobject::group(vec![line(1), line(3)]);
    let mut c = Mobject::group(vec![line(4)]);
    align_all(&mut [&mut a, &mut b, &mut c]).unwrap();
    assert!(is_congruent(&a, &b));
    assert!(is_congruent(&b, &c));
}
