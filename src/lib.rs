//! Wavyte Morph is the shape-morphing layer of a programmatic animation engine.
//!
//! A [`Transform`] turns one mobject (a tree of point-sets) into another over time. The
//! engine guarantees that every frame is well-formed even when source and target differ in
//! shape, by aligning both trees into a common structure before any interpolation happens.
//!
//! # Lifecycle
//!
//! 1. **Construct**: pick a variant (see the factory functions such as [`transform`],
//!    [`apply_matrix`] or [`cyclic_replace`]) and adjust its [`TransformConfig`].
//! 2. **Begin**: [`Transform::begin`] computes the target, aligns it with the live mobject
//!    and snapshots the start.
//! 3. **Interpolate**: [`Transform::interpolate`] rewrites the live mobject for any alpha in
//!    `[0, 1]`, in any order.
//! 4. **Clean up**: [`Transform::clean_up_from_scene`] optionally swaps the live mobject for
//!    the caller's target in a [`Scene`].
//!
//! Mobjects are shared through [`SharedMobject`] handles; the live mobject is mutated in
//! place, which is how a scene observes the animation.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod mobject;
mod transform;

pub use animation::lifecycle::{
    Animation, AnimationConfig, DEFAULT_ANIMATION_RUN_TIME, DEFAULT_POINTWISE_FUNCTION_RUN_TIME,
    Scene, SceneList,
};
pub use animation::rate::{Ease, RateFunc, smooth};
pub use foundation::core::{DEGREES, DMat3, DVec3, ORIGIN, OUT, Point3, RIGHT, Rgba8Premul, UP};
pub use foundation::error::{MorphError, MorphResult};
pub use foundation::math::{Complex, matrix_from_rows, rotation_matrix};
pub use mobject::align::{align_all, ensure_congruent, is_congruent};
pub use mobject::method::{ComplexFn, MobjectMethod, PointFn};
pub use mobject::model::{Mobject, SharedMobject};
pub use transform::base::{Transform, TransformState};
pub use transform::catalog::{
    apply_complex_function, apply_function, apply_matrix, apply_method, apply_method_call,
    apply_pointwise_function, apply_pointwise_function_to_center, clockwise_transform,
    counterclockwise_transform, cyclic_replace, fade_to_color, move_to_target,
    replacement_transform, restore, scale_in_place, shrink_to_center, swap, transform,
    transform_from_copy,
};
pub use transform::composite::TransformAnimations;
pub use transform::config::{ConfigUpdate, TransformConfig};
pub use transform::path::{CustomPathFn, PathFunc, STRAIGHT_PATH_THRESHOLD, straight_path};
pub use transform::strategy::{CustomTargetFn, MobjectFn, TargetStrategy};
