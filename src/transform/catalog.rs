//! Named transform variants. Each factory returns a [`Transform`] carrying that variant's
//! defaults; adjust them afterwards with [`Transform::configure`].

use std::f64::consts::PI;

use crate::{
    animation::lifecycle::DEFAULT_POINTWISE_FUNCTION_RUN_TIME,
    foundation::core::{DEGREES, Point3, Rgba8Premul},
    foundation::error::{MorphError, MorphResult},
    foundation::math::{Complex, matrix_from_rows},
    mobject::method::MobjectMethod,
    mobject::model::{Mobject, SharedMobject},
    transform::base::Transform,
    transform::strategy::TargetStrategy,
};

/// Morph `mobject` into a copy of `target` along a straight path.
pub fn transform(mobject: SharedMobject, target: SharedMobject) -> Transform {
    Transform::new(mobject, target)
}

/// Like [`transform`], but on cleanup the scene swaps the live mobject for `target`.
pub fn replacement_transform(mobject: SharedMobject, target: SharedMobject) -> Transform {
    let t = Transform::from_strategy(
        "ReplacementTransform",
        mobject,
        TargetStrategy::Supplied(target),
    );
    t.with_defaults(|c| c.replace_mobject_with_target_in_scene = true)
}

/// Animates `target` (the live object) from `mobject`'s shape back to its own: the transform
/// `target -> mobject` driven at `1 - alpha`.
pub fn transform_from_copy(mobject: SharedMobject, target: SharedMobject) -> Transform {
    Transform::from_strategy("TransformFromCopy", target, TargetStrategy::Supplied(mobject))
        .reversed()
}

/// [`transform`] along a half-turn arc, clockwise.
pub fn clockwise_transform(mobject: SharedMobject, target: SharedMobject) -> Transform {
    let t = Transform::from_strategy(
        "ClockwiseTransform",
        mobject,
        TargetStrategy::Supplied(target),
    );
    t.with_defaults(|c| c.path_arc = -PI)
}

/// [`transform`] along a half-turn arc, counterclockwise.
pub fn counterclockwise_transform(mobject: SharedMobject, target: SharedMobject) -> Transform {
    let t = Transform::from_strategy(
        "CounterclockwiseTransform",
        mobject,
        TargetStrategy::Supplied(target),
    );
    t.with_defaults(|c| c.path_arc = PI)
}

/// Morph toward the state stashed by [`Mobject::generate_target`].
pub fn move_to_target(mobject: SharedMobject) -> MorphResult<Transform> {
    let stashed = {
        let m = mobject
            .try_borrow()
            .map_err(|_| MorphError::animation("mobject is mutably borrowed"))?;
        m.target.as_deref().cloned().ok_or_else(|| {
            MorphError::configuration(format!(
                "MoveToTarget called on mobject '{}' without a target; call generate_target first",
                m.name
            ))
        })?
    };
    Ok(Transform::from_strategy(
        "MoveToTarget",
        mobject,
        TargetStrategy::Supplied(stashed.into_shared()),
    ))
}

/// Morph toward a copy of the mobject with `method` applied.
pub fn apply_method(mobject: SharedMobject, method: MobjectMethod) -> Transform {
    Transform::from_strategy("ApplyMethod", mobject, TargetStrategy::Method(method))
}

/// [`apply_method`] from a method name, positional arguments and an optional trailing options
/// object. Unknown methods and malformed arguments fail here, not at `begin`.
pub fn apply_method_call(
    mobject: SharedMobject,
    name: &str,
    args: &[serde_json::Value],
) -> MorphResult<Transform> {
    let method = MobjectMethod::from_call(name, args)?;
    Ok(apply_method(mobject, method))
}

/// Map every point through `f`; runs longer than a plain transform by default.
pub fn apply_pointwise_function(
    f: impl Fn(Point3) -> Point3 + Send + Sync + 'static,
    mobject: SharedMobject,
) -> Transform {
    pointwise(
        "ApplyPointwiseFunction",
        mobject,
        MobjectMethod::apply_function(f),
    )
}

fn pointwise(kind: &'static str, mobject: SharedMobject, method: MobjectMethod) -> Transform {
    let t = Transform::from_strategy(kind, mobject, TargetStrategy::Method(method));
    t.with_defaults(|c| {
        c.animation.run_time = DEFAULT_POINTWISE_FUNCTION_RUN_TIME;
    })
}

/// Moves the mobject to `f(center)`, where the center is read when the transform begins.
pub fn apply_pointwise_function_to_center(
    f: impl Fn(Point3) -> Point3 + Send + Sync + 'static,
    mobject: SharedMobject,
) -> Transform {
    let t = Transform::from_strategy(
        "ApplyPointwiseFunctionToCenter",
        mobject,
        TargetStrategy::pointwise_to_center(f),
    );
    t.with_defaults(|c| {
        c.animation.run_time = DEFAULT_POINTWISE_FUNCTION_RUN_TIME;
    })
}

/// Blend the whole family toward `color`.
pub fn fade_to_color(mobject: SharedMobject, color: Rgba8Premul) -> Transform {
    Transform::from_strategy(
        "FadeToColor",
        mobject,
        TargetStrategy::Method(MobjectMethod::SetColor(color)),
    )
}

/// Scale about the family center.
pub fn scale_in_place(mobject: SharedMobject, factor: f64) -> Transform {
    scale_kind("ScaleInPlace", mobject, factor)
}

/// Collapse onto the family center.
pub fn shrink_to_center(mobject: SharedMobject) -> Transform {
    scale_kind("ShrinkToCenter", mobject, 0.0)
}

fn scale_kind(kind: &'static str, mobject: SharedMobject, factor: f64) -> Transform {
    Transform::from_strategy(
        kind,
        mobject,
        TargetStrategy::Method(MobjectMethod::Scale {
            factor,
            about_point: None,
        }),
    )
}

/// Morph back to the state stored by [`Mobject::save_state`]. Fails at `begin` if none exists.
pub fn restore(mobject: SharedMobject) -> Transform {
    Transform::from_strategy(
        "Restore",
        mobject,
        TargetStrategy::Method(MobjectMethod::Restore),
    )
}

/// Target = `f(copy of mobject)`. An error from `f` fails `begin` with a configuration error.
pub fn apply_function(
    f: impl Fn(Mobject) -> anyhow::Result<Mobject> + Send + Sync + 'static,
    mobject: SharedMobject,
) -> Transform {
    Transform::from_strategy("ApplyFunction", mobject, TargetStrategy::function(f))
}

/// Apply a linear map given as row-major 2×2 or 3×3 `rows`; 2×2 acts on `(x, y)` only.
pub fn apply_matrix(rows: &[Vec<f64>], mobject: SharedMobject) -> MorphResult<Transform> {
    let matrix = matrix_from_rows(rows)?;
    Ok(pointwise(
        "ApplyMatrix",
        mobject,
        MobjectMethod::ApplyMatrix(matrix),
    ))
}

/// Map `(x, y)` through `f` as `x + iy`.
///
/// The default arc is `arg f(1)`, the rotation `f` applies near `1`. This reads the map at a
/// single sample point, so it is a heuristic default, not a rotation guarantee.
pub fn apply_complex_function(
    f: impl Fn(Complex) -> Complex + Send + Sync + 'static,
    mobject: SharedMobject,
) -> Transform {
    let at_one = f(Complex::ONE);
    let arc = at_one.ln().im;
    let arc = if arc.is_finite() {
        arc
    } else {
        tracing::warn!(?at_one, "f(1) has no finite argument; using a straight path");
        0.0
    };
    let t = Transform::from_strategy(
        "ApplyComplexFunction",
        mobject,
        TargetStrategy::Method(MobjectMethod::apply_complex_function(f)),
    );
    t.with_defaults(|c| c.path_arc = arc)
}

/// Each of `mobjects` moves to the next one's position; the last moves to the first's.
///
/// The members are animated through a private group whose children are written back into
/// the caller's handles every frame.
pub fn cyclic_replace(mobjects: Vec<SharedMobject>) -> Transform {
    cyclic("CyclicReplace", mobjects)
}

/// Two-member [`cyclic_replace`].
pub fn swap(a: SharedMobject, b: SharedMobject) -> Transform {
    cyclic("Swap", vec![a, b])
}

fn cyclic(kind: &'static str, mobjects: Vec<SharedMobject>) -> Transform {
    let group = Mobject::group(Vec::new()).into_shared();
    let t = Transform::from_strategy(kind, group, TargetStrategy::Cyclic(mobjects));
    t.with_defaults(|c| c.path_arc = 90.0 * DEGREES)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/catalog.rs"]
mod tests;
