use std::fmt;
use std::sync::Arc;

use crate::{
    foundation::core::Point3,
    foundation::error::{MorphError, MorphResult},
    mobject::method::{MobjectMethod, PointFn},
    mobject::model::{Mobject, SharedMobject},
};

/// Caller function producing a target from a copy of the source.
pub type MobjectFn = Arc<dyn Fn(Mobject) -> anyhow::Result<Mobject> + Send + Sync>;

/// Open-ended target builder; `None` means the strategy could not produce a target.
pub type CustomTargetFn = Arc<dyn Fn(&Mobject) -> Option<Mobject> + Send + Sync>;

/// How a transform computes the object it morphs toward. Evaluated once, at `begin`.
#[derive(Clone)]
pub enum TargetStrategy {
    /// The caller's object, used as is.
    Supplied(SharedMobject),
    /// A copy of the source with a mutator applied.
    Method(MobjectMethod),
    /// A copy of the source moved to `f(center)`, with the center read at begin-time.
    PointwiseToCenter(PointFn),
    /// A caller function applied to a copy of the source; its error becomes a
    /// configuration error.
    Function(MobjectFn),
    /// The source is a group of these members; each member moves to the next one's position
    /// and the last moves to the first's.
    Cyclic(Vec<SharedMobject>),
    /// Any other builder.
    Custom(CustomTargetFn),
}

impl fmt::Debug for TargetStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Supplied(_) => f.write_str("Supplied(..)"),
            Self::Method(m) => f.debug_tuple("Method").field(m).finish(),
            Self::PointwiseToCenter(_) => f.write_str("PointwiseToCenter(..)"),
            Self::Function(_) => f.write_str("Function(..)"),
            Self::Cyclic(members) => write!(f, "Cyclic({} members)", members.len()),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl TargetStrategy {
    /// Wrap a closure as [`TargetStrategy::PointwiseToCenter`].
    pub fn pointwise_to_center(f: impl Fn(Point3) -> Point3 + Send + Sync + 'static) -> Self {
        Self::PointwiseToCenter(Arc::new(f))
    }

    /// Wrap a closure as [`TargetStrategy::Function`].
    pub fn function(
        f: impl Fn(Mobject) -> anyhow::Result<Mobject> + Send + Sync + 'static,
    ) -> Self {
        Self::Function(Arc::new(f))
    }

    /// Wrap a closure as [`TargetStrategy::Custom`].
    pub fn custom(f: impl Fn(&Mobject) -> Option<Mobject> + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Compute the target from the current source.
    pub fn create_target(&self, source: &Mobject) -> MorphResult<Mobject> {
        match self {
            Self::Supplied(target) => Ok(target
                .try_borrow()
                .map_err(|_| MorphError::animation("target mobject is mutably borrowed"))?
                .clone()),
            Self::Method(method) => {
                let mut target = source.clone();
                method.apply(&mut target)?;
                Ok(target)
            }
            Self::PointwiseToCenter(f) => {
                let center = source.get_center().ok_or_else(|| {
                    MorphError::configuration(format!(
                        "mobject '{}' has no points, so it has no center to map",
                        source.name
                    ))
                })?;
                let mut target = source.clone();
                target.move_to(f(center));
                Ok(target)
            }
            Self::Function(f) => f(source.clone()).map_err(|e| {
                MorphError::configuration(format!(
                    "target function did not return a mobject: {e:#}"
                ))
            }),
            Self::Cyclic(_) => {
                let mut target = source.clone();
                let n = target.submobjects.len();
                for (i, old) in source.submobjects.iter().enumerate() {
                    let Some(center) = old.get_center() else {
                        continue;
                    };
                    // Member i - 1 (cyclically) takes member i's place.
                    target.submobjects[(i + n - 1) % n].move_to(center);
                }
                Ok(target)
            }
            Self::Custom(f) => f(source).ok_or_else(|| {
                MorphError::configuration("target strategy did not produce a target")
            }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/strategy.rs"]
mod tests;
