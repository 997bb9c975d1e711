use std::rc::Rc;

use crate::{
    animation::rate::RateFunc,
    foundation::error::{MorphError, MorphResult},
    mobject::model::SharedMobject,
};

/// Default animation length in seconds.
pub const DEFAULT_ANIMATION_RUN_TIME: f64 = 1.0;
/// Default length for pointwise-function animations, which read better slower.
pub const DEFAULT_POINTWISE_FUNCTION_RUN_TIME: f64 = 3.0;

/// Timing and cleanup settings shared by every animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Display name; animations fall back to their variant name.
    pub name: Option<String>,
    /// Seconds; must be > 0.
    pub run_time: f64,
    /// Shapes alpha before interpolation.
    pub rate_func: RateFunc,
    /// Remove the animated mobject from the scene on cleanup.
    pub remover: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            name: None,
            run_time: DEFAULT_ANIMATION_RUN_TIME,
            rate_func: RateFunc::Smooth,
            remover: false,
        }
    }
}

impl AnimationConfig {
    /// Reject non-finite or non-positive run times.
    pub fn validate(&self) -> MorphResult<()> {
        if !(self.run_time.is_finite() && self.run_time > 0.0) {
            return Err(MorphError::configuration(format!(
                "run_time must be finite and > 0, got {}",
                self.run_time
            )));
        }
        Ok(())
    }
}

/// Scene collaborator: the owner of what gets drawn. Identity is by handle, not by value.
pub trait Scene {
    /// Put `mobject` on stage.
    fn add(&mut self, mobject: SharedMobject);
    /// Take `mobject` off stage; unknown handles are ignored.
    fn remove(&mut self, mobject: &SharedMobject);
}

/// Minimal ordered scene: a painter's-order list of handles.
#[derive(Default)]
pub struct SceneList {
    mobjects: Vec<SharedMobject>,
}

impl SceneList {
    /// An empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles in drawing order, bottom first.
    pub fn mobjects(&self) -> &[SharedMobject] {
        &self.mobjects
    }

    /// Whether this exact handle is on stage.
    pub fn contains(&self, mobject: &SharedMobject) -> bool {
        self.mobjects.iter().any(|m| Rc::ptr_eq(m, mobject))
    }

    /// Number of handles on stage.
    pub fn len(&self) -> usize {
        self.mobjects.len()
    }

    /// True when nothing is on stage.
    pub fn is_empty(&self) -> bool {
        self.mobjects.is_empty()
    }
}

impl Scene for SceneList {
    /// Adding a handle that is already present moves it to the top.
    fn add(&mut self, mobject: SharedMobject) {
        self.remove(&mobject);
        self.mobjects.push(mobject);
    }

    fn remove(&mut self, mobject: &SharedMobject) {
        self.mobjects.retain(|m| !Rc::ptr_eq(m, mobject));
    }
}

/// Calling contract between an animation and the driver that steps it.
///
/// `begin` must complete before the first `interpolate_alpha`. After that, any alpha may be
/// requested in any order; values outside `[0, 1]` are clamped.
pub trait Animation {
    /// Timing and cleanup settings.
    fn config(&self) -> &AnimationConfig;

    /// Override the run time without revalidating.
    fn set_run_time(&mut self, run_time: f64);

    /// The live mobject this animation mutates.
    fn mobject(&self) -> &SharedMobject;

    /// Prepare snapshots; must precede any interpolation.
    fn begin(&mut self) -> MorphResult<()>;

    /// Render the frame at `alpha` into the live mobject.
    fn interpolate_alpha(&mut self, alpha: f64) -> MorphResult<()>;

    /// Final scene bookkeeping once the animation has played.
    fn clean_up_from_scene(&mut self, scene: &mut dyn Scene) -> MorphResult<()>;

    /// Seconds this animation lasts.
    fn run_time(&self) -> f64 {
        self.config().run_time
    }

    /// The configured rate function.
    fn rate_func(&self) -> &RateFunc {
        &self.config().rate_func
    }

    /// Whether cleanup removes the live mobject from the scene.
    fn remover(&self) -> bool {
        self.config().remover
    }

    /// Every handle this animation touches, live mobject first.
    fn get_all_mobjects(&self) -> Vec<SharedMobject> {
        vec![self.mobject().clone()]
    }

    /// Display name, `"Animation"` unless configured.
    fn name(&self) -> String {
        self.config()
            .name
            .clone()
            .unwrap_or_else(|| "Animation".to_owned())
    }

    /// Jump to the final frame.
    fn finish(&mut self) -> MorphResult<()> {
        self.interpolate_alpha(1.0)
    }

    /// Generic cleanup: removers take their mobject out of the scene.
    fn generic_clean_up(&self, scene: &mut dyn Scene) {
        if self.remover() {
            scene.remove(self.mobject());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lifecycle.rs"]
mod tests;
