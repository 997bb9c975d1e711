use crate::{
    animation::lifecycle::{Animation, AnimationConfig, Scene},
    animation::rate::RateFunc,
    foundation::error::{MorphError, MorphResult},
    mobject::align::{align_all, ensure_congruent},
    mobject::model::{Mobject, SharedMobject},
    transform::base::{Transform, borrow_live, interpolate_tree},
    transform::config::TransformConfig,
    transform::path::PathFunc,
};

/// Morphs between two running transforms.
///
/// Every frame both sub-transforms are advanced to `alpha`, writing into private start/end
/// trees instead of their own live mobjects, and then the start transform's live mobject is
/// interpolated between those two trees. The default rate, `squish(smooth)` over
/// `[0.4, 0.6]`, lets the start animation play out visibly before the hand-over.
#[derive(Debug)]
pub struct TransformAnimations {
    config: TransformConfig,
    path_func: PathFunc,
    start_anim: Transform,
    end_anim: Transform,
    frames: Option<(Mobject, Mobject)>,
}

impl TransformAnimations {
    /// `run_time` overrides the default of `max(start, end)`; both sub-transforms are
    /// stretched to the shared run time.
    pub fn new(
        mut start_anim: Transform,
        mut end_anim: Transform,
        run_time: Option<f64>,
    ) -> MorphResult<Self> {
        let run_time = run_time.unwrap_or_else(|| start_anim.run_time().max(end_anim.run_time()));
        let mut config = TransformConfig::default()
            .with_rate_func(RateFunc::squished_smooth())
            .with_run_time(run_time);
        config.animation.name = Some("TransformAnimations".to_owned());
        config.validate()?;
        start_anim.set_run_time(run_time);
        end_anim.set_run_time(run_time);
        Ok(Self {
            path_func: config.resolve_path(),
            config,
            start_anim,
            end_anim,
            frames: None,
        })
    }

    /// Edit the composite's own settings; the sub-transforms keep theirs.
    pub fn configure(mut self, f: impl FnOnce(&mut TransformConfig)) -> MorphResult<Self> {
        let mut config = self.config.clone();
        f(&mut config);
        config.validate()?;
        self.path_func = config.resolve_path();
        self.config = config;
        Ok(self)
    }

    /// The transform played first.
    pub fn start_anim(&self) -> &Transform {
        &self.start_anim
    }

    /// The transform handed over to.
    pub fn end_anim(&self) -> &Transform {
        &self.end_anim
    }

    /// Begin both sub-transforms and align every tree involved into one shape. Alignment
    /// failures leave the live mobject and the sub-transform snapshots untouched.
    #[tracing::instrument(skip(self))]
    pub fn begin(&mut self) -> MorphResult<()> {
        self.start_anim.begin()?;
        self.end_anim.begin()?;

        let end_live = self
            .end_anim
            .mobject()
            .try_borrow()
            .map_err(|_| MorphError::animation("end mobject is mutably borrowed"))?
            .clone();
        let mut live = self
            .start_anim
            .mobject()
            .try_borrow()
            .map_err(|_| MorphError::animation("start mobject is mutably borrowed"))?
            .clone();
        let mut start_tree = live.clone();
        let mut end_tree = end_live;

        let (Some((s_start, s_target)), Some((e_start, e_target))) = (
            self.start_anim.snapshots_mut(),
            self.end_anim.snapshots_mut(),
        ) else {
            return Err(MorphError::animation(
                "sub-transform has no snapshots after begin",
            ));
        };
        let mut aligned = [
            s_start.clone(),
            s_target.clone(),
            e_start.clone(),
            e_target.clone(),
        ];
        {
            let [a, b, c, d] = &mut aligned;
            align_all(&mut [&mut live, &mut start_tree, &mut end_tree, a, b, c, d])?;
        }
        ensure_congruent(&[
            ("mobject", &live),
            ("start frame", &start_tree),
            ("end frame", &end_tree),
        ])?;

        let [a, b, c, d] = aligned;
        (*s_start, *s_target, *e_start, *e_target) = (a, b, c, d);
        *borrow_live(self.start_anim.mobject())? = live;
        self.frames = Some((start_tree, end_tree));
        self.interpolate(0.0)?;
        Ok(())
    }

    /// Advance both sub-transforms to `alpha` and blend between them.
    pub fn interpolate(&mut self, alpha: f64) -> MorphResult<&mut Self> {
        let alpha = alpha.clamp(0.0, 1.0);
        let Some((start_tree, end_tree)) = self.frames.as_mut() else {
            return Err(MorphError::animation(
                "TransformAnimations interpolated before begin",
            ));
        };
        self.start_anim.interpolate_into(start_tree, alpha)?;
        self.end_anim.interpolate_into(end_tree, alpha)?;

        let a = self.config.animation.rate_func.apply(alpha);
        let mut live = borrow_live(self.start_anim.mobject())?;
        interpolate_tree(&mut live, start_tree, end_tree, a, &self.path_func)?;
        drop(live);
        Ok(self)
    }

    /// Generic cleanup, then the optional swap of start for end mobject.
    pub fn clean_up_from_scene(&mut self, scene: &mut dyn Scene) -> MorphResult<()> {
        self.generic_clean_up(scene);
        if self.config.replace_mobject_with_target_in_scene {
            scene.remove(self.start_anim.mobject());
            scene.add(self.end_anim.mobject().clone());
        }
        Ok(())
    }
}

impl Animation for TransformAnimations {
    fn config(&self) -> &AnimationConfig {
        &self.config.animation
    }

    fn set_run_time(&mut self, run_time: f64) {
        self.config.animation.run_time = run_time;
        self.start_anim.set_run_time(run_time);
        self.end_anim.set_run_time(run_time);
    }

    fn mobject(&self) -> &SharedMobject {
        self.start_anim.mobject()
    }

    fn begin(&mut self) -> MorphResult<()> {
        TransformAnimations::begin(self)
    }

    fn get_all_mobjects(&self) -> Vec<SharedMobject> {
        let mut all = self.start_anim.get_all_mobjects();
        all.extend(self.end_anim.get_all_mobjects());
        all
    }

    fn interpolate_alpha(&mut self, alpha: f64) -> MorphResult<()> {
        self.interpolate(alpha).map(|_| ())
    }

    fn clean_up_from_scene(&mut self, scene: &mut dyn Scene) -> MorphResult<()> {
        TransformAnimations::clean_up_from_scene(self, scene)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/composite.rs"]
mod tests;
