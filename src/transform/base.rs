use std::cell::RefMut;

use crate::{
    animation::lifecycle::{Animation, AnimationConfig, Scene},
    foundation::error::{MorphError, MorphResult},
    mobject::align::ensure_congruent,
    mobject::model::{Mobject, SharedMobject},
    transform::config::{ConfigUpdate, TransformConfig},
    transform::path::PathFunc,
    transform::strategy::TargetStrategy,
};

/// Where a [`Transform`] is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformState {
    /// Built, not yet begun.
    Constructed,
    /// Snapshots taken, frame 0 rendered.
    Begun,
    /// At least one frame rendered after `begin`.
    Interpolating,
    /// Scene bookkeeping done.
    CleanedUp,
}

/// Working trees captured at `begin`. Both are congruent with the live mobject.
#[derive(Clone, Debug)]
struct Snapshots {
    starting: Mobject,
    target_copy: Mobject,
}

/// Morphs a live mobject into a target computed by a [`TargetStrategy`].
///
/// Lifecycle: [`Transform::begin`] builds the target, aligns it with the live mobject and
/// snapshots the start; [`Transform::interpolate`] then rewrites the live mobject from the two
/// snapshots for any alpha, in any order; [`Transform::clean_up_from_scene`] optionally swaps
/// the live mobject for the caller's target in the scene.
///
/// The live mobject is shared with the caller and mutated in place on every frame.
#[derive(Debug)]
pub struct Transform {
    kind: &'static str,
    config: TransformConfig,
    path_func: PathFunc,
    strategy: TargetStrategy,
    mobject: SharedMobject,
    target_mobject: Option<SharedMobject>,
    snapshots: Option<Snapshots>,
    /// Drive the underlying transform at `1 - alpha`.
    reversed: bool,
    state: TransformState,
}

impl Transform {
    /// Morph `mobject` into `target`. The caller's `target` is copied before alignment and
    /// never mutated.
    pub fn new(mobject: SharedMobject, target: SharedMobject) -> Self {
        Self::from_strategy("Transform", mobject, TargetStrategy::Supplied(target))
    }

    /// A transform named `kind` whose target comes from `strategy`.
    pub fn from_strategy(
        kind: &'static str,
        mobject: SharedMobject,
        strategy: TargetStrategy,
    ) -> Self {
        let target_mobject = match &strategy {
            TargetStrategy::Supplied(t) => Some(t.clone()),
            _ => None,
        };
        let config = TransformConfig::default();
        Self {
            kind,
            path_func: config.resolve_path(),
            config,
            strategy,
            mobject,
            target_mobject,
            snapshots: None,
            reversed: false,
            state: TransformState::Constructed,
        }
    }

    /// Replace the whole configuration and re-resolve the path.
    pub fn with_config(mut self, config: TransformConfig) -> MorphResult<Self> {
        config.validate()?;
        self.path_func = config.resolve_path();
        self.config = config;
        Ok(self)
    }

    /// Edit the configuration in place (variant defaults are already set) and re-resolve
    /// the path.
    pub fn configure(self, f: impl FnOnce(&mut TransformConfig)) -> MorphResult<Self> {
        let mut config = self.config.clone();
        f(&mut config);
        self.with_config(config)
    }

    /// Set variant defaults. Unlike [`Transform::configure`] this skips validation; factories
    /// only write known-good constants here.
    pub(crate) fn with_defaults(mut self, f: impl FnOnce(&mut TransformConfig)) -> Self {
        f(&mut self.config);
        self.path_func = self.config.resolve_path();
        self
    }

    pub(crate) fn reversed(mut self) -> Self {
        self.reversed = !self.reversed;
        self
    }

    /// Variant name, used when no display name is configured.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Full transform settings.
    pub fn transform_config(&self) -> &TransformConfig {
        &self.config
    }

    /// The resolved path.
    pub fn path_func(&self) -> &PathFunc {
        &self.path_func
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TransformState {
        self.state
    }

    /// How the target is computed.
    pub fn strategy(&self) -> &TargetStrategy {
        &self.strategy
    }

    /// The caller-meaningful target: the supplied handle, or the computed target after
    /// `begin`. Never the aligned working copy.
    pub fn target_mobject(&self) -> Option<&SharedMobject> {
        self.target_mobject.as_ref()
    }

    /// The aligned start snapshot, after `begin`.
    pub fn starting_mobject(&self) -> Option<&Mobject> {
        self.snapshots.as_ref().map(|s| &s.starting)
    }

    /// The aligned end snapshot, after `begin`.
    pub fn target_copy(&self) -> Option<&Mobject> {
        self.snapshots.as_ref().map(|s| &s.target_copy)
    }

    pub(crate) fn snapshots_mut(&mut self) -> Option<(&mut Mobject, &mut Mobject)> {
        self.snapshots
            .as_mut()
            .map(|s| (&mut s.starting, &mut s.target_copy))
    }

    /// Runtime reconfiguration. Changing `path_arc` or `path_arc_axis` re-resolves the path;
    /// an explicit path function still wins.
    pub fn update_config(&mut self, update: ConfigUpdate) -> MorphResult<()> {
        if self.config.apply_update(update)? {
            self.path_func = self.config.resolve_path();
            tracing::debug!(kind = self.kind, path = ?self.path_func, "path re-resolved");
        }
        Ok(())
    }

    /// Compute and align the target, snapshot the start and render frame 0. On error the
    /// live mobject is left as it was.
    #[tracing::instrument(skip(self), fields(kind = self.kind))]
    pub fn begin(&mut self) -> MorphResult<()> {
        // Alignment works on a copy; the live mobject is only written once it succeeds.
        let mut working = match &self.strategy {
            TargetStrategy::Cyclic(members) => gather_group(members)?,
            _ => self
                .mobject
                .try_borrow()
                .map_err(|_| MorphError::animation("mobject is mutably borrowed"))?
                .clone(),
        };

        let mut target_copy = self.strategy.create_target(&working)?;
        let computed = (!matches!(self.strategy, TargetStrategy::Supplied(_)))
            .then(|| target_copy.clone());

        working.align_data(&mut target_copy)?;
        let starting = working.clone();
        ensure_congruent(&[
            ("mobject", &working),
            ("starting_mobject", &starting),
            ("target_copy", &target_copy),
        ])?;
        tracing::debug!(
            nodes = starting.family().len(),
            points = starting.family_num_points(),
            "aligned"
        );

        *borrow_live(&self.mobject)? = working;
        if let Some(target) = computed {
            self.target_mobject = Some(target.into_shared());
        }
        self.snapshots = Some(Snapshots {
            starting,
            target_copy,
        });
        self.interpolate(0.0)?;
        self.state = TransformState::Begun;
        Ok(())
    }

    /// Rewrite the live mobject for `alpha` (clamped to `[0, 1]`, then shaped by the rate
    /// function). Pure in the snapshots, so any order of alphas is fine.
    pub fn interpolate(&mut self, alpha: f64) -> MorphResult<&mut Self> {
        {
            let mut live = borrow_live(&self.mobject)?;
            self.interpolate_into(&mut live, alpha)?;
        }
        self.write_back_members()?;
        self.state = TransformState::Interpolating;
        Ok(self)
    }

    /// Write the state at `alpha` into `out`, which must be congruent with the snapshots.
    /// The live mobject is not touched.
    pub fn interpolate_into(&self, out: &mut Mobject, alpha: f64) -> MorphResult<()> {
        let snapshots = self.snapshots.as_ref().ok_or_else(|| {
            MorphError::animation(format!("{} interpolated before begin", self.kind))
        })?;
        let alpha = if self.reversed { 1.0 - alpha } else { alpha };
        let alpha = self.config.animation.rate_func.apply(alpha.clamp(0.0, 1.0));
        tracing::trace!(kind = self.kind, alpha, "interpolate");
        interpolate_tree(
            out,
            &snapshots.starting,
            &snapshots.target_copy,
            alpha,
            &self.path_func,
        )
    }

    /// Cyclic transforms animate a private group; mirror its children into the members.
    fn write_back_members(&self) -> MorphResult<()> {
        let TargetStrategy::Cyclic(members) = &self.strategy else {
            return Ok(());
        };
        let group = self
            .mobject
            .try_borrow()
            .map_err(|_| MorphError::animation("mobject is mutably borrowed"))?;
        for (member, sub) in members.iter().zip(&group.submobjects) {
            *borrow_live(member)? = sub.clone();
        }
        Ok(())
    }

    /// Generic cleanup, then the optional swap of live mobject for target handle.
    #[tracing::instrument(skip(self, scene), fields(kind = self.kind))]
    pub fn clean_up_from_scene(&mut self, scene: &mut dyn Scene) -> MorphResult<()> {
        self.generic_clean_up(scene);
        if self.config.replace_mobject_with_target_in_scene {
            let target = self.target_mobject.clone().ok_or_else(|| {
                MorphError::animation(format!("{} cleaned up before a target existed", self.kind))
            })?;
            scene.remove(&self.mobject);
            scene.add(target);
        }
        self.state = TransformState::CleanedUp;
        Ok(())
    }
}

impl Animation for Transform {
    fn config(&self) -> &AnimationConfig {
        &self.config.animation
    }

    fn set_run_time(&mut self, run_time: f64) {
        self.config.animation.run_time = run_time;
    }

    fn mobject(&self) -> &SharedMobject {
        &self.mobject
    }

    fn begin(&mut self) -> MorphResult<()> {
        Transform::begin(self)
    }

    fn interpolate_alpha(&mut self, alpha: f64) -> MorphResult<()> {
        self.interpolate(alpha).map(|_| ())
    }

    fn clean_up_from_scene(&mut self, scene: &mut dyn Scene) -> MorphResult<()> {
        Transform::clean_up_from_scene(self, scene)
    }

    /// The live mobject, the target handle once one exists, and cyclic members.
    fn get_all_mobjects(&self) -> Vec<SharedMobject> {
        let mut all = vec![self.mobject.clone()];
        all.extend(self.target_mobject.iter().cloned());
        if let TargetStrategy::Cyclic(members) = &self.strategy {
            all.extend(members.iter().cloned());
        }
        all
    }

    fn name(&self) -> String {
        self.config
            .animation
            .name
            .clone()
            .unwrap_or_else(|| self.kind.to_owned())
    }
}

pub(crate) fn borrow_live(m: &SharedMobject) -> MorphResult<RefMut<'_, Mobject>> {
    m.try_borrow_mut()
        .map_err(|_| MorphError::animation("mobject is borrowed elsewhere during a transform"))
}

fn gather_group(members: &[SharedMobject]) -> MorphResult<Mobject> {
    let children = members
        .iter()
        .map(|m| {
            m.try_borrow()
                .map(|m| m.clone())
                .map_err(|_| MorphError::animation("cyclic member is mutably borrowed"))
        })
        .collect::<MorphResult<Vec<_>>>()?;
    Ok(Mobject::group(children))
}

/// Zip three congruent trees node by node and interpolate each live node.
pub(crate) fn interpolate_tree(
    live: &mut Mobject,
    start: &Mobject,
    end: &Mobject,
    alpha: f64,
    path: &PathFunc,
) -> MorphResult<()> {
    let n = live.submobjects.len();
    if start.submobjects.len() != n || end.submobjects.len() != n {
        return Err(MorphError::structural(format!(
            "node '{}' has {n} children but the snapshots have {} and {}",
            live.name,
            start.submobjects.len(),
            end.submobjects.len()
        )));
    }
    live.interpolate(start, end, alpha, path)?;
    for ((l, s), e) in live
        .submobjects
        .iter_mut()
        .zip(&start.submobjects)
        .zip(&end.submobjects)
    {
        interpolate_tree(l, s, e, alpha, path)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/transform/base.rs"]
mod tests;
