use crate::{
    animation::lifecycle::AnimationConfig,
    animation::rate::RateFunc,
    foundation::core::{OUT, Point3},
    foundation::error::{MorphError, MorphResult},
    transform::path::PathFunc,
};

/// Fully specified transform settings.
///
/// Path precedence: `path_func` when set, otherwise an arc of `path_arc` radians about
/// `path_arc_axis`, where a (near) zero arc always means a straight path.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Timing and cleanup settings.
    #[serde(flatten)]
    pub animation: AnimationConfig,
    /// Radians swept by every point; zero means straight.
    pub path_arc: f64,
    /// Axis for `path_arc`.
    pub path_arc_axis: Point3,
    /// Explicit path, overriding the arc settings. Not serializable.
    #[serde(skip)]
    pub path_func: Option<PathFunc>,
    /// Swap the live mobject for the target handle in the scene on cleanup.
    pub replace_mobject_with_target_in_scene: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            animation: AnimationConfig::default(),
            path_arc: 0.0,
            path_arc_axis: OUT,
            path_func: None,
            replace_mobject_with_target_in_scene: false,
        }
    }
}

impl TransformConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(s: &str) -> MorphResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| MorphError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check run time and arc settings.
    pub fn validate(&self) -> MorphResult<()> {
        self.animation.validate()?;
        if !self.path_arc.is_finite() {
            return Err(MorphError::configuration("path_arc must be finite"));
        }
        if !self.path_arc_axis.is_finite() {
            return Err(MorphError::configuration("path_arc_axis must be finite"));
        }
        Ok(())
    }

    /// The path these settings select.
    pub fn resolve_path(&self) -> PathFunc {
        PathFunc::resolve(self.path_func.as_ref(), self.path_arc, self.path_arc_axis)
    }

    /// Builder form of setting `path_arc`.
    pub fn with_path_arc(mut self, angle: f64) -> Self {
        self.path_arc = angle;
        self
    }

    /// Builder form of setting `path_arc_axis`.
    pub fn with_path_arc_axis(mut self, axis: Point3) -> Self {
        self.path_arc_axis = axis;
        self
    }

    /// Builder form of setting an explicit path.
    pub fn with_path_func(mut self, path: PathFunc) -> Self {
        self.path_func = Some(path);
        self
    }

    /// Builder form of setting the run time.
    pub fn with_run_time(mut self, run_time: f64) -> Self {
        self.animation.run_time = run_time;
        self
    }

    /// Builder form of setting the rate function.
    pub fn with_rate_func(mut self, rate_func: RateFunc) -> Self {
        self.animation.rate_func = rate_func;
        self
    }

    /// Builder form of setting the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.animation.name = Some(name.into());
        self
    }

    /// Enable scene replacement on cleanup.
    pub fn replacing(mut self) -> Self {
        self.replace_mobject_with_target_in_scene = true;
        self
    }

    /// Apply a runtime update. Returns whether the path needs re-resolving.
    pub fn apply_update(&mut self, update: ConfigUpdate) -> MorphResult<bool> {
        let mut next = self.clone();
        let path_changed = update.path_arc.is_some() || update.path_arc_axis.is_some();
        if let Some(arc) = update.path_arc {
            next.path_arc = arc;
        }
        if let Some(axis) = update.path_arc_axis {
            next.path_arc_axis = axis;
        }
        if let Some(run_time) = update.run_time {
            next.animation.run_time = run_time;
        }
        if let Some(rate_func) = update.rate_func {
            next.animation.rate_func = rate_func;
        }
        next.validate()?;
        *self = next;
        Ok(path_changed)
    }
}

/// Partial reconfiguration applied to a constructed transform.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigUpdate {
    /// New arc angle.
    pub path_arc: Option<f64>,
    /// New arc axis.
    pub path_arc_axis: Option<Point3>,
    /// New run time.
    pub run_time: Option<f64>,
    /// New rate function.
    pub rate_func: Option<RateFunc>,
}

impl ConfigUpdate {
    /// An update that only changes the arc angle.
    pub fn path_arc(angle: f64) -> Self {
        Self {
            path_arc: Some(angle),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/config.rs"]
mod tests;
