//! Path functions: the trajectory a point follows between its start and end positions.

use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;

use crate::foundation::core::{DMat3, Point3};
use crate::foundation::math::{rotation_matrix, unit_axis};

/// Arc angles below this magnitude resolve to a straight path.
pub const STRAIGHT_PATH_THRESHOLD: f64 = 0.01;

/// Caller-supplied path: `(start, end, alpha) -> points`, one output point per input pair.
pub type CustomPathFn = Arc<dyn Fn(&[Point3], &[Point3], f64) -> Vec<Point3> + Send + Sync>;

/// Trajectory followed by every point between its start and end positions.
#[derive(Clone, Default)]
pub enum PathFunc {
    /// Linear interpolation.
    #[default]
    Straight,
    /// Circular motion sweeping `angle` radians about `axis`. Build with [`PathFunc::along_arc`].
    Arc {
        /// Radians swept from start to end.
        angle: f64,
        /// Unit rotation axis.
        axis: Point3,
    },
    /// Caller-supplied trajectory.
    Custom(CustomPathFn),
}

impl fmt::Debug for PathFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Straight => f.write_str("Straight"),
            Self::Arc { angle, axis } => f
                .debug_struct("Arc")
                .field("angle", angle)
                .field("axis", axis)
                .finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl PathFunc {
    /// Arc path sweeping `angle` about `axis`. Near-zero angles yield [`PathFunc::Straight`]
    /// so the arc math never sees a degenerate `tan(0)` denominator; a zero axis means +z.
    pub fn along_arc(angle: f64, axis: Point3) -> Self {
        if angle.abs() < STRAIGHT_PATH_THRESHOLD {
            return Self::Straight;
        }
        Self::Arc {
            angle,
            axis: unit_axis(axis),
        }
    }

    /// Wrap a closure as [`PathFunc::Custom`].
    pub fn custom(
        f: impl Fn(&[Point3], &[Point3], f64) -> Vec<Point3> + Send + Sync + 'static,
    ) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Pick the path for a configuration: an explicit function wins, then a non-zero arc.
    pub fn resolve(explicit: Option<&PathFunc>, arc: f64, axis: Point3) -> Self {
        match explicit {
            Some(p) => p.clone(),
            None => Self::along_arc(arc, axis),
        }
    }

    /// Whether points move along straight lines.
    pub fn is_straight(&self) -> bool {
        matches!(self, Self::Straight)
    }

    /// Positions at `alpha` for each `(start, end)` pair. Shorter input wins on length mismatch;
    /// callers are expected to pass congruent slices.
    pub fn apply(&self, start: &[Point3], end: &[Point3], alpha: f64) -> Vec<Point3> {
        match self {
            Self::Straight => straight_path(start, end, alpha),
            Self::Arc { angle, axis } => arc_path(*angle, *axis, start, end, alpha),
            Self::Custom(f) => f(start, end, alpha),
        }
    }
}

/// Per-pair linear interpolation; exact at both `alpha == 0` and `alpha == 1`.
pub fn straight_path(start: &[Point3], end: &[Point3], alpha: f64) -> Vec<Point3> {
    start
        .iter()
        .zip(end)
        .map(|(s, e)| *s * (1.0 - alpha) + *e * alpha)
        .collect()
}

fn arc_path(
    angle: f64,
    axis: Point3,
    start: &[Point3],
    end: &[Point3],
    alpha: f64,
) -> Vec<Point3> {
    let rot: DMat3 = rotation_matrix(alpha * angle, axis);
    // At half a turn the center is the chord midpoint and the offset term vanishes.
    let half_turn = (angle.abs() - PI).abs() < f64::EPSILON;
    let inv_tan = if half_turn { 0.0 } else { 1.0 / (angle / 2.0).tan() };

    start
        .iter()
        .zip(end)
        .map(|(s, e)| {
            let half = (*e - *s) * 0.5;
            let center = *s + half + axis.cross(half) * inv_tan;
            center + rot * (*s - center)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/transform/path.rs"]
mod tests;
