use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    foundation::core::{DMat3, Point3, Rgba8Premul},
    foundation::error::{MorphError, MorphResult},
    foundation::math::{Complex, rotation_matrix},
    transform::path::PathFunc,
};

/// Handle to a mobject that is shared between the caller, a scene and running animations.
///
/// Animations mutate the pointee in place on every frame. Holding a `borrow()` across an
/// `interpolate` call panics; that is the caller's responsibility.
pub type SharedMobject = Rc<RefCell<Mobject>>;

/// A node in a tree of drawable primitives: an ordered point-set plus ordered children.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Mobject {
    /// Free-form label, used only for diagnostics.
    #[serde(default)]
    pub name: String,
    /// This node's own point-set, in drawing order.
    #[serde(default)]
    pub points: Vec<Point3>,
    /// Fill color of this node.
    #[serde(default)]
    pub color: Rgba8Premul,
    /// Ordered children.
    #[serde(default)]
    pub submobjects: Vec<Mobject>,
    /// Stashed end state for `MoveToTarget`.
    #[serde(skip)]
    pub target: Option<Box<Mobject>>,
    /// Snapshot taken by [`Mobject::save_state`].
    #[serde(skip)]
    pub saved_state: Option<Box<Mobject>>,
}

impl Mobject {
    /// A leaf carrying `points`.
    pub fn new(points: Vec<Point3>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    /// A point-less node named `Group` holding `submobjects`.
    pub fn group(submobjects: Vec<Mobject>) -> Self {
        Self {
            name: "Group".to_owned(),
            submobjects,
            ..Self::default()
        }
    }

    /// Builder form of setting [`Mobject::name`].
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder form of [`Mobject::set_color`].
    pub fn with_color(mut self, color: Rgba8Premul) -> Self {
        self.set_color(color);
        self
    }

    /// Wrap in a fresh [`SharedMobject`] handle.
    pub fn into_shared(self) -> SharedMobject {
        Rc::new(RefCell::new(self))
    }

    /// Whether this node (not its children) has points.
    pub fn has_points(&self) -> bool {
        !self.points.is_empty()
    }

    /// Number of points on this node only.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Pre-order traversal: self first, then each child's family.
    pub fn family(&self) -> Vec<&Mobject> {
        let mut out = vec![self];
        for sub in &self.submobjects {
            out.extend(sub.family());
        }
        out
    }

    /// Family members that carry points, in pre-order.
    pub fn family_members_with_points(&self) -> Vec<&Mobject> {
        self.family().into_iter().filter(|m| m.has_points()).collect()
    }

    /// Total points across the family.
    pub fn family_num_points(&self) -> usize {
        self.family().iter().map(|m| m.num_points()).sum()
    }

    /// Every point in the family, in pre-order.
    pub fn all_points(&self) -> Vec<Point3> {
        self.family()
            .into_iter()
            .flat_map(|m| m.points.iter().copied())
            .collect()
    }

    fn for_each_family_mut(&mut self, f: &mut dyn FnMut(&mut Mobject)) {
        f(self);
        for sub in &mut self.submobjects {
            sub.for_each_family_mut(f);
        }
    }

    /// Center of the axis-aligned bounding box of every point in the family, or `None` when
    /// the family has no points at all.
    pub fn get_center(&self) -> Option<Point3> {
        let mut iter = self.family().into_iter().flat_map(|m| m.points.iter());
        let first = *iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Some((min + max) * 0.5)
    }

    /// Translate the whole family by `delta`.
    pub fn shift(&mut self, delta: Point3) -> &mut Self {
        self.for_each_family_mut(&mut |m| {
            for p in &mut m.points {
                *p += delta;
            }
        });
        self
    }

    /// Translate so the family center lands on `point`. No-op for an empty family.
    pub fn move_to(&mut self, point: Point3) -> &mut Self {
        if let Some(center) = self.get_center() {
            self.shift(point - center);
        }
        self
    }

    /// Scale about the family center.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        self.scale_about(factor, None)
    }

    /// Scale about `about_point`, or about the family center when `None`.
    pub fn scale_about(&mut self, factor: f64, about_point: Option<Point3>) -> &mut Self {
        let Some(about) = about_point.or_else(|| self.get_center()) else {
            return self;
        };
        self.apply_function(&|p| about + (p - about) * factor)
    }

    /// Rotate by `angle` about `axis` through `about_point` (the family center when `None`).
    pub fn rotate(&mut self, angle: f64, axis: Point3, about_point: Option<Point3>) -> &mut Self {
        let Some(about) = about_point.or_else(|| self.get_center()) else {
            return self;
        };
        let m = rotation_matrix(angle, axis);
        self.apply_function(&|p| about + m * (p - about))
    }

    /// Recolor every family member.
    pub fn set_color(&mut self, color: Rgba8Premul) -> &mut Self {
        self.for_each_family_mut(&mut |m| m.color = color);
        self
    }

    /// Map every family point through `f`.
    pub fn apply_function(&mut self, f: &dyn Fn(Point3) -> Point3) -> &mut Self {
        self.for_each_family_mut(&mut |m| {
            for p in &mut m.points {
                *p = f(*p);
            }
        });
        self
    }

    /// Apply a linear map to every family point, about the origin.
    pub fn apply_matrix(&mut self, matrix: DMat3) -> &mut Self {
        self.apply_function(&|p| matrix * p)
    }

    /// Treat `(x, y)` as `x + iy`, map it through `f`, and keep each point's `z`.
    pub fn apply_complex_function(&mut self, f: &dyn Fn(Complex) -> Complex) -> &mut Self {
        self.apply_function(&|p| {
            let w = f(Complex::from_point(p));
            Point3::new(w.re, w.im, p.z)
        })
    }

    /// Stash a copy of the current state for a later [`Mobject::restore`].
    pub fn save_state(&mut self) -> &mut Self {
        let mut snapshot = self.clone();
        snapshot.saved_state = None;
        snapshot.target = None;
        self.saved_state = Some(Box::new(snapshot));
        self
    }

    /// Return to the last [`Mobject::save_state`] snapshot, keeping `target` and the snapshot
    /// itself. Fails when nothing was saved.
    pub fn restore(&mut self) -> MorphResult<&mut Self> {
        let Some(saved) = self.saved_state.take() else {
            return Err(MorphError::configuration(format!(
                "cannot restore mobject '{}': save_state was never called",
                self.name
            )));
        };
        let target = self.target.take();
        *self = (*saved).clone();
        self.saved_state = Some(saved);
        self.target = target;
        Ok(self)
    }

    /// Stash a copy of the current state as `target` and return it for editing.
    pub fn generate_target(&mut self) -> &mut Mobject {
        let mut copy = self.clone();
        copy.target = None;
        self.target.insert(Box::new(copy))
    }

    /// Overwrite this node's point-set and color with the blend of `start` and `end`.
    ///
    /// Only this node is touched; the transform walks the three trees itself.
    pub fn interpolate(
        &mut self,
        start: &Mobject,
        end: &Mobject,
        alpha: f64,
        path: &PathFunc,
    ) -> MorphResult<&mut Self> {
        if start.points.len() != end.points.len() {
            return Err(MorphError::structural(format!(
                "cannot interpolate between {} and {} points",
                start.points.len(),
                end.points.len()
            )));
        }
        let points = path.apply(&start.points, &end.points, alpha);
        if points.len() != start.points.len() {
            return Err(MorphError::configuration(format!(
                "path function returned {} points for {} inputs",
                points.len(),
                start.points.len()
            )));
        }
        self.points = points;
        self.color = Rgba8Premul::lerp(start.color, end.color, alpha);
        Ok(self)
    }

    /// Single-point placeholder at this family's center, used when growing child lists.
    pub(crate) fn point_mobject(&self) -> Option<Mobject> {
        let center = self.get_center()?;
        Some(Mobject {
            name: format!("{}.point", self.name),
            points: vec![center],
            color: self.color,
            ..Mobject::default()
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mobject/model.rs"]
mod tests;
