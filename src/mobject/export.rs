//! Hand-off to 2D renderers: project a mobject family onto the `z = 0` plane.

use kurbo::{BezPath, Point};

use crate::mobject::model::Mobject;

impl Mobject {
    /// One open polyline subpath per family member with points, in pre-order. `z` is dropped.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for member in self.family_members_with_points() {
            let mut pts = member.points.iter().map(|p| Point::new(p.x, p.y));
            if let Some(first) = pts.next() {
                path.move_to(first);
                for p in pts {
                    path.line_to(p);
                }
            }
        }
        path
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mobject/export.rs"]
mod tests;
