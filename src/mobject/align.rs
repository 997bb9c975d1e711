//! Structural alignment: make two mobject trees congruent so they can be zipped node by node.
//!
//! Two trees are congruent when they have the same shape (same child count at every node,
//! recursively) and the same point count at every corresponding node.

use crate::{
    foundation::error::{MorphError, MorphResult},
    mobject::model::Mobject,
};

impl Mobject {
    /// Mutate `self` and `other` until they are congruent.
    ///
    /// Both sides may grow: short child lists are padded with duplicates (or with a
    /// single-point placeholder at the node's center when a side has no children), and short
    /// point lists are stretched by repeating points in order. Neither side ever shrinks, so
    /// the call is symmetric. Fails when one side has no points anywhere in its family but
    /// the other side needs it to grow.
    pub fn align_data(&mut self, other: &mut Mobject) -> MorphResult<()> {
        self.null_point_align(other);
        let n = self.submobjects.len().max(other.submobjects.len());
        self.grow_submobjects(n)?;
        other.grow_submobjects(n)?;
        align_points(self, other);
        for (a, b) in self.submobjects.iter_mut().zip(other.submobjects.iter_mut()) {
            a.align_data(b)?;
        }
        Ok(())
    }

    /// If exactly one side carries points on this node, move them into a child so both
    /// nodes become point-less groups.
    fn null_point_align(&mut self, other: &mut Mobject) {
        if !self.has_points() && other.has_points() {
            other.push_self_into_submobjects();
        } else if self.has_points() && !other.has_points() {
            self.push_self_into_submobjects();
        }
    }

    fn push_self_into_submobjects(&mut self) {
        let child = Mobject {
            name: self.name.clone(),
            points: std::mem::take(&mut self.points),
            color: self.color,
            ..Mobject::default()
        };
        self.submobjects.insert(0, child);
    }

    fn grow_submobjects(&mut self, target: usize) -> MorphResult<()> {
        let curr = self.submobjects.len();
        if curr >= target {
            return Ok(());
        }
        tracing::debug!(name = %self.name, from = curr, to = target, "growing submobjects");
        if curr == 0 {
            let placeholder = self.point_mobject().ok_or_else(|| {
                MorphError::structural(format!(
                    "cannot align empty mobject '{}' with a mobject of {target} submobjects",
                    self.name
                ))
            })?;
            self.submobjects = vec![placeholder; target];
            return Ok(());
        }

        // Spread the duplicates evenly: child i is repeated once per target slot that maps
        // back to it.
        let old = std::mem::take(&mut self.submobjects);
        let mut grown = Vec::with_capacity(target);
        for slot in 0..target {
            grown.push(old[slot * curr / target].clone());
        }
        self.submobjects = grown;
        Ok(())
    }
}

fn align_points(a: &mut Mobject, b: &mut Mobject) {
    let (na, nb) = (a.points.len(), b.points.len());
    if na < nb {
        stretch_points(a, nb);
    } else if nb < na {
        stretch_points(b, na);
    }
}

fn stretch_points(m: &mut Mobject, len: usize) {
    let curr = m.points.len();
    if curr == 0 {
        return;
    }
    tracing::debug!(name = %m.name, from = curr, to = len, "stretching point-set");
    m.points = (0..len).map(|i| m.points[i * curr / len]).collect();
}

/// True when `a` and `b` have the same shape and per-node point counts.
pub fn is_congruent(a: &Mobject, b: &Mobject) -> bool {
    a.points.len() == b.points.len()
        && a.submobjects.len() == b.submobjects.len()
        && a
            .submobjects
            .iter()
            .zip(&b.submobjects)
            .all(|(x, y)| is_congruent(x, y))
}

/// Fail with a structural error unless every tree in `trees` is congruent with the first.
pub fn ensure_congruent(trees: &[(&str, &Mobject)]) -> MorphResult<()> {
    let Some(((first_label, first), rest)) = trees.split_first() else {
        return Ok(());
    };
    for (label, tree) in rest {
        if !is_congruent(first, tree) {
            return Err(MorphError::structural(format!(
                "'{label}' is not congruent with '{first_label}' after alignment \
                 ({} vs {} nodes, {} vs {} points)",
                tree.family().len(),
                first.family().len(),
                tree.family_num_points(),
                first.family_num_points(),
            )));
        }
    }
    Ok(())
}

/// Align every tree in `trees` into one common shape.
///
/// Each round grows the first tree to cover all others, then grows every other tree to match
/// it. Pushing points down into children can reshape the first tree mid-round, so rounds
/// repeat until everything is congruent.
pub fn align_all(trees: &mut [&mut Mobject]) -> MorphResult<()> {
    const MAX_ROUNDS: usize = 8;

    let Some((head, rest)) = trees.split_first_mut() else {
        return Ok(());
    };
    for _ in 0..MAX_ROUNDS {
        for tree in rest.iter_mut() {
            head.align_data(tree)?;
        }
        for tree in rest.iter_mut() {
            tree.align_data(head)?;
        }
        if rest.iter().all(|tree| is_congruent(&**head, &**tree)) {
            return Ok(());
        }
    }
    Err(MorphError::structural(format!(
        "alignment of {} trees did not converge",
        rest.len() + 1
    )))
}

#[cfg(test)]
#[path = "../../tests/unit/mobject/align.rs"]
mod tests;
