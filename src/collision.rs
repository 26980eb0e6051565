//! Separating-axis overlap test for two oriented boxes.
//!
//! Only the four face axes (two per box) are tested, which is sufficient for
//! rectangles. A gap on any of them proves separation; touching boxes count
//! as overlapping.

use crate::config::SatPolicy;
use crate::entities::{Bird, Pipe};
use crate::geometry::{dot_abs, OrientedBox, Vector2};

/// Half-length of `b`'s shadow on `axis` under the given policy.
fn extent(b: &OrientedBox, axis: Vector2, policy: SatPolicy) -> f64 {
    match policy {
        SatPolicy::Textbook => b.projected_radius(axis),
        SatPolicy::Legacy => dot_abs(axis, b.corner_offset()),
    }
}

/// `true` if the two boxes overlap. Symmetric in `a` and `b`.
pub fn boxes_overlap(a: &OrientedBox, b: &OrientedBox, policy: SatPolicy) -> bool {
    let center_delta = b.center - a.center;

    a.axes.iter().chain(b.axes.iter()).all(|&axis| {
        let center_dist = dot_abs(axis, center_delta);
        extent(a, axis, policy) + extent(b, axis, policy) >= center_dist
    })
}

pub fn overlaps(bird: &Bird, pipe: &Pipe, policy: SatPolicy) -> bool {
    boxes_overlap(&bird.compute_box(), &pipe.compute_box(), policy)
}

/// Index of the first pipe the bird overlaps, if any.
pub fn first_hit(bird: &Bird, pipes: &[Pipe], policy: SatPolicy) -> Option<usize> {
    let bird_box = bird.compute_box();
    pipes
        .iter()
        .position(|pipe| boxes_overlap(&bird_box, &pipe.compute_box(), policy))
}
