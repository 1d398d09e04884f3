//! Step primitive and free-space sampling shared by both planners.

use rrt_core::{Point, PlannerRng, VertexId};
use rrt_map::Map;

/// Draws per call to [`sample_free`] before giving up.
pub const MAX_SAMPLE_ATTEMPTS: usize = 1_000;

/// Outcome of [`steer`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Step {
    /// The target was within one step and is returned verbatim.
    Reached(Point),
    /// A point exactly one step from `near` toward the target.
    Advanced(Point),
}

impl Step {
    #[inline]
    pub fn point(self) -> Point {
        match self {
            Step::Reached(p) | Step::Advanced(p) => p,
        }
    }

    #[inline]
    pub fn is_reached(self) -> bool {
        matches!(self, Step::Reached(_))
    }
}

/// Move at most `epsilon` from `near` toward `target`.
///
/// Returns `Reached(target)` when `target` is no farther than `epsilon`;
/// this distance rule is the single definition of "reached" both planners
/// use.
pub fn steer(near: Point, target: Point, epsilon: f64) -> Step {
    if near.dist(target) <= epsilon {
        Step::Reached(target)
    } else {
        Step::Advanced(near.toward(target, epsilon))
    }
}

/// Outcome of extending a tree one step toward a target.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Extension {
    /// The tree now contains (a vertex equal to) the target.
    Reached(VertexId),
    /// A new vertex one step closer to the target was added.
    Advanced(VertexId),
    /// The step collided, or made no progress; nothing was added.
    Trapped,
}

impl Extension {
    #[inline]
    pub fn vertex(self) -> Option<VertexId> {
        match self {
            Extension::Reached(v) | Extension::Advanced(v) => Some(v),
            Extension::Trapped => None,
        }
    }
}

/// Uniform sample from the map's bounds, rejected until it lands in
/// freespace.
///
/// Returns `None` after [`MAX_SAMPLE_ATTEMPTS`] rejections, or immediately
/// if the bounds are empty.
pub fn sample_free(map: &Map, rng: &mut PlannerRng) -> Option<Point> {
    let (w, h) = (map.width(), map.height());
    if !(w > 0.0 && h > 0.0) {
        return None;
    }
    (0..MAX_SAMPLE_ATTEMPTS)
        .map(|_| Point::new(rng.gen_range(-w..w), rng.gen_range(-h..h)))
        .find(|&p| map.is_freespace(p))
}
