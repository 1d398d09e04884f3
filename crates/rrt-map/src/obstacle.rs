//! Convex polygonal obstacles.
//!
//! # Orientation
//!
//! Obstacles may be supplied in either winding order.  The constructor
//! records which way the hull turns (`Side::Left` for counter-clockwise,
//! `Side::Right` for clockwise) so that [`minkowski_sum`] can pick outward
//! normals; the point-in-polygon test accepts both orders without consulting
//! it.
//!
//! # Boundary convention
//!
//! A point on an edge or vertex *collides*.  A segment that only touches the
//! hull does not *cross* it ([`Obstacle::path_collides`] reports proper
//! crossings only); [`Map`](crate::Map) combines both tests so grazing
//! contacts are still caught at the endpoints.

use std::f64::consts::TAU;

use rrt_core::{GEOMETRY_EPSILON, Point, Side};

use crate::{GeometryError, GeometryResult};

/// Tolerance on the total turning angle (which must be ±2π for a simple
/// convex polygon).
const TURNING_TOLERANCE: f64 = 1e-6;

// ── Obstacle ──────────────────────────────────────────────────────────────────

/// A convex polygon stored as its ordered hull vertices.  Immutable once
/// constructed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Point>", into = "Vec<Point>")
)]
pub struct Obstacle {
    hull:    Vec<Point>,
    winding: Side,
}

impl Obstacle {
    /// Validate `vertices` as a convex hull and wrap them.
    ///
    /// Every cyclic triple `(v[i], v[i+1], v[i+2])` must turn the same way as
    /// the first one; a collinear triple or a reversal is rejected, as is a
    /// polygon whose turns add up to more than one full revolution (a
    /// pentagram turns consistently but crosses itself).
    pub fn new(vertices: Vec<Point>) -> GeometryResult<Self> {
        let n = vertices.len();
        if n < 3 {
            return Err(GeometryError::TooFewVertices(n));
        }
        if let Some(index) = vertices.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(GeometryError::NonFinite { index });
        }

        let mut winding: Option<Side> = None;
        let mut turning = 0.0;
        for i in 0..n {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            let c = vertices[(i + 2) % n];

            let side = c.line_side_of(a, b);
            match (side, winding) {
                (Side::On, _) => return Err(GeometryError::Collinear { index: (i + 1) % n }),
                (s, None) => winding = Some(s),
                (s, Some(w)) if s != w => {
                    return Err(GeometryError::NotConvex { index: (i + 1) % n });
                }
                _ => {}
            }

            let (e1, e2) = (b - a, c - b);
            turning += e1.cross(e2).atan2(e1.dot(e2));
        }

        if (turning.abs() - TAU).abs() > TURNING_TOLERANCE {
            return Err(GeometryError::SelfIntersecting);
        }

        Ok(Self {
            hull:    vertices,
            // Loop ran at least three times and returned on `On`.
            winding: winding.unwrap_or(Side::Left),
        })
    }

    /// Hull vertices in the order they were supplied.
    pub fn vertices(&self) -> &[Point] {
        &self.hull
    }

    pub fn len(&self) -> usize {
        self.hull.len()
    }

    /// Always `false`; an obstacle has at least three vertices.
    pub fn is_empty(&self) -> bool {
        self.hull.is_empty()
    }

    /// `Side::Left` if the hull is counter-clockwise, `Side::Right` if
    /// clockwise.
    pub fn winding(&self) -> Side {
        self.winding
    }

    /// Directed hull edges `(v[i], v[i+1])`, closing back to `v[0]`.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.hull.len();
        (0..n).map(move |i| (self.hull[i], self.hull[(i + 1) % n]))
    }

    /// `true` if `p` lies inside the hull or on its boundary.
    ///
    /// Inside means "on the same side of every edge".  Both the all-left and
    /// the all-right hypotheses are tested so the answer does not depend on
    /// the winding order; `On` is compatible with either.
    pub fn collides(&self, p: Point) -> bool {
        let mut all_left = true;
        let mut all_right = true;
        for (a, b) in self.edges() {
            match p.line_side_of(a, b) {
                Side::Left => all_right = false,
                Side::Right => all_left = false,
                Side::On => {}
            }
            if !all_left && !all_right {
                return false;
            }
        }
        true
    }

    /// `true` if the segment `p1 – p2` properly crosses any hull edge: the
    /// segment endpoints lie strictly on opposite sides of the edge *and* the
    /// edge endpoints lie strictly on opposite sides of the segment.
    pub fn path_collides(&self, p1: Point, p2: Point) -> bool {
        self.edges().any(|(a, b)| {
            let s1 = p1.line_side_of(a, b);
            let s2 = p2.line_side_of(a, b);
            let s3 = a.line_side_of(p1, p2);
            let s4 = b.line_side_of(p1, p2);
            s1 != Side::On && s2 == s1.opposite() && s3 != Side::On && s4 == s3.opposite()
        })
    }

    /// Axis-aligned bounds as `(min, max)` corners.
    pub fn bounds(&self) -> (Point, Point) {
        self.hull.iter().fold(
            (Point::new(f64::INFINITY, f64::INFINITY), Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY)),
            |(lo, hi), p| {
                (Point::new(lo.x.min(p.x), lo.y.min(p.y)), Point::new(hi.x.max(p.x), hi.y.max(p.y)))
            },
        )
    }
}

impl TryFrom<Vec<Point>> for Obstacle {
    type Error = GeometryError;

    fn try_from(vertices: Vec<Point>) -> GeometryResult<Self> {
        Obstacle::new(vertices)
    }
}

impl From<Obstacle> for Vec<Point> {
    fn from(obstacle: Obstacle) -> Vec<Point> {
        obstacle.hull
    }
}

// ── Minkowski expansion ───────────────────────────────────────────────────────

/// Grow `obstacle` outward by `radius`: the configuration-space obstacle
/// for a disc robot of that radius.
///
/// Each vertex is pushed along the bisector of its two adjacent outward
/// edge normals by `radius / cos(half the turn)`, which keeps every offset
/// edge exactly `radius` away from the original one (a mitred offset).  The
/// hull of the offset points is then recomputed, so the result is convex and
/// counter-clockwise regardless of the input winding.
///
/// A non-positive (or NaN) `radius` returns an unchanged copy.
pub fn minkowski_sum(obstacle: &Obstacle, radius: f64) -> Obstacle {
    if !(radius > 0.0) {
        return obstacle.clone();
    }

    let hull = &obstacle.hull;
    let n = hull.len();

    // Outward normal of a directed edge depends on which side the interior is.
    let outward = |e: Point| -> Point {
        let normal = match obstacle.winding {
            Side::Right => Point::new(-e.y, e.x),
            _ => Point::new(e.y, -e.x),
        };
        normal.normalized().unwrap_or(Point::ORIGIN)
    };

    let offset: Vec<Point> = (0..n)
        .map(|i| {
            let prev = hull[(i + n - 1) % n];
            let cur = hull[i];
            let next = hull[(i + 1) % n];

            let n1 = outward(cur - prev);
            let n2 = outward(next - cur);
            match (n1 + n2).normalized() {
                Some(bisector) => cur + bisector * (radius / bisector.dot(n1)),
                // Antiparallel normals cannot occur on a validated hull.
                None => cur + n1 * radius,
            }
        })
        .collect();

    let hull = convex_hull(offset);
    Obstacle { hull, winding: Side::Left }
}

/// Counter-clockwise convex hull (Andrew's monotone chain) with collinear
/// points dropped.
///
/// Returns the input unchanged (deduplicated and sorted) when fewer than
/// three non-collinear points are available.
pub fn convex_hull(mut points: Vec<Point>) -> Vec<Point> {
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    points.dedup();
    if points.len() < 3 {
        return points;
    }

    let turns_left = |o: Point, a: Point, b: Point| (a - o).cross(b - o) > GEOMETRY_EPSILON;

    let mut lower: Vec<Point> = Vec::with_capacity(points.len());
    for &p in &points {
        while lower.len() >= 2 && !turns_left(lower[lower.len() - 2], lower[lower.len() - 1], p) {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points.iter().rev() {
        while upper.len() >= 2 && !turns_left(upper[upper.len() - 2], upper[upper.len() - 1], p) {
            upper.pop();
        }
        upper.push(p);
    }

    // Last point of each chain is the first point of the other.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}
