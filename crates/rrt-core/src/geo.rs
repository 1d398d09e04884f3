//! Planar point type and the orientation predicate every geometric query in
//! the workspace is built on.
//!
//! `Point` uses `f64` throughout.  Comparisons that feed combinatorial
//! decisions (equality, left/right tests) go through [`GEOMETRY_EPSILON`] so
//! that nearly-collinear inputs are reported as `On` rather than flipping
//! between `Left` and `Right` on rounding noise.

use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

/// Absolute tolerance for coordinate equality and the orientation test.
pub const GEOMETRY_EPSILON: f64 = 1e-9;

// ── Side ──────────────────────────────────────────────────────────────────────

/// Where a point lies relative to the directed line `A → B`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Left,
    On,
    Right,
}

impl Side {
    /// `Left` ↔ `Right`; `On` is its own opposite.
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::On => Side::On,
        }
    }
}

// ── Point ─────────────────────────────────────────────────────────────────────

/// A 2-D configuration (or vector) with `f64` coordinates.
///
/// Equality is epsilon-tolerant: two points are equal when both coordinates
/// differ by at most [`GEOMETRY_EPSILON`].  This relation is not transitive,
/// so `Point` implements neither `Eq` nor `Hash`; use
/// [`VertexId`](crate::VertexId) when identity is needed.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Number of coordinates; the KD-tree splits on `depth % DIMS`.
    pub const DIMS: usize = 2;

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate `dim` (0 = x, 1 = y).
    ///
    /// # Panics
    /// Panics if `dim >= 2`.
    #[inline]
    pub fn at(self, dim: usize) -> f64 {
        match dim {
            0 => self.x,
            1 => self.y,
            _ => panic!("Point has 2 dimensions, got index {dim}"),
        }
    }

    #[inline]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3-D cross product `self × other`.
    #[inline]
    pub fn cross(self, other: Point) -> f64 {
        self.x * other.y - other.x * self.y
    }

    #[inline]
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Squared Euclidean distance; cheaper than [`dist`](Self::dist) for
    /// comparisons.
    #[inline]
    pub fn dist_sq(self, other: Point) -> f64 {
        let d = other - self;
        d.dot(d)
    }

    /// Euclidean distance.
    #[inline]
    pub fn dist(self, other: Point) -> f64 {
        self.dist_sq(other).sqrt()
    }

    /// Heading of the vector `self → other`, in radians within `(-π, π]`.
    #[inline]
    pub fn angle(self, other: Point) -> f64 {
        let d = other - self;
        d.y.atan2(d.x)
    }

    /// Unit vector in the same direction, or `None` for a (near-)zero vector.
    pub fn normalized(self) -> Option<Point> {
        let n = self.norm();
        (n > GEOMETRY_EPSILON).then(|| self * (1.0 / n))
    }

    /// Side of the directed line `a → b` on which `self` lies.
    ///
    /// Sign of `(b − a) × (self − a)`: positive is `Left`, negative is
    /// `Right`, and anything within [`GEOMETRY_EPSILON`] of zero is `On`.
    pub fn line_side_of(self, a: Point, b: Point) -> Side {
        let cross = (b - a).cross(self - a);
        if cross > GEOMETRY_EPSILON {
            Side::Left
        } else if cross < -GEOMETRY_EPSILON {
            Side::Right
        } else {
            Side::On
        }
    }

    /// The point at distance `step` from `self` along the heading to
    /// `target`.  Does not clamp: callers decide when `target` is close
    /// enough to return it verbatim.
    #[inline]
    pub fn toward(self, target: Point, step: f64) -> Point {
        let theta = self.angle(target);
        Point::new(self.x + step * theta.cos(), self.y + step * theta.sin())
    }

    /// Midpoint of the segment `self – other`.
    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Point) -> bool {
        (self.x - other.x).abs() <= GEOMETRY_EPSILON && (self.y - other.y).abs() <= GEOMETRY_EPSILON
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Index<usize> for Point {
    type Output = f64;
    fn index(&self, dim: usize) -> &f64 {
        match dim {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Point has 2 dimensions, got index {dim}"),
        }
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Point {
        Point::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    #[inline]
    fn from(p: Point) -> [f64; 2] {
        [p.x, p.y]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
