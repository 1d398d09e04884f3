//! Two-dimensional KD-tree over arena vertices.
//!
//! # Layout
//!
//! Nodes live in a `Vec` in insertion order; child links are indices into
//! that `Vec`.  Node 0 is the root, supplied at construction, so the tree is
//! never empty and [`KdTree::nearest_neighbor`] is total.
//!
//! # Invariant
//!
//! A node at depth `d` splits on coordinate `d % 2`.  Every point in its left
//! subtree has a strictly smaller coordinate on that axis; ties go right.
//! Both queries rely on this to skip subtrees whose splitting line is
//! farther away than the best candidate found so far.  Point equality is
//! epsilon-tolerant, so lookups also cross a split that lies within
//! [`GEOMETRY_EPSILON`] of the query.
//!
//! # Traversal
//!
//! The queries use an explicit stack rather than recursion: sampling along a
//! straight line (as RRT-Connect's connect step does) produces long
//! one-sided chains, and the tree depth is not bounded by `log n`.

use rrt_core::{GEOMETRY_EPSILON, Point, PointArena, VertexId};

type NodeIndex = usize;

const ROOT: NodeIndex = 0;

#[derive(Clone, Debug)]
struct KdNode {
    vertex: VertexId,
    left:   Option<NodeIndex>,
    right:  Option<NodeIndex>,
}

/// Child slot of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Branch {
    Left,
    Right,
}

/// Result of [`KdTree::find`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// The point is already in the tree as this vertex.
    Exists(VertexId),
    /// The point is absent; it would be attached under `parent` on `branch`.
    Vacant { parent: VertexId, branch: Branch },
}

/// Result of an insertion.  Inserting a point that is already present is
/// not an error: duplicate samples are expected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Insertion {
    Inserted(VertexId),
    Existing(VertexId),
}

impl Insertion {
    /// The vertex now representing the point, new or not.
    #[inline]
    pub fn id(self) -> VertexId {
        match self {
            Insertion::Inserted(id) | Insertion::Existing(id) => id,
        }
    }

    #[inline]
    pub fn is_new(self) -> bool {
        matches!(self, Insertion::Inserted(_))
    }
}

/// Spatial index over a subset of the vertices of a [`PointArena`].
///
/// The arena is passed to every call instead of being borrowed for the
/// tree's lifetime so that two trees (RRT-Connect) can share one arena while
/// it keeps growing.
#[derive(Clone, Debug)]
pub struct KdTree {
    nodes: Vec<KdNode>,
}

impl KdTree {
    /// A tree containing only `root`.
    pub fn new(root: VertexId) -> Self {
        Self::with_capacity(root, 1)
    }

    pub fn with_capacity(root: VertexId, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(KdNode { vertex: root, left: None, right: None });
        Self { nodes }
    }

    pub fn root(&self) -> VertexId {
        self.nodes[ROOT].vertex
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; the root is present from construction.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.nodes.iter().map(|n| n.vertex)
    }

    // ── Lookup & insertion ────────────────────────────────────────────────

    /// The indexed vertex equal to `p`, if any.
    ///
    /// Equality is epsilon-tolerant, so an equal vertex can lie on the far
    /// side of a split that `p` is within epsilon of.  Both sides are
    /// searched in that case; otherwise this is a single descent.
    fn find_equal(&self, arena: &PointArena, p: Point) -> Option<VertexId> {
        let mut stack: Vec<(NodeIndex, usize)> = vec![(ROOT, 0)];
        while let Some((index, depth)) = stack.pop() {
            let node = &self.nodes[index];
            let here = arena[node.vertex];
            if here == p {
                return Some(node.vertex);
            }

            let dim = depth % Point::DIMS;
            let diff = p.at(dim) - here.at(dim);
            if let Some(left) = node.left
                && diff < GEOMETRY_EPSILON
            {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right
                && diff >= -GEOMETRY_EPSILON
            {
                stack.push((right, depth + 1));
            }
        }
        None
    }

    /// Descend from the root by the split rule to the empty child slot `p`
    /// would occupy.
    fn slot_for(&self, arena: &PointArena, p: Point) -> (NodeIndex, Branch) {
        let mut current = ROOT;
        let mut depth = 0;
        loop {
            let node = &self.nodes[current];
            let here = arena[node.vertex];

            let dim = depth % Point::DIMS;
            let (branch, child) = if p.at(dim) < here.at(dim) {
                (Branch::Left, node.left)
            } else {
                (Branch::Right, node.right)
            };

            match child {
                Some(next) => {
                    current = next;
                    depth += 1;
                }
                None => return (current, branch),
            }
        }
    }

    /// Whether `p` is already indexed, and if not, where it would go.
    pub fn find(&self, arena: &PointArena, p: Point) -> Lookup {
        if let Some(id) = self.find_equal(arena, p) {
            return Lookup::Exists(id);
        }
        let (node, branch) = self.slot_for(arena, p);
        Lookup::Vacant { parent: self.nodes[node].vertex, branch }
    }

    pub fn contains(&self, arena: &PointArena, p: Point) -> bool {
        self.find_equal(arena, p).is_some()
    }

    fn attach(&mut self, parent: NodeIndex, branch: Branch, vertex: VertexId) {
        let index = self.nodes.len();
        self.nodes.push(KdNode { vertex, left: None, right: None });
        let slot = match branch {
            Branch::Left => &mut self.nodes[parent].left,
            Branch::Right => &mut self.nodes[parent].right,
        };
        debug_assert!(slot.is_none(), "KD-tree slot already occupied");
        *slot = Some(index);
    }

    /// Index `p`, allocating it in `arena` only if it is not already present.
    pub fn insert(&mut self, arena: &mut PointArena, p: Point) -> Insertion {
        if let Some(id) = self.find_equal(arena, p) {
            return Insertion::Existing(id);
        }
        let (node, branch) = self.slot_for(arena, p);
        let id = arena.push(p);
        self.attach(node, branch, id);
        Insertion::Inserted(id)
    }

    /// Index a vertex that already lives in `arena` (e.g. one shared with
    /// another tree).  If an equal point is already indexed, that vertex is
    /// returned instead and `id` is not added.
    pub fn insert_vertex(&mut self, arena: &PointArena, id: VertexId) -> Insertion {
        let p = arena[id];
        if let Some(existing) = self.find_equal(arena, p) {
            return Insertion::Existing(existing);
        }
        let (node, branch) = self.slot_for(arena, p);
        self.attach(node, branch, id);
        Insertion::Inserted(id)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The indexed vertex closest to `q` (Euclidean).
    ///
    /// Branch and bound: descend the side of each split that contains `q`
    /// first, and visit the other side only when the splitting line is
    /// closer to `q` than the best vertex found so far.
    pub fn nearest_neighbor(&self, arena: &PointArena, q: Point) -> VertexId {
        let root = &self.nodes[ROOT];
        let mut best = (root.vertex, arena[root.vertex].dist_sq(q));

        // (node, depth, squared distance from q to the split that led here)
        let mut stack: Vec<(NodeIndex, usize, f64)> = vec![(ROOT, 0, 0.0)];
        while let Some((index, depth, plane_sq)) = stack.pop() {
            if plane_sq >= best.1 {
                continue;
            }
            let node = &self.nodes[index];
            let here = arena[node.vertex];

            let d = here.dist_sq(q);
            if d < best.1 {
                best = (node.vertex, d);
            }

            let dim = depth % Point::DIMS;
            let diff = q.at(dim) - here.at(dim);
            let (near, far) = if diff < 0.0 { (node.left, node.right) } else { (node.right, node.left) };

            // Far side first so the near side is popped (and tightens `best`) first.
            if let Some(far) = far {
                stack.push((far, depth + 1, diff * diff));
            }
            if let Some(near) = near {
                stack.push((near, depth + 1, 0.0));
            }
        }
        best.0
    }

    /// Every indexed vertex within `radius` of `q` (inclusive), excluding a
    /// vertex equal to `q` itself.  Each vertex appears at most once; order
    /// is unspecified.
    pub fn points_in_radius(&self, arena: &PointArena, q: Point, radius: f64) -> Vec<VertexId> {
        let r_sq = radius * radius;
        let mut found = Vec::new();

        let mut stack: Vec<(NodeIndex, usize)> = vec![(ROOT, 0)];
        while let Some((index, depth)) = stack.pop() {
            let node = &self.nodes[index];
            let here = arena[node.vertex];

            if here.dist_sq(q) <= r_sq && here != q {
                found.push(node.vertex);
            }

            let dim = depth % Point::DIMS;
            let diff = q.at(dim) - here.at(dim);
            let (near, far) = if diff < 0.0 { (node.left, node.right) } else { (node.right, node.left) };

            if let Some(near) = near {
                stack.push((near, depth + 1));
            }
            if let Some(far) = far
                && diff * diff <= r_sq
            {
                stack.push((far, depth + 1));
            }
        }
        found
    }

    /// Length of the longest root-to-leaf path, counted in nodes.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(ROOT, 1usize)];
        while let Some((index, d)) = stack.pop() {
            deepest = deepest.max(d);
            let node = &self.nodes[index];
            stack.extend(node.left.map(|c| (c, d + 1)));
            stack.extend(node.right.map(|c| (c, d + 1)));
        }
        deepest
    }
}
