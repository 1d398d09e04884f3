//! Undirected roadmap graph over arena vertices.
//!
//! Adjacency is a hash map of hash sets, so adding an edge that already
//! exists is a no-op and both directions are always present together.
//! Vertex and edge counts are kept as running totals.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

use rrt_core::VertexId;

use crate::{SpatialError, SpatialResult};

/// Undirected graph without self-loops or parallel edges.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adjacency:  FxHashMap<VertexId, FxHashSet<VertexId>>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// A graph containing the single isolated vertex `root`.
    pub fn with_root(root: VertexId) -> Self {
        let mut graph = Self::new();
        graph.add_vertex(root);
        graph
    }

    /// Insert an isolated vertex.  Returns `false` if it was already present.
    pub fn add_vertex(&mut self, v: VertexId) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.adjacency.insert(v, FxHashSet::default());
        true
    }

    /// Connect `a` and `b`, adding either vertex if missing.
    ///
    /// Returns `true` only when the edge is new; the edge count is bumped in
    /// that case alone.  A self-loop request adds the vertex and no edge.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        if a == b {
            self.add_vertex(a);
            return false;
        }
        let inserted = self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        if inserted {
            self.edge_count += 1;
        }
        inserted
    }

    /// Disconnect `a` and `b`.  Both vertices stay in the graph.  Returns
    /// `false` if there was no such edge.
    pub fn remove_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        let removed = self.adjacency.get_mut(&a).is_some_and(|s| s.remove(&b));
        if removed {
            if let Some(s) = self.adjacency.get_mut(&b) {
                s.remove(&a);
            }
            self.edge_count -= 1;
        }
        removed
    }

    /// Adjacent vertices of `v`.
    pub fn neighbors(&self, v: VertexId) -> SpatialResult<&FxHashSet<VertexId>> {
        self.adjacency.get(&v).ok_or(SpatialError::VertexNotFound(v))
    }

    pub fn degree(&self, v: VertexId) -> usize {
        self.adjacency.get(&v).map_or(0, FxHashSet::len)
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.adjacency.contains_key(&v)
    }

    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.adjacency.get(&a).is_some_and(|s| s.contains(&b))
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Vertices in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Each undirected edge once, as `(lower id, higher id)`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&a, adj)| adj.iter().filter(move |&&b| a < b).map(move |&b| (a, b)))
    }

    /// Union `other` into `self`.  Shared vertices and edges are not
    /// duplicated.
    pub fn merge(&mut self, other: &Graph) {
        for (&v, adj) in &other.adjacency {
            self.add_vertex(v);
            for &u in adj {
                self.add_edge(v, u);
            }
        }
    }
}

impl fmt::Display for Graph {
    /// One line per vertex, sorted by id: `VertexId(3): VertexId(1) VertexId(7)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vertices: Vec<_> = self.adjacency.keys().copied().collect();
        vertices.sort_unstable();
        for v in vertices {
            write!(f, "{v}:")?;
            let mut adj: Vec<_> = self.adjacency[&v].iter().copied().collect();
            adj.sort_unstable();
            for u in adj {
                write!(f, " {u}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
