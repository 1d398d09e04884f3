//! Unit tests for rrt-spatial.
//!
//! KD-tree queries are checked against a brute-force scan and against an
//! `rstar` R-tree built from the same points.

#[cfg(test)]
mod helpers {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use rrt_core::{Point, PointArena, VertexId};
    use rstar::{AABB, PointDistance, RTreeObject};

    use crate::KdTree;

    pub fn rng(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    pub fn random_point(rng: &mut SmallRng) -> Point {
        Point::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0))
    }

    /// Arena and tree filled with `n` random points; the first is the root.
    pub fn random_tree(rng: &mut SmallRng, n: usize) -> (PointArena, KdTree) {
        let mut arena = PointArena::new();
        let root = arena.push(random_point(rng));
        let mut tree = KdTree::new(root);
        for _ in 1..n {
            let p = random_point(rng);
            tree.insert(&mut arena, p);
        }
        (arena, tree)
    }

    /// R-tree entry carrying the vertex it stands for.
    #[derive(Clone, Debug)]
    pub struct Entry {
        pub id:    VertexId,
        pub point: [f64; 2],
    }

    impl RTreeObject for Entry {
        type Envelope = AABB<[f64; 2]>;
        fn envelope(&self) -> Self::Envelope {
            AABB::from_point(self.point)
        }
    }

    impl PointDistance for Entry {
        fn distance_2(&self, point: &[f64; 2]) -> f64 {
            let dx = self.point[0] - point[0];
            let dy = self.point[1] - point[1];
            dx * dx + dy * dy
        }
    }
}

// ── KD-tree ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod kdtree {
    use rrt_core::{Point, PointArena, VertexId};
    use rstar::RTree;

    use super::helpers::{Entry, random_point, random_tree, rng};
    use crate::{Branch, Insertion, KdTree, Lookup};

    fn fixture() -> (PointArena, KdTree) {
        // Root (5, 5); (3, 8) goes left on x, (7, 2) right on x,
        // (4, 6) left on x then left on y.
        let mut arena = PointArena::new();
        let root = arena.push(Point::new(5.0, 5.0));
        let mut tree = KdTree::new(root);
        for p in [(3.0, 8.0), (7.0, 2.0), (4.0, 6.0)] {
            tree.insert(&mut arena, p.into());
        }
        (arena, tree)
    }

    #[test]
    fn new_tree_holds_only_root() {
        let mut arena = PointArena::new();
        let root = arena.push(Point::new(1.0, 2.0));
        let tree = KdTree::new(root);
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.root(), root);
        assert_eq!(tree.nearest_neighbor(&arena, Point::new(100.0, -50.0)), root);
    }

    #[test]
    fn find_reports_existing_point() {
        let (arena, tree) = fixture();
        assert_eq!(tree.find(&arena, Point::new(4.0, 6.0)), Lookup::Exists(VertexId(3)));
        assert!(tree.contains(&arena, Point::new(7.0, 2.0)));
    }

    #[test]
    fn find_reports_vacant_slot() {
        let (arena, tree) = fixture();
        // x 4.5 < 5 → left to (3, 8); y 9 ≥ 8 → right of (3, 8), empty.
        assert_eq!(
            tree.find(&arena, Point::new(4.5, 9.0)),
            Lookup::Vacant { parent: VertexId(1), branch: Branch::Right }
        );
        // x 4 < 5 → (3, 8); y 1 < 8 → (4, 6); x 4 ≥ 4 → right, empty.
        assert_eq!(
            tree.find(&arena, Point::new(4.0, 1.0)),
            Lookup::Vacant { parent: VertexId(3), branch: Branch::Right }
        );
    }

    #[test]
    fn ties_go_right() {
        let (arena, tree) = fixture();
        // Same x as the root but a different y: must descend right.
        assert_eq!(
            tree.find(&arena, Point::new(5.0, 1.0)),
            Lookup::Vacant { parent: VertexId(2), branch: Branch::Left }
        );
    }

    #[test]
    fn duplicate_insert_is_a_noop() {
        let (mut arena, mut tree) = fixture();
        let before = (arena.len(), tree.len());
        let ins = tree.insert(&mut arena, Point::new(3.0, 8.0));
        assert_eq!(ins, Insertion::Existing(VertexId(1)));
        assert!(!ins.is_new());
        assert_eq!((arena.len(), tree.len()), before);
    }

    #[test]
    fn equal_point_across_a_split_is_found() {
        // Root splits on x at 0.  The stored point sits just left of the
        // split, the query just right of it; they are equal within epsilon.
        let mut arena = PointArena::new();
        let root = arena.push(Point::ORIGIN);
        let mut tree = KdTree::new(root);
        let left = tree.insert(&mut arena, Point::new(-2e-10, 5.0)).id();

        let query = Point::new(2e-10, 5.0);
        assert_eq!(query, arena[left]);
        assert!(tree.contains(&arena, query));
        assert_eq!(tree.find(&arena, query), Lookup::Exists(left));

        let before = (arena.len(), tree.len());
        assert_eq!(tree.insert(&mut arena, query), Insertion::Existing(left));
        assert_eq!((arena.len(), tree.len()), before);

        // Clearly on the right: still a plain vacancy under the root.
        assert_eq!(
            tree.find(&arena, Point::new(1.0, 5.0)),
            Lookup::Vacant { parent: root, branch: Branch::Right }
        );
    }

    #[test]
    fn insert_vertex_shares_arena_between_trees() {
        let mut arena = PointArena::new();
        let a = arena.push(Point::new(0.0, 0.0));
        let b = arena.push(Point::new(5.0, 5.0));
        let mut first = KdTree::new(a);
        let mut second = KdTree::new(b);

        let shared = first.insert(&mut arena, Point::new(2.0, 2.0)).id();
        assert_eq!(second.insert_vertex(&arena, shared), Insertion::Inserted(shared));
        assert_eq!(arena.len(), 3);
        assert_eq!(second.nearest_neighbor(&arena, Point::new(1.9, 2.1)), shared);

        // An equal point already indexed wins over the offered id.
        let dup = arena.push(Point::new(2.0, 2.0));
        assert_eq!(second.insert_vertex(&arena, dup), Insertion::Existing(shared));
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn nearest_matches_brute_force() {
        let mut rng = rng(11);
        for n in [1, 2, 10, 200] {
            let (arena, tree) = random_tree(&mut rng, n);
            for _ in 0..200 {
                let q = random_point(&mut rng);
                let got = tree.nearest_neighbor(&arena, q);
                let best = tree
                    .vertices()
                    .map(|v| arena[v].dist_sq(q))
                    .fold(f64::INFINITY, f64::min);
                assert!((arena[got].dist_sq(q) - best).abs() < 1e-12, "n = {n}, q = {q}");
            }
        }
    }

    #[test]
    fn nearest_matches_rtree() {
        let mut rng = rng(12);
        let (arena, tree) = random_tree(&mut rng, 500);
        let rtree = RTree::bulk_load(
            tree.vertices().map(|id| Entry { id, point: arena[id].into() }).collect(),
        );
        for _ in 0..500 {
            let q = random_point(&mut rng);
            let expected = rtree.nearest_neighbor(&q.into()).unwrap();
            let got = tree.nearest_neighbor(&arena, q);
            assert!((arena[got].dist(q) - arena[expected.id].dist(q)).abs() < 1e-12);
        }
    }

    #[test]
    fn radius_matches_brute_force() {
        let mut rng = rng(13);
        let (arena, tree) = random_tree(&mut rng, 300);
        for radius in [0.0, 0.5, 2.0, 7.5, 40.0] {
            for _ in 0..50 {
                let q = random_point(&mut rng);
                let mut got = tree.points_in_radius(&arena, q, radius);
                got.sort_unstable();
                let mut expected: Vec<VertexId> =
                    tree.vertices().filter(|&v| arena[v].dist(q) <= radius).collect();
                expected.sort_unstable();
                assert_eq!(got, expected, "radius {radius}, q = {q}");
            }
        }
    }

    #[test]
    fn radius_matches_rtree() {
        let mut rng = rng(14);
        let (arena, tree) = random_tree(&mut rng, 400);
        let rtree = RTree::bulk_load(
            tree.vertices().map(|id| Entry { id, point: arena[id].into() }).collect(),
        );
        for _ in 0..100 {
            let q = random_point(&mut rng);
            let mut got = tree.points_in_radius(&arena, q, 3.0);
            got.sort_unstable();
            let mut expected: Vec<VertexId> =
                rtree.locate_within_distance(q.into(), 9.0).map(|e| e.id).collect();
            expected.sort_unstable();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn radius_excludes_query_point() {
        let (arena, tree) = fixture();
        let got = tree.points_in_radius(&arena, Point::new(5.0, 5.0), 2.0);
        assert_eq!(got, vec![VertexId(3)]);
    }

    #[test]
    fn collinear_chain_stays_searchable() {
        // Points along a diagonal always go right: a degenerate, deep tree.
        let mut arena = PointArena::new();
        let root = arena.push(Point::ORIGIN);
        let mut tree = KdTree::new(root);
        for i in 1..5_000 {
            let t = f64::from(i) * 0.01;
            tree.insert(&mut arena, Point::new(t, t));
        }
        assert_eq!(tree.depth(), 5_000);
        let near = tree.nearest_neighbor(&arena, Point::new(40.004, 39.996));
        assert_eq!(arena[near], Point::new(40.0, 40.0));
        // Both diagonal neighbours; the query itself is indexed and excluded.
        assert_eq!(tree.points_in_radius(&arena, Point::new(25.0, 25.0), 0.015).len(), 2);
    }
}

// ── Graph ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use rrt_core::{Point, PointArena, VertexId};

    use crate::{Graph, KdTree, SpatialError};

    const A: VertexId = VertexId(0);
    const B: VertexId = VertexId(1);
    const C: VertexId = VertexId(2);

    #[test]
    fn with_root_has_one_vertex() {
        let g = Graph::with_root(A);
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.edge_count(), 0);
        assert!(g.neighbors(A).unwrap().is_empty());
    }

    #[test]
    fn edges_are_symmetric() {
        let mut g = Graph::new();
        assert!(g.add_edge(A, B));
        assert!(g.neighbors(A).unwrap().contains(&B));
        assert!(g.neighbors(B).unwrap().contains(&A));
        assert!(g.has_edge(B, A));
        assert_eq!((g.vertex_count(), g.edge_count()), (2, 1));
    }

    #[test]
    fn repeated_edge_counts_once() {
        let mut g = Graph::new();
        g.add_edge(A, B);
        assert!(!g.add_edge(A, B));
        assert!(!g.add_edge(B, A));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn self_loop_is_ignored() {
        let mut g = Graph::new();
        assert!(!g.add_edge(C, C));
        assert!(g.contains(C));
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.degree(C), 0);
    }

    #[test]
    fn remove_edge_keeps_vertices() {
        let mut g = Graph::new();
        g.add_edge(A, B);
        g.add_edge(B, C);
        assert!(g.remove_edge(B, A));
        assert!(!g.remove_edge(A, B));
        assert_eq!((g.vertex_count(), g.edge_count()), (3, 1));
        assert!(g.neighbors(A).unwrap().is_empty());
        assert_eq!(g.degree(B), 1);
    }

    #[test]
    fn neighbors_of_missing_vertex_errors() {
        let g = Graph::with_root(A);
        assert_eq!(g.neighbors(C).unwrap_err(), SpatialError::VertexNotFound(C));
    }

    #[test]
    fn edges_lists_each_edge_once() {
        let mut g = Graph::new();
        g.add_edge(C, A);
        g.add_edge(A, B);
        let mut edges: Vec<_> = g.edges().collect();
        edges.sort_unstable();
        assert_eq!(edges, vec![(A, B), (A, C)]);
    }

    #[test]
    fn merge_unions_without_duplicates() {
        let mut left = Graph::new();
        left.add_edge(A, B);
        let mut right = Graph::new();
        right.add_edge(B, A);
        right.add_edge(B, C);
        right.add_vertex(VertexId(9));

        left.merge(&right);
        assert_eq!((left.vertex_count(), left.edge_count()), (4, 2));
        assert!(left.has_edge(C, B));
    }

    #[test]
    fn display_is_sorted() {
        let mut g = Graph::new();
        g.add_edge(C, A);
        g.add_edge(A, B);
        assert_eq!(
            g.to_string(),
            "VertexId(0): VertexId(1) VertexId(2)\nVertexId(1): VertexId(0)\nVertexId(2): VertexId(0)\n"
        );
    }

    #[test]
    fn duplicate_sample_leaves_counts_unchanged() {
        let mut arena = PointArena::new();
        let root = arena.push(Point::ORIGIN);
        let mut tree = KdTree::new(root);
        let mut g = Graph::with_root(root);

        for _ in 0..2 {
            let ins = tree.insert(&mut arena, Point::new(0.1, 0.1));
            if ins.is_new() {
                g.add_edge(root, ins.id());
            }
        }
        assert_eq!((g.vertex_count(), g.edge_count()), (2, 1));
        assert_eq!(tree.len(), 2);
    }
}

// ── A* ────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use rrt_core::{Point, PointArena, VertexId};

    use crate::{Graph, SpatialError, a_star, a_star_with, path_cost};

    struct Diamond {
        arena: PointArena,
        graph: Graph,
        init:  VertexId,
        one:   VertexId,
        two:   VertexId,
        three: VertexId,
        med:   VertexId,
    }

    /// init–one–two–three along the x axis plus a detour init–med–three
    /// through (1, 1).  The detour costs √2 + √5 ≈ 3.65, the straight
    /// route 3.
    fn diamond() -> Diamond {
        let mut arena = PointArena::new();
        let init = arena.push(Point::new(0.0, 0.0));
        let one = arena.push(Point::new(1.0, 0.0));
        let two = arena.push(Point::new(2.0, 0.0));
        let three = arena.push(Point::new(3.0, 0.0));
        let med = arena.push(Point::new(1.0, 1.0));

        let mut graph = Graph::new();
        graph.add_edge(init, one);
        graph.add_edge(one, two);
        graph.add_edge(two, three);
        graph.add_edge(init, med);
        graph.add_edge(med, three);
        Diamond { arena, graph, init, one, two, three, med }
    }

    #[test]
    fn picks_cheapest_route() {
        let d = diamond();
        let path = a_star(&d.graph, &d.arena, d.init, d.three).unwrap();
        assert_eq!(path, vec![d.init, d.one, d.two, d.three]);
        assert!((path_cost(&d.arena, &path) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn prefers_detour_once_it_is_cheaper() {
        let mut d = diamond();
        // Cut the straight route's middle; the detour is now the only way.
        d.graph.remove_edge(d.one, d.two);
        let path = a_star(&d.graph, &d.arena, d.init, d.three).unwrap();
        assert_eq!(path, vec![d.init, d.med, d.three]);
        let expected = 2.0_f64.sqrt() + 5.0_f64.sqrt();
        assert!((path_cost(&d.arena, &path) - expected).abs() < 1e-12);
    }

    #[test]
    fn zero_heuristic_agrees() {
        let d = diamond();
        let path = a_star_with(&d.graph, &d.arena, d.init, d.three, |_, _| 0.0).unwrap();
        assert_eq!(path, vec![d.init, d.one, d.two, d.three]);
    }

    #[test]
    fn start_equals_target() {
        let d = diamond();
        assert_eq!(a_star(&d.graph, &d.arena, d.med, d.med).unwrap(), vec![d.med]);
    }

    #[test]
    fn disconnected_target_is_no_path() {
        let mut d = diamond();
        let island = d.arena.push(Point::new(9.0, 9.0));
        d.graph.add_vertex(island);
        assert_eq!(
            a_star(&d.graph, &d.arena, d.init, island).unwrap_err(),
            SpatialError::NoPath { from: d.init, to: island }
        );
    }

    #[test]
    fn missing_vertex_is_reported() {
        let mut d = diamond();
        let stray = d.arena.push(Point::new(-1.0, 0.0));
        assert_eq!(
            a_star(&d.graph, &d.arena, stray, d.three).unwrap_err(),
            SpatialError::VertexNotFound(stray)
        );
    }

    #[test]
    fn path_cost_of_short_paths_is_zero() {
        let d = diamond();
        assert_eq!(path_cost(&d.arena, &[]), 0.0);
        assert_eq!(path_cost(&d.arena, &[d.two]), 0.0);
    }
}
