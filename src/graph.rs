//! A directed graph over any hashable vertex type, with an iterative
//! depth-first topological sort.
//!
//! Edges point from a vertex to the vertices it *follows*: an edge `u -> v`
//! means `v` must come before `u` in the sorted output. The sort walks those
//! edges and emits every vertex only after everything it follows has already
//! been emitted.

use std::collections::{HashMap, HashSet};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

use joinery::prelude::*;

use crate::error::MissingVertex;

#[derive(Debug, Clone)]
pub struct Graph<V> {
    edges: HashMap<V, Vec<V>>,

    // Keys of `edges`, in the order they were first added. The sort starts
    // its searches in this order, so it decides which of several valid
    // orderings comes out.
    order: Vec<V>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Graph {
            edges: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<V: Eq + Hash + Clone> Graph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `vertex` with no outgoing edges. Does nothing if it's already
    /// present.
    pub fn add_vertex(&mut self, vertex: V) {
        if !self.contains(&vertex) {
            self.order.push(vertex.clone());
            self.edges.insert(vertex, Vec::new());
        }
    }

    /// Append `to` to the successor list of `from`. `from` must already be a
    /// vertex. Duplicate edges are kept; the sort tolerates them.
    pub fn add_edge(&mut self, from: V, to: V) -> Result<(), MissingVertex<V>>
    where
        V: Debug,
    {
        match self.edges.get_mut(&from) {
            Some(successors) => {
                successors.push(to);
                Ok(())
            }
            None => Err(MissingVertex(from)),
        }
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.edges.contains_key(vertex)
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.order.iter()
    }

    /// The direct successors of `vertex`, in the order their edges were
    /// added. Unknown vertices have none.
    pub fn successors(&self, vertex: &V) -> &[V] {
        self.edges.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Order the vertices so that for every edge `u -> v`, `v` comes before
    /// `u`.
    ///
    /// This is a depth-first search driven by an explicit stack, so very long
    /// chains don't exhaust the call stack. A vertex stays on the stack while
    /// its successors are explored above it, and is only emitted once it
    /// surfaces again with everything above it finished.
    ///
    /// Cycles don't stop the sort. Every vertex is still emitted exactly once,
    /// but at least one edge of each cycle will be violated; see
    /// [`violations`](Graph::violations).
    pub fn topological_sort(&self) -> Vec<V> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut sorted = Vec::with_capacity(self.order.len());

        let mut discovered: HashSet<&V> = HashSet::with_capacity(self.order.len());
        let mut processed: HashSet<&V> = HashSet::with_capacity(self.order.len());
        let mut stack: Vec<&V> = Vec::new();

        for start in &self.order {
            if discovered.contains(start) {
                continue;
            }

            stack.push(start);

            while let Some(&top) = stack.last() {
                if discovered.insert(top) {
                    stack.extend(self.successors(top));
                } else {
                    stack.pop();
                    if processed.insert(top) {
                        sorted.push(top.clone());
                    }
                }
            }
        }

        sorted
    }

    /// Every edge `(u, v)` that `sorted` breaks, either because `v` doesn't
    /// come before `u` or because one of them is missing from it. Empty for
    /// any output of [`topological_sort`](Graph::topological_sort) on an
    /// acyclic graph.
    pub fn violations(&self, sorted: &[V]) -> Vec<(V, V)> {
        let position: HashMap<&V, usize> = sorted
            .iter()
            .enumerate()
            .map(|(index, vertex)| (vertex, index))
            .collect();

        self.order
            .iter()
            .flat_map(|from| self.successors(from).iter().map(move |to| (from, to)))
            .filter(|(from, to)| match (position.get(from), position.get(to)) {
                (Some(from_pos), Some(to_pos)) => to_pos >= from_pos,
                _ => true,
            })
            .map(|(from, to)| (from.clone(), to.clone()))
            .collect()
    }
}

/// Renders as `{a=[], b=[a], c=[b, a]}`: each vertex with its successors.
impl<V: Display + Eq + Hash> Display for Graph<V> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{{")?;

        for (index, vertex) in self.order.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            let successors = self.edges.get(vertex).map(Vec::as_slice).unwrap_or(&[]);
            write!(f, "{}=[{}]", vertex, successors.iter().join_with(", "))?;
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(vertices: &[char], edges: &[(char, char)]) -> Graph<char> {
        let mut graph = Graph::new();
        vertices.iter().for_each(|&v| graph.add_vertex(v));
        for &(from, to) in edges {
            graph.add_edge(from, to).unwrap();
        }
        graph
    }

    #[test]
    fn add_vertex_is_idempotent() {
        let mut g = graph(&['a', 'b'], &[('b', 'a')]);
        g.add_vertex('b');
        g.add_vertex('a');

        assert_eq!(g.len(), 2);
        assert_eq!(g.vertices().cloned().collect::<Vec<_>>(), vec!['a', 'b']);
        assert_eq!(g.successors(&'b'), &['a']);
    }

    #[test]
    fn add_edge_requires_source_vertex() {
        let mut g = graph(&['a'], &[]);

        assert_eq!(g.add_edge('z', 'a'), Err(MissingVertex('z')));
        assert_eq!(g.add_edge('a', 'z'), Ok(()));
        assert_eq!(g.successors(&'a'), &['z']);
        assert!(!g.contains(&'z'));
    }

    #[test]
    fn contains_only_added_vertices() {
        let mut g = graph(&['a'], &[('a', 'b')]);

        assert!(g.contains(&'a'));
        assert!(!g.contains(&'b'));

        g.add_vertex('b');
        assert!(g.contains(&'b'));
        assert_eq!(g.vertices().cloned().collect::<Vec<_>>(), vec!['a', 'b']);
    }

    #[test]
    fn empty_graph_sorts_to_nothing() {
        let g: Graph<char> = Graph::new();
        assert!(g.is_empty());
        assert!(g.topological_sort().is_empty());
    }

    #[test]
    fn unconnected_vertices_keep_insertion_order() {
        let g = graph(&['q', 'a', 'm'], &[]);
        assert_eq!(g.topological_sort(), vec!['q', 'a', 'm']);
    }

    #[test]
    fn followed_vertex_comes_first() {
        let g = graph(&['b', 'a'], &[('a', 'b')]);
        assert_eq!(g.topological_sort(), vec!['b', 'a']);

        // Same constraint, opposite insertion order
        let g = graph(&['a', 'b'], &[('a', 'b')]);
        assert_eq!(g.topological_sort(), vec!['b', 'a']);
    }

    #[test]
    fn diamond() {
        // d follows b and c, which both follow a
        let g = graph(
            &['d', 'c', 'b', 'a'],
            &[('d', 'b'), ('d', 'c'), ('b', 'a'), ('c', 'a')],
        );
        let sorted = g.topological_sort();

        assert_eq!(sorted.first(), Some(&'a'));
        assert_eq!(sorted.last(), Some(&'d'));
        assert_eq!(sorted.len(), 4);
        assert!(g.violations(&sorted).is_empty());
    }

    #[test]
    fn shared_successor_is_emitted_once() {
        let g = graph(&['c', 'b', 'a'], &[('c', 'a'), ('c', 'b'), ('b', 'a')]);
        let sorted = g.topological_sort();

        assert_eq!(sorted, vec!['a', 'b', 'c']);
    }

    #[test]
    fn duplicate_edges_are_harmless() {
        let g = graph(&['a', 'b'], &[('b', 'a'), ('b', 'a'), ('b', 'a')]);
        assert_eq!(g.topological_sort(), vec!['a', 'b']);
    }

    #[test]
    fn sort_is_repeatable() {
        let g = graph(
            &['x', 'y', 'z', 'w'],
            &[('x', 'w'), ('z', 'y'), ('y', 'w')],
        );

        assert_eq!(g.topological_sort(), g.topological_sort());
    }

    #[test]
    fn long_chain_does_not_recurse() {
        // 0 <- 1 <- 2 <- ... ; inserted highest first so the very first search
        // has to walk the entire chain.
        let size = 100_000u32;
        let mut g = Graph::new();
        (0..size).rev().for_each(|v| g.add_vertex(v));
        for v in 1..size {
            g.add_edge(v, v - 1).unwrap();
        }

        let sorted = g.topological_sort();
        assert_eq!(sorted, (0..size).collect::<Vec<_>>());
    }

    #[test]
    fn cycle_still_terminates_with_every_vertex() {
        let g = graph(&['a', 'b', 'c'], &[('a', 'b'), ('b', 'c'), ('c', 'a')]);
        let sorted = g.topological_sort();

        let mut seen = sorted.clone();
        seen.sort();
        assert_eq!(seen, vec!['a', 'b', 'c']);

        assert!(!g.violations(&sorted).is_empty());
    }

    #[test]
    fn violations_lists_broken_edges() {
        let g = graph(&['a', 'b', 'c'], &[('b', 'a'), ('c', 'b')]);

        assert!(g.violations(&['a', 'b', 'c']).is_empty());
        assert_eq!(g.violations(&['b', 'a', 'c']), vec![('b', 'a')]);
        assert_eq!(g.violations(&['a', 'b']), vec![('c', 'b')]);
    }

    #[test]
    fn display() {
        let g = graph(&['x', 'a', 'e'], &[('a', 'x'), ('a', 'e')]);
        assert_eq!(g.to_string(), "{x=[], a=[x, e], e=[]}");
        assert_eq!(Graph::<char>::new().to_string(), "{}");
    }
}
