use std::collections::{BTreeMap, BTreeSet};

use crate::atlas::LocationId;

/// Undirected, unit-weight location graph used by the path searches.
///
/// Neighbour sets are ordered so that searches visit neighbours in id order
/// and tie-breaks between equal-length paths are reproducible.
#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    adjacency: BTreeMap<LocationId, BTreeSet<LocationId>>,
}

impl LocationGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an edge list. Duplicate and self-pairs are tolerated.
    pub fn from_edges<I, A, B>(edges: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<LocationId>,
        B: Into<LocationId>,
    {
        let mut graph = Self::new();
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    /// Connect `from` and `to` in both directions. Idempotent.
    pub fn add_edge(&mut self, from: impl Into<LocationId>, to: impl Into<LocationId>) {
        let from = from.into();
        let to = to.into();
        self.adjacency
            .entry(from.clone())
            .or_default()
            .insert(to.clone());
        self.adjacency.entry(to).or_default().insert(from);
    }

    /// Whether `location` appears in any edge.
    pub fn contains(&self, location: &str) -> bool {
        self.adjacency.contains_key(location)
    }

    /// Return the neighbours for a given location, in id order.
    pub fn neighbours(&self, location: &str) -> impl Iterator<Item = &str> + '_ {
        self.adjacency
            .get(location)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Whether `a` and `b` share an edge.
    pub fn is_adjacent(&self, a: &str, b: &str) -> bool {
        self.adjacency
            .get(a)
            .map(|set| set.contains(b))
            .unwrap_or(false)
    }

    /// All known locations, in id order.
    pub fn locations(&self) -> impl Iterator<Item = &str> + '_ {
        self.adjacency.keys().map(String::as_str)
    }

    /// Number of known locations.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct undirected edges, counting self-loops once.
    pub fn edge_count(&self) -> usize {
        let mut directed = 0;
        let mut loops = 0;
        for (node, neighbours) in &self.adjacency {
            directed += neighbours.len();
            if neighbours.contains(node) {
                loops += 1;
            }
        }
        (directed - loops) / 2 + loops
    }
}
