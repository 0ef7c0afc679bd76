use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use serde::Serialize;
use tracing::debug;

use crate::atlas::LocationId;
use crate::graph::LocationGraph;

/// Predicate marking locations that must not be used as intermediate hops.
pub type HazardPredicate<'p> = &'p dyn Fn(&str) -> bool;

/// Path found between two locations. The first step is the start, the last
/// step is the goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub steps: Vec<LocationId>,
}

impl Route {
    fn single(location: &str) -> Self {
        Self {
            steps: vec![location.to_string()],
        }
    }

    /// Number of hops in the route.
    pub fn hops(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// First location of the route.
    pub fn start(&self) -> Option<&str> {
        self.steps.first().map(String::as_str)
    }

    /// Last location of the route.
    pub fn goal(&self) -> Option<&str> {
        self.steps.last().map(String::as_str)
    }

    /// Locations strictly between the start and the goal.
    pub fn interior(&self) -> &[LocationId] {
        if self.steps.len() <= 2 {
            &[]
        } else {
            &self.steps[1..self.steps.len() - 1]
        }
    }
}

/// Find the minimum-hop route between `start` and `goal`.
///
/// When a hazard predicate is supplied, an edge is only traversed if neither of
/// its endpoints is hazardous; `start` and `goal` themselves are always exempt.
/// Returns `None` when either endpoint is unknown or the goal is unreachable.
pub fn shortest_path<'a>(
    graph: &'a LocationGraph,
    start: &'a str,
    goal: &'a str,
    hazard: Option<HazardPredicate<'_>>,
) -> Option<Route> {
    if !graph.contains(start) || !graph.contains(goal) {
        debug!(start, goal, "endpoint missing from graph");
        return None;
    }
    if start == goal {
        return Some(Route::single(start));
    }

    let blocked = |node: &str| {
        node != start && node != goal && hazard.map(|is_hazardous| is_hazardous(node)).unwrap_or(false)
    };

    let mut distances: HashMap<&str, usize> =
        graph.locations().map(|node| (node, usize::MAX)).collect();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0);
    queue.push(QueueEntry::new(start, 0));

    while let Some(entry) = queue.pop() {
        if entry.node == goal {
            break;
        }
        if entry.cost > distances.get(entry.node).copied().unwrap_or(usize::MAX) {
            continue;
        }
        if blocked(entry.node) {
            continue;
        }

        for next in graph.neighbours(entry.node) {
            if blocked(next) {
                continue;
            }

            let next_cost = entry.cost + 1;
            if next_cost < distances.get(next).copied().unwrap_or(usize::MAX) {
                distances.insert(next, next_cost);
                parents.insert(next, entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    if distances.get(goal).copied().unwrap_or(usize::MAX) == usize::MAX {
        debug!(start, goal, "no route found");
        return None;
    }

    Some(reconstruct_path(&parents, start, goal))
}

/// Breadth-first search from `start` to whichever of `targets` is reached first.
///
/// Hazards are not considered. `start` itself counts when it is a target.
pub fn nearest_reachable<'a>(
    graph: &'a LocationGraph,
    start: &'a str,
    targets: &HashSet<&str>,
) -> Option<Route> {
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if targets.contains(current) {
            return Some(reconstruct_path(&parents, start, current));
        }

        for next in graph.neighbours(current) {
            if visited.insert(next) {
                parents.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    None
}

fn reconstruct_path(parents: &HashMap<&str, &str>, start: &str, goal: &str) -> Route {
    let mut steps = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        steps.push(node.to_string());
        if node == start {
            break;
        }
        current = parents.get(node).copied();
    }
    steps.reverse();
    Route { steps }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'a> {
    node: &'a str,
    cost: usize,
}

impl<'a> QueueEntry<'a> {
    fn new(node: &'a str, cost: usize) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
