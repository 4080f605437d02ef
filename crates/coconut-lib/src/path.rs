use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Energy, Graph, MileMarker};

/// Per-query search state produced by [`shortest_paths`].
///
/// Kept apart from the [`Graph`] so the topology can be reused for another
/// query without resetting anything.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: MileMarker,
    distances: HashMap<MileMarker, Energy>,
    previous: HashMap<MileMarker, MileMarker>,
    settled: HashSet<MileMarker>,
}

impl ShortestPaths {
    fn new(source: MileMarker) -> Self {
        Self {
            source,
            distances: HashMap::from([(source, 0)]),
            previous: HashMap::new(),
            settled: HashSet::new(),
        }
    }

    /// Mile marker the search started from.
    pub fn source(&self) -> MileMarker {
        self.source
    }

    /// Lowest energy needed to reach `marker`, or `None` when unreachable.
    pub fn distance(&self, marker: MileMarker) -> Option<Energy> {
        self.distances.get(&marker).copied()
    }

    /// Predecessor of `marker` on its cheapest path from the source.
    pub fn previous(&self, marker: MileMarker) -> Option<MileMarker> {
        self.previous.get(&marker).copied()
    }

    /// Whether `marker` was removed from the frontier with a final distance.
    pub fn is_settled(&self, marker: MileMarker) -> bool {
        self.settled.contains(&marker)
    }

    /// Reachable mile markers and their distances, in no particular order.
    pub fn reachable(&self) -> impl Iterator<Item = (MileMarker, Energy)> + '_ {
        self.distances
            .iter()
            .map(|(&marker, &distance)| (marker, distance))
    }

    fn improves(&self, marker: MileMarker, candidate: Energy) -> bool {
        self.distance(marker)
            .map_or(true, |current| candidate < current)
    }
}

/// Run Dijkstra's algorithm from `source` over the whole graph.
///
/// The full shortest-path tree is computed; callers pick the destination
/// afterwards. Edge energies are unsigned so every relaxation is valid.
pub fn shortest_paths(graph: &Graph, source: MileMarker) -> Result<ShortestPaths> {
    if graph.is_empty() {
        return Err(Error::EmptyGraph);
    }
    if !graph.contains(source) {
        return Err(Error::UnknownMileMarker { marker: source });
    }

    let mut state = ShortestPaths::new(source);
    let mut queue = BinaryHeap::new();
    queue.push(QueueEntry::new(source, 0));

    while let Some(entry) = queue.pop() {
        if state.is_settled(entry.node) {
            continue;
        }
        // Stale entry: a cheaper push for this node was already handled.
        if state.distance(entry.node) != Some(entry.cost) {
            continue;
        }
        state.settled.insert(entry.node);

        for edge in graph.neighbours(entry.node) {
            let next = edge.end;
            if state.is_settled(next) {
                continue;
            }

            // An overflowing sum exceeds every representable distance.
            let Some(next_cost) = entry.cost.checked_add(edge.energy) else {
                continue;
            };
            if state.improves(next, next_cost) {
                state.distances.insert(next, next_cost);
                state.previous.insert(next, entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    debug!(
        source,
        settled = state.settled.len(),
        vertices = graph.vertex_count(),
        "shortest path search complete"
    );
    Ok(state)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: MileMarker,
    cost: Energy,
}

impl QueueEntry {
    fn new(node: MileMarker, cost: Energy) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
