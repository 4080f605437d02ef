use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

/// Position along the corridor. Doubles as the vertex identifier.
pub type MileMarker = u64;

/// Energy spent travelling an edge.
pub type Energy = u64;

/// Classification for an edge in the corridor graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Segment supplied by the input.
    Jetstream,
    /// Synthetic segment travelled at the default energy rate.
    Filler,
}

/// Directed edge within the corridor graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub start: MileMarker,
    pub end: MileMarker,
    pub energy: Energy,
    pub kind: EdgeKind,
}

impl Edge {
    /// Whether the edge is a supplied jetstream segment.
    pub fn is_jetstream(&self) -> bool {
        self.kind == EdgeKind::Jetstream
    }
}

/// Mile marker together with its outgoing edges, keyed by target.
#[derive(Debug, Clone, Default)]
pub struct Vertex {
    neighbours: BTreeMap<MileMarker, Edge>,
}

impl Vertex {
    /// Outgoing edges in ascending target order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.neighbours.values()
    }

    /// Whether a direct edge toward `target` exists.
    pub fn has_neighbour(&self, target: MileMarker) -> bool {
        self.neighbours.contains_key(&target)
    }
}

/// Directed graph of mile markers.
///
/// Owns the corridor topology only. Search state lives in
/// [`ShortestPaths`](crate::path::ShortestPaths) so one graph can serve
/// several queries.
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: BTreeMap<MileMarker, Vertex>,
    default_energy: Energy,
    last_node: Option<MileMarker>,
}

impl Graph {
    /// Create an empty graph whose filler edges cost `default_energy` per mile.
    pub fn new(default_energy: Energy) -> Self {
        Self {
            vertices: BTreeMap::new(),
            default_energy,
            last_node: None,
        }
    }

    /// Energy cost per mile for travel outside the jetstream.
    pub fn default_energy(&self) -> Energy {
        self.default_energy
    }

    /// Largest mile marker ever inserted, `None` while the graph is empty.
    pub fn last_node(&self) -> Option<MileMarker> {
        self.last_node
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, marker: MileMarker) -> bool {
        self.vertices.contains_key(&marker)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|v| v.neighbours.len()).sum()
    }

    pub fn vertex(&self, marker: MileMarker) -> Option<&Vertex> {
        self.vertices.get(&marker)
    }

    /// Mile markers present in the graph, ascending.
    pub fn mile_markers(&self) -> impl Iterator<Item = MileMarker> + '_ {
        self.vertices.keys().copied()
    }

    /// Return the outgoing edges for a mile marker; empty when unknown.
    pub fn neighbours(&self, marker: MileMarker) -> impl Iterator<Item = &Edge> {
        self.vertices
            .get(&marker)
            .into_iter()
            .flat_map(|vertex| vertex.neighbours.values())
    }

    /// Lookup the directed edge `start -> end`.
    pub fn edge(&self, start: MileMarker, end: MileMarker) -> Option<&Edge> {
        self.vertices
            .get(&start)
            .and_then(|vertex| vertex.neighbours.get(&end))
    }

    /// Every edge in the graph, ordered by start then end.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.vertices.values().flat_map(|vertex| vertex.edges())
    }

    /// Insert a mile marker if it is not already present.
    pub fn add_vertex(&mut self, marker: MileMarker) {
        self.vertices.entry(marker).or_default();
        self.last_node = Some(self.last_node.map_or(marker, |last| last.max(marker)));
    }

    /// Insert or overwrite the directed edge `start -> end`.
    ///
    /// Missing endpoints are created. The last write for a given pair wins and
    /// the replaced edge is returned.
    pub fn add_edge(
        &mut self,
        start: MileMarker,
        end: MileMarker,
        energy: Energy,
        kind: EdgeKind,
    ) -> Option<Edge> {
        self.add_vertex(start);
        self.add_vertex(end);

        let edge = Edge {
            start,
            end,
            energy,
            kind,
        };
        let neighbours = &mut self.vertices.entry(start).or_default().neighbours;

        match neighbours.entry(end) {
            Entry::Vacant(slot) => {
                slot.insert(edge);
                None
            }
            Entry::Occupied(mut slot) => {
                let previous = slot.insert(edge);
                debug!(
                    start,
                    end,
                    old_energy = previous.energy,
                    new_energy = energy,
                    "overwrote existing edge"
                );
                Some(previous)
            }
        }
    }

    /// Shorthand for [`Graph::add_edge`] with [`EdgeKind::Jetstream`].
    pub fn add_jetstream(
        &mut self,
        start: MileMarker,
        end: MileMarker,
        energy: Energy,
    ) -> Option<Edge> {
        self.add_edge(start, end, energy, EdgeKind::Jetstream)
    }
}
