//! Route reconstruction and the single corridor query.
//!
//! [`plan_route`] runs the whole pipeline: fill the gaps between jetstream
//! segments, search from mile 0 and walk back from the farthest mile marker.
//! [`reconstruct_route`] is the last step on its own, usable with any
//! [`ShortestPaths`] computed over the same graph.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::gaps::fill_gaps;
use crate::graph::{EdgeKind, Energy, Graph, MileMarker};
use crate::path::{shortest_paths, ShortestPaths};

/// Mile marker every corridor query starts from.
pub const ORIGIN: MileMarker = 0;

/// One traversed edge of a planned route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub from: MileMarker,
    pub to: MileMarker,
    pub energy: Energy,
    pub kind: EdgeKind,
}

impl Hop {
    pub fn is_jetstream(&self) -> bool {
        self.kind == EdgeKind::Jetstream
    }
}

/// Cheapest route between two mile markers, including filler hops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub source: MileMarker,
    pub destination: MileMarker,
    pub hops: Vec<Hop>,
    pub total_energy: Energy,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }

    /// The route as `(from, to)` pairs, keeping only jetstream hops.
    ///
    /// Filler hops are dropped from the listing; their energy still counts
    /// toward [`RoutePlan::total_energy`].
    pub fn jetstream_path(&self) -> Vec<(MileMarker, MileMarker)> {
        self.hops
            .iter()
            .filter(|hop| hop.is_jetstream())
            .map(|hop| (hop.from, hop.to))
            .collect()
    }

    /// Energy spent on jetstream hops.
    pub fn jetstream_energy(&self) -> Energy {
        self.energy_of(EdgeKind::Jetstream)
    }

    /// Energy spent flying outside the jetstream.
    pub fn filler_energy(&self) -> Energy {
        self.energy_of(EdgeKind::Filler)
    }

    fn energy_of(&self, kind: EdgeKind) -> Energy {
        self.hops
            .iter()
            .filter(|hop| hop.kind == kind)
            .map(|hop| hop.energy)
            .sum()
    }
}

/// Compute the cheapest route from mile 0 to the farthest mile marker.
///
/// Filler edges are added to `graph` before searching, so the graph should
/// hold only the ingested jetstream segments when this is called.
pub fn plan_route(graph: &mut Graph) -> Result<RoutePlan> {
    let Some(destination) = graph.last_node() else {
        return Err(Error::EmptyGraph);
    };

    let gaps = fill_gaps(graph)?;
    debug!(
        fillers = gaps.len(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "corridor graph ready"
    );

    let paths = shortest_paths(graph, ORIGIN)?;
    let plan = reconstruct_route(graph, &paths, destination)?;

    info!(
        destination,
        total_energy = plan.total_energy,
        hops = plan.hop_count(),
        "planned corridor route"
    );
    Ok(plan)
}

/// Walk predecessors back from `destination` and return the route in travel
/// order.
pub fn reconstruct_route(
    graph: &Graph,
    paths: &ShortestPaths,
    destination: MileMarker,
) -> Result<RoutePlan> {
    if !graph.contains(destination) {
        return Err(Error::UnknownMileMarker {
            marker: destination,
        });
    }
    let total_energy = paths
        .distance(destination)
        .ok_or(Error::UnreachableDestination { destination })?;

    let mut hops = Vec::new();
    let mut current = destination;
    while let Some(previous) = paths.previous(current) {
        let edge = graph
            .edge(previous, current)
            .ok_or(Error::MissingEdge {
                start: previous,
                end: current,
            })?;
        hops.push(Hop {
            from: previous,
            to: current,
            energy: edge.energy,
            kind: edge.kind,
        });
        current = previous;
    }
    hops.reverse();

    Ok(RoutePlan {
        source: paths.source(),
        destination,
        hops,
        total_energy,
    })
}
