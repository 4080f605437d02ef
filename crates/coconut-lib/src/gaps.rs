//! Filler edges that bridge the gaps between jetstream segments.
//!
//! Jetstream segments rarely cover the whole corridor. Before searching, every
//! pair of consecutive mile markers is linked by a filler edge (unless a
//! direct edge already exists) so the last marker is always reachable from
//! mile 0 by flying at the default energy rate.

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Edge, EdgeKind, Energy, Graph, MileMarker};

/// Filler edges inserted by [`fill_gaps`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapReport {
    pub inserted: Vec<Edge>,
}

impl GapReport {
    /// Total number of filler edges inserted.
    pub fn len(&self) -> usize {
        self.inserted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty()
    }
}

/// Link consecutive mile markers with filler edges.
///
/// When the smallest marker is not 0, mile 0 is linked to it as well. Pairs
/// that already have a direct edge are left untouched, so running this twice
/// inserts nothing the second time.
pub fn fill_gaps(graph: &mut Graph) -> Result<GapReport> {
    let markers: Vec<MileMarker> = graph.mile_markers().collect();
    let mut report = GapReport::default();

    let Some(&first) = markers.first() else {
        return Ok(report);
    };

    if first != 0 {
        insert_filler(graph, 0, first, &mut report)?;
    }

    for pair in markers.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let linked = graph
            .vertex(current)
            .is_some_and(|vertex| vertex.has_neighbour(next));
        if !linked {
            insert_filler(graph, current, next, &mut report)?;
        }
    }

    debug!(
        markers = markers.len(),
        inserted = report.len(),
        "filled corridor gaps"
    );
    Ok(report)
}

fn insert_filler(
    graph: &mut Graph,
    start: MileMarker,
    end: MileMarker,
    report: &mut GapReport,
) -> Result<()> {
    let energy = filler_energy(graph.default_energy(), start, end)?;
    graph.add_edge(start, end, energy, EdgeKind::Filler);
    debug!(start, end, energy, "inserted filler edge");
    report.inserted.push(Edge {
        start,
        end,
        energy,
        kind: EdgeKind::Filler,
    });
    Ok(())
}

fn filler_energy(rate: Energy, start: MileMarker, end: MileMarker) -> Result<Energy> {
    (end - start)
        .checked_mul(rate)
        .ok_or(Error::EnergyOverflow { start, end })
}
