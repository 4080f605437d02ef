use std::path::PathBuf;

use coconut_lib::{Energy, Graph, MileMarker};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Build a graph of jetstream segments without running the gap filler.
pub fn jetstreams(default_energy: Energy, segments: &[(MileMarker, MileMarker, Energy)]) -> Graph {
    let mut graph = Graph::new(default_energy);
    for &(start, end, energy) in segments {
        graph.add_jetstream(start, end, energy);
    }
    graph
}
