//! Coconut delivery library entry points.
//!
//! This crate loads jetstream descriptions, builds the corridor graph, fills
//! the gaps between segments and finds the cheapest route from mile 0 to the
//! farthest mile marker. Higher-level consumers (the CLI) should only depend
//! on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod gaps;
pub mod graph;
pub mod input;
pub mod output;
pub mod path;
pub mod routing;

pub use error::{Error, Result};
pub use gaps::{fill_gaps, GapReport};
pub use graph::{Edge, EdgeKind, Energy, Graph, MileMarker, Vertex};
pub use input::{load_jetstreams, parse_jetstreams, JetstreamInput, Segment};
pub use output::{JetstreamHop, RouteRenderMode, RouteSummary};
pub use path::{shortest_paths, ShortestPaths};
pub use routing::{plan_route, reconstruct_route, Hop, RoutePlan, ORIGIN};
