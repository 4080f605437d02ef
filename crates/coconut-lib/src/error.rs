use thiserror::Error;

use crate::graph::MileMarker;

/// Convenient result alias for the coconut delivery library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an input line cannot be parsed.
    #[error("malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// Raised when an energy value in the input is below zero.
    #[error("negative energy {value} on line {line}")]
    NegativeWeight { line: usize, value: i64 },

    /// Raised when the search finished without reaching the destination.
    #[error("mile marker {destination} is unreachable from the start of the corridor")]
    UnreachableDestination { destination: MileMarker },

    /// Raised when a query is run against a graph with no mile markers.
    #[error("no jetstream segments were loaded; the corridor is empty")]
    EmptyGraph,

    /// Raised when a mile marker is not a vertex of the graph.
    #[error("unknown mile marker: {marker}")]
    UnknownMileMarker { marker: MileMarker },

    /// Raised when a predecessor link has no matching edge in the graph.
    #[error("no edge from mile marker {start} to {end} in the graph")]
    MissingEdge { start: MileMarker, end: MileMarker },

    /// Raised when an energy value does not fit in the energy type.
    #[error("energy overflow on the segment from {start} to {end}")]
    EnergyOverflow { start: MileMarker, end: MileMarker },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}
