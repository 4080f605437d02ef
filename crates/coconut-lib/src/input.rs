//! Loader for jetstream description files.
//!
//! The format is line oriented:
//!
//! ```text
//! 50         default energy per mile outside the jetstream
//! 0 5 10     start mile, end mile, energy of one jetstream segment
//! 3 7 12
//! ```
//!
//! Blank lines are ignored. Any malformed line aborts the whole load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Energy, Graph, MileMarker};

/// One directed jetstream segment as read from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: MileMarker,
    pub end: MileMarker,
    pub energy: Energy,
}

/// Parsed contents of a jetstream description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JetstreamInput {
    pub default_energy: Energy,
    pub segments: Vec<Segment>,
}

impl JetstreamInput {
    /// Build the corridor graph, inserting segments in input order.
    pub fn into_graph(self) -> Graph {
        let mut graph = Graph::new(self.default_energy);
        for segment in self.segments {
            graph.add_jetstream(segment.start, segment.end, segment.energy);
        }
        graph
    }
}

/// Open and parse the jetstream description at `path`.
pub fn load_jetstreams(path: &Path) -> Result<JetstreamInput> {
    debug!(path = %path.display(), "loading jetstreams");
    let file = File::open(path)?;
    parse_jetstreams(BufReader::new(file))
}

/// Parse a jetstream description from any buffered reader.
pub fn parse_jetstreams(reader: impl BufRead) -> Result<JetstreamInput> {
    let mut default_energy = None;
    let mut segments = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        if default_energy.is_none() {
            let [token] = tokens.as_slice() else {
                return Err(Error::malformed(
                    line_number,
                    format!(
                        "expected a single default energy value, found {} values",
                        tokens.len()
                    ),
                ));
            };
            default_energy = Some(parse_energy(token, line_number)?);
            continue;
        }

        segments.push(parse_segment(&tokens, line_number)?);
    }

    let default_energy = default_energy
        .ok_or_else(|| Error::malformed(1, "missing default energy value"))?;
    debug!(default_energy, segments = segments.len(), "parsed jetstreams");

    Ok(JetstreamInput {
        default_energy,
        segments,
    })
}

fn parse_segment(tokens: &[&str], line: usize) -> Result<Segment> {
    let [start, end, energy] = tokens else {
        return Err(Error::malformed(
            line,
            format!(
                "expected 'start end energy', found {} values",
                tokens.len()
            ),
        ));
    };

    Ok(Segment {
        start: parse_mile_marker(start, line)?,
        end: parse_mile_marker(end, line)?,
        energy: parse_energy(energy, line)?,
    })
}

fn parse_integer(token: &str, line: usize) -> Result<i64> {
    token
        .parse::<i64>()
        .map_err(|err| Error::malformed(line, format!("'{token}' is not an integer ({err})")))
}

fn parse_mile_marker(token: &str, line: usize) -> Result<MileMarker> {
    let value = parse_integer(token, line)?;
    MileMarker::try_from(value)
        .map_err(|_| Error::malformed(line, format!("mile marker {value} is negative")))
}

fn parse_energy(token: &str, line: usize) -> Result<Energy> {
    let value = parse_integer(token, line)?;
    Energy::try_from(value).map_err(|_| Error::NegativeWeight { line, value })
}
