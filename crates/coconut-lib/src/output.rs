use std::fmt::Write;

use serde::Serialize;

use crate::graph::{Energy, MileMarker};
use crate::routing::RoutePlan;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Jetstream segment shown in a route listing.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct JetstreamHop {
    pub from: MileMarker,
    pub to: MileMarker,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub source: MileMarker,
    pub destination: MileMarker,
    pub total_energy: Energy,
    pub jetstream_energy: Energy,
    pub filler_energy: Energy,
    pub hops: usize,
    pub filler_hops: usize,
    pub path: Vec<JetstreamHop>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary listing only jetstream hops.
    pub fn from_plan(plan: &RoutePlan) -> Self {
        let path = plan
            .jetstream_path()
            .into_iter()
            .map(|(from, to)| JetstreamHop { from, to })
            .collect::<Vec<_>>();

        Self {
            source: plan.source,
            destination: plan.destination,
            total_energy: plan.total_energy,
            jetstream_energy: plan.jetstream_energy(),
            filler_energy: plan.filler_energy(),
            hops: plan.hop_count(),
            filler_hops: plan.hop_count() - path.len(),
            path,
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Total Energy consumed on most efficient route: {}",
            self.total_energy
        );
        let _ = writeln!(buffer, "Most Efficient route:");
        let joined = self
            .path
            .iter()
            .map(|hop| format!("({}, {})", hop.from, hop.to))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(buffer, "[{joined}]");
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _mile {} → mile {}_ ({} energy, {} hops, {} off-stream)",
            self.source, self.destination, self.total_energy, self.hops, self.filler_hops
        );
        if self.path.is_empty() {
            let _ = writeln!(buffer, "* no jetstream segments used");
        }
        for (index, hop) in self.path.iter().enumerate() {
            let _ = writeln!(
                buffer,
                "* {:>2}. `{}` → `{}`",
                index + 1,
                hop.from,
                hop.to
            );
        }
        let _ = writeln!(
            buffer,
            "_jetstream: {} / off-stream: {}_",
            self.jetstream_energy, self.filler_energy
        );
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeKind;
    use crate::routing::Hop;

    fn gap_plan() -> RoutePlan {
        RoutePlan {
            source: 0,
            destination: 7,
            hops: vec![
                Hop {
                    from: 0,
                    to: 3,
                    energy: 150,
                    kind: EdgeKind::Filler,
                },
                Hop {
                    from: 3,
                    to: 7,
                    energy: 12,
                    kind: EdgeKind::Jetstream,
                },
            ],
            total_energy: 162,
        }
    }

    #[test]
    fn summary_counts_filler_hops() {
        let summary = RouteSummary::from_plan(&gap_plan());
        assert_eq!(summary.hops, 2);
        assert_eq!(summary.filler_hops, 1);
        assert_eq!(summary.path, vec![JetstreamHop { from: 3, to: 7 }]);
    }

    #[test]
    fn plain_text_matches_classic_report() {
        let text = RouteSummary::from_plan(&gap_plan()).render(RouteRenderMode::PlainText);
        assert_eq!(
            text,
            "Total Energy consumed on most efficient route: 162\nMost Efficient route:\n[(3, 7)]\n"
        );
    }

    #[test]
    fn rich_text_lists_each_segment() {
        let text = RouteSummary::from_plan(&gap_plan()).render(RouteRenderMode::RichText);
        assert!(text.starts_with("**Route**"));
        assert!(text.contains("`3` → `7`"));
        assert!(text.contains("off-stream: 150"));
    }
}
