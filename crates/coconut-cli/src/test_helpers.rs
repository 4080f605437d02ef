// Test utilities used across `coconut-cli` tests.
// Kept under `#[cfg(test)]` so it is not part of the public crate API.
use coconut_lib::{EdgeKind, Hop, RoutePlan, RouteSummary};

/// Summary for the one-segment corridor `50 / 3 7 12`.
pub fn leading_gap_summary() -> RouteSummary {
    let plan = RoutePlan {
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
    };
    RouteSummary::from_plan(&plan)
}
