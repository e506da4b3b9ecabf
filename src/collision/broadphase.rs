//! Sweep-line broad phase over the bodies' x-axis projections.

use crate::core::{Arena, Body, BodyId};

/// Endpoint kind for the sweep. `Enter` sorts before `Exit` at equal
/// coordinates so tangentially touching intervals still pair up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EndpointKind {
    Enter,
    Exit,
}

/// Broad phase driver returning potential collision pairs.
///
/// Each launched body projects to the x-interval `[x - r, x + r]`. The sweep
/// sorts all interval endpoints, walks them left to right, and pairs every
/// entering body with the bodies whose intervals are still open: exactly the
/// pairs whose x-projections overlap, in O(n log n + k). This is a superset
/// of the true circle overlaps and is refined by the narrow phase.
///
/// Bodies without an assigned velocity are excluded entirely; pending and
/// at-rest bodies never take part in collision detection.
pub struct BroadPhase;

impl BroadPhase {
    /// Collects candidate pairs in sweep order.
    ///
    /// Pairs are emitted when the later body's left endpoint enters the
    /// sweep, so the output is ordered by ascending left endpoint. The narrow
    /// phase resolves pairs in this order, which keeps multi-collision frames
    /// reproducible.
    pub fn candidate_pairs(bodies: &Arena<Body>) -> Vec<(BodyId, BodyId)> {
        let mut endpoints = Vec::with_capacity(bodies.len() * 2);
        for body in bodies.iter().filter(|body| body.is_launched()) {
            endpoints.push((body.position.x - body.radius, EndpointKind::Enter, body.id));
            endpoints.push((body.position.x + body.radius, EndpointKind::Exit, body.id));
        }
        endpoints.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut pairs = Vec::new();
        let mut active: Vec<BodyId> = Vec::new();
        for (_, kind, id) in endpoints {
            match kind {
                EndpointKind::Enter => {
                    for &other in &active {
                        pairs.push((id, other));
                    }
                    active.push(id);
                }
                EndpointKind::Exit => {
                    active.retain(|&open| open != id);
                }
            }
        }
        pairs
    }
}
