//! Exact circle-circle test and elastic collision response.

use crate::core::Body;

/// Narrow-phase resolver for a candidate pair of circular bodies.
///
/// Resolution is pairwise and sequential: when several pairs overlap in the
/// same frame, each resolution mutates state that later pairs read, so
/// genuinely simultaneous three-body contacts are order-dependent. The broad
/// phase's emission order is preserved precisely so that this stays
/// reproducible.
pub struct CollisionResolver;

impl CollisionResolver {
    /// True circle-circle overlap test, touching included.
    pub fn overlaps(a: &Body, b: &Body) -> bool {
        (a.position - b.position).length() <= a.radius + b.radius
    }

    /// Checks a candidate pair and, on overlap, applies the elastic velocity
    /// exchange followed by positional separation.
    ///
    /// Pairs with exactly coincident centers are skipped: there is no
    /// collision normal to resolve along, and skipping avoids the division
    /// by zero distance.
    pub fn resolve(a: &mut Body, b: &mut Body) {
        if a.position == b.position {
            return;
        }
        if !Self::overlaps(a, b) {
            return;
        }
        Self::elastic_response(a, b);
        Self::separate(a, b);
    }

    /// Two-body elastic collision along the line of centers.
    ///
    /// Masses follow the disk approximation `m = r²`. Both updates are
    /// computed from the pre-collision velocities, so the exchange is
    /// symmetric and conserves momentum and kinetic energy exactly (up to
    /// floating-point rounding). Pending bodies are left untouched.
    pub fn elastic_response(a: &mut Body, b: &mut Body) {
        let (Some(v1), Some(v2)) = (a.velocity, b.velocity) else {
            return;
        };
        if a.position == b.position {
            return;
        }

        let m1 = a.mass();
        let m2 = b.mass();
        let total = m1 + m2;
        let axis = a.position - b.position;
        let dist_sq = axis.length_squared();

        let u1 = v1 - axis * (2.0 * m2 / total * (v1 - v2).dot(axis) / dist_sq);
        let u2 = v2 + axis * (2.0 * m1 / total * (v2 - v1).dot(-axis) / dist_sq);

        a.velocity = Some(u1);
        b.velocity = Some(u2);
    }

    /// Pushes an overlapping pair apart along the center axis.
    ///
    /// The residual overlap is split evenly, so the pair's midpoint is
    /// unchanged and the net displacement is zero.
    pub fn separate(a: &mut Body, b: &mut Body) {
        let axis = a.position - b.position;
        let overlap = a.radius + b.radius - axis.length();
        if overlap > 0.0 {
            let push = axis.normalize_or_zero() * (overlap * 0.5);
            a.position += push;
            b.position -= push;
        }
    }
}
