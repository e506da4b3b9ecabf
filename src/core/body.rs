use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::BodyId;

/// A circular particle.
///
/// `velocity == None` marks a body that has been placed but not yet
/// launched: it exists (for rendering and aiming) but is excluded from
/// collision detection, wall handling, friction, and integration. Once a
/// velocity is assigned it never reverts to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    pub position: Vec2,
    pub velocity: Option<Vec2>,
    pub acceleration: Option<Vec2>,
    pub radius: f32,
}

impl Body {
    pub fn new(id: BodyId, position: Vec2, radius: f32) -> Self {
        Self {
            id,
            position,
            velocity: None,
            acceleration: None,
            radius,
        }
    }

    /// Whether the body has been launched and participates in the simulation.
    pub fn is_launched(&self) -> bool {
        self.velocity.is_some()
    }

    /// Mass under the 2D disk approximation, proportional to area.
    pub fn mass(&self) -> f32 {
        self.radius * self.radius
    }

    /// Advances the body by one frame.
    ///
    /// The position moves by `velocity * dt`; the acceleration is then added
    /// to the velocity once per frame, NOT scaled by `dt`. The unscaled
    /// acceleration matches the reference sandbox and is kept for
    /// compatibility, so gravity's effective strength varies with the
    /// simulation rate. A no-op for bodies that have not been launched.
    pub fn integrate(&mut self, dt: f32) {
        if let Some(velocity) = self.velocity {
            self.position += velocity * dt;
            if let Some(acceleration) = self.acceleration {
                self.velocity = Some(velocity + acceleration);
            }
        }
    }
}

/// Per-frame view of a body handed back to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub position: Vec2,
    pub velocity: Option<Vec2>,
    pub radius: f32,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id,
            position: body.position,
            velocity: body.velocity,
            radius: body.radius,
        }
    }
}
