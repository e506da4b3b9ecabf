use glam::Vec2;

use crate::{
    collision::{BroadPhase, CollisionResolver},
    config::{SimulationParams, PRUNE_MARGIN},
    core::{Arena, Body, BodyId, BodySnapshot},
    utils::logging::ScopedTimer,
};

/// Central simulation container orchestrating all subsystems.
///
/// A step runs to completion before the next one reads any state: collision
/// resolution first, over the body set as it stood at the start of the frame,
/// then walls, friction, integration, and pruning per body. Everything is
/// single-threaded and exclusively owned.
pub struct World {
    bodies: Arena<Body>,
    pub params: SimulationParams,
}

impl Default for World {
    fn default() -> Self {
        Self::new(SimulationParams::default())
    }
}

impl World {
    pub fn new(params: SimulationParams) -> Self {
        Self {
            bodies: Arena::new(),
            params,
        }
    }

    /// Adds a pending body at `position` with the currently configured
    /// default radius. It stays inert until [`World::launch`] assigns a
    /// velocity.
    pub fn spawn(&mut self, position: Vec2) -> BodyId {
        let mut body = Body::new(BodyId::default(), position, self.params.default_radius);
        body.acceleration = Some(self.params.gravity);
        let id = self.bodies.insert(body);
        if let Some(stored) = self.bodies.get_mut(id) {
            stored.id = id;
        }
        log::debug!("spawned body {id:?} at {position}");
        id
    }

    /// Launches a pending body with `drag_delta * velocity_scale`.
    ///
    /// Launching an already-active body re-aims it. A stale id (the body was
    /// pruned since the host captured it) is ignored; input events can
    /// legitimately race with pruning.
    pub fn launch(&mut self, id: BodyId, drag_delta: Vec2, velocity_scale: f32) {
        match self.bodies.get_mut(id) {
            Some(body) => body.velocity = Some(drag_delta * velocity_scale),
            None => log::debug!("launch ignored for pruned body {id:?}"),
        }
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id)
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Removes every body, leaving the parameters untouched.
    pub fn clear(&mut self) {
        self.bodies = Arena::new();
    }

    /// Fixed timestep for the currently configured simulation rate.
    pub fn timestep(&self) -> f32 {
        self.params.timestep()
    }

    /// Advances the simulation by one frame and returns snapshots of the
    /// surviving bodies, in stable arena order, for rendering.
    pub fn step(&mut self, dt: f32) -> Vec<BodySnapshot> {
        {
            let _timer = ScopedTimer::new("collision::resolve");
            self.resolve_collisions();
        }
        {
            let _timer = ScopedTimer::new("world::advance");
            self.advance_bodies(dt);
        }
        self.bodies.iter().map(BodySnapshot::from).collect()
    }

    /// Broad phase over every launched body, then pairwise narrow-phase
    /// resolution in the sweep's emission order. Resolving a pair mutates
    /// state later pairs read, so the order is part of the observable
    /// behavior and must stay the sweep order.
    fn resolve_collisions(&mut self) {
        if self.bodies.len() < 2 {
            return;
        }
        for (id_a, id_b) in BroadPhase::candidate_pairs(&self.bodies) {
            if let Some((body_a, body_b)) = self.bodies.get2_mut(id_a, id_b) {
                CollisionResolver::resolve(body_a, body_b);
            }
        }
    }

    /// Per-body frame pass: gravity refresh, wall bounce, friction,
    /// integration, and pruning.
    fn advance_bodies(&mut self, dt: f32) {
        let params = self.params;
        for id in self.bodies.ids() {
            let Some(body) = self.bodies.get_mut(id) else {
                continue;
            };

            // Every body tracks the live gravity parameter, launched or not.
            body.acceleration = Some(params.gravity);

            if !body.is_launched() {
                continue;
            }

            Self::reflect_at_walls(body, &params);
            Self::apply_friction(body, &params);
            body.integrate(dt);

            if Self::outside_extended_bounds(body, &params) {
                let position = body.position;
                self.bodies.remove(id);
                log::debug!("pruned body {id:?} at {position}");
            }
        }
    }

    /// Reflects the velocity component pointing out of a boundary edge the
    /// body has reached, scaling both components by the elasticity
    /// coefficient.
    fn reflect_at_walls(body: &mut Body, params: &SimulationParams) {
        let Some(mut velocity) = body.velocity else {
            return;
        };

        let leaving_left = body.position.x <= 0.0 && velocity.x < 0.0;
        let leaving_right = body.position.x >= params.width && velocity.x > 0.0;
        if leaving_left || leaving_right {
            velocity.x = -velocity.x * params.elasticity;
            velocity.y *= params.elasticity;
        }

        let leaving_top = body.position.y <= 0.0 && velocity.y < 0.0;
        let leaving_bottom = body.position.y >= params.height && velocity.y > 0.0;
        if leaving_top || leaving_bottom {
            velocity.y = -velocity.y * params.elasticity;
            velocity.x *= params.elasticity;
        }

        body.velocity = Some(velocity);
    }

    /// Drag opposite the direction of motion, scaled by body size.
    fn apply_friction(body: &mut Body, params: &SimulationParams) {
        let Some(velocity) = body.velocity else {
            return;
        };
        let drag = velocity.normalize_or_zero() * params.friction * body.radius;
        body.velocity = Some(velocity - drag);
    }

    fn outside_extended_bounds(body: &Body, params: &SimulationParams) -> bool {
        body.position.x < -PRUNE_MARGIN
            || body.position.x > params.width + PRUNE_MARGIN
            || body.position.y < -PRUNE_MARGIN
            || body.position.y > params.height + PRUNE_MARGIN
    }
}
