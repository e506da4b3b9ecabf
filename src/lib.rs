//! Particle Sandbox – core physics engine of an interactive 2D collision
//! sandbox.
//!
//! Circular bodies are placed by user input, launched with a drag-derived
//! velocity, and then evolve under gravity, wall bounce, mutual elastic
//! collision, and optional friction at a fixed simulation rate. This crate
//! owns the physics only: vector algebra, per-frame integration, the
//! sweep-line broad phase, elastic narrow-phase resolution with positional
//! correction, and world orchestration. Rendering, color derivation, HUD
//! text, and key dispatch live in the hosting application.

pub mod collision;
pub mod config;
pub mod core;
pub mod utils;
pub mod world;

pub use glam::Vec2;

pub use collision::{BroadPhase, CollisionResolver};
pub use config::{Direction, Parameter, SimulationParams};
pub use crate::core::{Arena, Body, BodyId, BodySnapshot};
pub use world::World;

/// High-level convenience wrapper that owns a [`World`].
///
/// The hosting render/input loop calls [`SandboxEngine::tick`] once per
/// frame and draws the returned snapshots.
pub struct SandboxEngine {
    world: World,
}

impl Default for SandboxEngine {
    fn default() -> Self {
        Self::new(SimulationParams::default())
    }
}

impl SandboxEngine {
    pub fn new(params: SimulationParams) -> Self {
        Self {
            world: World::new(params),
        }
    }

    /// Places a pending body at `position` and returns its id.
    pub fn spawn(&mut self, position: Vec2) -> BodyId {
        self.world.spawn(position)
    }

    /// Launches a body with the configured velocity scale applied to the
    /// drag vector.
    pub fn launch(&mut self, id: BodyId, drag_delta: Vec2) {
        let scale = self.world.params.velocity_scale;
        self.world.launch(id, drag_delta, scale);
    }

    /// Advances one frame at the configured simulation rate.
    pub fn tick(&mut self) -> Vec<BodySnapshot> {
        let dt = self.world.timestep();
        self.world.step(dt)
    }

    /// Advances one frame with an explicit timestep.
    pub fn step(&mut self, dt: f32) -> Vec<BodySnapshot> {
        self.world.step(dt)
    }

    /// Sets a live-tunable parameter, clamping into its documented bounds.
    pub fn set_parameter(&mut self, parameter: Parameter, value: f32) {
        self.world.params.set(parameter, value);
    }

    /// Nudges a parameter one increment while an adjustment key is held.
    pub fn adjust_parameter(&mut self, parameter: Parameter, direction: Direction) {
        self.world.params.adjust(parameter, direction);
    }

    /// Drops every body and restores default parameters.
    pub fn reset(&mut self) {
        self.world.clear();
        self.world.params.reset();
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
