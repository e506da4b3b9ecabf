//! Simulation parameters, defaults, and clamping rules.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Default playfield width in world units.
pub const DEFAULT_WIDTH: f32 = 1000.0;

/// Default playfield height in world units.
pub const DEFAULT_HEIGHT: f32 = 800.0;

/// Default spawn radius for new bodies.
pub const DEFAULT_RADIUS: f32 = 50.0;

/// Default multiplier applied to the launch drag vector.
pub const DEFAULT_VELOCITY_SCALE: f32 = 5.0;

/// Default simulation rate in frames per second.
pub const DEFAULT_SIMULATION_RATE: f32 = 60.0;

/// Default fraction of velocity retained after a wall bounce.
pub const DEFAULT_ELASTICITY: f32 = 1.0;

/// Default per-unit-radius drag coefficient.
pub const DEFAULT_FRICTION: f32 = 0.0;

/// Bodies farther than this past any boundary edge are dropped from the world.
pub const PRUNE_MARGIN: f32 = 50.0;

/// The closed set of live-tunable simulation parameters.
///
/// The hosting application owns the keybindings; the core owns which
/// parameters exist and how each one clamps and increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parameter {
    /// Vertical gravity magnitude (`gravity.y`).
    Gravity,
    Elasticity,
    Friction,
    /// Default spawn radius for subsequently spawned bodies.
    Radius,
    VelocityScale,
    SimulationRate,
}

impl Parameter {
    /// Inclusive clamp bounds for the parameter.
    pub fn bounds(self) -> (f32, f32) {
        match self {
            Parameter::Gravity => (0.0, 100.0),
            Parameter::Elasticity => (0.0, 1.0),
            Parameter::Friction => (0.0, 1.0),
            Parameter::Radius => (1.0, 100.0),
            Parameter::VelocityScale => (0.0, 100.0),
            Parameter::SimulationRate => (1.0, 120.0),
        }
    }

    /// Increment applied by one [`SimulationParams::adjust`] tick.
    pub fn increment(self) -> f32 {
        match self {
            Parameter::Elasticity => 0.001,
            Parameter::Friction => 0.0001,
            _ => 1.0,
        }
    }
}

/// Direction of a held parameter adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Increasing,
    Decreasing,
    #[default]
    Idle,
}

/// Tunable state shared by every subsystem of the simulation.
///
/// Owned by the caller (via [`crate::World`]) and passed by reference into
/// each step; there is no process-wide parameter state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub width: f32,
    pub height: f32,
    pub gravity: Vec2,
    pub elasticity: f32,
    pub friction: f32,
    pub default_radius: f32,
    pub velocity_scale: f32,
    pub simulation_rate: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            gravity: Vec2::ZERO,
            elasticity: DEFAULT_ELASTICITY,
            friction: DEFAULT_FRICTION,
            default_radius: DEFAULT_RADIUS,
            velocity_scale: DEFAULT_VELOCITY_SCALE,
            simulation_rate: DEFAULT_SIMULATION_RATE,
        }
    }
}

impl SimulationParams {
    /// Fixed integration timestep derived from the simulation rate.
    pub fn timestep(&self) -> f32 {
        1.0 / self.simulation_rate
    }

    /// Sets a parameter, clamping the value into its documented bounds.
    ///
    /// Out-of-range values clamp rather than fail; there are no rejected
    /// configurations.
    pub fn set(&mut self, parameter: Parameter, value: f32) {
        let (min, max) = parameter.bounds();
        let value = value.clamp(min, max);
        match parameter {
            Parameter::Gravity => self.gravity.y = value,
            Parameter::Elasticity => self.elasticity = value,
            Parameter::Friction => self.friction = value,
            Parameter::Radius => self.default_radius = value,
            Parameter::VelocityScale => self.velocity_scale = value,
            Parameter::SimulationRate => self.simulation_rate = value,
        }
    }

    /// Reads a parameter back as a scalar.
    pub fn get(&self, parameter: Parameter) -> f32 {
        match parameter {
            Parameter::Gravity => self.gravity.y,
            Parameter::Elasticity => self.elasticity,
            Parameter::Friction => self.friction,
            Parameter::Radius => self.default_radius,
            Parameter::VelocityScale => self.velocity_scale,
            Parameter::SimulationRate => self.simulation_rate,
        }
    }

    /// Nudges a parameter by its per-tick increment in the given direction.
    ///
    /// Called once per frame by the host while an adjustment key is held.
    /// `Direction::Idle` leaves the value untouched.
    pub fn adjust(&mut self, parameter: Parameter, direction: Direction) {
        let delta = match direction {
            Direction::Increasing => parameter.increment(),
            Direction::Decreasing => -parameter.increment(),
            Direction::Idle => return,
        };
        self.set(parameter, self.get(parameter) + delta);
    }

    /// Restores every parameter to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
