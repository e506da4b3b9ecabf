//! Collision detection modules: sweep-line broad phase and elastic narrow phase.

pub mod broadphase;
pub mod narrowphase;

pub use broadphase::BroadPhase;
pub use narrowphase::CollisionResolver;
