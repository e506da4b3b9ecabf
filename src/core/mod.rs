//! Core types describing simulation entities and their storage.

pub mod arena;
pub mod body;

pub use arena::{Arena, BodyId};
pub use body::{Body, BodySnapshot};
