//! Utility helpers: logging instrumentation.

pub mod logging;

pub use logging::ScopedTimer;
