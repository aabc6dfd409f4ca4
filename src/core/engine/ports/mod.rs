//! Port definitions for the step engine.
//!
//! The engine depends on these interfaces only, never on a concrete
//! rendering surface or clock.

pub mod pacer;
pub mod visual_sink;
