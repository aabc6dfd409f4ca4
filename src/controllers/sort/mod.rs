//! Application layer for one visualization session.
//!
//! The controller owns the shared sequence and the run-state guard; the
//! engine drives the visual sink from a worker thread while the guard keeps
//! triggers from overlapping.

mod controller;
pub mod run_state;

pub use controller::{RegenerateAction, SortAction, SortController};
pub use run_state::RunState;
