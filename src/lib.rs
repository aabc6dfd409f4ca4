mod controllers;
mod core;
#[cfg(feature = "tui")]
mod input;
mod presenters;

pub use controllers::headless::headless_controller;
pub use controllers::sort::{RegenerateAction, RunState, SortAction, SortController};
pub use crate::core::actions::apply_steps::apply_steps;
pub use crate::core::actions::generate_sequence::generate_sequence;
pub use crate::core::data::sequence::Sequence;
pub use crate::core::data::sequence_size::{SequenceSize, SequenceSizeError};
pub use crate::core::data::speed::{Pace, Speed, SpeedError};
pub use crate::core::data::step::Step;
pub use crate::core::engine::ports::pacer::{NoopPacer, Pacer, ThreadPacer};
pub use crate::core::engine::ports::visual_sink::{HighlightRole, VisualSink};
pub use crate::core::engine::{AlgorithmKind, UnknownAlgorithmError, run_algorithm};
pub use presenters::null::NullSink;
pub use presenters::recording::{RecordingSink, SinkEvent};

#[cfg(feature = "tui")]
pub use input::tui::run_tui::RunTuiCommand;
#[cfg(feature = "tui")]
pub use presenters::terminal::TerminalPresenter;
