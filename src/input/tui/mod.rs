pub mod run_tui;

pub use run_tui::RunTuiCommand;
