pub mod null;
pub mod recording;
#[cfg(feature = "tui")]
pub mod terminal;
