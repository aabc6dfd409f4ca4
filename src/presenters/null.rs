use crate::core::engine::ports::visual_sink::{HighlightRole, VisualSink};

/// Discards every sink call; for benchmarks and headless runs where only
/// the sorted result and the step stream matter.
#[derive(Debug, Copy, Clone, Default)]
pub struct NullSink;

impl VisualSink for NullSink {
    fn highlight(&self, _index: usize, _role: HighlightRole) {}

    fn unhighlight(&self, _index: usize, _role: HighlightRole) {}

    fn set_height(&self, _index: usize, _value: u32) {}

    fn mark_sorted(&self, _index: usize) {}
}
