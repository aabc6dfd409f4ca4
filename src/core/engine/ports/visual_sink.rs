#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HighlightRole {
    Comparing,
    Pivot,
}

/// Rendering surface driven by the step engine.
///
/// The engine calls these in step order from its worker thread; adapters own
/// whatever drawing state they need behind interior mutability. Roles are
/// independent: a bar can hold a pivot highlight while a comparing highlight
/// comes and goes.
pub trait VisualSink: Send + Sync {
    fn highlight(&self, index: usize, role: HighlightRole);
    fn unhighlight(&self, index: usize, role: HighlightRole);
    fn set_height(&self, index: usize, value: u32);
    fn mark_sorted(&self, index: usize);
}
