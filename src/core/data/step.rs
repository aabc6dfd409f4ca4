/// One atomic visualized operation emitted by a sort run.
///
/// A run's step stream is deterministic and ordered: replaying it over the
/// initial sequence reproduces the final sorted state. Only `Swap` and
/// `Assign` mutate; the rest describe highlighting.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    Compare { i: usize, j: usize },
    Swap { i: usize, j: usize },
    Assign { index: usize, value: u32 },
    MarkSorted { index: usize },
    MarkPivot { index: usize },
    UnmarkPivot { index: usize },
}
