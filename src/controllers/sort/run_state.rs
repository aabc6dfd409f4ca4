use std::sync::atomic::{AtomicBool, Ordering};

/// The "sorting in progress" flag shared between the triggering glue and
/// the engine. At most one run holds it at a time.
#[derive(Debug, Default)]
pub struct RunState {
    sorting: AtomicBool,
}

impl RunState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the flag. Returns false when a run already holds it, in which
    /// case the caller must treat the trigger as a silent no-op.
    pub fn try_start(&self) -> bool {
        self.sorting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn finish(&self) {
        self.sorting.store(false, Ordering::Release);
    }

    #[must_use]
    pub fn is_sorting(&self) -> bool {
        self.sorting.load(Ordering::Acquire)
    }
}
