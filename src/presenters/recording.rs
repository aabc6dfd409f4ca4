use crate::core::engine::ports::visual_sink::{HighlightRole, VisualSink};
use std::sync::Mutex;

/// One captured sink call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Highlight { index: usize, role: HighlightRole },
    Unhighlight { index: usize, role: HighlightRole },
    SetHeight { index: usize, value: u32 },
    MarkSorted { index: usize },
}

/// Captures every sink call in order.
///
/// This is the observation surface for a run's visual choreography: tests
/// assert against the event log, and headless callers can inspect it after
/// the run completes.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_events(&self) -> Vec<SinkEvent> {
        let mut guard = self.events.lock().unwrap();
        std::mem::take(&mut *guard)
    }

    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl VisualSink for RecordingSink {
    fn highlight(&self, index: usize, role: HighlightRole) {
        self.events
            .lock()
            .unwrap()
            .push(SinkEvent::Highlight { index, role });
    }

    fn unhighlight(&self, index: usize, role: HighlightRole) {
        self.events
            .lock()
            .unwrap()
            .push(SinkEvent::Unhighlight { index, role });
    }

    fn set_height(&self, index: usize, value: u32) {
        self.events
            .lock()
            .unwrap()
            .push(SinkEvent::SetHeight { index, value });
    }

    fn mark_sorted(&self, index: usize) {
        self.events
            .lock()
            .unwrap()
            .push(SinkEvent::MarkSorted { index });
    }
}
