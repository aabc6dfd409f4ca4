use crate::controllers::sort::run_state::RunState;
use crate::core::actions::generate_sequence::generate_sequence;
use crate::core::data::sequence::Sequence;
use crate::core::data::sequence_size::SequenceSize;
use crate::core::data::speed::Speed;
use crate::core::data::step::Step;
use crate::core::engine::ports::pacer::ThreadPacer;
use crate::core::engine::ports::visual_sink::VisualSink;
use crate::core::engine::{AlgorithmKind, run_algorithm};
use rand::Rng;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAction {
    Started,
    AlreadySorting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegenerateAction {
    Regenerated,
    AlreadySorting,
}

/// Application-layer entry point for one visualization session.
///
/// Owns the sequence and the run-state guard. `start_sort` claims the flag
/// on the caller's thread, so a second trigger while a run is active is a
/// deterministic no-op, then hands the run to a worker thread that paces
/// itself with the speed-derived delay and releases the flag on completion.
pub struct SortController {
    sequence: Arc<Mutex<Sequence>>,
    run_state: Arc<RunState>,
    sink: Arc<dyn VisualSink>,
    current_run: Mutex<Option<JoinHandle<Vec<Step>>>>,
}

impl SortController {
    pub fn new(sequence: Sequence, sink: Arc<dyn VisualSink>) -> Self {
        Self {
            sequence: Arc::new(Mutex::new(sequence)),
            run_state: Arc::new(RunState::new()),
            sink,
            current_run: Mutex::new(None),
        }
    }

    pub fn start_sort(&self, kind: AlgorithmKind, speed: Speed) -> SortAction {
        if !self.run_state.try_start() {
            return SortAction::AlreadySorting;
        }

        let sequence = Arc::clone(&self.sequence);
        let run_state = Arc::clone(&self.run_state);
        let sink = Arc::clone(&self.sink);

        let worker = thread::spawn(move || {
            let mut pacer = ThreadPacer::new(speed);
            let steps = {
                let mut guard = sequence.lock().unwrap();
                run_algorithm(kind, &mut guard, sink.as_ref(), &mut pacer)
            };

            run_state.finish();
            steps
        });

        let mut slot = self.current_run.lock().unwrap();
        if let Some(previous) = slot.replace(worker) {
            // The flag was free, so the previous worker has already finished.
            let _ = previous.join();
        }

        SortAction::Started
    }

    /// Joins the active run, if any, and returns its step stream.
    pub fn wait_for_completion(&self) -> Option<Vec<Step>> {
        let handle = self.current_run.lock().unwrap().take();
        handle.map(|worker| worker.join().expect("sort worker panicked"))
    }

    /// Replaces the sequence with fresh random heights and pushes them to
    /// the sink. Silent no-op while a sort is running.
    pub fn regenerate<R: Rng>(&self, size: SequenceSize, rng: &mut R) -> RegenerateAction {
        if self.run_state.is_sorting() {
            return RegenerateAction::AlreadySorting;
        }

        let fresh = generate_sequence(size, rng);
        for (index, &value) in fresh.values().iter().enumerate() {
            self.sink.set_height(index, value);
        }
        *self.sequence.lock().unwrap() = fresh;

        RegenerateAction::Regenerated
    }

    #[must_use]
    pub fn values(&self) -> Vec<u32> {
        self.sequence.lock().unwrap().values().to_vec()
    }

    #[must_use]
    pub fn is_sorting(&self) -> bool {
        self.run_state.is_sorting()
    }
}

impl Drop for SortController {
    fn drop(&mut self) {
        let _ = self.wait_for_completion();
    }
}
