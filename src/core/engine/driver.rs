use crate::core::data::sequence::Sequence;
use crate::core::data::speed::Pace;
use crate::core::data::step::Step;
use crate::core::engine::ports::pacer::Pacer;
use crate::core::engine::ports::visual_sink::{HighlightRole, VisualSink};

/// Couples the sequence under sort with the visual sink, the pacer and the
/// step log for one run.
///
/// The high-level operations own the per-step choreography: a `swap`
/// highlights both bars, pauses, exchanges and pushes the new heights,
/// pauses again and releases the highlights. Algorithms with asymmetric
/// highlighting (selection's surviving minimum, merge's taken side) compose
/// the raw passthroughs instead.
pub struct StepDriver<'a> {
    sequence: &'a mut Sequence,
    sink: &'a dyn VisualSink,
    pacer: &'a mut dyn Pacer,
    steps: Vec<Step>,
}

impl<'a> StepDriver<'a> {
    pub fn new(
        sequence: &'a mut Sequence,
        sink: &'a dyn VisualSink,
        pacer: &'a mut dyn Pacer,
    ) -> Self {
        Self {
            sequence,
            sink,
            pacer,
            steps: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    #[must_use]
    pub fn value(&self, index: usize) -> u32 {
        self.sequence.value(index)
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<u32> {
        self.sequence.values().to_vec()
    }

    pub fn pause(&mut self, pace: Pace) {
        self.pacer.pause(pace);
    }

    pub fn highlight(&mut self, index: usize, role: HighlightRole) {
        self.sink.highlight(index, role);
    }

    pub fn unhighlight(&mut self, index: usize, role: HighlightRole) {
        self.sink.unhighlight(index, role);
    }

    /// Records a comparison without touching the sink. Bubble and insertion
    /// compare silently; the other algorithms pair this with explicit
    /// highlights.
    pub fn note_compare(&mut self, i: usize, j: usize) {
        self.steps.push(Step::Compare { i, j });
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.steps.push(Step::Swap { i, j });

        self.sink.highlight(i, HighlightRole::Comparing);
        self.sink.highlight(j, HighlightRole::Comparing);
        self.pacer.pause(Pace::Full);

        self.sequence.swap(i, j);
        self.sink.set_height(i, self.sequence.value(i));
        self.sink.set_height(j, self.sequence.value(j));
        self.pacer.pause(Pace::Full);

        self.sink.unhighlight(i, HighlightRole::Comparing);
        self.sink.unhighlight(j, HighlightRole::Comparing);
    }

    /// Overwrites one slot and pushes the new height, without pausing.
    /// Merge's main loop releases the taken side's highlight between the
    /// write and the trailing pause.
    pub fn place(&mut self, index: usize, value: u32) {
        self.steps.push(Step::Assign { index, value });
        self.sequence.set(index, value);
        self.sink.set_height(index, value);
    }

    pub fn assign(&mut self, index: usize, value: u32) {
        self.place(index, value);
        self.pacer.pause(Pace::Full);
    }

    pub fn mark_sorted(&mut self, index: usize, pace: Pace) {
        self.steps.push(Step::MarkSorted { index });
        self.sink.mark_sorted(index);
        self.pacer.pause(pace);
    }

    pub fn mark_all_sorted(&mut self, pace: Pace) {
        for index in 0..self.sequence.len() {
            self.mark_sorted(index, pace);
        }
    }

    pub fn mark_pivot(&mut self, index: usize) {
        self.steps.push(Step::MarkPivot { index });
        self.sink.highlight(index, HighlightRole::Pivot);
    }

    pub fn unmark_pivot(&mut self, index: usize) {
        self.steps.push(Step::UnmarkPivot { index });
        self.sink.unhighlight(index, HighlightRole::Pivot);
    }

    #[must_use]
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}
