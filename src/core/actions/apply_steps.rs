use crate::core::data::sequence::Sequence;
use crate::core::data::step::Step;

/// Replays a recorded step stream onto a sequence.
///
/// Highlight and mark steps carry no data changes, so replaying a full run's
/// stream over a copy of the initial sequence reproduces the engine's final
/// state.
pub fn apply_steps(sequence: &mut Sequence, steps: &[Step]) {
    for step in steps {
        match *step {
            Step::Swap { i, j } => sequence.swap(i, j),
            Step::Assign { index, value } => sequence.set(index, value),
            Step::Compare { .. }
            | Step::MarkSorted { .. }
            | Step::MarkPivot { .. }
            | Step::UnmarkPivot { .. } => {}
        }
    }
}
