//! The step engine: five comparison sorts choreographed as timed visual
//! steps.
//!
//! Every algorithm shares the same contract: given a mutable sequence, a
//! visual sink and a pacer, emit a deterministic ordered stream of steps
//! that sorts the sequence in place and finishes with every element marked
//! sorted. `run_algorithm` is the single dispatch point.

pub mod bubble;
pub mod driver;
pub mod insertion;
pub mod merge;
pub mod ports;
pub mod quick;
pub mod selection;

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::core::data::sequence::Sequence;
use crate::core::data::step::Step;
use self::driver::StepDriver;
use self::ports::pacer::Pacer;
use self::ports::visual_sink::VisualSink;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AlgorithmKind {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl AlgorithmKind {
    pub const ALL: [Self; 5] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithmError {
    name: String,
}

impl fmt::Display for UnknownAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm '{}', expected one of: bubble, selection, insertion, merge, quick",
            self.name
        )
    }
}

impl Error for UnknownAlgorithmError {}

impl FromStr for AlgorithmKind {
    type Err = UnknownAlgorithmError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "bubble" => Ok(Self::Bubble),
            "selection" => Ok(Self::Selection),
            "insertion" => Ok(Self::Insertion),
            "merge" => Ok(Self::Merge),
            "quick" => Ok(Self::Quick),
            other => Err(UnknownAlgorithmError {
                name: other.to_string(),
            }),
        }
    }
}

/// Drives the chosen algorithm to completion over `sequence`, forwarding
/// every visual change to `sink` and yielding to `pacer` between steps.
/// Returns the ordered step stream of the run.
pub fn run_algorithm(
    kind: AlgorithmKind,
    sequence: &mut Sequence,
    sink: &dyn VisualSink,
    pacer: &mut dyn Pacer,
) -> Vec<Step> {
    let mut driver = StepDriver::new(sequence, sink, pacer);

    match kind {
        AlgorithmKind::Bubble => bubble::sort(&mut driver),
        AlgorithmKind::Selection => selection::sort(&mut driver),
        AlgorithmKind::Insertion => insertion::sort(&mut driver),
        AlgorithmKind::Merge => merge::sort(&mut driver),
        AlgorithmKind::Quick => quick::sort(&mut driver),
    }

    driver.into_steps()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::apply_steps::apply_steps;
    use crate::core::engine::ports::pacer::NoopPacer;
    use crate::core::engine::ports::visual_sink::HighlightRole;
    use crate::presenters::recording::{RecordingSink, SinkEvent};
    use std::collections::HashSet;

    fn run(kind: AlgorithmKind, values: Vec<u32>) -> (Sequence, Vec<Step>, Vec<SinkEvent>) {
        let mut sequence = Sequence::from_values(values);
        let sink = RecordingSink::new();
        let mut pacer = NoopPacer;

        let steps = run_algorithm(kind, &mut sequence, &sink, &mut pacer);

        (sequence, steps, sink.take_events())
    }

    fn sorted_copy(values: &[u32]) -> Vec<u32> {
        let mut copy = values.to_vec();
        copy.sort_unstable();
        copy
    }

    #[test]
    fn test_every_algorithm_sorts_to_the_same_permutation() {
        let inputs: Vec<Vec<u32>> = vec![
            vec![5, 3, 8, 1],
            vec![9, 9, 1, 1, 5, 5],
            vec![42],
            vec![],
            vec![2, 1],
            vec![17, 5, 99, 5, 23, 64, 8, 31, 31, 2],
        ];

        for kind in AlgorithmKind::ALL {
            for input in &inputs {
                let (sequence, _, _) = run(kind, input.clone());

                assert!(
                    sequence.is_non_decreasing(),
                    "{} left {:?} unsorted",
                    kind,
                    sequence.values()
                );
                assert_eq!(
                    sequence.values(),
                    sorted_copy(input),
                    "{} changed the multiset of {:?}",
                    kind,
                    input
                );
            }
        }
    }

    #[test]
    fn test_replaying_the_step_stream_reproduces_the_final_state() {
        let input = vec![17, 5, 99, 5, 23, 64, 8, 31, 31, 2];

        for kind in AlgorithmKind::ALL {
            let (sequence, steps, _) = run(kind, input.clone());

            let mut replayed = Sequence::from_values(input.clone());
            apply_steps(&mut replayed, &steps);

            assert_eq!(replayed, sequence, "{} stream replay diverged", kind);
        }
    }

    #[test]
    fn test_empty_and_singleton_sequences_emit_no_compare_or_swap() {
        for kind in AlgorithmKind::ALL {
            for input in [vec![], vec![7]] {
                let (_, steps, _) = run(kind, input.clone());

                assert!(
                    !steps.iter().any(|step| matches!(
                        step,
                        Step::Compare { .. } | Step::Swap { .. } | Step::Assign { .. }
                    )),
                    "{} emitted work steps for {:?}",
                    kind,
                    input
                );

                let marks = steps
                    .iter()
                    .filter(|step| matches!(step, Step::MarkSorted { .. }))
                    .count();
                assert_eq!(marks, input.len(), "{} mark count for {:?}", kind, input);
            }
        }
    }

    #[test]
    fn test_no_highlight_survives_completion() {
        let input = vec![23, 8, 42, 8, 16, 4, 99, 15];

        for kind in AlgorithmKind::ALL {
            let (_, _, events) = run(kind, input.clone());

            let mut outstanding: HashSet<(usize, HighlightRole)> = HashSet::new();
            for event in events {
                match event {
                    SinkEvent::Highlight { index, role } => {
                        outstanding.insert((index, role));
                    }
                    SinkEvent::Unhighlight { index, role } => {
                        outstanding.remove(&(index, role));
                    }
                    SinkEvent::SetHeight { .. } | SinkEvent::MarkSorted { .. } => {}
                }
            }

            assert!(
                outstanding.is_empty(),
                "{} leaked highlights: {:?}",
                kind,
                outstanding
            );
        }
    }

    #[test]
    fn test_every_element_ends_up_marked_sorted() {
        let input = vec![6, 2, 9, 1, 5];

        for kind in AlgorithmKind::ALL {
            let (_, steps, _) = run(kind, input.clone());

            let marked: HashSet<usize> = steps
                .iter()
                .filter_map(|step| match *step {
                    Step::MarkSorted { index } => Some(index),
                    _ => None,
                })
                .collect();

            assert_eq!(marked.len(), input.len(), "{} missed sorted marks", kind);
        }
    }

    #[test]
    fn test_quadratic_sorts_stay_within_their_swap_bound() {
        let values: Vec<u32> = (1..=10).rev().collect();

        for kind in [
            AlgorithmKind::Bubble,
            AlgorithmKind::Selection,
            AlgorithmKind::Insertion,
        ] {
            let (_, steps, _) = run(kind, values.clone());

            let swaps = steps
                .iter()
                .filter(|step| matches!(step, Step::Swap { .. }))
                .count();

            assert!(swaps <= 45, "{} exceeded n(n-1)/2 swaps: {}", kind, swaps);
        }
    }

    #[test]
    fn test_algorithm_names_round_trip() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(kind.name().parse::<AlgorithmKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_algorithm_name_is_rejected() {
        let error = "heap".parse::<AlgorithmKind>().unwrap_err();

        assert!(error.to_string().contains("heap"));
    }
}
