use crate::core::data::speed::Pace;
use crate::core::engine::driver::StepDriver;

/// Bubble sort: each pass floats the largest unsorted value to the right
/// edge through adjacent swaps, then marks that edge sorted. Equal
/// neighbours never swap.
pub fn sort(driver: &mut StepDriver<'_>) {
    let len = driver.len();

    for i in 0..len.saturating_sub(1) {
        for j in 0..len - i - 1 {
            driver.note_compare(j, j + 1);
            if driver.value(j) > driver.value(j + 1) {
                driver.swap(j, j + 1);
            }
        }
        driver.mark_sorted(len - i - 1, Pace::Half);
    }

    driver.mark_all_sorted(Pace::Instant);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::sequence::Sequence;
    use crate::core::data::step::Step;
    use crate::core::engine::ports::pacer::NoopPacer;
    use crate::presenters::recording::RecordingSink;

    fn run(values: Vec<u32>) -> (Sequence, Vec<Step>) {
        let mut sequence = Sequence::from_values(values);
        let sink = RecordingSink::new();
        let mut pacer = NoopPacer;
        let mut driver = StepDriver::new(&mut sequence, &sink, &mut pacer);

        sort(&mut driver);
        let steps = driver.into_steps();

        (sequence, steps)
    }

    fn swaps(steps: &[Step]) -> Vec<(usize, usize)> {
        steps
            .iter()
            .filter_map(|step| match *step {
                Step::Swap { i, j } => Some((i, j)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_sorts_sample_input() {
        let (sequence, _) = run(vec![64, 34, 25, 12, 22, 11, 90]);

        assert_eq!(sequence.values(), &[11, 12, 22, 25, 34, 64, 90]);
    }

    #[test]
    fn test_known_input_produces_expected_swap_sequence() {
        let (sequence, steps) = run(vec![5, 3, 8, 1]);

        assert_eq!(sequence.values(), &[1, 3, 5, 8]);
        assert_eq!(swaps(&steps), vec![(0, 1), (2, 3), (1, 2), (0, 1)]);
    }

    #[test]
    fn test_equal_elements_never_swap() {
        let (_, steps) = run(vec![7, 7, 7, 7]);

        assert!(swaps(&steps).is_empty());
    }

    #[test]
    fn test_reverse_input_swaps_every_pair() {
        let (sequence, steps) = run(vec![5, 4, 3, 2, 1]);

        assert!(sequence.is_non_decreasing());
        assert_eq!(swaps(&steps).len(), 10);
    }

    #[test]
    fn test_each_pass_marks_the_settled_edge() {
        let (_, steps) = run(vec![3, 2, 1]);

        let marks: Vec<usize> = steps
            .iter()
            .filter_map(|step| match *step {
                Step::MarkSorted { index } => Some(index),
                _ => None,
            })
            .collect();

        // Pass marks right to left, then the final sweep re-marks everything.
        assert_eq!(marks, vec![2, 1, 0, 1, 2]);
    }
}
