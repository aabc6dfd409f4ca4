use crate::core::data::speed::Pace;
use crate::core::engine::driver::StepDriver;
use crate::core::engine::ports::visual_sink::HighlightRole;

/// Top-down recursive merge sort. Each merge reads from a snapshot of the
/// sequence so writes never clobber values still waiting to be placed.
pub fn sort(driver: &mut StepDriver<'_>) {
    let len = driver.len();

    if len > 0 {
        sort_range(driver, 0, len - 1);
    }

    driver.mark_all_sorted(Pace::Fifth);
}

fn sort_range(driver: &mut StepDriver<'_>, low: usize, high: usize) {
    if low < high {
        let mid = (low + high) / 2;

        sort_range(driver, low, mid);
        sort_range(driver, mid + 1, high);
        merge(driver, low, mid, high);
    }
}

fn merge(driver: &mut StepDriver<'_>, low: usize, mid: usize, high: usize) {
    let snapshot = driver.snapshot();

    let mut i = low;
    let mut j = mid + 1;
    let mut k = low;

    while i <= mid && j <= high {
        driver.note_compare(i, j);
        driver.highlight(i, HighlightRole::Comparing);
        driver.highlight(j, HighlightRole::Comparing);
        driver.pause(Pace::Full);

        // `<=` so equal keys keep the left half's element first.
        if snapshot[i] <= snapshot[j] {
            driver.place(k, snapshot[i]);
            driver.unhighlight(i, HighlightRole::Comparing);
            i += 1;
        } else {
            driver.place(k, snapshot[j]);
            driver.unhighlight(j, HighlightRole::Comparing);
            j += 1;
        }

        driver.pause(Pace::Full);
        k += 1;
    }

    while i <= mid {
        driver.assign(k, snapshot[i]);
        i += 1;
        k += 1;
    }

    while j <= high {
        driver.assign(k, snapshot[j]);
        j += 1;
        k += 1;
    }

    for index in low..=high {
        driver.unhighlight(index, HighlightRole::Comparing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::sequence::Sequence;
    use crate::core::data::step::Step;
    use crate::core::engine::ports::pacer::NoopPacer;
    use crate::presenters::recording::{RecordingSink, SinkEvent};

    fn run(values: Vec<u32>) -> (Sequence, Vec<Step>, Vec<SinkEvent>) {
        let mut sequence = Sequence::from_values(values);
        let sink = RecordingSink::new();
        let mut pacer = NoopPacer;
        let mut driver = StepDriver::new(&mut sequence, &sink, &mut pacer);

        sort(&mut driver);
        let steps = driver.into_steps();

        (sequence, steps, sink.take_events())
    }

    #[test]
    fn test_sorts_sample_input() {
        let (sequence, _, _) = run(vec![38, 27, 43, 3, 9, 82, 10]);

        assert_eq!(sequence.values(), &[3, 9, 10, 27, 38, 43, 82]);
    }

    #[test]
    fn test_only_assigns_no_swaps() {
        let (_, steps, _) = run(vec![5, 1, 4, 2]);

        assert!(!steps.iter().any(|step| matches!(step, Step::Swap { .. })));
        assert!(
            steps
                .iter()
                .any(|step| matches!(step, Step::Assign { .. }))
        );
    }

    #[test]
    fn test_compare_count_is_bounded_by_n_log_n() {
        let values: Vec<u32> = (0..32).rev().collect();
        let (_, steps, _) = run(values);

        let compares = steps
            .iter()
            .filter(|step| matches!(step, Step::Compare { .. }))
            .count();

        // 32 elements, ceil(log2) = 5 levels.
        assert!(compares <= 32 * 5);
    }

    #[test]
    fn test_equal_values_take_the_left_half_first() {
        let (_, _, events) = run(vec![7, 7]);

        // The left element's highlight is released right after its value is
        // placed; with a right-half preference the release would hit index 1.
        let placed = events
            .iter()
            .position(|event| matches!(event, SinkEvent::SetHeight { index: 0, .. }))
            .unwrap();

        assert_eq!(
            events[placed + 1],
            SinkEvent::Unhighlight {
                index: 0,
                role: HighlightRole::Comparing
            }
        );
    }

    #[test]
    fn test_final_sweep_marks_every_bar() {
        let (_, steps, _) = run(vec![2, 1, 3]);

        let marks: Vec<usize> = steps
            .iter()
            .filter_map(|step| match *step {
                Step::MarkSorted { index } => Some(index),
                _ => None,
            })
            .collect();

        assert_eq!(marks, vec![0, 1, 2]);
    }

    #[test]
    fn test_exhausted_side_drains_in_order() {
        // Left half [1, 2] exhausts first; the right half's 8 and 9 drain
        // without further comparisons.
        let (sequence, steps, _) = run(vec![1, 2, 8, 9]);

        assert_eq!(sequence.values(), &[1, 2, 8, 9]);

        let top_level_compares = steps
            .iter()
            .filter(|step| matches!(step, Step::Compare { i: 0 | 1, j: 2 | 3 }))
            .count();

        assert_eq!(top_level_compares, 2);
    }
}
