use crate::core::data::speed::Pace;
use crate::core::engine::driver::StepDriver;
use crate::core::engine::ports::visual_sink::HighlightRole;

/// Quicksort with the Lomuto partition scheme: the last element of each
/// range is the pivot and keeps a pivot-role highlight for the whole
/// partition step.
pub fn sort(driver: &mut StepDriver<'_>) {
    let len = driver.len();

    if len > 0 {
        sort_range(driver, 0, len - 1);
    }

    driver.mark_all_sorted(Pace::Fifth);
}

fn sort_range(driver: &mut StepDriver<'_>, low: usize, high: usize) {
    if low < high {
        let pivot_index = partition(driver, low, high);

        if pivot_index > 0 {
            sort_range(driver, low, pivot_index - 1);
        }
        sort_range(driver, pivot_index + 1, high);
    }
}

fn partition(driver: &mut StepDriver<'_>, low: usize, high: usize) -> usize {
    let pivot = driver.value(high);
    driver.mark_pivot(high);

    // Next slot for a value smaller than the pivot.
    let mut store = low;

    for j in low..high {
        driver.note_compare(j, high);
        driver.highlight(j, HighlightRole::Comparing);
        driver.pause(Pace::Half);

        if driver.value(j) < pivot {
            driver.swap(store, j);
            store += 1;
        }

        driver.unhighlight(j, HighlightRole::Comparing);
    }

    driver.swap(store, high);
    driver.unmark_pivot(high);

    store
}
