use crate::core::data::speed::Pace;
use crate::core::engine::driver::StepDriver;
use crate::core::engine::ports::visual_sink::HighlightRole;

/// Selection sort: each pass scans the unsorted suffix for its minimum,
/// keeping the current minimum lit while candidates come and go, then swaps
/// it into place only if it moved.
pub fn sort(driver: &mut StepDriver<'_>) {
    let len = driver.len();

    for i in 0..len.saturating_sub(1) {
        let mut min_index = i;

        for j in (i + 1)..len {
            driver.note_compare(min_index, j);
            driver.highlight(j, HighlightRole::Comparing);
            driver.highlight(min_index, HighlightRole::Comparing);
            driver.pause(Pace::Half);

            if driver.value(j) < driver.value(min_index) {
                driver.unhighlight(min_index, HighlightRole::Comparing);
                min_index = j;
            } else {
                driver.unhighlight(j, HighlightRole::Comparing);
            }
        }

        // Release the surviving minimum before it settles.
        driver.unhighlight(min_index, HighlightRole::Comparing);

        if min_index != i {
            driver.swap(i, min_index);
        }
        driver.mark_sorted(i, Pace::Half);
    }

    if len > 0 {
        driver.mark_sorted(len - 1, Pace::Half);
    }
}
