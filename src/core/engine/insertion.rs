use crate::core::data::speed::Pace;
use crate::core::engine::driver::StepDriver;

/// Insertion sort: shifts each element left through adjacent swaps while
/// its left neighbour is strictly greater.
///
/// The per-iteration sorted mark lands on index `i`, the cursor's starting
/// position, not where the value ends up after shifting. That is the
/// observed behavior and is kept as-is.
pub fn sort(driver: &mut StepDriver<'_>) {
    let len = driver.len();

    for i in 1..len {
        let mut j = i;

        while j > 0 {
            driver.note_compare(j - 1, j);
            if driver.value(j - 1) > driver.value(j) {
                driver.swap(j - 1, j);
                j -= 1;
            } else {
                break;
            }
        }

        driver.mark_sorted(i, Pace::Half);
    }

    driver.mark_all_sorted(Pace::Instant);
}
