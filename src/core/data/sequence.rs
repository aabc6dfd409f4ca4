/// The sequence of bar heights under sort.
///
/// Length is fixed for the duration of a run; the step engine mutates it in
/// place through `swap` and `set` only. Indices handed to either method must
/// be in bounds — a violation is a programming defect and panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    values: Vec<u32>,
}

impl Sequence {
    #[must_use]
    pub fn from_values(values: Vec<u32>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn value(&self, index: usize) -> u32 {
        self.values[index]
    }

    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        assert!(
            i < self.values.len() && j < self.values.len(),
            "swap indices ({}, {}) out of bounds for length {}",
            i,
            j,
            self.values.len()
        );
        self.values.swap(i, j);
    }

    pub fn set(&mut self, index: usize, value: u32) {
        assert!(
            index < self.values.len(),
            "assign index {} out of bounds for length {}",
            index,
            self.values.len()
        );
        self.values[index] = value;
    }

    #[must_use]
    pub fn is_non_decreasing(&self) -> bool {
        self.values.windows(2).all(|pair| pair[0] <= pair[1])
    }
}
