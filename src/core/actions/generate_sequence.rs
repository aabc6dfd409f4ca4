use crate::core::data::sequence::Sequence;
use crate::core::data::sequence_size::SequenceSize;
use rand::Rng;

pub const MIN_VALUE: u32 = 5;
pub const MAX_VALUE: u32 = 105;

/// Produces a fresh sequence of independently drawn heights in
/// [`MIN_VALUE`, `MAX_VALUE`).
pub fn generate_sequence<R: Rng>(size: SequenceSize, rng: &mut R) -> Sequence {
    let values = (0..size.get())
        .map(|_| rng.gen_range(MIN_VALUE..MAX_VALUE))
        .collect();

    Sequence::from_values(values)
}
