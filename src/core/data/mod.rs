pub mod sequence;
pub mod sequence_size;
pub mod speed;
pub mod step;
