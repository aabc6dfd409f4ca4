pub mod apply_steps;
pub mod generate_sequence;
