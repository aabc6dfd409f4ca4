use crate::core::actions::generate_sequence::generate_sequence;
use crate::core::data::sequence_size::SequenceSize;
use crate::core::engine::ports::pacer::NoopPacer;
use crate::core::engine::{AlgorithmKind, run_algorithm};
use crate::presenters::recording::RecordingSink;

/// Runs one sort over a fresh random sequence without pacing and prints a
/// summary to the console.
pub fn headless_controller(algorithm: AlgorithmKind) -> Result<(), Box<dyn std::error::Error>> {
    let size = SequenceSize::new(20)?;
    let mut rng = rand::thread_rng();
    let mut sequence = generate_sequence(size, &mut rng);

    println!("Sorting {} values with {} sort...", sequence.len(), algorithm);
    println!("Input:  {:?}", sequence.values());

    let sink = RecordingSink::new();
    let mut pacer = NoopPacer;
    let steps = run_algorithm(algorithm, &mut sequence, &sink, &mut pacer);

    println!("Output: {:?}", sequence.values());
    println!("Steps emitted: {}", steps.len());
    println!("Sink events:   {}", sink.event_count());

    Ok(())
}
