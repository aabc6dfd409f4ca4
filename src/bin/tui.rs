use sort_visualizer::{AlgorithmKind, RunTuiCommand, SequenceSize, Speed};

fn main() -> std::io::Result<()> {
    let algorithm = std::env::args()
        .nth(1)
        .and_then(|name| name.parse().ok())
        .unwrap_or(AlgorithmKind::Quick);
    let speed = Speed::default();
    let size = SequenceSize::new(40).expect("default sequence size is valid");

    let command = RunTuiCommand::new(algorithm, speed, size);
    command.execute()
}
