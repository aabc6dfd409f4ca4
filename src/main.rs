use sort_visualizer::{AlgorithmKind, UnknownAlgorithmError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let algorithm = parse_algorithm(std::env::args().nth(1))?;

    sort_visualizer::headless_controller(algorithm)
}

fn parse_algorithm(arg: Option<String>) -> Result<AlgorithmKind, UnknownAlgorithmError> {
    match arg {
        Some(name) => name.parse(),
        None => Ok(AlgorithmKind::Quick),
    }
}
