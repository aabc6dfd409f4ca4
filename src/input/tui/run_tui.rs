use crate::core::actions::generate_sequence::generate_sequence;
use crate::core::data::sequence_size::SequenceSize;
use crate::core::data::speed::Speed;
use crate::core::engine::ports::pacer::ThreadPacer;
use crate::core::engine::{AlgorithmKind, run_algorithm};
use crate::presenters::terminal::TerminalPresenter;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::style::Print;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

const BAR_ROWS: u16 = 24;

/// Sets up the terminal, runs one paced sort in the alternate screen and
/// restores the terminal once a key is pressed.
pub struct RunTuiCommand {
    algorithm: AlgorithmKind,
    speed: Speed,
    size: SequenceSize,
}

impl RunTuiCommand {
    #[must_use]
    pub fn new(algorithm: AlgorithmKind, speed: Speed, size: SequenceSize) -> Self {
        Self {
            algorithm,
            speed,
            size,
        }
    }

    pub fn execute(&self) -> std::io::Result<()> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide)?;

        let run_result = self.run_sort();

        let restore_result = restore_terminal();
        run_result?;
        restore_result
    }

    fn run_sort(&self) -> std::io::Result<()> {
        let mut rng = rand::thread_rng();
        let mut sequence = generate_sequence(self.size, &mut rng);

        let presenter = TerminalPresenter::new(sequence.values().to_vec(), BAR_ROWS)?;
        let mut pacer = ThreadPacer::new(self.speed);
        let _steps = run_algorithm(self.algorithm, &mut sequence, &presenter, &mut pacer);

        execute!(
            stdout(),
            MoveTo(0, BAR_ROWS + 1),
            Print(format!(
                "{} sort finished - press any key to exit",
                self.algorithm
            ))
        )?;
        wait_for_key()
    }
}

fn wait_for_key() -> std::io::Result<()> {
    loop {
        if let Event::Key(_) = event::read()? {
            return Ok(());
        }
    }
}

fn restore_terminal() -> std::io::Result<()> {
    execute!(stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()
}
