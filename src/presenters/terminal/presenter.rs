use crate::core::actions::generate_sequence::MAX_VALUE;
use crate::core::engine::ports::visual_sink::{HighlightRole, VisualSink};
use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};
use std::io::{Stdout, Write, stdout};
use std::sync::Mutex;

const BAR_CELL: &str = "█";
const EMPTY_CELL: &str = " ";

#[derive(Debug, Copy, Clone, Default)]
struct BarFlags {
    comparing: bool,
    pivot: bool,
    sorted: bool,
}

impl BarFlags {
    fn colour(self) -> Color {
        if self.comparing {
            Color::Yellow
        } else if self.pivot {
            Color::Magenta
        } else if self.sorted {
            Color::Green
        } else {
            Color::Cyan
        }
    }
}

struct TerminalState {
    out: Stdout,
    heights: Vec<u32>,
    flags: Vec<BarFlags>,
    rows: u16,
}

/// Renders the sequence as a row of coloured bar columns.
///
/// Each bar occupies two columns (bar plus gap); comparing bars turn
/// yellow, the pivot magenta and settled bars green. The sort worker calls
/// in through `VisualSink`, so all terminal state sits behind a mutex.
pub struct TerminalPresenter {
    state: Mutex<TerminalState>,
}

impl TerminalPresenter {
    pub fn new(heights: Vec<u32>, rows: u16) -> std::io::Result<Self> {
        let flags = vec![BarFlags::default(); heights.len()];
        let mut state = TerminalState {
            out: stdout(),
            heights,
            flags,
            rows,
        };

        execute!(state.out, Clear(ClearType::All))?;
        for index in 0..state.heights.len() {
            draw_bar(&mut state, index)?;
        }
        state.out.flush()?;

        Ok(Self {
            state: Mutex::new(state),
        })
    }

    fn with_bar(&self, index: usize, update: impl FnOnce(&mut BarFlags)) {
        let mut state = self.state.lock().unwrap();
        if index >= state.flags.len() {
            return;
        }

        update(&mut state.flags[index]);
        let _ = draw_bar(&mut state, index);
        let _ = state.out.flush();
    }
}

fn draw_bar(state: &mut TerminalState, index: usize) -> std::io::Result<()> {
    let column = (index as u16) * 2;
    let rows = state.rows;
    let filled = filled_rows(state.heights[index], rows);
    let colour = state.flags[index].colour();

    queue!(state.out, SetForegroundColor(colour))?;
    for row in 0..rows {
        let cell = if rows - row <= filled {
            BAR_CELL
        } else {
            EMPTY_CELL
        };
        queue!(state.out, MoveTo(column, row), Print(cell))?;
    }
    queue!(state.out, ResetColor)?;

    Ok(())
}

fn filled_rows(value: u32, rows: u16) -> u16 {
    let scaled = (u64::from(value) * u64::from(rows)) / u64::from(MAX_VALUE);
    (scaled as u16).clamp(1, rows)
}

impl VisualSink for TerminalPresenter {
    fn highlight(&self, index: usize, role: HighlightRole) {
        self.with_bar(index, |flags| match role {
            HighlightRole::Comparing => flags.comparing = true,
            HighlightRole::Pivot => flags.pivot = true,
        });
    }

    fn unhighlight(&self, index: usize, role: HighlightRole) {
        self.with_bar(index, |flags| match role {
            HighlightRole::Comparing => flags.comparing = false,
            HighlightRole::Pivot => flags.pivot = false,
        });
    }

    fn set_height(&self, index: usize, value: u32) {
        let mut state = self.state.lock().unwrap();
        if index >= state.heights.len() {
            return;
        }

        state.heights[index] = value;
        let _ = draw_bar(&mut state, index);
        let _ = state.out.flush();
    }

    fn mark_sorted(&self, index: usize) {
        self.with_bar(index, |flags| flags.sorted = true);
    }
}
