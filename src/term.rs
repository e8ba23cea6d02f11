use std::io::{Stdout, Write, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::event::{Event, poll, read};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};

use crate::{Coord, TermInt};
use crate::game::{Field, GameState};
use crate::grid::Position;
use crate::input::{InputEvent, InputSource};
use crate::runner::Renderer;

/// Terminal columns used by one board cell, so cells look roughly square.
pub const CELL_WIDTH: TermInt = 2;
/// Terminal rows taken by the status block under the board.
pub const STATUS_LINES: TermInt = 3;

const EMPTY_COLOR: Color = Color::DarkGrey;
const FOOD_COLOR: Color = Color::Red;
const HEAD_COLOR: Color = Color::Green;
const BODY_COLOR: Color = Color::DarkGreen;

pub fn terminal_size() -> Result<(TermInt, TermInt)> {
    terminal::size().context("Error reading terminal size")
}

pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        terminal::enable_raw_mode().context("Error enabling raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking, terminal::Clear(ClearType::All))
            .context("Error preparing the screen")?;
        Ok(())
    }

    /// Puts the terminal back the way it was. Every step is attempted even
    /// when an earlier one fails; the first failure is returned.
    pub fn restore(&mut self) -> Result<()> {
        let raw = terminal::disable_raw_mode().context("Error disabling raw mode");
        let screen = execute!(
            self.stdout,
            style::ResetColor,
            cursor::Show,
            cursor::EnableBlinking,
            LeaveAlternateScreen
        )
        .context("Error leaving alt screen");
        raw.and(screen)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn paint_cell(&mut self, pos: Position, color: Color) -> Result<()> {
        let column = pos.x as TermInt * CELL_WIDTH;
        queue!(
            self.stdout,
            cursor::MoveTo(column, pos.y as TermInt),
            style::SetBackgroundColor(color),
            style::Print("  ")
        )?;
        Ok(())
    }

    fn print_line(&mut self, row: TermInt, line: &str) -> Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(0, row),
            style::Print(line),
            terminal::Clear(ClearType::UntilNewLine)
        )?;
        Ok(())
    }
}

impl Renderer for TermManager {
    fn draw(&mut self, game: &GameState) -> Result<()> {
        for y in 0..game.height() as Coord {
            for x in 0..game.width() as Coord {
                let pos = Position::new(x, y);
                let color = match game.lookup(pos) {
                    Some(Field::Snake) => continue,
                    Some(Field::Food) => FOOD_COLOR,
                    Some(Field::Empty) | None => EMPTY_COLOR,
                };
                self.paint_cell(pos, color)?;
            }
        }

        for (i, pos) in game.snake().segments().enumerate() {
            let color = if i == 0 { HEAD_COLOR } else { BODY_COLOR };
            self.paint_cell(*pos, color)?;
        }

        let head = game.snake().head();

        queue!(self.stdout, style::ResetColor)?;

        let status_row = game.height() as TermInt;
        self.print_line(status_row, &format!("Round: {}", game.round()))?;
        self.print_line(status_row + 1, &format!("Score: {}", game.score()))?;
        self.print_line(
            status_row + 2,
            &format!("Snake: length {}, head x {}, head y {}", game.desired_len(), head.x, head.y),
        )?;

        self.stdout.flush().context("Error flushing")?;
        Ok(())
    }
}

/// Key events read from the terminal.
pub struct KeyReader;

impl InputSource for KeyReader {
    fn poll_event(&mut self, timeout: Duration) -> Option<InputEvent> {
        match poll(timeout) {
            Ok(false) => None,
            Ok(true) => match read() {
                Ok(Event::Key(ev)) => Some(InputEvent::from_key(&ev)),
                Ok(_) => Some(InputEvent::Ignored),
                Err(err) => Some(InputEvent::Error(err.to_string())),
            },
            Err(err) => Some(InputEvent::Error(err.to_string())),
        }
    }
}
