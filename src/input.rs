use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, error};

use crate::direction::Direction::{self, *};
use crate::session::{EndReason, Session};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Steer(Direction),
    Quit,
    /// The source was told to stop waiting. Crossterm has no such event, so
    /// `KeyReader` never produces it.
    Interrupt,
    Error(String),
    Ignored,
}

pub trait InputSource {
    /// Waits up to `timeout` for the next event. `None` if nothing arrived.
    fn poll_event(&mut self, timeout: Duration) -> Option<InputEvent>;
}

impl InputEvent {
    pub fn from_key(ev: &KeyEvent) -> InputEvent {
        if is_quit_combo(ev) {
            return InputEvent::Quit;
        }

        match ev.code {
            KeyCode::Char('w') | KeyCode::Up => InputEvent::Steer(Up),
            KeyCode::Char('a') | KeyCode::Left => InputEvent::Steer(Left),
            KeyCode::Char('s') | KeyCode::Down => InputEvent::Steer(Down),
            KeyCode::Char('d') | KeyCode::Right => InputEvent::Steer(Right),
            KeyCode::Char('q') | KeyCode::Esc => InputEvent::Quit,
            _ => InputEvent::Ignored,
        }
    }
}

/// Feeds key presses into `session` until the session ends or the input
/// stream gives up. `poll_interval` bounds how long an ended session can go
/// unnoticed.
pub fn listen<S: InputSource>(source: &mut S, session: &Session, poll_interval: Duration) {
    while !session.is_over() {
        let event = match source.poll_event(poll_interval) {
            Some(event) => event,
            None => continue,
        };

        match event {
            InputEvent::Steer(dir) => {
                if !session.steer(dir) {
                    debug!("Ignored reversal to {:?}", dir);
                }
            },
            InputEvent::Quit => session.end(EndReason::Quit),
            InputEvent::Interrupt => session.end(EndReason::Interrupted),
            InputEvent::Error(err) => {
                error!("Input stream failed: {}", err);
                session.end(EndReason::InputFailure(err));
            },
            InputEvent::Ignored => {},
        }
    }
}

fn is_quit_combo(ev: &KeyEvent) -> bool {
    matches!(
        ev,
        KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL }
            | KeyEvent { code: KeyCode::Char('x'), modifiers: KeyModifiers::CONTROL }
            | KeyEvent { code: KeyCode::Char('z'), modifiers: KeyModifiers::CONTROL }
    )
}
