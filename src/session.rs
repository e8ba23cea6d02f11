use std::fmt;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use log::info;

use crate::direction::{Direction, DirectionCell};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EndReason {
    Collision,
    Quit,
    Interrupted,
    InputFailure(String),
    RenderFailure(String),
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::Collision => write!(f, "the snake bit itself"),
            EndReason::Quit => write!(f, "quit by the player"),
            EndReason::Interrupted => write!(f, "input interrupted"),
            EndReason::InputFailure(err) => write!(f, "input error: {}", err),
            EndReason::RenderFailure(err) => write!(f, "render error: {}", err),
        }
    }
}

/// State shared by the input listener and the game loop: where the player
/// wants to go next, and whether the session is over.
pub struct Session {
    direction: DirectionCell,
    over: AtomicBool,
    reason: OnceLock<EndReason>,
}

impl Session {
    pub fn new(initial: Direction) -> Self {
        Session {
            direction: DirectionCell::new(initial),
            over: AtomicBool::new(false),
            reason: OnceLock::new(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction.get()
    }

    pub fn steer(&self, direction: Direction) -> bool {
        self.direction.steer(direction)
    }

    /// Ends the session. Only the first reason is kept.
    pub fn end(&self, reason: EndReason) {
        let description = reason.to_string();
        if self.reason.set(reason).is_ok() {
            info!("Session ended: {}", description);
        }
        self.over.store(true, Ordering::Release);
    }

    pub fn is_over(&self) -> bool {
        self.over.load(Ordering::Acquire)
    }

    pub fn reason(&self) -> Option<&EndReason> {
        self.reason.get()
    }
}
