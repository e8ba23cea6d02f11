use std::thread::sleep;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::game::{GameState, Outcome};
use crate::session::{EndReason, Session};

pub trait Renderer {
    fn draw(&mut self, game: &GameState) -> Result<()>;
}

/// Advances `game` once per `tick` and redraws it, until `session` ends.
/// A failed draw ends the session and is returned.
pub fn run<R: Renderer>(game: &mut GameState, session: &Session, renderer: &mut R, tick: Duration) -> Result<()> {
    draw(renderer, game, session)?;

    let mut next_tick = Instant::now() + tick;

    loop {
        sleep(next_tick.saturating_duration_since(Instant::now()));
        next_tick += tick;

        if session.is_over() {
            break;
        }

        if game.advance(session.direction()) == Outcome::Collided {
            session.end(EndReason::Collision);
        }

        draw(renderer, game, session)?;
    }

    Ok(())
}

fn draw<R: Renderer>(renderer: &mut R, game: &GameState, session: &Session) -> Result<()> {
    renderer.draw(game).map_err(|err| {
        session.end(EndReason::RenderFailure(err.to_string()));
        err
    })
}
