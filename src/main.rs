mod config;
mod direction;
mod game;
mod grid;
mod input;
mod menu;
mod runner;
mod session;
mod snake;
mod term;

use std::fs::File;
use std::io::stdin;
use std::process::exit;
use std::thread;

use anyhow::{Context, Result};
use log::{error, info};
use simplelog::WriteLogger;

use config::{Config, LogSettings};
use direction::Direction;
use game::GameState;
use menu::MenuError;
use session::{EndReason, Session};
use term::{KeyReader, TermManager};

pub type TermInt = u16;
pub type Coord = i32;

/// The snake starts heading up, away from its own body.
const INITIAL_DIRECTION: Direction = Direction::Up;

fn main() {
    let log_settings = LogSettings::from_env();
    if let Err(err) = init_logging(&log_settings) {
        eprintln!("Logging disabled: {:#}", err);
    }

    let config = match choose_board() {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err);
            exit(err.exit_code());
        },
    };

    let (game, session) = match play(&config) {
        Ok(res) => res,
        Err(err) => {
            error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            exit(1);
        },
    };

    if let Some(EndReason::InputFailure(err)) = session.reason() {
        eprintln!("Error reading input: {}", err);
        exit(1);
    }

    let head = game.snake().head();
    println!("Game over!");
    println!(
        "Round: {}\tScore: {}\tSnake: length {}, head x {}, head y {}",
        game.round(),
        game.score(),
        game.snake().len(),
        head.x,
        head.y
    );
    exit(0);
}

fn init_logging(settings: &LogSettings) -> Result<()> {
    let file = File::create(&settings.file)
        .with_context(|| format!("Error creating {}", settings.file.display()))?;
    WriteLogger::init(settings.level, simplelog::Config::default(), file)?;
    Ok(())
}

fn choose_board() -> Result<Config, MenuError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (width, height) = menu::read_size(&args, stdin().lock(), std::io::stdout())?;
    let term_size = term::terminal_size().map_err(MenuError::Terminal)?;
    let (width, height) = menu::validate(width, height, term_size)?;
    Ok(Config::new(width, height))
}

/// Runs one session on the terminal and hands back its final state.
fn play(config: &Config) -> Result<(GameState, Session)> {
    info!("Starting a {}x{} game", config.width, config.height);

    let mut term = TermManager::new();
    if let Err(err) = term.setup() {
        let _ = term.restore();
        return Err(err);
    }

    let session = Session::new(INITIAL_DIRECTION);
    let mut game = GameState::new(config.width, config.height);

    let result = thread::scope(|scope| {
        scope.spawn(|| input::listen(&mut KeyReader, &session, config.input_poll));
        runner::run(&mut game, &session, &mut term, config.tick)
    });

    let restored = term.restore();
    result?;
    restored?;

    info!(
        "Finished after {} rounds with score {} and length {}",
        game.round(),
        game.score(),
        game.snake().len()
    );
    Ok((game, session))
}
