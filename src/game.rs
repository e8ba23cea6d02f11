use log::{debug, info, trace, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::Coord;
use crate::direction::Direction;
use crate::grid::{Cell, Grid, Position};
use crate::snake::{Snake, INITIAL_SNAKE_LENGTH};

/// What occupies a cell once the snake is laid over the grid.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Field {
    Empty,
    Food,
    Snake,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Moved,
    Ate,
    Collided,
    /// The prospective head fell outside the board and the round did nothing.
    Skipped,
}

pub struct GameState {
    grid: Grid,
    snake: Snake,
    round: u64,
    score: u64,
    desired_len: usize,
    alive: bool,
    rng: StdRng,
}

impl GameState {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    #[cfg(test)]
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Self {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: usize, height: usize, rng: StdRng) -> Self {
        let mut game = GameState {
            grid: Grid::new(width, height),
            snake: Snake::centered(width, height),
            round: 0,
            score: 0,
            desired_len: INITIAL_SNAKE_LENGTH,
            alive: true,
            rng,
        };
        game.spawn_food();
        game
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn desired_len(&self) -> usize {
        self.desired_len
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Returns `None` outside the board. Snake segments take precedence over
    /// whatever the grid holds underneath.
    pub fn lookup(&self, pos: Position) -> Option<Field> {
        let cell = self.grid.get(pos).ok()?;

        if self.snake.occupies(pos) {
            return Some(Field::Snake);
        }

        Some(match cell {
            Cell::Empty => Field::Empty,
            Cell::Food => Field::Food,
        })
    }

    /// Plays one round with the snake heading in `direction`.
    pub fn advance(&mut self, direction: Direction) -> Outcome {
        if !self.alive {
            return Outcome::Collided;
        }

        self.round += 1;

        let new_head = self.snake.head().step(direction, self.width(), self.height());

        match self.lookup(new_head) {
            None => {
                warn!("Round {}: head would leave the board at {}, skipping", self.round, new_head);
                return Outcome::Skipped;
            },
            Some(Field::Snake) => {
                debug!("Round {}: collision at {}", self.round, new_head);
                self.alive = false;
                return Outcome::Collided;
            },
            Some(_) => {},
        }

        self.snake.prepend(new_head);

        let mut outcome = Outcome::Moved;
        if self.grid.get(new_head) == Ok(Cell::Food) {
            self.grid.clear(new_head);
            self.score += 1;
            self.desired_len += 1;
            info!("Round {}: food eaten at {}, score {}", self.round, new_head, self.score);
            self.spawn_food();
            outcome = Outcome::Ate;
        }

        if self.snake.len() > self.desired_len {
            self.snake.drop_tail();
        }

        trace!("Round {}: head at {}, length {}", self.round, new_head, self.snake.len());
        outcome
    }

    /// Places food on a random cell the snake does not cover. Keeps drawing
    /// until it finds one, so it never returns on a board the snake fills.
    pub fn spawn_food(&mut self) {
        let (w, h) = (self.width() as Coord, self.height() as Coord);

        loop {
            let pos = Position::new(self.rng.gen_range(0..w), self.rng.gen_range(0..h));
            match self.lookup(pos) {
                Some(Field::Empty) | Some(Field::Food) => {
                    self.grid.set_food(pos);
                    debug!("Food placed at {}", pos);
                    return;
                },
                Some(Field::Snake) | None => continue,
            }
        }
    }
}
