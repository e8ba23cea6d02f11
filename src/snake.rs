use std::collections::VecDeque;

use crate::Coord;
use crate::grid::Position;

pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Snake segments, head first.
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// A vertical snake in the middle of the board with its head on top, so
    /// that moving up first is safe.
    pub fn centered(width: usize, height: usize) -> Self {
        let (x, y) = ((width / 2) as Coord, (height / 2) as Coord);
        Snake::from_segments((0..INITIAL_SNAKE_LENGTH as Coord).map(|i| Position::new(x, y - 1 + i)))
    }

    /// Builds a snake from segments listed head to tail. Panics if empty.
    pub fn from_segments<I: IntoIterator<Item = Position>>(segments: I) -> Self {
        let body: VecDeque<Position> = segments.into_iter().collect();
        assert!(!body.is_empty(), "a snake needs at least one segment");
        Snake { body }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn prepend(&mut self, pos: Position) {
        self.body.push_front(pos);
    }

    pub fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            self.body.pop_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_snake_is_vertical_with_head_on_top() {
        let snake = Snake::centered(10, 10);
        let segments: Vec<_> = snake.segments().copied().collect();
        assert_eq!(segments, vec![Position::new(5, 4), Position::new(5, 5), Position::new(5, 6)]);
        assert_eq!(snake.head(), Position::new(5, 4));
        assert_eq!(snake.len(), INITIAL_SNAKE_LENGTH);
    }

    #[test]
    fn centered_snake_fits_the_smallest_board() {
        let snake = Snake::centered(5, 5);
        assert!(snake.segments().all(|p| p.x == 2 && (1..=3).contains(&p.y)));
    }

    #[test]
    fn prepend_and_drop_tail() {
        let mut snake = Snake::centered(10, 10);
        snake.prepend(Position::new(5, 3));
        assert_eq!(snake.head(), Position::new(5, 3));
        assert_eq!(snake.len(), 4);
        assert!(snake.occupies(Position::new(5, 6)));

        snake.drop_tail();
        assert_eq!(snake.len(), 3);
        assert!(!snake.occupies(Position::new(5, 6)));
    }

    #[test]
    fn drop_tail_keeps_the_head() {
        let mut snake = Snake::from_segments(vec![Position::new(1, 1)]);
        snake.drop_tail();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(1, 1));
    }
}
