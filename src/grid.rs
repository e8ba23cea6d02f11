use std::fmt;

use crate::Coord;
use crate::direction::Direction::{self, *};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: Coord,
    pub y: Coord,
}

impl Position {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Position { x, y }
    }

    /// Moves one cell in `direction` on a `width x height` torus. Leaving the
    /// board on one edge re-enters it on the opposite edge.
    pub fn step(self, direction: Direction, width: usize, height: usize) -> Position {
        let (w, h) = (width as Coord, height as Coord);
        let Position { mut x, mut y } = self;

        match direction {
            Up => {
                y -= 1;
                if y == -1 {
                    y = h - 1;
                }
            },
            Down => {
                y += 1;
                if y == h {
                    y = 0;
                }
            },
            Left => {
                x -= 1;
                if x == -1 {
                    x = w - 1;
                }
            },
            Right => {
                x += 1;
                if x == w {
                    x = 0;
                }
            },
        }

        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Cell {
    Empty,
    Food,
}

#[derive(Debug, Eq, PartialEq)]
pub enum GridError {
    OutOfBounds(Position),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds(pos) => write!(f, "position {} is outside the board", pos),
        }
    }
}

impl std::error::Error for GridError {}

/// Board cells, stored row by row. Snake segments are not stored here.
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Grid { width, height, cells: vec![Cell::Empty; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn get(&self, pos: Position) -> Result<Cell, GridError> {
        self.index(pos).map(|i| self.cells[i]).ok_or(GridError::OutOfBounds(pos))
    }

    pub fn set_food(&mut self, pos: Position) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = Cell::Food;
        }
    }

    pub fn clear(&mut self, pos: Position) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = Cell::Empty;
        }
    }

    #[cfg(test)]
    pub fn food(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width;
        self.cells.iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Food)
            .map(move |(i, _)| Position::new((i % width) as Coord, (i / width) as Coord))
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index(&self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.y as usize * self.width + pos.x as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(6, 5);
        for y in 0..5 {
            for x in 0..6 {
                assert_eq!(grid.get(Position::new(x, y)), Ok(Cell::Empty));
            }
        }
        assert_eq!(grid.food().count(), 0);
    }

    #[test]
    fn get_outside_the_board_fails() {
        let grid = Grid::new(10, 8);
        for pos in [Position::new(-1, 0), Position::new(0, -1), Position::new(10, 0), Position::new(0, 8)] {
            assert_eq!(grid.get(pos), Err(GridError::OutOfBounds(pos)));
        }
        assert!(grid.get(Position::new(9, 7)).is_ok());
    }

    #[test]
    fn food_can_be_set_and_cleared() {
        let mut grid = Grid::new(5, 5);
        let pos = Position::new(3, 1);

        grid.set_food(pos);
        assert_eq!(grid.get(pos), Ok(Cell::Food));
        assert_eq!(grid.food().collect::<Vec<_>>(), vec![pos]);

        grid.clear(pos);
        assert_eq!(grid.get(pos), Ok(Cell::Empty));
    }

    #[test]
    fn writes_outside_the_board_are_ignored() {
        let mut grid = Grid::new(5, 5);
        grid.set_food(Position::new(5, 0));
        grid.set_food(Position::new(-1, 2));
        assert_eq!(grid.food().count(), 0);
    }

    #[test]
    fn step_wraps_around_every_edge() {
        assert_eq!(Position::new(0, 3).step(Left, 10, 8), Position::new(9, 3));
        assert_eq!(Position::new(5, 0).step(Up, 10, 8), Position::new(5, 7));
        assert_eq!(Position::new(9, 3).step(Right, 10, 8), Position::new(0, 3));
        assert_eq!(Position::new(5, 7).step(Down, 10, 8), Position::new(5, 0));
    }

    #[test]
    fn step_inside_the_board() {
        let pos = Position::new(4, 4);
        assert_eq!(pos.step(Up, 10, 8), Position::new(4, 3));
        assert_eq!(pos.step(Down, 10, 8), Position::new(4, 5));
        assert_eq!(pos.step(Left, 10, 8), Position::new(3, 4));
        assert_eq!(pos.step(Right, 10, 8), Position::new(5, 4));
    }
}
