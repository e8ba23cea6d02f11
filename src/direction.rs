use std::sync::atomic::{AtomicU8, Ordering};

use Direction::*;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    Up,
    Left,
    Right,
    Down,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    fn to_bits(self) -> u8 {
        match self {
            Up => 0,
            Left => 1,
            Right => 2,
            Down => 3,
        }
    }

    fn from_bits(bits: u8) -> Direction {
        match bits {
            0 => Up,
            1 => Left,
            2 => Right,
            _ => Down,
        }
    }
}

/// The direction the snake will take on the next round. Written by the input
/// listener, read by the game loop.
pub struct DirectionCell(AtomicU8);

impl DirectionCell {
    pub fn new(initial: Direction) -> Self {
        DirectionCell(AtomicU8::new(initial.to_bits()))
    }

    pub fn get(&self) -> Direction {
        Direction::from_bits(self.0.load(Ordering::Acquire))
    }

    /// Stores `direction` unless it is the exact reverse of the stored one.
    /// Returns whether the direction was accepted.
    pub fn steer(&self, direction: Direction) -> bool {
        let new = direction.to_bits();
        let reverse = direction.opposite().to_bits();

        self.0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                if current == reverse { None } else { Some(new) }
            })
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposites_pair_up() {
        for dir in [Up, Left, Right, Down] {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
        }
    }

    #[test]
    fn reversal_is_rejected() {
        let cell = DirectionCell::new(Up);
        assert!(!cell.steer(Down));
        assert_eq!(cell.get(), Up);

        assert!(cell.steer(Left));
        assert!(!cell.steer(Right));
        assert_eq!(cell.get(), Left);
    }

    #[test]
    fn turns_and_repeats_are_accepted() {
        let cell = DirectionCell::new(Up);
        assert!(cell.steer(Up));
        assert!(cell.steer(Right));
        assert!(cell.steer(Down));
        assert_eq!(cell.get(), Down);
    }
}
