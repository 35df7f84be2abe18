use serde::{Deserialize, Serialize};

use super::state::Position;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Direction a head at `head` is travelling when `second` is the segment
    /// right behind it.
    ///
    /// Horizontal offset wins over vertical; identical cells yield `None`.
    pub fn between(head: Position, second: Position) -> Option<Direction> {
        let dx = head.x - second.x;
        let dy = head.y - second.y;

        if dx > 0 {
            Some(Direction::Right)
        } else if dx < 0 {
            Some(Direction::Left)
        } else if dy > 0 {
            Some(Direction::Down)
        } else if dy < 0 {
            Some(Direction::Up)
        } else {
            None
        }
    }
}

/// A discrete player intent, forwarded by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Face the given direction from the next tick on
    Turn(Direction),
    /// Pause or resume tick processing
    TogglePause,
    /// Throw the current game away and start a fresh one
    Reset,
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Turn(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_opposite_agrees_with_is_opposite() {
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert!(dir.is_opposite(dir.opposite()));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_direction_between_adjacent_cells() {
        let second = Position::new(5, 5);
        assert_eq!(Direction::between(Position::new(6, 5), second), Some(Direction::Right));
        assert_eq!(Direction::between(Position::new(4, 5), second), Some(Direction::Left));
        assert_eq!(Direction::between(Position::new(5, 6), second), Some(Direction::Down));
        assert_eq!(Direction::between(Position::new(5, 4), second), Some(Direction::Up));
    }

    #[test]
    fn test_direction_between_prefers_horizontal() {
        // Diagonal offsets only show up after a teleport; x decides.
        let second = Position::new(5, 5);
        assert_eq!(Direction::between(Position::new(2, 9), second), Some(Direction::Left));
        assert_eq!(Direction::between(Position::new(8, 0), second), Some(Direction::Right));
        assert_eq!(Direction::between(second, second), None);
    }

    #[test]
    fn test_direction_into_action() {
        assert_eq!(Action::from(Direction::Up), Action::Turn(Direction::Up));
    }
}
