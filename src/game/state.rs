use serde::{Deserialize, Serialize};

use super::action::Direction;
use super::food::Food;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Chebyshev (king-move) distance between two cells
    pub fn chebyshev_distance(&self, other: Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
}

impl Snake {
    /// Create a snake whose head sits at `head`, body trailing away from `direction`
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx, -dy);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self { body }
    }

    /// Snake laid out on the centre row of an N×N grid, horizontally centred,
    /// head leading towards `Direction::Right`
    pub fn centered(grid_size: usize, length: usize) -> Self {
        let center = (grid_size / 2) as i32;
        let leftmost = center - (length / 2) as i32;
        let head_x = leftmost + length as i32 - 1;

        Self::new(Position::new(head_x, center), Direction::Right, length)
    }

    pub fn from_segments(body: Vec<Position>) -> Self {
        Self { body }
    }

    pub fn head(&self) -> Option<Position> {
        self.body.first().copied()
    }

    pub fn tail(&self) -> Option<Position> {
        self.body.last().copied()
    }

    /// Whether any segment sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Whether moving the head onto `pos` would bite the body.
    ///
    /// The tail cell only counts when the snake is growing this tick, since
    /// otherwise it is vacated before the head arrives.
    pub fn would_collide(&self, pos: Position, growing: bool) -> bool {
        let checked = if growing || self.body.len() < 2 {
            &self.body[..]
        } else {
            &self.body[..self.body.len() - 1]
        };
        checked.contains(&pos)
    }

    /// Push a new head, dropping the tail unless growing
    pub fn advance_to(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Reverse the segment order so the tail becomes the head
    pub fn reverse(&mut self) {
        self.body.reverse();
    }

    /// Move the head alone to `pos`, leaving the rest of the body in place
    pub fn relocate_head(&mut self, pos: Position) {
        if let Some(head) = self.body.first_mut() {
            *head = pos;
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Where a game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub direction: Direction,
    pub grid_size: usize,
    pub score: u32,
    pub steps: u32,
    pub is_game_over: bool,
    pub is_paused: bool,
    pub has_started: bool,
}

impl GameState {
    /// Create a fresh, not yet started game state
    pub fn new(snake: Snake, food: Food, grid_size: usize) -> Self {
        Self {
            snake,
            food,
            direction: Direction::Right,
            grid_size,
            score: 0,
            steps: 0,
            is_game_over: false,
            is_paused: false,
            has_started: false,
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.is_game_over {
            GameStatus::GameOver
        } else if !self.has_started {
            GameStatus::NotStarted
        } else if self.is_paused {
            GameStatus::Paused
        } else {
            GameStatus::Running
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        let size = self.grid_size as i32;
        pos.x >= 0 && pos.x < size && pos.y >= 0 && pos.y < size
    }
}
