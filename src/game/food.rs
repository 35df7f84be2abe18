use log::warn;
use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use super::state::{Position, Snake};

/// What happens when the snake eats a piece of food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodType {
    /// Grow by one and score
    Regular,
    /// Grow, score, and the head jumps to a cell well clear of the body
    Teleport,
    /// Grow, score, and the snake turns around: the tail becomes the head
    Reverse,
}

/// A piece of food on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub position: Position,
    pub kind: FoodType,
}

impl Food {
    pub fn new(position: Position, kind: FoodType) -> Self {
        Self { position, kind }
    }
}

/// How the type of each new piece of food is chosen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum FoodSelection {
    /// Independent chances for the special types; the remainder is regular
    Weighted { teleport: f64, reverse: f64 },
    /// Always spawn the same type
    Fixed { kind: FoodType },
}

impl Default for FoodSelection {
    fn default() -> Self {
        FoodSelection::Weighted {
            teleport: 0.1,
            reverse: 0.1,
        }
    }
}

impl FoodSelection {
    pub fn choose<R: RandomSource>(&self, rng: &mut R) -> FoodType {
        match *self {
            FoodSelection::Fixed { kind } => kind,
            FoodSelection::Weighted { teleport, reverse } => {
                let roll = rng.unit();
                if roll < teleport {
                    FoodType::Teleport
                } else if roll < teleport + reverse {
                    FoodType::Reverse
                } else {
                    FoodType::Regular
                }
            }
        }
    }
}

/// Places food (and teleported heads) on the grid
#[derive(Debug, Clone)]
pub struct FoodSpawner {
    pub grid_size: usize,
    pub selection: FoodSelection,
    /// Minimum Chebyshev distance kept from the snake and the border
    pub clearance: usize,
    pub max_attempts: usize,
}

impl FoodSpawner {
    /// Spawn a new piece of food that avoids `snake`.
    ///
    /// Returns `None` only when every cell of the grid is covered by the snake.
    pub fn spawn<R: RandomSource>(&self, snake: &Snake, rng: &mut R) -> Option<Food> {
        let kind = self.selection.choose(rng);

        let position = match kind {
            FoodType::Teleport => Some(self.clear_cell(snake, rng)),
            FoodType::Regular | FoodType::Reverse => self.free_cell(snake, rng),
        }?;

        Some(Food::new(position, kind))
    }

    /// Uniformly random cell not covered by the snake
    pub fn free_cell<R: RandomSource>(&self, snake: &Snake, rng: &mut R) -> Option<Position> {
        for _ in 0..self.max_attempts {
            let pos = self.random_cell(0, self.grid_size, rng);
            if !snake.occupies(pos) {
                return Some(pos);
            }
        }

        // Crowded grid: pick among the cells that are actually left
        let size = self.grid_size as i32;
        let free: Vec<Position> = (0..size)
            .flat_map(|y| (0..size).map(move |x| Position::new(x, y)))
            .filter(|pos| !snake.occupies(*pos))
            .collect();

        if free.is_empty() {
            return None;
        }
        Some(free[rng.index(free.len())])
    }

    /// Random cell off the snake and at least `clearance` away from every
    /// segment and from the border.
    ///
    /// Gives up after `max_attempts` and returns the last sample, which may
    /// violate the clearance.
    pub fn clear_cell<R: RandomSource>(&self, snake: &Snake, rng: &mut R) -> Position {
        let (low, high) = if 2 * self.clearance < self.grid_size {
            (self.clearance, self.grid_size - self.clearance)
        } else {
            (0, self.grid_size)
        };

        let mut candidate = self.random_cell(low, high, rng);
        for attempt in 1..=self.max_attempts {
            if self.is_clear(snake, candidate) {
                return candidate;
            }
            if attempt < self.max_attempts {
                candidate = self.random_cell(low, high, rng);
            }
        }

        warn!(
            "no cell with clearance {} found in {} attempts, using ({}, {})",
            self.clearance, self.max_attempts, candidate.x, candidate.y
        );
        candidate
    }

    fn is_clear(&self, snake: &Snake, pos: Position) -> bool {
        let clearance = self.clearance as i32;
        !snake.occupies(pos)
            && snake
                .body
                .iter()
                .all(|segment| segment.chebyshev_distance(pos) >= clearance)
    }

    fn random_cell<R: RandomSource>(&self, low: usize, high: usize, rng: &mut R) -> Position {
        let span = high - low;
        let x = low + rng.index(span);
        let y = low + rng.index(span);
        Position::new(x as i32, y as i32)
    }
}
