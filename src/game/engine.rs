use log::{debug, error, info, warn};

use super::{
    action::{Action, Direction},
    config::{ConfigError, GameConfig},
    food::{Food, FoodSpawner, FoodType},
    random::{RandomSource, SeededRandom},
    state::{GameState, Position, Snake},
};

/// What the head ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Snake left the grid
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// What a single tick did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing happened: not started, paused, or already over
    Idle,
    /// The snake shifted one cell
    Moved,
    /// The snake ate food of the given type and grew
    Ate(FoodType),
    /// The game ended
    Collided(CollisionKind),
}

/// The rules engine: owns the game state and every transition on it
pub struct GameEngine<R: RandomSource = SeededRandom> {
    config: GameConfig,
    spawner: FoodSpawner,
    rng: R,
    state: GameState,
    last_outcome: TickOutcome,
}

impl GameEngine<SeededRandom> {
    /// Create an engine seeded from the config, or from entropy when no seed is set
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = config
            .seed
            .map(SeededRandom::new)
            .unwrap_or_else(SeededRandom::from_entropy);
        Self::with_random(config, rng)
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Create an engine drawing food placement from `rng`
    pub fn with_random(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let spawner = config.spawner();
        let state = Self::fresh_state(&config, &spawner, &mut rng);

        Ok(Self {
            config,
            spawner,
            rng,
            state,
            last_outcome: TickOutcome::Idle,
        })
    }

    /// Resume from an existing state instead of a fresh one.
    ///
    /// The state must live on the grid the config describes, since food is
    /// placed from the config's grid size.
    pub fn from_state(config: GameConfig, rng: R, state: GameState) -> Result<Self, ConfigError> {
        config.validate()?;
        if state.grid_size != config.grid_size {
            return Err(ConfigError::GridMismatch {
                config: config.grid_size,
                state: state.grid_size,
            });
        }

        Ok(Self {
            spawner: config.spawner(),
            config,
            rng,
            state,
            last_outcome: TickOutcome::Idle,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn last_outcome(&self) -> TickOutcome {
        self.last_outcome
    }

    /// Dispatch a player intent to the matching transition
    pub fn apply(&mut self, action: Action) -> &GameState {
        match action {
            Action::Turn(direction) => self.request_direction_change(direction),
            Action::TogglePause => self.toggle_pause(),
            Action::Reset => self.reset(),
        }
    }

    /// Ask the snake to face `direction` from the next tick on.
    ///
    /// The first request starts the game and is always accepted. Later
    /// requests that would turn a multi-segment snake back onto itself are
    /// silently ignored, as is everything after game over.
    pub fn request_direction_change(&mut self, direction: Direction) -> &GameState {
        self.turn(direction);
        &self.state
    }

    /// Advance the game by one tick
    pub fn advance_tick(&mut self) -> &GameState {
        let outcome = self.step();

        match outcome {
            TickOutcome::Idle => {}
            TickOutcome::Moved => debug!("snake moved to {:?}", self.state.snake.head()),
            TickOutcome::Ate(kind) => debug!(
                "ate {:?} food, score {}, next food {:?} at ({}, {})",
                kind,
                self.state.score,
                self.state.food.kind,
                self.state.food.position.x,
                self.state.food.position.y
            ),
            TickOutcome::Collided(kind) => info!(
                "game over after {:?} collision, final score {}",
                kind, self.state.score
            ),
        }

        self.last_outcome = outcome;
        &self.state
    }

    /// Pause or resume; only flips the flag
    pub fn toggle_pause(&mut self) -> &GameState {
        self.state.is_paused = !self.state.is_paused;
        info!("paused: {}", self.state.is_paused);
        &self.state
    }

    /// Throw away the current game and start a fresh, not yet started one
    pub fn reset(&mut self) -> &GameState {
        self.state = Self::fresh_state(&self.config, &self.spawner, &mut self.rng);
        self.last_outcome = TickOutcome::Idle;
        info!("game reset");
        &self.state
    }

    fn turn(&mut self, direction: Direction) {
        let state = &mut self.state;

        if state.is_game_over {
            return;
        }
        if state.snake.is_empty() {
            error!("direction change on an empty snake ignored");
            return;
        }

        if !state.has_started {
            // Turn the resting snake around so its head leads the way
            if direction == state.direction.opposite() && state.snake.len() >= 2 {
                state.snake.reverse();
            }
            state.direction = direction;
            state.has_started = true;
            info!("game started heading {:?}", direction);
            return;
        }

        if state.snake.len() >= 2 && direction == state.direction.opposite() {
            debug!("rejected turn {:?} while heading {:?}", direction, state.direction);
            return;
        }

        if direction != state.direction {
            debug!("turned from {:?} to {:?}", state.direction, direction);
            state.direction = direction;
        }
    }

    fn step(&mut self) -> TickOutcome {
        let state = &mut self.state;

        if state.is_game_over || !state.has_started || state.is_paused {
            return TickOutcome::Idle;
        }

        let Some(head) = state.snake.head() else {
            error!("tick on an empty snake ignored");
            return TickOutcome::Idle;
        };

        let new_head = head.moved_in_direction(state.direction);

        if !state.is_in_bounds(new_head) {
            state.is_game_over = true;
            return TickOutcome::Collided(CollisionKind::Wall);
        }

        let ate_food = new_head == state.food.position;

        if state.snake.would_collide(new_head, ate_food) {
            state.is_game_over = true;
            return TickOutcome::Collided(CollisionKind::SelfCollision);
        }

        state.snake.advance_to(new_head, ate_food);
        state.steps += 1;

        if !ate_food {
            return TickOutcome::Moved;
        }

        let kind = state.food.kind;
        match kind {
            FoodType::Regular => {}
            FoodType::Teleport => {
                let landing = self.spawner.clear_cell(&state.snake, &mut self.rng);
                state.snake.relocate_head(landing);
            }
            FoodType::Reverse => {
                state.snake.reverse();
                if let [head, second, ..] = state.snake.body.as_slice() {
                    if let Some(direction) = Direction::between(*head, *second) {
                        state.direction = direction;
                    }
                }
            }
        }

        state.score += 1;

        match self.spawner.spawn(&state.snake, &mut self.rng) {
            Some(food) => state.food = food,
            None => warn!("grid is full, food stays where it was"),
        }

        TickOutcome::Ate(kind)
    }

    fn fresh_state(config: &GameConfig, spawner: &FoodSpawner, rng: &mut R) -> GameState {
        let snake = Snake::centered(config.grid_size, config.initial_snake_length);
        let size = config.grid_size as i32;

        let food = config
            .initial_food
            .filter(|pos| {
                (0..size).contains(&pos.x) && (0..size).contains(&pos.y) && !snake.occupies(*pos)
            })
            .map(|pos| Food::new(pos, FoodType::Regular))
            .or_else(|| spawner.spawn(&snake, rng))
            .unwrap_or_else(|| Food::new(Position::new(0, 0), FoodType::Regular));

        GameState::new(snake, food, config.grid_size)
    }
}
