use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{Action, GameConfig, GameEngine, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

pub struct HumanMode {
    engine: GameEngine,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let engine = GameEngine::new(config).context("Invalid game configuration")?;

        Ok(Self {
            engine,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.engine.config().tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        info!(
            "starting on a {0}x{0} grid, tick every {1}ms",
            self.engine.config().grid_size,
            self.engine.config().tick_interval_ms
        );

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.engine.state(), &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::GameAction(action) => self.apply_action(action),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    fn apply_action(&mut self, action: Action) {
        let was_started = self.engine.state().has_started;
        let state = self.engine.apply(action);
        let (started, paused) = (state.has_started, state.is_paused);

        match action {
            Action::Reset => self.metrics.on_reset(),
            Action::TogglePause => self.metrics.on_pause_toggled(paused),
            Action::Turn(_) if !was_started && started => self.metrics.on_game_start(),
            _ => {}
        }
    }

    fn update_game(&mut self) {
        self.engine.advance_tick();

        if let TickOutcome::Collided(_) = self.engine.last_outcome() {
            self.metrics.on_game_over(self.engine.state().score);
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GameStatus};

    fn seeded_mode() -> HumanMode {
        let config = GameConfig {
            seed: Some(21),
            ..GameConfig::default()
        };
        HumanMode::new(config).unwrap()
    }

    #[test]
    fn test_game_initialization() {
        let mode = seeded_mode();
        assert_eq!(mode.engine.state().status(), GameStatus::NotStarted);
        assert_eq!(mode.engine.state().score, 0);
    }

    #[test]
    fn test_invalid_config_fails() {
        assert!(HumanMode::new(GameConfig::new(1)).is_err());
    }

    #[test]
    fn test_ticks_wait_for_first_turn() {
        let mut mode = seeded_mode();
        let before = mode.engine.state().clone();

        mode.update_game();
        assert_eq!(mode.engine.state(), &before);

        mode.apply_action(Action::Turn(Direction::Up));
        mode.update_game();
        assert_eq!(mode.engine.state().steps, 1);
    }

    #[test]
    fn test_pause_stops_session_clock() {
        let mut mode = seeded_mode();
        mode.apply_action(Action::Turn(Direction::Up));
        std::thread::sleep(Duration::from_millis(10));

        mode.apply_action(Action::TogglePause);
        let at_pause = mode.metrics.elapsed_time;
        std::thread::sleep(Duration::from_millis(30));
        mode.metrics.update();
        assert_eq!(mode.metrics.elapsed_time, at_pause);

        mode.apply_action(Action::TogglePause);
        std::thread::sleep(Duration::from_millis(10));
        mode.metrics.update();
        assert!(mode.metrics.elapsed_time > at_pause);
    }

    #[test]
    fn test_game_over_recorded_once_then_reset() {
        let mut mode = seeded_mode();
        mode.apply_action(Action::Turn(Direction::Up));

        // Without further turns the snake runs into a wall sooner or later
        for _ in 0..1000 {
            mode.update_game();
            if mode.engine.state().is_game_over {
                break;
            }
        }
        mode.update_game();

        assert!(mode.engine.state().is_game_over);
        assert_eq!(mode.metrics.games_played, 1);

        mode.apply_action(Action::Reset);
        assert_eq!(mode.engine.state().status(), GameStatus::NotStarted);
        assert_eq!(mode.engine.state().score, 0);
    }
}
