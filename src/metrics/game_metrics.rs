use std::time::{Duration, Instant};

/// Per-session statistics shown next to the board. Kept in memory only.
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub best_score: u32,
    pub games_played: u32,
    /// Time counted before the current unpaused stretch
    banked: Duration,
    running: bool,
    paused: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_score: 0,
            games_played: 0,
            banked: Duration::ZERO,
            running: false,
            paused: false,
        }
    }

    /// Refresh the clock; it only runs while a game is in progress and not paused
    pub fn update(&mut self) {
        if self.running && !self.paused {
            self.elapsed_time = self.banked + self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.banked = Duration::ZERO;
        self.elapsed_time = Duration::ZERO;
        self.running = true;
    }

    /// Follow the engine's pause flag; repeated calls with the same value are no-ops
    pub fn on_pause_toggled(&mut self, paused: bool) {
        if paused == self.paused {
            return;
        }
        if paused {
            self.update();
            self.banked = self.elapsed_time;
        } else {
            self.start_time = Instant::now();
        }
        self.paused = paused;
    }

    pub fn on_reset(&mut self) {
        self.banked = Duration::ZERO;
        self.elapsed_time = Duration::ZERO;
        self.running = false;
        self.paused = false;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.update();
        self.running = false;
        self.games_played += 1;
        if final_score > self.best_score {
            self.best_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_best_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(10);
        assert_eq!(metrics.best_score, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(5);
        assert_eq!(metrics.best_score, 10);
        assert_eq!(metrics.games_played, 2);

        metrics.on_game_over(15);
        assert_eq!(metrics.best_score, 15);
        assert_eq!(metrics.games_played, 3);
    }

    #[test]
    fn test_clock_idle_until_start() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, Duration::ZERO);

        metrics.on_game_start();
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() >= 20);
    }

    #[test]
    fn test_clock_holds_while_paused() {
        let mut metrics = GameMetrics::new();
        let wall_clock = Instant::now();
        metrics.on_game_start();
        std::thread::sleep(Duration::from_millis(20));

        metrics.on_pause_toggled(true);
        let at_pause = metrics.elapsed_time;
        assert!(at_pause.as_millis() >= 20);

        std::thread::sleep(Duration::from_millis(50));
        metrics.update();
        assert_eq!(metrics.elapsed_time, at_pause);

        metrics.on_pause_toggled(false);
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        let resumed = metrics.elapsed_time;
        assert!(resumed >= at_pause + Duration::from_millis(20));
        // The 50ms paused stretch is not counted
        assert!(resumed + Duration::from_millis(50) <= wall_clock.elapsed());
    }

    #[test]
    fn test_clock_stops_at_game_over() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        metrics.on_game_over(3);
        let frozen = metrics.elapsed_time;

        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, frozen);

        metrics.on_reset();
        assert_eq!(metrics.elapsed_time, Duration::ZERO);
    }
}
