use std::time::{Duration, Instant};

use crate::game::GameEvent;

/// Score board and play clock for the terminal front end.
///
/// Fed from the events a session emits; survives restarts so the best
/// score carries over between sessions.
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub score: u32,
    pub high_score: u32,
    pub games_played: u32,
    running: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            score: 0,
            high_score: 0,
            games_played: 0,
            running: true,
        }
    }

    /// Advances the clock while a game is in progress
    pub fn update(&mut self) {
        if self.running {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.score = 0;
        self.running = true;
    }

    pub fn record(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::ScoreChanged(total) => {
                self.score = total;
                self.high_score = self.high_score.max(total);
            }
            GameEvent::GameOver { score } => {
                self.running = false;
                self.games_played += 1;
                self.score = score;
                self.high_score = self.high_score.max(score);
            }
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
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

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_scores_follow_events() {
        let mut metrics = GameMetrics::new();

        metrics.record(&GameEvent::ScoreChanged(1));
        metrics.record(&GameEvent::ScoreChanged(2));
        assert_eq!(metrics.score, 2);
        assert_eq!(metrics.high_score, 2);

        metrics.record(&GameEvent::GameOver { score: 2 });
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_start();
        assert_eq!(metrics.score, 0);
        assert_eq!(metrics.high_score, 2);

        metrics.record(&GameEvent::ScoreChanged(1));
        metrics.record(&GameEvent::GameOver { score: 1 });
        assert_eq!(metrics.high_score, 2);
        assert_eq!(metrics.games_played, 2);
    }

    #[test]
    fn test_clock_stops_on_game_over() {
        let mut metrics = GameMetrics::new();
        metrics.record(&GameEvent::GameOver { score: 0 });

        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, Duration::ZERO);

        metrics.on_game_start();
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert!(metrics.elapsed_time >= Duration::from_millis(20));
    }
}
