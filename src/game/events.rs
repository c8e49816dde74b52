/// Receiver for score and game-over notifications.
///
/// Injected into the engine at construction; a sink has no way to influence
/// engine state.
pub trait EventSink {
    /// Called once per score increase with the new total.
    fn score_changed(&mut self, total: u32);

    /// Called exactly once, on the transition from alive to dead.
    fn game_over(&mut self);
}

/// Discards every notification.
impl EventSink for () {
    fn score_changed(&mut self, _total: u32) {}

    fn game_over(&mut self) {}
}

/// Notification emitted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ScoreChanged(u32),
    GameOver { score: u32 },
}

/// Buffers events until a driver drains them.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
    last_score: u32,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for EventLog {
    fn score_changed(&mut self, total: u32) {
        log::debug!("Score changed to {}", total);
        self.last_score = total;
        self.events.push(GameEvent::ScoreChanged(total));
    }

    fn game_over(&mut self) {
        log::info!("Game over with score {}", self.last_score);
        self.events.push(GameEvent::GameOver {
            score: self.last_score,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        log.score_changed(1);
        log.score_changed(3);
        log.game_over();

        assert_eq!(
            log.events(),
            &[
                GameEvent::ScoreChanged(1),
                GameEvent::ScoreChanged(3),
                GameEvent::GameOver { score: 3 },
            ]
        );
    }

    #[test]
    fn test_drain_empties_buffer() {
        let mut log = EventLog::new();
        log.score_changed(1);

        assert_eq!(log.drain(), vec![GameEvent::ScoreChanged(1)]);
        assert!(log.events().is_empty());

        // Score is remembered across drains
        log.game_over();
        assert_eq!(log.drain(), vec![GameEvent::GameOver { score: 1 }]);
    }
}
