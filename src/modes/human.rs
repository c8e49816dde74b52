use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{GameConfig, GameSession};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Which view the terminal shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
}

/// Keyboard-driven play in the terminal.
///
/// Starts on the title menu; Enter begins a game and M returns to the menu
/// from the game-over panel.
pub struct HumanMode {
    config: GameConfig,
    screen: Screen,
    session: GameSession,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    paused: bool,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let session = GameSession::new(&config).context("Failed to start game session")?;

        Ok(Self {
            config,
            screen: Screen::Menu,
            session,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            paused: false,
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

        let result = self.run_game_loop(&mut terminal).await;

        // Restore the terminal even when the loop failed
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let tick_interval = self
            .config
            .tick_interval()
            .context("Invalid game configuration")?;
        let mut tick_timer = interval(tick_interval);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        log::info!("Entering game loop, tick interval {:?}", tick_interval);

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                _ = tick_timer.tick() => {
                    if !self.paused {
                        self.update_game();
                    }
                }

                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| match self.screen {
                        Screen::Menu => self.renderer.render_menu(frame, &self.metrics),
                        Screen::Playing => {
                            self.renderer.render(frame, &self.session, &self.metrics, self.paused)
                        }
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                log::info!("Quitting after {} games", self.metrics.games_played);
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };

        let action = self.input_handler.handle_key_event(key);

        if self.screen == Screen::Menu {
            match action {
                KeyAction::Play => self.restart(),
                KeyAction::Quit => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match action {
            KeyAction::Turn(direction) => {
                if !self.paused {
                    self.session.set_direction(direction);
                }
            }
            KeyAction::TogglePause => {
                if self.session.is_alive() {
                    self.paused = !self.paused;
                }
            }
            KeyAction::Restart => self.restart(),
            KeyAction::MainMenu => {
                if !self.session.is_alive() {
                    self.open_menu();
                }
            }
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Play | KeyAction::None => {}
        }
    }

    fn update_game(&mut self) {
        if self.screen != Screen::Playing || !self.session.is_alive() {
            return;
        }

        self.session.tick();

        for event in self.session.drain_events() {
            self.metrics.record(&event);
        }
    }

    /// Starts a fresh session; the old engine is dropped, never reused
    fn restart(&mut self) {
        match GameSession::new(&self.config) {
            Ok(session) => {
                self.session = session;
                self.metrics.on_game_start();
                self.paused = false;
                self.screen = Screen::Playing;
            }
            Err(err) => log::error!("Failed to restart session: {}", err),
        }
    }

    fn open_menu(&mut self) {
        log::info!("Back to the main menu");
        self.screen = Screen::Menu;
        self.paused = false;
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
