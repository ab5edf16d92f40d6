use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::{Stream, StreamExt};
use log::{debug, error, info};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::future::Future;
use std::io::{self, Stderr, stderr};
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{Game, GameConfig, Transition};
use crate::input::{CommandQueue, InputHandler, KeyAction};
use crate::render::{Renderer, Scene};

/// Interactive play in the terminal.
///
/// Owns the game and the terminal for the whole session. Each frame drains
/// the queued commands into [`Game::update`] and redraws.
pub struct HumanMode {
    game: Game,
    renderer: Renderer,
    input_handler: InputHandler,
    commands: CommandQueue,
    frames: u64,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let renderer = Renderer::new(&config);
        Self {
            game: Game::new(config),
            renderer,
            input_handler: InputHandler::new(),
            commands: CommandQueue::new(),
            frames: 0,
            should_quit: false,
        }
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

        let (columns, rows) = self.renderer.canvas_size();
        info!("terminal ready, scene needs {}x{} cells", columns, rows);

        // Run game loop with cleanup
        let result = self
            .run_game_loop(&mut terminal, EventStream::new(), tokio::signal::ctrl_c())
            .await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal);
        info!("session ended after {} frames", self.frames);

        result
    }

    /// Drive frames until a quit key, the end of `events`, or `shutdown`.
    ///
    /// `shutdown` is polled across the whole session, not re-created per pass.
    async fn run_game_loop<B, S, F>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut event_stream: S,
        shutdown: F,
    ) -> Result<()>
    where
        B: Backend,
        S: Stream<Item = io::Result<Event>> + Unpin,
        F: Future,
    {
        let mut frame_timer = interval(self.game.config().frame_interval());
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                // Queue terminal events until the next frame
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // One frame: update, then draw
                _ = frame_timer.tick() => {
                    self.frame();
                    let scene = Scene::compose(&self.game);
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &scene);
                    }).context("Failed to draw frame")?;
                }

                // Ctrl+C, or whatever shutdown the caller wired in
                _ = &mut shutdown => {
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
            match self.input_handler.handle_key_event(key) {
                KeyAction::Command(command) => self.commands.push(command),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    fn frame(&mut self) -> Option<Transition> {
        self.frames += 1;
        let commands = self.commands.drain();
        let transition = self.game.update(&commands);
        if let Some(transition) = transition {
            debug!("frame {}: {:?}", self.frames, transition);
        }
        transition
    }

    fn cleanup_terminal(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) {
        // Keep going on failure so the terminal is restored as far as possible
        if let Err(err) = disable_raw_mode() {
            error!("failed to disable raw mode: {err}");
        }
        if let Err(err) = execute!(terminal.backend_mut(), LeaveAlternateScreen) {
            error!("failed to leave alternate screen: {err}");
        }
        if let Err(err) = terminal.show_cursor() {
            error!("failed to show cursor: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Difficulty, GameMode};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use futures::stream;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default());
        assert_eq!(mode.game.mode(), GameMode::DifficultySelect);
        assert_eq!(mode.game.score(), 0);
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_keys_apply_on_next_frame() {
        let mut mode = HumanMode::new(GameConfig::default());

        mode.handle_event(key(KeyCode::Char('2')));
        assert_eq!(mode.game.mode(), GameMode::DifficultySelect);

        let transition = mode.frame();
        assert_eq!(transition, Some(Transition::Started(Difficulty::Medium)));
        assert_eq!(mode.game.mode(), GameMode::Playing);
        assert!(mode.commands.is_empty());
    }

    #[test]
    fn test_quit_key() {
        let mut mode = HumanMode::new(GameConfig::default());
        mode.handle_event(key(KeyCode::Esc));
        assert!(mode.should_quit);
    }

    #[test]
    fn test_non_key_events_are_ignored() {
        let mut mode = HumanMode::new(GameConfig::default());
        mode.handle_event(Event::Resize(100, 40));
        mode.handle_event(Event::FocusLost);
        assert!(mode.commands.is_empty());
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_frames_pace_the_snake() {
        let mut mode = HumanMode::new(GameConfig::default());
        mode.handle_event(key(KeyCode::Char('3')));
        mode.frame();
        let start = mode.game.snake().head();

        for _ in 0..4 {
            mode.frame();
        }
        assert_eq!(mode.game.snake().head(), start);

        // Hard moves once every five frames
        mode.frame();
        assert_ne!(mode.game.snake().head(), start);
    }

    #[tokio::test]
    async fn test_shutdown_outlives_frames() {
        let mut mode = HumanMode::new(GameConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let events = stream::iter(vec![Ok::<_, io::Error>(key(KeyCode::Char('1')))])
            .chain(stream::pending());

        // Fires only after several 60 fps frames have been drawn
        let shutdown = tokio::time::sleep(Duration::from_millis(100));
        let result = tokio::time::timeout(
            Duration::from_secs(5),
            mode.run_game_loop(&mut terminal, events, shutdown),
        )
        .await;

        assert!(matches!(result, Ok(Ok(()))));
        assert!(mode.should_quit);
        assert!(mode.frames > 1);
        assert_eq!(mode.game.mode(), GameMode::Playing);
    }

    #[tokio::test]
    async fn test_closed_event_stream_ends_session() {
        let mut mode = HumanMode::new(GameConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            mode.run_game_loop(&mut terminal, stream::empty(), std::future::pending::<()>()),
        )
        .await;

        assert!(matches!(result, Ok(Ok(()))));
        assert!(mode.should_quit);
    }
}
