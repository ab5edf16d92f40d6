use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::{Command, Difficulty, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Command(Command),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Held keys repeat and some terminals report releases; only fresh presses count
        if key.kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Command(Direction::Up.into()),
            KeyCode::Down => KeyAction::Command(Direction::Down.into()),
            KeyCode::Left => KeyAction::Command(Direction::Left.into()),
            KeyCode::Right => KeyAction::Command(Direction::Right.into()),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => {
                KeyAction::Command(Direction::Up.into())
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyAction::Command(Direction::Down.into())
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::Command(Direction::Left.into())
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::Command(Direction::Right.into())
            }

            // Menu
            KeyCode::Char(c @ '1'..='3') => Difficulty::from_menu_key(c)
                .map(|d| KeyAction::Command(d.into()))
                .unwrap_or(KeyAction::None),
            KeyCode::Enter => KeyAction::Command(Command::Acknowledge),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Commands gathered between two frames, handed over in arrival order
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push(command);
    }

    /// Take everything queued since the last frame
    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Up)),
            KeyAction::Command(Command::Turn(Direction::Up))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Down)),
            KeyAction::Command(Command::Turn(Direction::Down))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Left)),
            KeyAction::Command(Command::Turn(Direction::Left))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Right)),
            KeyAction::Command(Command::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('w'))),
            KeyAction::Command(Command::Turn(Direction::Up))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('a'))),
            KeyAction::Command(Command::Turn(Direction::Left))
        );
        let d_upper = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(d_upper),
            KeyAction::Command(Command::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_difficulty_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('1'))),
            KeyAction::Command(Command::SelectDifficulty(Difficulty::Easy))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('2'))),
            KeyAction::Command(Command::SelectDifficulty(Difficulty::Medium))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('3'))),
            KeyAction::Command(Command::SelectDifficulty(Difficulty::Hard))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('4'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_enter_acknowledges() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Enter)),
            KeyAction::Command(Command::Acknowledge)
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key_event(press(KeyCode::Esc)), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_release_and_repeat_are_ignored() {
        let handler = InputHandler::new();

        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Up,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(handler.handle_key_event(release), KeyAction::None);

        let repeat =
            KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Repeat);
        assert_eq!(handler.handle_key_event(repeat), KeyAction::None);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(handler.handle_key_event(press(KeyCode::Tab)), KeyAction::None);
    }

    #[test]
    fn test_queue_drains_in_order() {
        let mut queue = CommandQueue::new();
        queue.push(Command::Turn(Direction::Up));
        queue.push(Command::Turn(Direction::Left));

        assert_eq!(
            queue.drain(),
            vec![Command::Turn(Direction::Up), Command::Turn(Direction::Left)]
        );
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }
}
