use super::difficulty::Difficulty;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Returns the (dx, dy) offset of one move; rows grow downwards
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// A command produced by the input layer for the game state machine.
///
/// Which commands matter depends on the current mode; the rest are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Change heading (only meaningful while playing)
    Turn(Direction),
    /// Pick a difficulty (only meaningful on the menu)
    SelectDifficulty(Difficulty),
    /// Confirm a finished run (only meaningful after game over or a win)
    Acknowledge,
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::Turn(direction)
    }
}

impl From<Difficulty> for Command {
    fn from(difficulty: Difficulty) -> Self {
        Command::SelectDifficulty(difficulty)
    }
}
