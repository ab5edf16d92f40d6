use super::action::Direction;
use super::config::Grid;

/// A cell on the game grid, addressed by (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Neighbouring cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    pub fn is_within(&self, grid: Grid) -> bool {
        grid.contains(self.x, self.y)
    }
}

/// Outcome of advancing the snake by one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Head moved and the tail followed; length unchanged
    Moved,
    /// Head landed on the food; the tail stays, so the snake grew by one
    AteFood,
    /// Head would leave the grid; nothing was mutated
    WallCollision,
    /// Head would land on an occupied segment; nothing was mutated
    SelfCollision,
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Cell>,
    /// Heading of the last executed move
    direction: Direction,
    /// Heading the next move will take
    pending: Direction,
}

impl Snake {
    /// Two-segment snake at `center` facing right, tail directly to its left
    pub fn new(center: Cell) -> Self {
        Self {
            body: vec![center, center.moved_in_direction(Direction::Left)],
            direction: Direction::Right,
            pending: Direction::Right,
        }
    }

    /// Build a snake from explicit segments (head first).
    ///
    /// Returns `None` for fewer than two segments.
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Option<Self> {
        if segments.len() < 2 {
            return None;
        }
        Some(Self {
            body: segments,
            direction,
            pending: direction,
        })
    }

    pub fn reset(&mut self, center: Cell) {
        *self = Self::new(center);
    }

    /// Queue a turn for the next move.
    ///
    /// A reversal of the current heading is ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.pending = direction;
        }
    }

    /// Heading of the last executed move
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Heading the next move will take
    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn segments(&self) -> &[Cell] {
        &self.body
    }

    /// Check if a cell is occupied by any segment, tail included
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Advance one cell in the pending heading.
    ///
    /// The tail still counts as occupied during the self-collision check,
    /// so moving into the cell the tail is about to vacate is a collision.
    pub fn step(&mut self, grid: Grid, food: Cell) -> StepResult {
        let new_head = self.head().moved_in_direction(self.pending);

        if !new_head.is_within(grid) {
            return StepResult::WallCollision;
        }
        if self.occupies(new_head) {
            return StepResult::SelfCollision;
        }

        self.direction = self.pending;
        self.body.insert(0, new_head);

        if new_head == food {
            StepResult::AteFood
        } else {
            self.body.pop();
            StepResult::Moved
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true for a snake built through this API
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
