use super::{
    action::Command,
    config::{GameConfig, Grid},
    difficulty::Difficulty,
    food::place_food,
    state::{Cell, Snake, StepResult},
};
use log::info;
use rand::Rng;

/// Top-level mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    DifficultySelect,
    Playing,
    GameOver,
    Won,
}

/// A mode change performed by a single frame update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A difficulty was picked and a fresh run started
    Started(Difficulty),
    /// The run ended on a collision
    Lost(StepResult),
    /// The win threshold was reached
    Won,
    /// A finished run was acknowledged; back to the menu
    Restarted,
}

/// The single owner of all game state.
///
/// Input and rendering only ever see this through `&self` accessors; every
/// mutation goes through [`Game::update`].
pub struct Game<R = rand::rngs::ThreadRng> {
    config: GameConfig,
    grid: Grid,
    rng: R,
    mode: GameMode,
    difficulty: Option<Difficulty>,
    snake: Snake,
    food: Cell,
    score: u32,
    frame_counter: u32,
}

impl Game<rand::rngs::ThreadRng> {
    /// Create a new game sitting on the difficulty menu
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let grid = config.grid();
        let center = Self::center_of(grid);
        Self {
            config,
            grid,
            rng,
            mode: GameMode::DifficultySelect,
            difficulty: None,
            snake: Snake::new(center),
            // Placed for real when a run starts
            food: center,
            score: 0,
            frame_counter: 0,
        }
    }

    /// Run one rendered frame worth of game logic.
    ///
    /// `commands` holds every command produced since the previous frame, in
    /// arrival order. Commands irrelevant to the current mode are dropped.
    pub fn update(&mut self, commands: &[Command]) -> Option<Transition> {
        match self.mode {
            GameMode::DifficultySelect => {
                let difficulty = commands.iter().find_map(|command| match command {
                    Command::SelectDifficulty(difficulty) => Some(*difficulty),
                    _ => None,
                })?;
                self.start(difficulty);
                Some(Transition::Started(difficulty))
            }
            GameMode::GameOver | GameMode::Won => {
                if commands.contains(&Command::Acknowledge) {
                    self.mode = GameMode::DifficultySelect;
                    Some(Transition::Restarted)
                } else {
                    None
                }
            }
            GameMode::Playing => {
                for command in commands {
                    if let Command::Turn(direction) = command {
                        self.snake.set_direction(*direction);
                    }
                }
                self.advance_frame()
            }
        }
    }

    /// Begin a fresh run at the given difficulty
    pub fn start(&mut self, difficulty: Difficulty) {
        self.difficulty = Some(difficulty);
        self.snake.reset(Self::center_of(self.grid));
        self.score = 0;
        self.frame_counter = 0;
        self.food = place_food(&self.snake, self.grid, &mut self.rng);
        self.mode = GameMode::Playing;
        info!(
            "starting {:?} run, {} frames per move, food at {:?}",
            difficulty,
            difficulty.tick_interval(),
            self.food
        );
    }

    fn advance_frame(&mut self) -> Option<Transition> {
        let interval = self.tick_interval();
        self.frame_counter += 1;
        if self.frame_counter < interval {
            return None;
        }
        self.frame_counter = 0;

        match self.snake.step(self.grid, self.food) {
            StepResult::Moved => None,
            StepResult::AteFood => {
                self.score += 1;
                self.food = place_food(&self.snake, self.grid, &mut self.rng);
                if self.score >= self.config.win_score {
                    self.mode = GameMode::Won;
                    info!("run won with {} points", self.score);
                    Some(Transition::Won)
                } else {
                    None
                }
            }
            collision @ (StepResult::WallCollision | StepResult::SelfCollision) => {
                self.mode = GameMode::GameOver;
                info!(
                    "game over ({:?}) with {} points, snake length {}",
                    collision,
                    self.score,
                    self.snake.len()
                );
                Some(Transition::Lost(collision))
            }
        }
    }

    fn center_of(grid: Grid) -> Cell {
        Cell::new(grid.width / 2, grid.height / 2)
    }
}

impl<R> Game<R> {
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Frames between two moves for the current run
    pub fn tick_interval(&self) -> u32 {
        self.difficulty.map_or(1, |d| d.tick_interval())
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Cell) {
        self.food = food;
    }
}
