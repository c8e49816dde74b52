use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{
    config::GameConfig,
    direction::Direction,
    engine::{SnakeEngine, StepResult},
    error::Result,
    events::{EventLog, GameEvent},
    food::FoodPlacer,
    grid::{GridCell, GridSpace},
};

/// One play session: the engine plus the food it is chasing.
///
/// Acts as the tick driver. It detects food overlap, reports it to the
/// engine and places the next food item. Restarting means building a new
/// session.
pub struct GameSession {
    engine: SnakeEngine<EventLog>,
    food: Option<GridCell>,
    placer: FoodPlacer,
    rng: StdRng,
    steps: u32,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: &GameConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;

        let grid = GridSpace::new(config.grid_width, config.grid_height, config.cell_size)?;
        let engine = SnakeEngine::new(grid, EventLog::new())?;
        let placer = FoodPlacer::new(config.food_max_attempts)?;

        log::info!(
            "Starting session on a {}x{} grid at {} moves/s",
            grid.width(),
            grid.height(),
            config.speed
        );

        Ok(Self::from_parts(engine, placer, rng))
    }

    /// Wraps an already constructed engine; food is placed immediately.
    pub fn from_parts(engine: SnakeEngine<EventLog>, placer: FoodPlacer, rng: StdRng) -> Self {
        let mut session = Self {
            engine,
            food: None,
            placer,
            rng,
            steps: 0,
        };
        session.place_food();
        session
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.engine.set_pending_direction(direction);
    }

    /// Execute one tick of the game
    pub fn tick(&mut self) -> StepResult {
        if !self.engine.is_alive() {
            return StepResult::Died;
        }

        let result = self.engine.step();
        self.steps += 1;

        if result == StepResult::Moved {
            if let Some(food) = self.food
                && self.food_under_head(food)
                && self.engine.consume_food(food)
            {
                self.food = None;
            }

            if self.food.is_none() {
                self.place_food();
            }
        }

        result
    }

    /// Food is eaten when its continuous position resolves to the head cell.
    fn food_under_head(&self, food: GridCell) -> bool {
        let grid = self.engine.grid();
        grid.from_continuous(grid.to_continuous(food)) == self.engine.head()
    }

    fn place_food(&mut self) {
        let engine = &self.engine;
        self.food = self
            .placer
            .find_free_cell(engine.grid(), &mut self.rng, |cell| engine.occupies(cell));

        if let Some(cell) = self.food {
            log::debug!("Placed food at {}", cell);
        }
    }

    /// Events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.engine.sink_mut().drain()
    }

    pub fn engine(&self) -> &SnakeEngine<EventLog> {
        &self.engine
    }

    pub fn food(&self) -> Option<GridCell> {
        self.food
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    pub fn is_alive(&self) -> bool {
        self.engine.is_alive()
    }
}
