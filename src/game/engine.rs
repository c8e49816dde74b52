use super::{
    chain::SegmentChain,
    direction::Direction,
    error::{ConfigError, Result},
    events::EventSink,
    grid::{GridCell, GridSpace},
    orientation::{SegmentView, segment_views},
};

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    Moved,
    Died,
}

/// Why the snake died
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Tick-driven snake simulation.
///
/// One engine covers one play session. Once dead it stays dead; start a new
/// session by constructing a new engine.
pub struct SnakeEngine<S: EventSink = ()> {
    grid: GridSpace,
    head: GridCell,
    facing: Direction,
    pending_facing: Direction,
    chain: SegmentChain,
    alive: bool,
    collision: Option<CollisionType>,
    score: u32,
    consumed_this_tick: bool,
    sink: S,
}

impl<S: EventSink> SnakeEngine<S> {
    /// Creates the standard opening layout: head at the grid center facing
    /// right, with two segments directly behind it.
    pub fn new(grid: GridSpace, sink: S) -> Result<Self> {
        let head = grid.center();
        let facing = Direction::Right;
        let neck = head.moved_in_direction(facing.opposite());
        let tail = neck.moved_in_direction(facing.opposite());

        if !grid.is_in_bounds(tail) {
            return Err(ConfigError::GridTooSmall {
                width: grid.width(),
                height: grid.height(),
            });
        }

        Self::with_layout(grid, head, facing, vec![neck, tail], sink)
    }

    /// Creates an engine from an explicit head, facing and chain (neck first).
    ///
    /// The layout must be non-empty, in bounds, free of overlaps and
    /// contiguous from the head to the tail.
    pub fn with_layout(
        grid: GridSpace,
        head: GridCell,
        facing: Direction,
        chain: Vec<GridCell>,
        sink: S,
    ) -> Result<Self> {
        if chain.is_empty() {
            return Err(ConfigError::EmptyChain);
        }

        if !grid.is_in_bounds(head) {
            return Err(ConfigError::OutOfBounds(head));
        }

        let mut ahead = head;
        for (i, &cell) in chain.iter().enumerate() {
            if !grid.is_in_bounds(cell) {
                return Err(ConfigError::OutOfBounds(cell));
            }
            if cell == head || chain[..i].contains(&cell) {
                return Err(ConfigError::OverlappingChain(cell));
            }
            if cell.direction_to(ahead).is_none() {
                return Err(ConfigError::DisconnectedChain(cell));
            }
            ahead = cell;
        }

        Ok(Self {
            grid,
            head,
            facing,
            pending_facing: facing,
            chain: SegmentChain::from_cells(chain),
            alive: true,
            collision: None,
            score: 0,
            consumed_this_tick: false,
            sink,
        })
    }

    /// Requests a direction for the next tick. A reversal of the current
    /// facing is dropped; otherwise the latest request wins.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if !self.facing.is_opposite(direction) {
            self.pending_facing = direction;
        }
    }

    /// Advances the simulation by one tick
    pub fn step(&mut self) -> StepResult {
        if !self.alive {
            return StepResult::Died;
        }

        self.consumed_this_tick = false;
        self.facing = self.pending_facing;

        let candidate = self.head.moved_in_direction(self.facing);

        if let Some(collision) = self.check_collision(candidate) {
            self.die(collision);
            return StepResult::Died;
        }

        let previous_head = self.head;
        self.chain.advance(previous_head);
        self.head = candidate;

        StepResult::Moved
    }

    /// Extends the body by one segment. Ignored once dead.
    pub fn grow(&mut self) {
        if !self.alive {
            return;
        }

        if let Some(cell) = self.chain.grow(self.head, &self.grid) {
            log::trace!("Grew new tail at {}", cell);
        }
    }

    /// Reports that the food at `food_cell` was eaten.
    ///
    /// Accepted at most once per tick and only when the food sits on the head
    /// cell. Returns whether the report was accepted.
    pub fn consume_food(&mut self, food_cell: GridCell) -> bool {
        if !self.alive || self.consumed_this_tick || food_cell != self.head {
            return false;
        }

        self.consumed_this_tick = true;
        self.grow();
        self.add_score(1);
        true
    }

    /// Adds `amount` to the score and notifies the sink. Zero is ignored.
    pub fn add_score(&mut self, amount: u32) {
        if !self.alive || amount == 0 {
            return;
        }

        self.score = self.score.saturating_add(amount);
        self.sink.score_changed(self.score);
    }

    /// Check if the candidate head cell causes a collision
    fn check_collision(&self, candidate: GridCell) -> Option<CollisionType> {
        if !self.grid.is_in_bounds(candidate) {
            return Some(CollisionType::Wall);
        }

        if self.chain.collides_on_advance(candidate) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    fn die(&mut self, collision: CollisionType) {
        self.alive = false;
        self.collision = Some(collision);
        log::info!(
            "Snake died at {} facing {:?}: {:?}",
            self.head,
            self.facing,
            collision
        );
        self.sink.game_over();
    }

    pub fn grid(&self) -> &GridSpace {
        &self.grid
    }

    pub fn head(&self) -> GridCell {
        self.head
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_facing
    }

    pub fn chain(&self) -> &SegmentChain {
        &self.chain
    }

    /// Number of cells covered by the snake, head included
    pub fn len(&self) -> usize {
        self.chain.len() + 1
    }

    /// Check if the snake is empty (never true, the head always exists)
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn collision(&self) -> Option<CollisionType> {
        self.collision
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the head or any body segment covers `cell`
    pub fn occupies(&self, cell: GridCell) -> bool {
        self.head == cell || self.chain.contains(cell)
    }

    /// Body segments with their render shape, neck first
    pub fn segments(&self) -> Vec<SegmentView> {
        segment_views(self.head, self.chain.cells())
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
