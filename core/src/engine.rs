use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Shorter snakes keep growing instead of moving their tail.
const MIN_MOVING_LENGTH: CellCount = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Active,
    /// The snake ran into a wall or itself.
    Lost,
    /// The snake filled every cell, so no point could be placed.
    Won,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Active
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    Wall,
    Body,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Head advanced and the tail followed.
    Moved,
    /// Head advanced and the tail stayed put.
    Grew,
    /// Head landed on the point, a new one was placed.
    AtePoint,
    /// The move was refused and the game is lost.
    Collided(Collision),
    /// The point was eaten and there is nowhere left to put another.
    Won,
}

impl TickOutcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Collided(_) | Self::Won)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Head direction changed right away.
    Accepted,
    /// Stored for the next tick.
    Queued,
    Ignored,
}

impl TurnOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Accepted => true,
            Self::Queued => true,
            Self::Ignored => false,
        }
    }
}

/// Single-snake game on a fixed board.
///
/// The engine owns the board and the segment chain and changes them together, so after
/// every call the snake cells on the board are exactly the segments of the chain. It does
/// not keep time: the owner calls [`SnakeEngine::progress_game`] once per tick and any
/// number of turn requests in between.
#[derive(Clone, Debug)]
pub struct SnakeEngine<G = RandomPointGenerator> {
    config: GameConfig,
    board: Board,
    chain: SegmentChain,
    generator: G,
    state: EngineState,
    length: CellCount,
    still_growing: bool,
    turn_lock: bool,
    queued_turn: Option<Direction>,
    point: Option<Coord2>,
    ticks: Saturating<u32>,
}

impl SnakeEngine {
    pub fn new(rows: Coord, cols: Coord) -> Result<Self> {
        Self::from_config(GameConfig::new(rows, cols)?)
    }

    pub fn with_seed(rows: Coord, cols: Coord, seed: u64) -> Result<Self> {
        Self::from_config(GameConfig::new(rows, cols)?.with_seed(seed))
    }

    pub fn from_config(config: GameConfig) -> Result<Self> {
        let generator = RandomPointGenerator::from_config(&config);
        Self::with_generator(config, generator)
    }
}

impl<G: PointGenerator> SnakeEngine<G> {
    /// Starts a game with a one-cell snake facing north in the center and a single point.
    pub fn with_generator(config: GameConfig, generator: G) -> Result<Self> {
        let config = config.validate()?;
        let mut board = Board::new(config.size);
        let chain = SegmentChain::new(&mut board, config.center(), Direction::North)?;

        let mut engine = Self {
            config,
            board,
            chain,
            generator,
            state: Default::default(),
            length: 1,
            still_growing: false,
            turn_lock: false,
            queued_turn: None,
            point: None,
            ticks: Saturating(0),
        };
        engine.create_random_point()?;
        Ok(engine)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_finished()
    }

    pub fn is_won(&self) -> bool {
        matches!(self.state, EngineState::Won)
    }

    pub fn snake_length(&self) -> CellCount {
        self.length
    }

    pub fn point_coordinates(&self) -> Option<Coord2> {
        self.point
    }

    /// Current heading of the head segment.
    pub fn direction(&self) -> Direction {
        self.chain.head_segment().facing()
    }

    pub fn queued_turn(&self) -> Option<Direction> {
        self.queued_turn
    }

    pub fn is_turn_locked(&self) -> bool {
        self.turn_lock
    }

    pub fn is_still_growing(&self) -> bool {
        self.still_growing
    }

    /// Number of ticks that moved the snake.
    pub fn ticks(&self) -> u32 {
        self.ticks.0
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Detached copy of the board, unaffected by later ticks.
    pub fn snapshot_board(&self) -> Board {
        self.board.clone()
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        self.board.cell_at(coords)
    }

    /// Start of a tail-to-head walk, follow it with [`SnakeEngine::segment`] and [`Segment::next`].
    pub fn tail_reference(&self) -> SegmentId {
        self.chain.tail()
    }

    pub fn head_reference(&self) -> SegmentId {
        self.chain.head()
    }

    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.chain.get(id)
    }

    pub fn segments(&self) -> SegmentIter<'_> {
        self.chain.iter()
    }

    /// Advances the snake one cell.
    ///
    /// A move into a wall or into the snake ends the game and leaves board and chain as
    /// they were. Calling this after the game ended is an error.
    pub fn progress_game(&mut self) -> Result<TickOutcome> {
        self.check_active()?;

        let head = *self.chain.head_segment();
        let facing = head.facing();
        let Some(target) = facing.step(head.coords(), self.board.size()) else {
            return Ok(self.collide(Collision::Wall, head.coords()));
        };
        if self.board[target].is_snake() {
            return Ok(self.collide(Collision::Body, target));
        }

        self.turn_lock = false;

        let ate_point = self.board[target].is_point();
        let too_short = self.length < MIN_MOVING_LENGTH;
        let grew = if ate_point && too_short {
            self.still_growing = true;
            true
        } else if ate_point {
            self.still_growing = false;
            true
        } else if too_short {
            true
        } else if self.still_growing {
            self.still_growing = false;
            true
        } else {
            self.chain.pop_tail(&mut self.board)?;
            false
        };
        if grew {
            self.length += 1;
        }

        if ate_point {
            self.point = None;
        }

        self.chain.push_head(&mut self.board, target, facing)?;

        if let Some(direction) = self.queued_turn.take() {
            log::trace!("Applying queued turn {} at {:?}", direction, target);
            self.rotate_head(direction)?;
        }

        self.ticks += 1;

        let outcome = if ate_point {
            if self.create_random_point()? {
                TickOutcome::AtePoint
            } else {
                TickOutcome::Won
            }
        } else if grew {
            TickOutcome::Grew
        } else {
            TickOutcome::Moved
        };
        log::debug!(
            "Tick {}: {:?}, head at {:?}, length {}",
            self.ticks.0,
            outcome,
            target,
            self.length
        );
        Ok(outcome)
    }

    pub fn turn_north(&mut self) -> TurnOutcome {
        self.turn(Direction::North)
    }

    pub fn turn_east(&mut self) -> TurnOutcome {
        self.turn(Direction::East)
    }

    pub fn turn_south(&mut self) -> TurnOutcome {
        self.turn(Direction::South)
    }

    pub fn turn_west(&mut self) -> TurnOutcome {
        self.turn(Direction::West)
    }

    /// Requests a quarter turn.
    ///
    /// Only one turn takes effect per tick; the first perpendicular request after that is
    /// queued for the next tick, anything else is dropped.
    pub fn turn(&mut self, direction: Direction) -> TurnOutcome {
        use TurnOutcome::*;

        let current = self.direction();
        let outcome = if self.state.is_finished() || !direction.is_perpendicular(current) {
            Ignored
        } else if !self.turn_lock {
            match self.rotate_head(direction) {
                Ok(()) => Accepted,
                Err(err) => {
                    log::warn!("Could not turn head {}: {}", direction, err);
                    Ignored
                }
            }
        } else if self.queued_turn.is_none() {
            self.queued_turn = Some(direction);
            Queued
        } else {
            Ignored
        };

        log::trace!("Turn {} while facing {}: {:?}", direction, current, outcome);
        outcome
    }

    /// Places a point on a uniformly chosen empty cell, replacing the current one.
    ///
    /// Returns `false` when the board has no empty cell left, which wins the game.
    pub fn create_random_point(&mut self) -> Result<bool> {
        self.check_active()?;
        if let Some(previous) = self.point.take() {
            self.board.cell_mut(previous)?.clear();
        }

        let candidates = self.board.empty_coords();
        let Some(&fallback) = candidates.first() else {
            self.point = None;
            self.end_game(EngineState::Won);
            return Ok(false);
        };

        let coords = match self.generator.choose(&candidates) {
            Some(coords) if self.board.get(coords).is_some_and(Cell::is_empty) => coords,
            other => {
                log::warn!(
                    "Point generator picked unusable cell {:?}, fallback to {:?}",
                    other,
                    fallback
                );
                fallback
            }
        };

        self.board.put(Cell::point(coords))?;
        self.point = Some(coords);
        log::trace!("Placed point at {:?}", coords);
        Ok(true)
    }

    fn rotate_head(&mut self, direction: Direction) -> Result<()> {
        self.chain.turn_head(&mut self.board, direction)?;
        self.turn_lock = true;
        Ok(())
    }

    fn collide(&mut self, collision: Collision, at: Coord2) -> TickOutcome {
        log::debug!("Collision with {:?} at {:?}", collision, at);
        self.end_game(EngineState::Lost);
        TickOutcome::Collided(collision)
    }

    fn end_game(&mut self, state: EngineState) {
        if self.state.is_finished() {
            return;
        }
        self.state = state;
        log::debug!(
            "Game ended {:?} after {} ticks with length {}",
            state,
            self.ticks.0,
            self.length
        );
    }

    fn check_active(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::InvalidState)
        } else {
            Ok(())
        }
    }
}
