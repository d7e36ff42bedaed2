use rand::Rng;

use crate::config::GameConfig;
use crate::error::EngineError;

use super::direction::Direction;
use super::grid::{merge_value, Grid};
use super::spawn;

pub const STARTING_TILES: usize = 2;

/// `tiles_in_play` is maintained incrementally by spawns and merges rather than
/// recounted from the grid after each move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(super) grid: Grid,
    pub(super) total_score: u64,
    pub(super) score_last_move: u32,
    pub(super) tiles_in_play: usize,
    pub(super) game_over: bool,
}

impl GameState {
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, EngineError> {
        let grid = Grid::new(config.size());
        let cells = config.size() * config.size();
        let mut state = Self::from_grid(grid);
        for _ in 0..STARTING_TILES.min(cells) {
            spawn::spawn(&mut state, rng)?;
        }
        Ok(state)
    }

    /// Resume from an arbitrary grid. `tiles_in_play` is taken from the grid.
    pub fn from_grid(grid: Grid) -> Self {
        let tiles_in_play = grid.occupied();
        Self {
            grid,
            total_score: 0,
            score_last_move: 0,
            tiles_in_play,
            game_over: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    /// Value produced by the latest merge of the latest move, or 0.
    pub fn score_last_move(&self) -> u32 {
        self.score_last_move
    }

    pub fn tiles_in_play(&self) -> usize {
        self.tiles_in_play
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn highest_tile(&self) -> u32 {
        self.grid.highest_tile()
    }

    pub fn is_terminal(&self) -> bool {
        is_terminal(self)
    }
}

/// A board is terminal once every cell is occupied and no two edge-adjacent
/// cells can merge.
pub fn is_terminal(state: &GameState) -> bool {
    let grid = &state.grid;
    let size = grid.size();
    if state.tiles_in_play != size * size {
        return false;
    }

    !grid.positions().any(|pos| {
        let value = grid.get(pos);
        Direction::ALL.iter().any(|dir| {
            pos.step(dir.vector(), size)
                .is_some_and(|neighbour| merge_value(value, grid.get(neighbour)).is_some())
        })
    })
}
