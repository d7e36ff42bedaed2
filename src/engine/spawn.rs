use rand::Rng;

use crate::error::EngineError;

use super::grid::Position;
use super::state::GameState;

pub const SPAWN_VALUE: u32 = 2;

/// Place a `2` on a uniformly chosen empty cell by rejection sampling.
///
/// Fails with [`EngineError::BoardFull`] instead of looping forever when the
/// grid has no empty cell.
pub fn spawn<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> Result<Position, EngineError> {
    let size = state.grid.size();
    if state.grid.is_full() {
        return Err(EngineError::BoardFull { cells: size * size });
    }

    loop {
        let pos = Position::new(rng.gen_range(0..size), rng.gen_range(0..size));
        if state.grid.is_empty_at(pos) {
            state.grid.set(pos, SPAWN_VALUE);
            state.tiles_in_play += 1;
            tracing::trace!(row = pos.row, col = pos.col, "spawned tile");
            return Ok(pos);
        }
    }
}
