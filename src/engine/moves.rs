use rand::Rng;
use tracing::{debug, info};

use crate::error::EngineError;

use super::direction::{resolve, Direction};
use super::grid::merge_value;
use super::scan::{scan, Scan};
use super::spawn::spawn;
use super::state::{is_terminal, GameState};

impl GameState {
    /// Slide and merge every tile towards `dir`.
    ///
    /// Returns whether any tile changed. A changed board receives a new tile,
    /// the score is credited and the terminal check runs. An unchanged board is
    /// left untouched, except that a terminal board is flagged as game over.
    ///
    /// Tiles are visited from the destination edge inwards and a merged tile is
    /// not protected from merging again: `[2, 2, 4, 0]` moved left becomes
    /// `[8, 0, 0, 0]`.
    pub fn apply_move<R: Rng + ?Sized>(
        &mut self,
        dir: Direction,
        rng: &mut R,
    ) -> Result<bool, EngineError> {
        if self.game_over {
            return Ok(false);
        }

        let resolved = resolve(dir, self.grid.size());
        let mut moved = false;
        let mut merged_value = 0;

        for origin in resolved.traversal() {
            let tile = self.grid.get(origin);
            if tile == 0 {
                continue;
            }

            let Scan { farthest, blocking } = scan(&self.grid, origin, resolved.vector);
            let merge = blocking.and_then(|target| {
                merge_value(tile, self.grid.get(target)).map(|value| (target, value))
            });
            match merge {
                Some((target, value)) => {
                    merged_value = value;
                    self.grid.set(target, value);
                    self.grid.set(origin, 0);
                    self.tiles_in_play = self.tiles_in_play.saturating_sub(1);
                    moved = true;
                }
                _ if farthest != origin => {
                    self.grid.set(farthest, tile);
                    self.grid.set(origin, 0);
                    moved = true;
                }
                _ => {}
            }
        }

        if !moved {
            if is_terminal(self) {
                info!(score = self.total_score, "no moves left");
                self.game_over = true;
            }
            debug!(direction = dir.as_str(), moved, "move rejected");
            return Ok(false);
        }

        self.score_last_move = merged_value;
        spawn(self, rng)?;
        self.total_score += u64::from(merged_value);

        if is_terminal(self) {
            info!(
                score = self.total_score,
                highest = self.highest_tile(),
                "game over"
            );
            self.game_over = true;
        }

        debug!(
            direction = dir.as_str(),
            moved,
            gained = self.score_last_move,
            total = self.total_score,
            tiles = self.tiles_in_play,
            "move applied"
        );
        Ok(true)
    }
}
