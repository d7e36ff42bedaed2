//! Move resolution for the sliding-tile board.

mod direction;
mod grid;
mod moves;
mod scan;
mod spawn;
mod state;

pub use direction::{resolve, AxisOrder, Direction, Resolved};
pub use grid::{merge_value, Grid, Position};
pub use scan::{scan, Scan};
pub use spawn::{spawn, SPAWN_VALUE};
pub use state::{is_terminal, GameState, STARTING_TILES};
