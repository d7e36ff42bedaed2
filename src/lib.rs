//! Sliding-tile merge puzzle.
//!
//! The [`engine`] module holds all game rules. The remaining modules are the
//! terminal front end used by the `tilemerge` binary.

pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;

pub use config::{Cli, GameConfig};
pub use engine::{Direction, GameState, Grid, Position};
pub use error::{ConfigError, EngineError, GridError, InvalidDirection};
