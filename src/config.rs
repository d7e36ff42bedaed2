//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::error::ConfigError;

pub const DEFAULT_SIZE: usize = 4;
/// Largest board accepted. Keeps the grid allocation small and every drawn row
/// addressable by the terminal's `u16` coordinates.
pub const MAX_SIZE: usize = 1024;

/// Slide tiles, merge equal neighbours, reach 2048.
#[derive(Debug, Parser)]
#[command(name = "tilemerge")]
#[command(about = "A terminal sliding-tile merge puzzle", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board width and height in cells
    #[arg(
        short,
        long,
        env = "TILEMERGE_SIZE",
        default_value_t = DEFAULT_SIZE as i64,
        allow_negative_numbers = true
    )]
    pub size: i64,

    /// Seed for tile placement, for reproducible games
    #[arg(long, env = "TILEMERGE_SEED")]
    pub seed: Option<u64>,

    /// Directory for the session log (defaults to the platform cache dir)
    #[arg(long, env = "TILEMERGE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(self.size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    size: usize,
}

impl GameConfig {
    pub fn new(size: i64) -> Result<Self, ConfigError> {
        if size <= 0 {
            return Err(ConfigError::NonPositiveSize(size));
        }
        match usize::try_from(size) {
            Ok(size) if size <= MAX_SIZE => Ok(Self { size }),
            _ => Err(ConfigError::SizeTooLarge(size)),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { size: DEFAULT_SIZE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_sizes() {
        assert_eq!(GameConfig::new(0), Err(ConfigError::NonPositiveSize(0)));
        assert_eq!(GameConfig::new(-3), Err(ConfigError::NonPositiveSize(-3)));
        assert_eq!(GameConfig::new(1).map(|c| c.size()), Ok(1));
        assert_eq!(GameConfig::new(6).map(|c| c.size()), Ok(6));
    }

    #[test]
    fn rejects_sizes_above_the_limit() {
        let max = MAX_SIZE as i64;
        assert_eq!(GameConfig::new(max).map(|c| c.size()), Ok(MAX_SIZE));
        assert_eq!(GameConfig::new(max + 1), Err(ConfigError::SizeTooLarge(max + 1)));
        assert_eq!(
            GameConfig::new(4_000_000_000),
            Err(ConfigError::SizeTooLarge(4_000_000_000))
        );
        assert_eq!(
            GameConfig::new(i64::MAX),
            Err(ConfigError::SizeTooLarge(i64::MAX))
        );
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["tilemerge", "--size", "5", "--seed", "9"]).unwrap();
        assert_eq!(cli.game_config().unwrap().size(), 5);
        assert_eq!(cli.seed, Some(9));

        let cli = Cli::try_parse_from(["tilemerge", "-s", "-2"]).unwrap();
        assert_eq!(cli.game_config(), Err(ConfigError::NonPositiveSize(-2)));
    }

    #[test]
    fn rejects_non_numeric_size() {
        assert!(Cli::try_parse_from(["tilemerge", "--size", "four"]).is_err());
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
