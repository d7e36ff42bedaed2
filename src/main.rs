use anyhow::Result;
use clap::Parser;

use tilemerge::game::Game;
use tilemerge::{logging, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config()?;

    let _guard = logging::setup_logging(cli.log_dir.as_deref())?;
    tracing::info!("Starting tilemerge on a {0}x{0} board", config.size());

    let mut game = Game::new(&config, cli.seed)?;
    game.run()?;

    tracing::info!(
        score = game.state().total_score(),
        highest = game.state().highest_tile(),
        "session finished"
    );
    Ok(())
}
