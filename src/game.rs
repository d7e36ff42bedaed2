use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use rand::{rngs::StdRng, SeedableRng};
use std::io::{stdout, Write};
use tracing::{info, warn};

use crate::config::GameConfig;
use crate::engine::{Direction, GameState};
use crate::error::EngineError;
use crate::input::{self, Command};

const BOARD_TOP: u16 = 2;
const MIN_CELL_WIDTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

pub struct Game {
    state: GameState,
    rng: StdRng,
}

impl Game {
    /// Start a session. A `seed` makes tile placement reproducible.
    pub fn new(config: &GameConfig, seed: Option<u64>) -> Result<Self, EngineError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = GameState::new(config, &mut rng)?;
        info!(size = config.size(), seed = ?seed, "new game");
        Ok(Game { state, rng })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn handle(&mut self, command: Command) -> Result<Flow, EngineError> {
        match command {
            Command::Quit => {
                info!(score = self.state.total_score(), "player quit");
                Ok(Flow::Stop)
            }
            Command::Move(dir) => self.play_turn(dir),
            Command::Ignore => Ok(Flow::Continue),
        }
    }

    /// Apply a numeric direction code (0 = down, 1 = up, 2 = left, 3 = right).
    /// Unknown codes are logged and leave the board untouched.
    pub fn handle_code(&mut self, code: u8) -> Result<Flow, EngineError> {
        match Direction::try_from(code) {
            Ok(dir) => self.play_turn(dir),
            Err(err) => {
                warn!("{err}; ignoring turn");
                Ok(Flow::Continue)
            }
        }
    }

    fn play_turn(&mut self, dir: Direction) -> Result<Flow, EngineError> {
        self.state.apply_move(dir, &mut self.rng)?;
        if self.state.is_game_over() {
            Ok(Flow::Stop)
        } else {
            Ok(Flow::Continue)
        }
    }

    fn cell_width(&self) -> usize {
        let widest = self.state.highest_tile().to_string().len();
        (widest + 2).max(MIN_CELL_WIDTH)
    }

    fn footer_row(&self) -> u16 {
        let rows = 2 * self.state.size() + 1;
        BOARD_TOP.saturating_add(u16::try_from(rows).unwrap_or(u16::MAX))
    }

    fn draw(&self) -> std::io::Result<()> {
        let mut stdout = stdout();
        queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

        queue!(
            stdout,
            Print(format!(
                "Score: {} (+{})",
                self.state.total_score(),
                self.state.score_last_move()
            ))
        )?;

        let width = self.cell_width();
        let border = format!(
            "+{}",
            format!("{}+", "-".repeat(width)).repeat(self.state.size())
        );

        let mut y = BOARD_TOP;
        queue!(stdout, MoveTo(0, y), Print(&border))?;
        for row in self.state.grid().rows() {
            y = y.saturating_add(1);
            queue!(stdout, MoveTo(0, y), Print("|"))?;
            for &value in row {
                let label = if value == 0 {
                    String::from(".")
                } else {
                    value.to_string()
                };
                match tile_color(value) {
                    Some(color) => queue!(stdout, SetForegroundColor(color))?,
                    None if value != 0 => queue!(stdout, SetAttribute(Attribute::Bold))?,
                    None => {}
                }
                queue!(
                    stdout,
                    Print(format!("{label:^width$}")),
                    ResetColor,
                    SetAttribute(Attribute::Reset),
                    Print("|")
                )?;
            }
            y = y.saturating_add(1);
            queue!(stdout, MoveTo(0, y), Print(&border))?;
        }

        let footer = self.footer_row();
        if self.state.is_game_over() {
            queue!(stdout, MoveTo(0, footer), Print("No moves left!"))?;
        } else {
            queue!(
                stdout,
                MoveTo(0, footer),
                Print("Use arrow keys (or WASD / hjkl) to move, 'q' to quit")
            )?;
        }

        stdout.flush()
    }

    fn event_loop(&mut self) -> anyhow::Result<()> {
        self.draw()?;

        loop {
            let command = match event::read()? {
                Event::Key(key_event) => input::translate(key_event),
                Event::Resize(_, _) => {
                    self.draw()?;
                    continue;
                }
                _ => continue,
            };

            let flow = self.handle(command)?;
            self.draw()?;
            if flow == Flow::Stop {
                return Ok(());
            }
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), Hide)?;

        let result = self.event_loop();

        let footer = self.footer_row().saturating_add(1);
        let restored = terminal::disable_raw_mode().and_then(|()| {
            execute!(stdout(), MoveTo(0, footer), Show)
        });
        result?;
        restored?;

        if self.state.is_game_over() {
            println!("Game Over! Final score: {}", self.state.total_score());
        } else {
            println!("Final score: {}", self.state.total_score());
        }
        Ok(())
    }
}

/// 256-colour foreground for small tiles; larger tiles fall back to bold.
fn tile_color(value: u32) -> Option<Color> {
    let ansi = match value {
        2 => 179,
        4 => 178,
        8 => 172,
        16 => 208,
        32 => 160,
        64 => 196,
        128 => 220,
        256 => 184,
        _ => return None,
    };
    Some(Color::AnsiValue(ansi))
}
