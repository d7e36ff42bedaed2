//! Keyboard translation. This is the only place raw key codes are interpreted.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::engine::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
    Ignore,
}

/// Map a key event to a command. Only presses count; repeats and releases are
/// ignored so one physical press is one turn.
pub fn translate(event: KeyEvent) -> Command {
    if event.kind != KeyEventKind::Press {
        return Command::Ignore;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return Command::Quit;
    }

    match event.code {
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Command::Move(Direction::Down),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Command::Move(Direction::Up),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Command::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => Command::Move(Direction::Right),
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::F(1) => Command::Quit,
        _ => Command::Ignore,
    }
}
