//! Terminal key events to game inputs.

use crate::game::{Direction, GameInput, Pigeon};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        _ => None,
    }
}

/// Map a key event to a game input.
///
/// `release_events` says whether the terminal reports key releases. When it
/// does not, pressing the key of a direction the pigeon is already moving in
/// stops that axis instead.
pub fn map_key(key: KeyEvent, release_events: bool, pigeon: &Pigeon) -> Option<GameInput> {
    if let Some(direction) = direction_for(key.code) {
        return match key.kind {
            KeyEventKind::Release => Some(GameInput::Release(direction)),
            KeyEventKind::Repeat => None,
            KeyEventKind::Press if !release_events && pigeon.is_moving(direction) => {
                Some(GameInput::Release(direction))
            }
            KeyEventKind::Press => Some(GameInput::Press(direction)),
        };
    }

    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameInput::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameInput::Quit)
        }
        KeyCode::Char(' ') => Some(GameInput::PauseResume),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameInput::Reset),
        _ => None,
    }
}
