//! Mapping from terminal events to game actions.

use crate::types::{GameAction, JumpStep};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map any terminal event to a game action.
pub fn handle_event(event: &Event) -> Option<GameAction> {
    match event {
        Event::Key(key) => handle_key_event(*key),
        Event::Mouse(mouse) => handle_mouse_event(*mouse),
        _ => None,
    }
}

/// Map keyboard input to game actions.
///
/// Only presses count; repeats and releases are ignored.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        // Jumps
        KeyCode::Left | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('1') => {
            Some(GameAction::Jump(JumpStep::One))
        }
        KeyCode::Right | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('2') => {
            Some(GameAction::Jump(JumpStep::Two))
        }

        // Menus
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::Start)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Replay),

        _ => None,
    }
}

/// Map mouse input to game actions.
///
/// Jumps fire on button release: left jumps one cell, right jumps two.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<GameAction> {
    match mouse.kind {
        MouseEventKind::Up(MouseButton::Left) => Some(GameAction::Jump(JumpStep::One)),
        MouseEventKind::Up(MouseButton::Right) => Some(GameAction::Jump(JumpStep::Two)),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
