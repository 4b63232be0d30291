//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a game action.
///
/// Release events are ignored; repeats are treated like presses so holding an
/// arrow keeps the piece moving.
pub fn map_key(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(GameAction::SoftDrop),
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(GameAction::Rotate),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('r' | 'R') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(GameAction::MoveLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), Some(GameAction::MoveRight));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(GameAction::SoftDrop));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('A'))), Some(GameAction::MoveLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('l'))), Some(GameAction::MoveRight));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('j'))), Some(GameAction::SoftDrop));
    }

    #[test]
    fn test_rotate_drop_restart_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(GameAction::Rotate));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('w'))), Some(GameAction::Rotate));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(' '))), Some(GameAction::HardDrop));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('r'))), Some(GameAction::Restart));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_release_and_modified_keys_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
