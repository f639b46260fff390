//! Key mapping from terminal events to game commands.

use crate::types::{Command, Direction, LetterLog, SpeedLevel};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a game command.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if let Some(direction) = direction_for(key.code) {
        return Some(Command::Move(direction));
    }

    match key.code {
        KeyCode::Char(' ') => Some(Command::StartFastFall),

        KeyCode::Char('m') | KeyCode::Char('M') => Some(Command::ToggleSound),

        KeyCode::Char('1') => Some(Command::SetSpeed(SpeedLevel::Easy)),
        KeyCode::Char('2') => Some(Command::SetSpeed(SpeedLevel::Normal)),
        KeyCode::Char('3') => Some(Command::SetSpeed(SpeedLevel::Hard)),

        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),

        // Ctrl+C is checked by `should_quit` before mapping.
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::SpeakLatest(LetterLog::Collected)),
        KeyCode::Char('b') | KeyCode::Char('B') => Some(Command::SpeakLatest(LetterLog::Burned)),

        KeyCode::Char('?') => Some(Command::ToggleHelp),

        _ => None,
    }
}

/// Steering keys: arrows, vim keys and WASD.
pub fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Direction::Right)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Direction::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Direction::Down)
        }
        _ => None,
    }
}

/// The fast-fall key
pub fn is_fast_fall_key(code: KeyCode) -> bool {
    code == KeyCode::Char(' ')
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Option<Command> {
        map_key(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(key(KeyCode::Left), Some(Command::Move(Direction::Left)));
        assert_eq!(key(KeyCode::Right), Some(Command::Move(Direction::Right)));
        assert_eq!(key(KeyCode::Up), Some(Command::Move(Direction::Up)));
        assert_eq!(key(KeyCode::Down), Some(Command::Move(Direction::Down)));

        assert_eq!(key(KeyCode::Char('H')), Some(Command::Move(Direction::Left)));
        assert_eq!(key(KeyCode::Char('l')), Some(Command::Move(Direction::Right)));
        assert_eq!(key(KeyCode::Char('w')), Some(Command::Move(Direction::Up)));
        assert_eq!(key(KeyCode::Char('J')), Some(Command::Move(Direction::Down)));
    }

    #[test]
    fn test_setting_keys() {
        assert_eq!(key(KeyCode::Char(' ')), Some(Command::StartFastFall));
        assert_eq!(key(KeyCode::Char('m')), Some(Command::ToggleSound));
        assert_eq!(
            key(KeyCode::Char('1')),
            Some(Command::SetSpeed(SpeedLevel::Easy))
        );
        assert_eq!(
            key(KeyCode::Char('3')),
            Some(Command::SetSpeed(SpeedLevel::Hard))
        );
        assert_eq!(key(KeyCode::Char('r')), Some(Command::Restart));
        assert_eq!(key(KeyCode::Char('?')), Some(Command::ToggleHelp));
        assert_eq!(
            key(KeyCode::Char('c')),
            Some(Command::SpeakLatest(LetterLog::Collected))
        );
        assert_eq!(
            key(KeyCode::Char('B')),
            Some(Command::SpeakLatest(LetterLog::Burned))
        );
        assert_eq!(key(KeyCode::Char('x')), None);
        assert_eq!(key(KeyCode::Enter), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
