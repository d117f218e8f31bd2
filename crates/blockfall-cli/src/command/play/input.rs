use blockfall_engine::Command;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

/// What a key press asks the play screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::From)]
pub enum Action {
    Command(Command),
    #[from(skip)]
    Quit,
}

/// Maps a terminal event to an action. Key releases and non-key events map to nothing.
pub fn action_for(event: &Event) -> Option<Action> {
    let key = event.as_key_event()?;
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let action = match key.code {
        KeyCode::Left => Command::MoveLeft.into(),
        KeyCode::Right => Command::MoveRight.into(),
        KeyCode::Down => Command::SoftDrop.into(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => Command::RotateCcw.into(),
            'w' => Command::RotateCw.into(),
            _ => return None,
        },
        KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyEventState};

    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_key_map() {
        let cases = [
            (KeyCode::Left, Action::Command(Command::MoveLeft)),
            (KeyCode::Right, Action::Command(Command::MoveRight)),
            (KeyCode::Down, Action::Command(Command::SoftDrop)),
            (KeyCode::Char('q'), Action::Command(Command::RotateCcw)),
            (KeyCode::Char('W'), Action::Command(Command::RotateCw)),
            (KeyCode::Esc, Action::Quit),
        ];
        for (code, expected) in cases {
            assert_eq!(action_for(&press(code)), Some(expected), "{code:?}");
        }
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(action_for(&event), Some(Action::Quit));
        assert_eq!(action_for(&press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_unmapped_and_released_keys_are_ignored() {
        assert_eq!(action_for(&press(KeyCode::Up)), None);
        assert_eq!(action_for(&press(KeyCode::Char(' '))), None);
        assert_eq!(action_for(&Event::FocusGained), None);

        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Left,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(action_for(&Event::Key(release)), None);
    }
}
