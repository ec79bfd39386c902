use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Maps an arrow-key identifier to a direction. Any other key
    /// identifier yields `None`.
    #[must_use]
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }
}

/// High-level control events consumed by the game loop controller.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    /// An arrow key, carried by its key identifier.
    DirectionKey(&'static str),
    Start,
    Pause,
    Resume,
    Restart,
    Level(u32),
    NextTheme,
    Quit,
}

/// Maps a terminal key event to a control event. Unbound keys yield `None`.
#[must_use]
pub fn map_key_event(event: KeyEvent) -> Option<GameInput> {
    if event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(GameInput::Quit);
    }

    match event.code {
        KeyCode::Up => Some(GameInput::DirectionKey("ArrowUp")),
        KeyCode::Down => Some(GameInput::DirectionKey("ArrowDown")),
        KeyCode::Left => Some(GameInput::DirectionKey("ArrowLeft")),
        KeyCode::Right => Some(GameInput::DirectionKey("ArrowRight")),
        KeyCode::Enter => Some(GameInput::Start),
        KeyCode::Char('p') => Some(GameInput::Pause),
        KeyCode::Char('r') => Some(GameInput::Resume),
        KeyCode::Char('n') => Some(GameInput::Restart),
        KeyCode::Char('t') => Some(GameInput::NextTheme),
        KeyCode::Char(digit @ '1'..='4') => {
            Some(GameInput::Level(u32::from(digit) - u32::from('0')))
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{map_key_event, Direction, GameInput};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn arrow_key_names_map_to_directions() {
        assert_eq!(Direction::from_key_name("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key_name("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key_name("ArrowLeft"), Some(Direction::Left));
        assert_eq!(
            Direction::from_key_name("ArrowRight"),
            Some(Direction::Right)
        );
    }

    #[test]
    fn other_key_names_are_ignored()  {
        assert_eq!(Direction::from_key_name("Enter"), None);
        assert_eq!(Direction::from_key_name("a"), None);
        assert_eq!(Direction::from_key_name(""), None);
    }

    #[test]
    fn terminal_keys_map_to_control_events() {
        let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(
            map_key_event(plain(KeyCode::Up)),
            Some(GameInput::DirectionKey("ArrowUp"))
        );
        assert_eq!(map_key_event(plain(KeyCode::Enter)), Some(GameInput::Start));
        assert_eq!(
            map_key_event(plain(KeyCode::Char('p'))),
            Some(GameInput::Pause)
        );
        assert_eq!(
            map_key_event(plain(KeyCode::Char('3'))),
            Some(GameInput::Level(3))
        );
        assert_eq!(map_key_event(plain(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key_event(event), Some(GameInput::Quit));
    }
}
