//! Key bindings: map terminal key events to game actions

use blockdrop::Action;
use blockdrop::settings::Settings;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, ModifierKeyCode};

/// What a key press asks the front-end to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Game(Action),
    Quit,
}

/// Key bindings configuration - supports multiple keys per action
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<(Vec<KeyCode>, Action)>,
    quit: Vec<KeyCode>,
}

impl KeyBindings {
    /// Parse a key string into KeyCode
    fn parse_key(s: &str) -> Option<KeyCode> {
        let code = match s.to_lowercase().as_str() {
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "space" => KeyCode::Char(' '),
            "enter" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "esc" | "escape" => KeyCode::Esc,
            "shift" => KeyCode::Modifier(ModifierKeyCode::LeftShift),
            "ctrl" | "control" => KeyCode::Modifier(ModifierKeyCode::LeftControl),
            "alt" => KeyCode::Modifier(ModifierKeyCode::LeftAlt),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };
        Some(code)
    }

    /// Parse a list of key strings into KeyCodes, skipping unknown names
    fn parse_keys(keys: &[String]) -> Vec<KeyCode> {
        keys.iter()
            .filter_map(|s| {
                let code = Self::parse_key(s);
                if code.is_none() {
                    tracing::warn!("ignoring unknown key name {s:?}");
                }
                code
            })
            .collect()
    }

    /// Create keybindings from settings
    pub fn from_settings(settings: &Settings) -> Self {
        let keys = &settings.keys;
        Self {
            bindings: vec![
                (Self::parse_keys(&keys.move_left), Action::MoveLeft),
                (Self::parse_keys(&keys.move_right), Action::MoveRight),
                (Self::parse_keys(&keys.soft_drop), Action::SoftDrop),
                (Self::parse_keys(&keys.hard_drop), Action::HardDrop),
                (Self::parse_keys(&keys.rotate), Action::Rotate),
                (Self::parse_keys(&keys.hold), Action::Hold),
                (Self::parse_keys(&keys.pause), Action::Pause),
            ],
            quit: Self::parse_keys(&keys.quit),
        }
    }

    /// Translate a key press
    pub fn command(&self, key: KeyEvent) -> Option<Command> {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }

        let code = normalize_key(key.code);
        if self.quit.contains(&code) {
            return Some(Command::Quit);
        }
        self.bindings
            .iter()
            .find(|(codes, _)| codes.contains(&code))
            .map(|&(_, action)| Command::Game(action))
    }
}

/// Normalize key codes for consistent handling
fn normalize_key(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        KeyCode::Modifier(ModifierKeyCode::RightShift) => {
            KeyCode::Modifier(ModifierKeyCode::LeftShift)
        }
        other => other,
    }
}
