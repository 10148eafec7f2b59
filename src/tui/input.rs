use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use parola::view::Toggle;

/// What a key press asks the screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    Copy,
    Clear,
    Save,
    Quit,
    Toggle(Toggle),
}

pub fn action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Enter | KeyCode::Char('g') => Some(Action::Generate),
        KeyCode::Char('c') => Some(Action::Copy),
        KeyCode::Char('x') => Some(Action::Clear),
        KeyCode::Char('w') => Some(Action::Save),
        KeyCode::Char(c) => Toggle::from_key(c).map(Action::Toggle),
        _ => None,
    }
}
