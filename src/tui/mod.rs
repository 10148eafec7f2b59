//! Interactive generator screen.

mod input;
mod screen;

use crossterm::event::{self, Event, KeyEventKind};
use tracing::warn;

use parola::Result;
use parola::clipboard::Clipboard;
use parola::rng::SecureRandom;
use parola::settings::{self, Settings};
use parola::view::{Status, View};

use crate::terminal::{RawModeGuard, clear, reset_terminal, write_lines};
use input::Action;

/// Run the interactive screen until the user quits.
pub fn run() -> Result<()> {
    reset_terminal();

    let settings = Settings::load().unwrap_or_else(|e| {
        warn!(error = %e, "failed to load settings, using defaults");
        Settings::default()
    });
    let mut view = View::new(&settings);
    let mut rng = SecureRandom::new();
    let mut clipboard: Option<Clipboard> = None;

    // Fresh password on open; an empty saved charset just shows the error.
    let _ = view.generate(&mut rng);

    let mut guard = RawModeGuard::new()?;

    loop {
        clear();
        write_lines(&screen::render(&view));

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        match input::action(key) {
            Some(Action::Quit) => break,
            Some(Action::Generate) => {
                let _ = view.generate(&mut rng);
            }
            Some(Action::Toggle(toggle)) => view.toggle(toggle),
            Some(Action::Clear) => view.clear(),
            Some(Action::Copy) => copy(&mut view, &mut clipboard),
            Some(Action::Save) => {
                view.status = match view.to_settings(&settings).save() {
                    Ok(()) => Status::Info(format!(
                        "Settings saved to {}",
                        settings::path().display()
                    )),
                    Err(e) => Status::Error(format!("Failed to save settings: {e}")),
                };
            }
            None => {}
        }
    }

    guard.disable();
    clear();
    Ok(())
}

fn copy(view: &mut View, clipboard: &mut Option<Clipboard>) {
    if view.copy_text().is_none() {
        view.status = Status::Info("No password to copy.".into());
        return;
    }

    if clipboard.is_none() {
        match Clipboard::new() {
            Ok(c) => *clipboard = Some(c),
            Err(e) => {
                view.status = Status::Error(e.to_string());
                return;
            }
        }
    }

    let result = match (clipboard.as_mut(), view.copy_text()) {
        (Some(c), Some(text)) => c.copy(text),
        _ => return,
    };

    view.status = match result {
        Ok(()) => Status::Info("Password copied to clipboard.".into()),
        Err(e) => Status::Error(e.to_string()),
    };
}
