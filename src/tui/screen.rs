//! Generator screen layout.

use parola::view::{Status, Toggle, View};

use crate::terminal::{
    BOLD, BOX_WIDTH, DIM, GREEN, RED, RESET, box_bottom, box_line, box_rule, box_top,
};

const KEYS: &str = "[Enter] Generate  [c] Copy  [x] Clear  [w] Save  [q] Quit";

pub fn render(view: &View) -> Vec<String> {
    let mut lines = vec![
        box_top("Random Password Generator"),
        box_line(&format!("Length: {} (fixed)", view.length)),
        box_rule(),
    ];

    for toggle in Toggle::ALL {
        let mark = if view.is_enabled(toggle) { "x" } else { " " };
        lines.push(box_line(&format!("[{mark}] {}  {}", toggle.key(), toggle.label())));
    }
    lines.push(box_rule());

    match view.shown() {
        Some(shown) => {
            let chars: Vec<char> = shown.password.as_str().chars().collect();
            for chunk in chars.chunks(BOX_WIDTH - 4) {
                let part: String = chunk.iter().collect();
                lines.push(box_line(&format!("{BOLD}{part}{RESET}")));
            }
            lines.push(box_line(&format!(
                "{} \u{2022} {:.1} bits",
                view.strength_text(),
                shown.entropy_bits
            )));
        }
        None => {
            lines.push(box_line(&format!("{DIM}(no password){RESET}")));
            lines.push(box_line(&view.strength_text()));
        }
    }

    lines.push(box_bottom());
    lines.push(format!(" {KEYS}"));

    match &view.status {
        Status::Idle => lines.push(String::new()),
        Status::Info(msg) => lines.push(format!(" {GREEN}{msg}{RESET}")),
        Status::Error(msg) => lines.push(format!(" {RED}{msg}{RESET}")),
    }

    lines
}
