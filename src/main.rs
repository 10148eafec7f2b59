use std::fs::{self, OpenOptions};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use parola::settings;

mod cli;
mod exits;
mod terminal;
mod tui;

use cli::Cli;

fn main() -> ExitCode {
    exits::install_handlers();
    exits::disable_core_dumps();

    let bare = std::env::args_os().len() == 1;
    let cli = Cli::parse();
    let interactive = bare || cli.interactive;

    init_logging(interactive);

    let result = if interactive { tui::run() } else { cli::run(cli) };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// stderr for the CLI. The interactive screen owns the terminal, so its
/// events go to a log file next to the settings file instead.
fn init_logging(interactive: bool) {
    let filter =
        EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| "parola=warn".into()));
    let writer = if interactive {
        log_file_writer()
    } else {
        BoxMakeWriter::new(std::io::stderr)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_ansi(!interactive)
                .with_writer(writer),
        )
        .init();
}

fn log_file_writer() -> BoxMakeWriter {
    let path = settings::log_path();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        let _ = fs::create_dir_all(parent);
    }

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(_) => BoxMakeWriter::new(std::io::sink),
    }
}
