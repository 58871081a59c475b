//! blinkread — RSVP speed reading in the terminal.
//!
//! Usage:
//!   blinkread read <INPUT> [--wpm N] [--theme light|dark]
//!   blinkread set [--wpm N] [--theme light|dark]
//!
//! `read` accepts a file path or literal text. `set` persists default
//! preferences; `read` flags override them for one run without saving.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use log::{debug, error};

use blinkread::engine::config::DEFAULT_WPM;
use blinkread::engine::{CancelToken, PlayOutcome, Session, SessionParams};
use blinkread::input::InputSource;
use blinkread::settings::{default_settings_path, Settings, SettingsProvider};
use blinkread::ui::theme::{Theme, ThemeKind};
use blinkread::ui::TerminalRenderer;

#[derive(Parser)]
#[command(name = "blinkread", about = "RSVP speed reading in the terminal", version)]
struct Cli {
    /// Settings file location (defaults to the user config directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flash a file or literal text one word at a time
    Read {
        /// Path to a text file, or the text itself
        input: String,

        /// Words per minute for this run only
        #[arg(long)]
        wpm: Option<u32>,

        /// Theme for this run only
        #[arg(long, value_enum)]
        theme: Option<ThemeKind>,
    },

    /// Persist default reading preferences
    Set {
        /// Words per minute to store
        #[arg(long)]
        wpm: Option<u32>,

        /// Theme to store
        #[arg(long, value_enum)]
        theme: Option<ThemeKind>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let settings_path = cli.settings.clone().or_else(default_settings_path);

    let result = match cli.command {
        Commands::Read { input, wpm, theme } => {
            run_read(settings_path.as_deref(), &input, wpm, theme)
        }
        Commands::Set { wpm, theme } => run_set(settings_path.as_deref(), wpm, theme),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("blinkread: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_read(
    settings_path: Option<&Path>,
    input: &str,
    wpm: Option<u32>,
    theme: Option<ThemeKind>,
) -> Result<(), Box<dyn Error>> {
    let stored = settings_path.map(Settings::load).unwrap_or_default();
    let wpm = wpm.or_else(|| stored.wpm()).unwrap_or(DEFAULT_WPM);
    let kind = theme.or_else(|| stored.theme()).unwrap_or_default();

    let text = InputSource::resolve(input).load()?;
    let params = SessionParams::new(wpm)?;
    debug!("session: {} wpm, {} ms/unit", wpm, params.millis_per_unit());
    let session = Session::new(&text, params)?;

    let cancel = CancelToken::new();
    let mut renderer = TerminalRenderer::new(Theme::for_kind(kind))?;
    spawn_key_listener(cancel.clone());

    let outcome = session.play(&mut renderer, &cancel)?;
    // Stop the key listener; playback is over either way
    cancel.cancel();
    if outcome == PlayOutcome::Cancelled {
        debug!("interrupted by user");
    }
    Ok(())
}

/// Watches for Ctrl-C, Esc, or `q` while playback runs. Raw mode turns
/// Ctrl-C into a key event, so interruption has to be read off the
/// event queue rather than a signal handler.
fn spawn_key_listener(cancel: CancelToken) {
    std::thread::spawn(move || loop {
        if cancel.is_cancelled() {
            break;
        }
        match event::poll(Duration::from_millis(100)) {
            Ok(true) => {
                if let Ok(Event::Key(key)) = event::read() {
                    let ctrl_c = key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL);
                    if ctrl_c || key.code == KeyCode::Esc || key.code == KeyCode::Char('q') {
                        cancel.cancel();
                        break;
                    }
                }
            }
            Ok(false) => {}
            Err(_) => break,
        }
    });
}

fn run_set(
    settings_path: Option<&Path>,
    wpm: Option<u32>,
    theme: Option<ThemeKind>,
) -> Result<(), Box<dyn Error>> {
    let path = settings_path.ok_or("no settings path available (set $HOME or pass --settings)")?;
    if wpm.is_none() && theme.is_none() {
        return Err("nothing to store: pass --wpm and/or --theme".into());
    }
    if let Some(rate) = wpm {
        // Reject a rate that could never play back
        SessionParams::new(rate)?;
    }

    let mut settings = Settings::load(path);
    if let Some(rate) = wpm {
        settings.wpm = Some(rate);
    }
    if let Some(kind) = theme {
        settings.theme = Some(kind);
    }
    settings.store(path)?;
    println!("saved settings to {}", path.display());
    Ok(())
}
