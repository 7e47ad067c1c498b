//! BLOCKDROP terminal front-end
//!
//! Owns everything the core leaves out: the terminal, key bindings and the
//! gravity clock.

mod input;
mod ui;

use blockdrop::settings::Settings;
use blockdrop::{Game, GameState};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use input::{Command, KeyBindings};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self, stdout},
    path::PathBuf,
    time::{Duration, Instant},
};

/// Longest wait for input between redraws
const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Application state
enum AppState {
    /// "Press Space to Start"
    Start,
    /// A session, including its game over screen
    Playing(Game),
}

/// Directory for log files
fn log_dir() -> PathBuf {
    let dir = std::env::temp_dir().join("blockdrop");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

fn main() -> io::Result<()> {
    let run_id: u32 = rand::random();
    let log_dir = log_dir();
    let log_file = format!("{run_id:08x}.log");

    // Setup tracing to log file; the terminal belongs to the UI
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("blockdrop=debug"));
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .init();

    tracing::info!(log = %log_dir.join(&log_file).display(), "blockdrop starting up");

    let settings = Settings::load();
    // Write out the defaults on first run so they can be edited
    if Settings::settings_path().is_some_and(|p| !p.exists()) {
        if let Err(e) = settings.save() {
            tracing::warn!("could not write default settings: {e}");
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &settings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;

    if let Ok(Some(score)) = &result {
        println!("Final Score: {score}");
    }
    result.map(|_| ())
}

/// Main loop; returns the score of the last session played, if any
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    settings: &Settings,
) -> io::Result<Option<u64>> {
    let keys = KeyBindings::from_settings(settings);
    let gravity = Duration::from_millis(settings.gameplay.gravity_ms.max(1));
    let mut state = AppState::Start;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| match &state {
            AppState::Start => ui::render_start(frame),
            AppState::Playing(game) => ui::render_game(frame, game, settings),
        })?;

        let timeout = gravity
            .saturating_sub(last_tick.elapsed())
            .min(FRAME_DURATION);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let command = keys.command(key);
                if command == Some(Command::Quit) {
                    let score = match &state {
                        AppState::Playing(game) => Some(game.score().points),
                        AppState::Start => None,
                    };
                    return Ok(score);
                }

                let space = key.code == KeyCode::Char(' ');
                match &mut state {
                    AppState::Start => {}
                    AppState::Playing(game) if game.state() == GameState::GameOver => {
                        if space {
                            game.new_session();
                            last_tick = Instant::now();
                        }
                    }
                    AppState::Playing(game) => {
                        if let Some(Command::Game(action)) = command {
                            game.process_action(action);
                        }
                    }
                }
                if space && matches!(state, AppState::Start) {
                    state = AppState::Playing(new_game(settings));
                    last_tick = Instant::now();
                }
            }
        }

        // Gravity is withheld while paused or finished
        if last_tick.elapsed() >= gravity {
            if let AppState::Playing(game) = &mut state {
                if game.state() == GameState::Playing {
                    game.tick();
                }
            }
            last_tick = Instant::now();
        }
    }
}

fn new_game(settings: &Settings) -> Game {
    let seed = settings.gameplay.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "new game");
    Game::with_seed(seed, settings.gameplay.preview_len())
}
