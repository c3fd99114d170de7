//! arena_tui - Terminal front-end for the rock-paper-scissors arena

mod app;
mod ui;

use app::App;
use arena_core::config::{load_rules, RulesError};
use arena_core::{Session, WeaponId};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Error, Debug)]
enum AppError {
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid rules: {0}")]
    Config(#[from] RulesError),
    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Write DEBUG and above to `logs/<unix-time>.log`; the terminal belongs to the UI
fn init_logging() -> Result<(), AppError> {
    std::fs::create_dir_all("logs")?;
    let time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let file = std::fs::File::create(format!("logs/{}.log", time))?;
    let config = simplelog::ConfigBuilder::new()
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::WriteLogger::init(log::LevelFilter::Debug, config, file)?;
    Ok(())
}

fn main() -> Result<(), AppError> {
    init_logging()?;

    // Optional rules file as the first argument
    let session = match std::env::args().nth(1) {
        Some(path) => {
            let rules = load_rules(Path::new(&path))?;
            log::info!("loaded rules from {}", path);
            Session::with_rules(rules)?
        }
        None => Session::new(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), AppError> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
            (KeyCode::Char('?'), _) => app.toggle_help(),
            (KeyCode::Char('n'), _) => app.new_game(),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
            (KeyCode::Enter, _) => app.claim_selected(),
            (KeyCode::Esc, _) => app.decline(),
            (KeyCode::Char('r'), _) => app.play(WeaponId::Rock),
            (KeyCode::Char('p'), _) => app.play(WeaponId::Paper),
            (KeyCode::Char('s'), _) => app.play(WeaponId::Scissors),
            (KeyCode::Char('f'), _) => app.play(WeaponId::Fire),
            (KeyCode::Char('a'), _) => app.play(WeaponId::Air),
            (KeyCode::Char(c @ '1'..='5'), _) => app.play_slot(c as usize - '1' as usize),
            _ => {}
        }
    }

    Ok(())
}
