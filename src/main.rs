//! folio: a scroll-spy résumé page for the terminal.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use folio::{app_state, config, profile, ui};
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Scroll-spy résumé pages in the terminal", long_about = None)]
struct Args {
    /// Profile JSON to display; shows a sample page when omitted
    #[arg(value_name = "PROFILE")]
    profile: Option<PathBuf>,

    /// Configuration file (defaults to ./folio.toml if present)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    // The terminal is the UI, so logs only go to a file.
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let cfg = config::Config::load(args.config.as_deref())?;
    // A profile that fails to load opens behind the error panel so it can be fixed and reloaded.
    let (profile, load_error) = match &args.profile {
        Some(path) => match profile::Profile::load(path) {
            Ok(profile) => (profile, None),
            Err(e) => (profile::Profile::blank("folio"), Some(e)),
        },
        None => (profile::Profile::sample(), None),
    };
    tracing::info!(name = %profile.name, sections = profile.sections.len(), "starting folio");

    let size = ratatui::crossterm::terminal::size()?;
    let mut state = app_state::AppState::new(cfg, profile, args.profile, size, Instant::now())?;
    if let Some(e) = load_error {
        state.boundary.trip(&e);
    }

    run_tui(state)
}

fn run_tui(mut app: app_state::AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);
    app.teardown();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "terminal loop failed");
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
) -> io::Result<()> {
    let frame = app.commander.options().throttle.max(folio::throttle::FRAME);
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(frame)? {
            let now = Instant::now();
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.message = None;
                    let quit = if app.boundary.is_tripped() {
                        handle_tripped_key(app, key.code, now)
                    } else if app.is_searching() {
                        handle_search_key(app, key.code, now);
                        false
                    } else {
                        handle_key(app, key.code, key.modifiers, now)
                    };
                    if quit {
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => app.resize(width, height, now),
                _ => {}
            }
        }

        app.tick(Instant::now());
    }
}

/// Only recovery keys work while the error panel is up. Returns true to quit.
fn handle_tripped_key(app: &mut app_state::AppState, code: KeyCode, now: Instant) -> bool {
    match code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('r') => app.retry(now),
        KeyCode::Char('R') => app.reload(now),
        _ => {}
    }
    false
}

/// Typing goes into the project search; Enter keeps the term, Esc drops it.
fn handle_search_key(app: &mut app_state::AppState, code: KeyCode, now: Instant) {
    match code {
        KeyCode::Enter => app.end_search(),
        KeyCode::Esc => app.clear_filter(now),
        KeyCode::Backspace => app.search_backspace(now),
        KeyCode::Char(c) => app.search_input(c, now),
        _ => {}
    }
}

/// Returns true to quit.
fn handle_key(
    app: &mut app_state::AppState,
    code: KeyCode,
    modifiers: KeyModifiers,
    now: Instant,
) -> bool {
    match code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1.0, now),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1.0, now),
        KeyCode::PageUp => app.page_by(-1.0, now),
        KeyCode::PageDown | KeyCode::Char(' ') => app.page_by(1.0, now),
        KeyCode::Home | KeyCode::Char('t') => app.scroll_to_top(),
        KeyCode::End => app.page_by(f64::from(u16::MAX), now),
        KeyCode::Tab => app.next_section(),
        KeyCode::BackTab => app.prev_section(),
        KeyCode::Char('m') => app.nav.toggle_menu(),
        KeyCode::Esc => {
            app.nav.close_menu();
            app.clear_filter(now);
        }
        KeyCode::Char('f') => app.cycle_category(now),
        KeyCode::Char('/') => app.begin_search(),
        KeyCode::Char('R') => app.reload(now),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(n) = c.to_digit(10).and_then(|n| usize::try_from(n).ok()) {
                app.go_to_item(n - 1);
            }
        }
        _ => {}
    }
    false
}
