use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use holdem_table::config::AppConfig;
use holdem_table::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::fs::File;
use std::io::{self, IsTerminal, Stdout};
use std::sync::Mutex;
use std::time::Duration;

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// The terminal belongs to the UI, so logs only go to a file when one is configured.
fn init_logging(config: &AppConfig) -> io::Result<()> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(());
    };
    let file = File::options().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(config.log_level)
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("holdem-table: {err}");
            std::process::exit(2);
        }
    };
    init_logging(&config)?;

    if !io::stdout().is_terminal() {
        println!(
            "holdem-table TUI requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            holdem_table::VERSION
        );
        return Ok(());
    }
    tracing::info!(
        starting_cash = config.table.starting_cash,
        seed = ?config.shuffle_seed,
        "holdem-table starting"
    );

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::new(config);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
