//! EarthSentinel - Environmental monitoring for Brazil
//!
//! A terminal UI application that displays weather, forecasts, fire alerts,
//! carbon balance and citizen fire reports for Brazilian states.

use std::io;
use std::panic;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use earthsentinel::app::App;
use earthsentinel::cli::{Cli, StartupConfig};
use earthsentinel::{logging, ui};

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::from(2);
        }
    };

    // Logging is best effort; the dashboard runs without it
    if let Err(err) = logging::init(logging::log_dir().as_deref()) {
        eprintln!("warning: {}", err);
    }

    let result = if config.dump {
        dump(config)
    } else {
        run(config).await
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "exiting with error");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Prints the starting view's data as JSON without opening the TUI
fn dump(config: StartupConfig) -> Result<(), Box<dyn std::error::Error>> {
    let view = config.view;
    let app = App::with_startup_config(config);
    println!("{}", app.snapshot_json(view)?);
    Ok(())
}

async fn run(config: StartupConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!(region = %config.region, view = config.view.title(), "starting dashboard");
    let mut app = App::with_startup_config(config);

    // Main event loop
    loop {
        app.tick();
        if app.take_api_sync() {
            app.sync_api().await;
        }

        // Render UI
        terminal.draw(|f| ui::render(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
