// ABOUTME: Main entry point for the classroom dashboard TUI

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, Terminal};
use std::{
    io,
    path::PathBuf,
    time::{Duration, Instant},
};
use tracing::{error, info};

use classroom_notify::app::{App, EventHandler};
use classroom_notify::components::LayoutComponent;
use classroom_notify::config::AppConfig;
use classroom_notify::notification::NotificationCenter;

#[derive(Debug, Parser)]
#[command(name = "classroom-notify", version, about = "Classroom dashboard with toast notifications")]
struct Cli {
    /// Path to config file (defaults to ~/.classroom-notify/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the auto-dismiss duration for notifications, 0 keeps them until dismissed
    #[arg(long)]
    default_duration_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging()?;
    setup_panic_handler();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(duration_ms) = cli.default_duration_ms {
        config.notifications.default_duration_ms = duration_ms;
    }

    let center = NotificationCenter::new(&config.notifications)?;
    let mut app = App::new(&center, config.ui.clone());
    app.init();
    let mut layout = LayoutComponent::new();

    let result = run_tui(&mut app, &mut layout);

    center.shutdown();
    info!("Dashboard exited");
    result
}

fn run_tui(app: &mut App, layout: &mut LayoutComponent) -> Result<()> {
    if let Err(e) = crossterm::terminal::is_raw_mode_enabled() {
        eprintln!("Cannot check terminal raw mode: {}", e);
        return Err(anyhow::anyhow!("Terminal not compatible: {}", e));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app, layout);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    layout: &mut LayoutComponent,
) -> Result<()> {
    // Timers run on tokio worker threads, so the loop only needs to poll for redraws
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(|frame| {
                layout.render(frame, &app.state);
            })?;
            dirty = false;
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    if let Some(app_event) = EventHandler::handle_key_event(key_event, &mut app.state) {
                        EventHandler::process_event(app_event, &mut app.state);
                    }
                    dirty = true;
                }
                Event::Resize(_, _) => dirty = true,
                _ => {}
            }
        }

        // Ticks keep the progress bars moving
        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
            dirty = true;
        }

        if app.needs_ui_refresh() {
            dirty = true;
        }

        if app.state.should_quit {
            return Ok(());
        }
    }
}

fn setup_logging() -> Result<()> {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = dirs::home_dir()
        .map(|home| home.join(".classroom-notify").join("logs"))
        .unwrap_or_else(|| PathBuf::from(".classroom-notify/logs"));

    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {:?}", log_dir))?;

    let log_file = log_dir.join(format!(
        "classroom-notify-{}.log",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to create log file {:?}", log_file))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(file)
                .with_ansi(false) // No ANSI colors in log file
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "classroom_notify=info".into())
        )
        .init();

    Ok(())
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        let _ = disable_raw_mode();
        let _ = execute!(
            std::io::stderr(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
