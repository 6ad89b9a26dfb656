// Clippy configuration: enable pedantic but allow overly strict lints
#![allow(clippy::missing_errors_doc)] // Internal functions don't need # Errors docs
#![allow(clippy::missing_panics_doc)] // Internal functions don't need # Panics docs
#![allow(clippy::must_use_candidate)] // Not all getters need #[must_use]
#![allow(clippy::module_name_repetitions)] // e.g., DialogKind in dialog module is fine
#![allow(clippy::doc_markdown)] // Don't require backticks around TOML, TUI, etc.
#![allow(clippy::cast_possible_truncation)] // Label widths always fit in u16
#![allow(clippy::match_same_arms)] // Explicit arms are clearer than combined patterns
#![allow(clippy::trivially_copy_pass_by_ref)] // &self on Copy types follows Rust conventions

//! botones-alerta - five buttons, five alert dialogs, one status line
//!
//! Each button opens a modal dialog with static text and one or two
//! actions; confirming updates the status line.
//!
//! Usage:
//!   botones-alerta            # Start TUI (default)
//!   botones-alerta catalog    # Print every dialog's content

mod action;
mod app;
mod cli;
mod config;
mod dialog;
mod errors;
mod event;
mod tui;
mod ui;

use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use color_eyre::Result;
use config::AppConfig;
use dialog::DialogKind;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Get the log directory path
fn get_log_dir() -> PathBuf {
    directories::BaseDirs::new().map_or_else(
        || PathBuf::from("/tmp/botones-alerta/logs"),
        |dirs| dirs.cache_dir().join("botones-alerta").join("logs"),
    )
}

/// Print the dialog catalog to stdout
fn print_catalog() {
    for kind in DialogKind::ALL {
        let content = kind.content();
        println!("[{}] {}", kind.shortcut(), kind.label());
        println!("  Title:   {}", content.title);
        println!("  Message: {}", content.message);
        println!("  Confirm: {}", content.confirm_label);
        println!("  Cancel:  {}", content.cancel_label.unwrap_or("-"));
        match (content.on_confirm)() {
            dialog::ConfirmEffect::SetStatus(status) => println!("  Status → {status}"),
            dialog::ConfirmEffect::Dismiss => println!("  Status unchanged"),
        }
        println!();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Catalog) => {
            print_catalog();
            return Ok(());
        }
        Some(Commands::Config) => {
            let path = cli.config.unwrap_or_else(AppConfig::default_path);
            println!("# Config path: {}", path.display());
            print!("{}", AppConfig::example());
            return Ok(());
        }
        Some(Commands::Completions { shell }) => {
            // Generate shell completions
            cli::print_completions(shell);
            return Ok(());
        }
        None => {
            // TUI mode: continue with full setup
        }
    }

    // Initialize error handling
    color_eyre::install()?;

    // Setup file logging with rotation
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "botones-alerta.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let log_filter = format!("botones_alerta={}", cli.log_level);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .init();

    tracing::info!("Starting botones-alerta v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {:?}", log_dir);

    // Load configuration from file; CLI flag wins over it
    let config = AppConfig::load(cli.config.as_deref());
    let mouse = config.ui.mouse && !cli.no_mouse;
    tracing::info!(
        "Loaded config: ui.mouse = {}, ui.hints = {}",
        mouse,
        config.ui.hints
    );

    run_tui(&config, mouse, cli.debug, cli.tick_rate, cli.frame_rate).await
}

async fn run_tui(
    config: &AppConfig,
    mouse: bool,
    debug_mode: bool,
    tick_rate: f64,
    frame_rate: f64,
) -> Result<()> {
    use std::time::{Duration, Instant};
    use tokio_util::sync::CancellationToken;

    let frame_duration = Duration::from_secs_f64(1.0 / frame_rate.max(1.0));
    let poll_interval = event::input::poll_interval(tick_rate);
    tracing::info!(
        "TUI starting: {:.1} FPS, {:.1} ticks/sec",
        frame_rate,
        tick_rate
    );

    // Guard first so a partially failed init still restores the terminal
    let _guard = tui::TerminalGuard;

    // Initialize terminal (raw mode, alternate screen, optional mouse capture)
    let mut terminal = tui::init(mouse)?;

    let size = terminal.size()?;
    let mut app = App::new(
        debug_mode,
        config,
        ratatui::layout::Rect::new(0, 0, size.width, size.height),
    );

    // Create event channel
    let (event_tx, mut event_rx) = mpsc::channel(100);

    // Create cancellation token for graceful shutdown
    let cancel = CancellationToken::new();

    // Spawn input event handler with cancellation support
    let input_cancel = cancel.clone();
    let input_handle = tokio::spawn(async move {
        event::input::listen(event_tx, input_cancel, poll_interval).await;
    });

    // Frame rate limiting state
    let mut last_frame = Instant::now();

    // Main loop
    loop {
        // Frame rate limiting with dirty flag check
        let now = Instant::now();
        if app.needs_render && now.duration_since(last_frame) >= frame_duration {
            terminal.draw(|f| ui::render(f, &app))?;
            app.rendered();
            last_frame = now;
        }

        tokio::select! {
            event = event_rx.recv() => match event {
                Some(event) => app.handle_event(event),
                None => {
                    tracing::warn!("Input channel closed");
                    break;
                }
            },
            () = tokio::time::sleep(frame_duration) => {}
        }

        if app.should_quit {
            break;
        }
    }

    // Graceful shutdown: signal input listener to stop
    tracing::debug!("Shutting down input listener");
    cancel.cancel();
    input_handle.abort();

    tracing::info!(status = %app.screen.status_message, "Exiting");

    // Restore terminal (guard will also restore on drop, but explicit is cleaner)
    tui::restore()?;
    terminal.show_cursor()?;

    Ok(())
}
