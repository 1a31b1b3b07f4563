mod app;
mod config;
mod message;
mod theme;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, Popup};
use config::AppConfig;
use message::Kind;

#[derive(Parser, Debug)]
#[command(name = "tosuto")]
#[command(author = "Sean Fournier")]
#[command(version = "0.1.0")]
#[command(about = "Terminal-friendly toast messages for Arch Linux / Omarchy")]
struct Args {
    /// Send a one-shot desktop notification instead of launching the TUI
    #[arg(short, long, value_name = "TEXT")]
    send: Option<String>,

    /// Kind tag for --send (success, error, info, warning, or any label)
    #[arg(short, long, default_value = "info")]
    kind: String,

    /// Output the effective settings as JSON (for scripts)
    #[arg(long)]
    settings: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Handle CLI-only commands
    if args.settings {
        return print_settings();
    }

    if let Some(text) = args.send {
        return notify(&args.kind, &text);
    }

    // Run TUI
    run_tui().await
}

fn print_settings() -> Result<()> {
    let config = AppConfig::load().unwrap_or_default();

    let output = serde_json::json!({
        "base_class": config.base_class,
        "dismiss_ms": config.dismiss_ms,
        "desktop_notifications": config.desktop_notifications,
        "startup_demo": config.startup_demo,
    });

    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

async fn run_tui() -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state; the sample pair shows once the surface is up
    let config = AppConfig::load().unwrap_or_default();
    let mut app = App::new(config);

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') if app.popup == Popup::None => return Ok(()),
                        KeyCode::Char('c')
                            if key.modifiers.contains(event::KeyModifiers::CONTROL) =>
                        {
                            return Ok(())
                        }
                        _ => {
                            if let Err(e) = app.handle_key(key) {
                                tracing::warn!("Key handling failed: {}", e);
                            }
                        }
                    }
                }
            }
        }

        // Apply expired removals
        app.tick();
    }
}

/// Send a desktop notification with an icon matching the kind
pub fn notify(kind: &str, body: &str) -> Result<()> {
    let icon = match Kind::from_token(kind) {
        Kind::Success => "emblem-default",
        Kind::Error => "dialog-error",
        Kind::Warning => "dialog-warning",
        Kind::Info | Kind::Other(_) => "dialog-information",
    };

    notify_rust::Notification::new()
        .summary("tosuto")
        .body(body)
        .icon(icon)
        .show()?;
    Ok(())
}
