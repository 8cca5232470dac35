//! HQ-Admin: hospital queue admin console.
//!
//! ## Usage
//!
//! ```bash
//! # Connect to the default service (http://127.0.0.1:5000)
//! hq-admin
//!
//! # Remote service, custom config
//! hq-admin --endpoint https://queue.example.org --config hq-admin.toml
//!
//! # No service required
//! hq-admin --demo
//! ```

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hq_admin::domain::{App, Completion};
use hq_admin::{ui, AdminConfig, Dispatcher};
use hq_service::{Doctor, HospitalService, HttpHospitalService, InMemoryHospitalService};

/// HQ-Admin: hospital queue admin console
#[derive(Parser, Debug)]
#[command(name = "hq-admin")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Hospital service base URL (overrides the config file)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// UI tick interval in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Run against a seeded in-memory service (no network required)
    #[arg(long)]
    demo: bool,

    /// Log file (defaults to hq-admin.log in the temp directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;
    init_logging(&config)?;

    let (service, endpoint): (Arc<dyn HospitalService>, String) = if args.demo {
        (Arc::new(demo_service()), "demo (in-memory)".to_string())
    } else {
        let http = HttpHospitalService::new(&config.service.base_url, config.http_settings())
            .context("invalid service endpoint")?;
        let endpoint = http.base_url().to_string();
        (Arc::new(http), endpoint)
    };
    info!(%endpoint, demo = args.demo, "starting hq-admin");

    // Setup terminal with panic hook for cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(endpoint, config.ui.sidebar_expanded, config.notice_ttl());
    let (dispatcher, completions) = Dispatcher::new(service);

    let result = run_app(&mut terminal, &mut app, &dispatcher, completions, config.tick()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        eprintln!("Error: {:#}", e);
    }
    info!("hq-admin stopped");
    result
}

/// Main application loop.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    dispatcher: &Dispatcher,
    mut completions: mpsc::UnboundedReceiver<Completion>,
    tick: Duration,
) -> Result<()> {
    dispatcher.dispatch(app.startup_commands());

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        while let Ok(completion) = completions.try_recv() {
            app.apply(completion);
        }

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    dispatcher.dispatch(app.handle_key(key.code));
                }
            }
        }

        app.tick(Instant::now());

        if app.should_quit() {
            return Ok(());
        }
    }
}

fn load_config(args: &Args) -> Result<AdminConfig> {
    let mut config = match &args.config {
        Some(path) => AdminConfig::load(path)?,
        None => AdminConfig::default(),
    };

    if let Some(endpoint) = &args.endpoint {
        config.service.base_url = endpoint.clone();
    }
    if let Some(tick_ms) = args.tick_ms {
        config.ui.tick_ms = tick_ms;
    }
    if let Some(path) = &args.log_file {
        config.logging.file = Some(path.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_logging(config: &AdminConfig) -> Result<()> {
    let path = config
        .logging
        .file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("hq-admin.log"));
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Seeded service for `--demo`.
fn demo_service() -> InMemoryHospitalService {
    let doctor = |id: &str, name: &str, specialization: &str, availability: bool| Doctor {
        id: id.into(),
        name: name.to_string(),
        specialization: specialization.to_string(),
        availability,
    };

    InMemoryHospitalService::new()
        .with_doctors([
            doctor("doc-1", "Amara Lee", "Cardiology", true),
            doctor("doc-2", "Rafael Ng", "Pediatrics", true),
            doctor("doc-3", "Ines Okafor", "Dermatology", false),
            doctor("doc-4", "Tomas Berg", "Orthopedics", true),
        ])
        .with_token("doc-1", 12)
        .with_token("doc-2", 4)
        .with_latency(Duration::from_millis(350))
}
