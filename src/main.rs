use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use keyscope::{
    app::AppState,
    async_tasks::{AsyncTaskRunner, TaskMessage},
    cli::Cli,
    constants::{FRAME_DURATION_MS, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH},
    error::{AppError, Result},
    persistence::PersistenceManager,
    types::{Config, LoadingState, UiMode},
    ui::{self, input_handler::InputHandler},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    cli.validate().map_err(AppError::Other)?;

    // Guard must outlive the event loop or buffered lines are lost
    let _log_guard = match &cli.log_file {
        Some(log_file) => {
            let guard = init_logging(log_file)?;
            tracing::info!("=== keyscope starting ===");
            tracing::info!("Log file: {}", log_file);
            Some(guard)
        }
        None => None,
    };

    let (width, height) = crossterm::terminal::size()?;
    if width < MIN_TERMINAL_WIDTH || height < MIN_TERMINAL_HEIGHT {
        tracing::error!(
            "Terminal too small: {}x{} (minimum: {}x{})",
            width,
            height,
            MIN_TERMINAL_WIDTH,
            MIN_TERMINAL_HEIGHT
        );
        return Err(AppError::TerminalTooSmall);
    }
    tracing::debug!("Terminal size: {}x{}", width, height);

    setup_terminal()?;
    tracing::debug!("Terminal setup completed");

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        tracing::info!("Ctrl-C received, shutting down");
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| AppError::Other(format!("Failed to set Ctrl-C handler: {}", e)))?;

    let result = run_app(cli, running).await;

    cleanup_terminal()?;
    tracing::debug!("Terminal cleanup completed");

    result
}

fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(
        io::stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste,
        Hide
    )?;

    // Set panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal();
        original_hook(panic_info);
    }));

    Ok(())
}

fn cleanup_terminal() -> Result<()> {
    execute!(
        io::stdout(),
        Show,
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    disable_raw_mode()?;
    Ok(())
}

fn init_logging(log_file: &str) -> Result<WorkerGuard> {
    use std::fs::OpenOptions;

    // Open/create log file, truncating if it exists
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_file)
        .map_err(|e| AppError::Other(format!("Failed to open log file: {}", e)))?;

    let (writer, guard) = tracing_appender::non_blocking(file);

    // Only log from our crate unless RUST_LOG says otherwise
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("keyscope=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Other(format!("Failed to initialize logging: {}", e)))?;

    Ok(guard)
}

async fn run_app(cli: Cli, running: Arc<AtomicBool>) -> Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let (task_tx, mut task_rx) = mpsc::unbounded_channel();

    let mut app = initialize_app_state(&cli)?;
    let task_runner = AsyncTaskRunner::new(task_tx);

    if let Some(file_path) = &cli.file {
        tracing::info!("Starting asset key load: {}", file_path);
        let _handle = task_runner.spawn_load_keys(file_path.clone());
        app.start_loading(file_path.clone());
    } else {
        tracing::debug!("No asset key file provided");
    }

    run_event_loop(&mut terminal, &mut app, &mut task_rx, running).await?;

    tracing::info!("keyscope shutting down");
    Ok(())
}

fn initialize_app_state(cli: &Cli) -> Result<AppState> {
    tracing::debug!("Initializing application state");

    let config = match PersistenceManager::new() {
        Ok(persistence) => persistence.load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}. Using defaults.", e);
            Config::default()
        }),
        Err(e) => {
            tracing::warn!("Failed to initialize persistence: {}. Using defaults.", e);
            Config::default()
        }
    };

    let config = cli.apply_overrides(config);
    tracing::debug!(
        "Config resolved: title={:?}, show_search={}",
        config.title,
        config.show_search
    );

    let mut app = AppState::new(config);

    let (width, height) = crossterm::terminal::size()?;
    app.update_viewport_size(width, height);

    if cli.open {
        app.set_is_open(true);
    }

    Ok(app)
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    task_rx: &mut mpsc::UnboundedReceiver<TaskMessage>,
    running: Arc<AtomicBool>,
) -> Result<()> {
    let frame_duration = Duration::from_millis(FRAME_DURATION_MS);

    while running.load(Ordering::SeqCst) && !app.should_quit {
        let frame_start = Instant::now();

        // Process all pending task messages (non-blocking)
        while let Ok(msg) = task_rx.try_recv() {
            handle_task_message(app, msg);
        }

        terminal.draw(|f| {
            ui::layout::render(f, app);
        })?;

        // Drain every queued event so fast typing never lags a frame behind
        while event::poll(Duration::from_millis(0))? {
            let ev = event::read()?;
            handle_event(app, ev)?;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            tokio::time::sleep(frame_duration - elapsed).await;
        }
    }

    Ok(())
}

fn handle_task_message(app: &mut AppState, msg: TaskMessage) {
    match msg {
        TaskMessage::KeysLoadingStarted { file_path } => {
            tracing::info!("Asset key loading started: {}", file_path);
            app.start_loading(file_path);
        }
        TaskMessage::KeysLoaded { keys, file_path } => {
            app.set_asset_keys(keys, file_path);
        }
        TaskMessage::KeysLoadError { error } => {
            tracing::error!("Asset key load error: {}", error);
            app.loading_state = LoadingState::Idle;
            app.ui_mode = UiMode::ErrorPopup(format!("Failed to load asset keys: {}", error));
        }
    }
}

fn handle_event(app: &mut AppState, ev: Event) -> Result<()> {
    match ev {
        Event::Resize(width, height) => {
            tracing::debug!("Resize: {}x{}", width, height);
            app.update_viewport_size(width, height);
        }
        other => InputHandler::handle_event(app, &other)?,
    }
    Ok(())
}
