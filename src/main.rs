use solidlens::app::App;
use solidlens::cli::{parse_args, run_cli_command, CliCommand, RunOptions, USAGE};
use solidlens::startup::{init_default_logging, open_link, DashboardConfig};
use solidlens::terminal::{setup_panic_hook, TerminalManager};
use solidlens::ui;
use solidlens::websocket::{WsConnectionState, WsIncomingMessage};

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::{Duration, Instant};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::watch;
use tracing::{error, info, warn};

/// Redraw tick when nothing else wakes the loop
const TICK: Duration = Duration::from_millis(16);

/// What woke the event loop.
enum Wake {
    Terminal(Option<std::io::Result<Event>>),
    Incoming(Option<WsIncomingMessage>),
    Connection(Option<WsConnectionState>),
    DebounceDue,
    Tick,
}

async fn next_incoming(
    rx: &mut Option<broadcast::Receiver<WsIncomingMessage>>,
) -> Option<WsIncomingMessage> {
    let Some(rx) = rx.as_mut() else {
        return std::future::pending().await;
    };
    loop {
        match rx.recv().await {
            Ok(msg) => return Some(msg),
            Err(RecvError::Lagged(skipped)) => {
                warn!("Skipped {} analysis messages, keeping the newest", skipped);
            }
            Err(RecvError::Closed) => return None,
        }
    }
}

async fn next_state(
    rx: &mut Option<watch::Receiver<WsConnectionState>>,
) -> Option<WsConnectionState> {
    let Some(rx) = rx.as_mut() else {
        return std::future::pending().await;
    };
    match rx.changed().await {
        Ok(()) => Some(*rx.borrow_and_update()),
        Err(_) => None,
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at.into()).await,
        None => std::future::pending().await,
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut incoming_rx = app.link.subscribe();
    let mut state_rx = app.link.state_receiver();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }
        if app.should_quit {
            return Ok(());
        }

        let deadline = app.link.next_deadline();
        let wake = tokio::select! {
            event = event_stream.next() => Wake::Terminal(event),
            msg = next_incoming(&mut incoming_rx) => Wake::Incoming(msg),
            state = next_state(&mut state_rx) => Wake::Connection(state),
            _ = sleep_until(deadline) => Wake::DebounceDue,
            _ = tokio::time::sleep(TICK) => Wake::Tick,
        };

        match wake {
            Wake::Terminal(Some(Ok(Event::Key(key)))) => app.handle_key(key),
            Wake::Terminal(Some(Ok(Event::Paste(text)))) => app.handle_paste(&text),
            Wake::Terminal(Some(Ok(Event::Resize(_, _)))) => app.mark_dirty(),
            Wake::Terminal(Some(Ok(_))) => {}
            Wake::Terminal(Some(Err(e))) => {
                error!("Terminal event error: {}", e);
                return Err(e.into());
            }
            Wake::Terminal(None) => return Ok(()),
            Wake::Incoming(Some(msg)) => app.handle_incoming(msg),
            Wake::Incoming(None) => {
                info!("Analysis stream closed");
                incoming_rx = None;
            }
            Wake::Connection(Some(state)) => app.handle_connection_state(state),
            Wake::Connection(None) => {
                app.handle_connection_state(WsConnectionState::Closed);
                state_rx = None;
            }
            Wake::DebounceDue => {
                app.flush_due(Instant::now()).await;
            }
            Wake::Tick => {}
        }
    }
}

async fn run_dashboard(config: DashboardConfig, snippet: Option<String>) -> Result<()> {
    let link = open_link(&config).await;
    let mut app = App::new(link, config.ws_url.clone()).with_language(config.language);
    if let Some(code) = snippet.as_deref() {
        app = app.with_snippet(code);
    }

    let mut manager = TerminalManager::new()?;
    let result = run_app(manager.terminal(), &mut app).await;

    app.unmount().await;
    manager.restore()?;

    if let Err(e) = &result {
        error!("Dashboard exited with error: {}", e);
    }
    result
}

fn main() -> Result<()> {
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("solidlens: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };
    if let Some(result) = run_cli_command(&command) {
        return result;
    }
    let options = match command {
        CliCommand::Run(options) => options,
        _ => RunOptions::default(),
    };

    color_eyre::install()?;
    setup_panic_hook();

    if let Err(e) = init_default_logging() {
        eprintln!("solidlens: file logging disabled: {}", e);
    }

    let config = DashboardConfig::from_env()?.apply_cli(&options);
    config.validate()?;
    let snippet = config.load_snippet()?;
    info!(
        "Starting solidlens {} against {} (debounce {} ms)",
        solidlens::cli::VERSION,
        config.ws_url,
        config.debounce.as_millis()
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_dashboard(config, snippet))
}
