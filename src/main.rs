use minidash::adapters::ReqwestHttpClient;
use minidash::app::{run_headless_export, App, AppMessage};
use minidash::cli::{parse_args, version_string, CliCommand, USAGE};
use minidash::config::DashboardConfig;
use minidash::gateway::DashboardGateway;
use minidash::logging;
use minidash::ui;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    let args = parse_args(std::env::args());
    let config = args.apply(DashboardConfig::from_env());

    match args.command {
        CliCommand::Version => {
            println!("{}", version_string());
            Ok(())
        }
        CliCommand::Help => {
            println!("{}\n\n{}", version_string(), USAGE);
            Ok(())
        }
        CliCommand::Export { .. } => run_export(&config),
        CliCommand::RunTui => run_tui(&config),
    }
}

/// `--export`: one fetch, one file, no terminal setup.
fn run_export(config: &DashboardConfig) -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = logging::init_stderr_tracing() {
        eprintln!("warning: {}", e);
    }

    let client = match config.request_timeout {
        Some(timeout) => ReqwestHttpClient::with_timeout(timeout)?,
        None => ReqwestHttpClient::new(),
    };
    let gateway = DashboardGateway::new(config.api_base_url.clone(), client);

    let runtime = tokio::runtime::Runtime::new()?;
    let summary = runtime.block_on(run_headless_export(&gateway, &config.export_dir))?;
    println!("Exported {} rows to {}", summary.rows, summary.path.display());
    Ok(())
}

fn run_tui(config: &DashboardConfig) -> Result<()> {
    color_eyre::install()?;

    let log_file = config.resolved_log_file();
    if let Err(e) = logging::init_file_tracing(&log_file) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::info!(api = %config.api_base_url, log = %log_file.display(), "starting minidash");

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    // reqwest and tokio::spawn need the runtime entered while the app is built
    let _guard = runtime.enter();
    let mut app = App::from_config(config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = runtime.block_on(run_app(&mut terminal, &mut app, config));

    restore_terminal(&mut terminal)?;
    tracing::info!("minidash exited");
    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Ticks at `period`, or never when `None`.
async fn tick(interval: &mut Option<tokio::time::Interval>) {
    match interval {
        Some(i) => {
            i.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

fn interval_after(period: Duration) -> tokio::time::Interval {
    // The first tick of a plain interval fires immediately
    let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    interval
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config: &DashboardConfig,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    let mut clock = Some(interval_after(config.clock_interval));
    let mut refresh = config.refresh_interval.map(interval_after);

    app.mount();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &app.state))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "terminal event error");
                    }
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }

            _ = tick(&mut clock) => app.tick_clock(),

            _ = tick(&mut refresh) => {
                tracing::debug!("scheduled refresh");
                app.refresh();
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
