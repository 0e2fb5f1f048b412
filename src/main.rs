use newsdeck::app::App;
use newsdeck::cli::{parse_args, run_cli_command};
use newsdeck::client::{PostSource, PostsClient};
use newsdeck::config::BrowserConfig;
use newsdeck::input::{handle_key_event, CommandRegistry};
use newsdeck::logging::init_logging;
use newsdeck::terminal::{setup_panic_hook, TerminalManager};
use newsdeck::ui;

use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

/// Event loop tick; drives the spinner and the feedback auto-dismiss
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Flags are handled before any terminal setup
    let overrides = run_cli_command(parse_args(std::env::args()));

    color_eyre::install()?;
    setup_panic_hook();

    let config = overrides.resolve()?;

    if let Some(path) = init_logging(&config) {
        tracing::debug!(log = %path.display(), ?config, "starting");
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run(config));

    if let Err(e) = &result {
        tracing::error!(error = %e, "exiting with error");
    }
    result
}

async fn run(config: BrowserConfig) -> Result<()> {
    let source: Arc<dyn PostSource> = Arc::new(PostsClient::from_config(&config)?);
    let mut app = App::with_config(&config);

    let mut term_manager = TerminalManager::new()?;
    let size = term_manager.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    // Dropping the handle on exit cancels a pending loading timer
    let _load = app.start_loading(source, config.loading_timeout);

    let result = run_app(term_manager.terminal(), &mut app).await;
    term_manager.restore();
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<newsdeck::app::AppMessage>> =
        app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.clear_status();
                        if handle_key_event(app, &registry, key) {
                            app.mark_dirty();
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "terminal event error");
                    }
                    None => {
                        tracing::info!("terminal event stream closed");
                        app.quit();
                    }
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                match msg {
                    Some(msg) => app.handle_message(msg),
                    // every sender is gone; nothing more will arrive
                    None => message_rx = None,
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
