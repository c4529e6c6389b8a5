use kakomon::adapters::{FileSettingsProvider, ReqwestHttpClient, SystemClipboard};
use kakomon::app::{App, AppMessage};
use kakomon::catalog::{Catalog, StaticCatalog};
use kakomon::cli::{parse_args, run_cli_command, CliCommand};
use kakomon::config::AppConfig;
use kakomon::logging::init_logging;
use kakomon::terminal::{setup_panic_hook, TerminalManager};
use kakomon::ui;
use kakomon::workflow::{NoticeBoard, Session};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = AppConfig::from_env();
    let command = parse_args(std::env::args());

    if let Err(e) = init_logging(&config.log_file(), &config.log_filter) {
        eprintln!("Warning: logging disabled ({}): {}", config.log_file().display(), e);
    }

    if let Some(result) = run_cli_command(&command, &config) {
        return result;
    }
    let CliCommand::RunTui { professor } = command else {
        return Ok(());
    };

    setup_panic_hook();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_tui(config, professor))
}

fn load_catalog(config: &AppConfig) -> Result<Arc<dyn Catalog>> {
    match &config.catalog_path {
        Some(path) => {
            let catalog = StaticCatalog::from_json_file(path)
                .wrap_err("failed to load the catalog named by KAKOMON_CATALOG")?;
            tracing::info!(path = %path.display(), "loaded catalog");
            Ok(Arc::new(catalog))
        }
        None => Ok(Arc::new(StaticCatalog::builtin())),
    }
}

async fn run_tui(config: AppConfig, professor: Option<String>) -> Result<()> {
    let catalog = load_catalog(&config)?;
    let http = ReqwestHttpClient::with_timeout(config.request_timeout)?;

    let session = Session::new(
        catalog,
        Arc::new(http),
        Arc::new(FileSettingsProvider::new(&config.data_dir)),
        Arc::new(SystemClipboard::new()),
        config.generation_endpoint(),
    )
    .with_notices(NoticeBoard::new(config.notice_ttl));

    let mut app = App::new(session);
    if let Some(professor_id) = professor.as_deref() {
        app.open_professor(professor_id);
    }
    tracing::info!(endpoint = %config.generation_endpoint(), "starting TUI");

    let mut manager = TerminalManager::new()?;
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore()?;
    result
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key).await;
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("terminal event error: {}", e);
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
        }

        if app.should_quit {
            tracing::info!("quitting");
            return Ok(());
        }
    }
}
