use std::io;
use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use clap::Parser;
use tokio::sync::Mutex;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use music_hub::catalog::MockCatalog;
use music_hub::config::{AppConfig, Args};
use music_hub::controller::AppController;
use music_hub::logging;
use music_hub::model::{AppModel, Session};
use music_hub::view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::load(&args)?;

    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let _log_guard = match logging::init_logging(&config) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };

    tracing::info!("=== Music Hub Starting ===");
    tracing::debug!(?config, "Effective configuration");

    let session = Session::with_playback(config.initial_volume, config.initial_progress);
    let model = Arc::new(Mutex::new(AppModel::new(session)));
    let controller = AppController::new(model.clone(), Arc::new(MockCatalog), config.volume_step);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let res = run_app(&mut terminal, model, controller, tick_rate).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Music Hub shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        let should_quit = {
            let mut model_guard = model.lock().await;

            // Auto-clear old errors (after 5 seconds)
            model_guard.auto_clear_old_errors();

            terminal.draw(|f| {
                AppView::render(f, &model_guard);
            })?;

            model_guard.should_quit()
        };

        if should_quit {
            break;
        }

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::warn!(error = %e, "Key handling failed");
                }
            }
        }
    }

    Ok(())
}
