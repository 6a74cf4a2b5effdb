//! Vendor Onboarding TUI - generate vendor onboarding PDFs from the terminal
//!
//! A Ratatui-based form that collects vendor details, validates them and
//! asks a remote generation agent for an onboarding document.

mod agent;
mod app;
mod config;
mod logging;
mod platform;
mod state;
mod ui;

use agent::HttpAgentClient;
use anyhow::Result;
use app::App;
use config::AppConfig;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::Preset;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let log_path = logging::init();

    let config = AppConfig::load()?;
    let client = HttpAgentClient::new(
        config.endpoint(),
        config.api_key(),
        config.request_timeout(),
    )?;
    info!(
        endpoint = client.endpoint(),
        log_file = ?log_path,
        "starting vendor onboarding"
    );

    let preset = if config.start_with_sample_data() {
        Preset::Sample
    } else {
        Preset::Empty
    };
    let mut app = App::new(Arc::new(client), preset);

    install_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        error!("exiting with error: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}

/// Whether a panic will be recovered without tearing down the UI: the
/// render barrier catches its own, and worker-thread panics end only the
/// generation task.
fn panic_is_recoverable(in_render_barrier: bool, thread_name: Option<&str>) -> bool {
    in_render_barrier || thread_name != Some("main")
}

/// Log every panic. A fatal one first gives the terminal back, then runs
/// the default hook so the report reaches the user.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        error!("panic: {info}");
        let thread = std::thread::current();
        if panic_is_recoverable(ui::render_barrier_active(), thread.name()) {
            return;
        }
        let _ = restore_terminal();
        previous(info);
    }));
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.poll_outcomes();

        let mut fault = None;
        terminal.draw(|frame| fault = ui::draw_guarded(frame, &app.state))?;
        if let Some(message) = fault {
            error!(%message, "render failed");
            app.state.record_render_fault(message);
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }

        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_barrier_panics_are_recoverable() {
        assert!(panic_is_recoverable(true, Some("main")));
    }

    #[test]
    fn test_worker_panics_are_recoverable() {
        assert!(panic_is_recoverable(false, Some("tokio-runtime-worker")));
        assert!(panic_is_recoverable(false, None));
    }

    #[test]
    fn test_main_thread_panic_outside_barrier_is_fatal() {
        assert!(!panic_is_recoverable(false, Some("main")));
    }
}
