//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use podpanel_app::actions::spawn_status_pollers;
use podpanel_app::config::ClientConfig;
use podpanel_app::message::Message;
use podpanel_app::process::process_message;
use podpanel_app::state::AppState;
use podpanel_client::{Backend, HttpBackend, Transport};
use podpanel_core::prelude::*;

use super::{event, render, terminal};

/// Run the control panel against the backend named in `config`
pub async fn run(config: ClientConfig) -> Result<()> {
    let transport = Transport::new(&config.api.base_url, config.api.timeout())?;
    let backend = Arc::new(HttpBackend::new(transport));
    info!("Connecting to {}", config.api.base_url);

    terminal::install_panic_hook();
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let mut state = AppState::with_api_url(config.api.base_url.clone());
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    let pollers = spawn_status_pollers(backend.clone(), msg_tx.clone(), &config.polling);
    process_message(&mut state, Message::Startup, &backend, &msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx, &msg_tx, &backend);

    pollers.abort();
    ratatui::restore();
    info!("podpanel exiting");

    result
}

/// Main event loop: apply finished work, draw, read one key
fn run_loop<B>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    backend: &Arc<B>,
) -> Result<()>
where
    B: Backend + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Results of spawned operations and poll cycles
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, backend, msg_tx);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("drawing frame")?;

        match event::poll() {
            Ok(Some(message)) => process_message(state, message, backend, msg_tx),
            Ok(None) => {}
            Err(e) if e.is_recoverable() => warn!("Dropping terminal event: {}", e),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
