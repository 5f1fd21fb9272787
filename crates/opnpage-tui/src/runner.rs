//! Main TUI runner - terminal lifecycle and event loop

use opnpage_app::message::Message;
use opnpage_app::signals;
use opnpage_app::state::AppState;
use opnpage_app::update;
use opnpage_core::prelude::{Error, Result, ResultExt};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::{event, render, terminal};

/// Run the dashboard until the user quits or a termination signal arrives
pub async fn run(mut state: AppState) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = terminal::enable_mouse() {
        // Keyboard reordering still works without pointer events
        warn!("{}", e);
    }

    // Unified channel for messages from background tasks
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    info!("Dashboard started with {} widgets", state.widgets().len());
    let result = run_loop(&mut term, &mut state, msg_rx);

    terminal::disable_mouse();
    ratatui::restore();
    info!("Dashboard closed");

    result
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }
    Ok(())
}

/// Run a message and every follow-up it produces
fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}
