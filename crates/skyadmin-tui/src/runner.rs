//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use ratatui::DefaultTerminal;
use skyadmin_api::{CmsApi, HttpCmsClient};
use skyadmin_app::actions::handle_action;
use skyadmin_app::config::Settings;
use skyadmin_app::message::Message;
use skyadmin_app::process::process_message;
use skyadmin_app::signals;
use skyadmin_app::state::AppState;
use skyadmin_app::UpdateAction;
use skyadmin_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the TUI against the CMS named in `settings`
pub async fn run(settings: Settings) -> Result<()> {
    // Fail before touching the terminal if the base URL is unusable
    let api = Arc::new(HttpCmsClient::new(&settings.client_config())?);
    info!("Connecting to {}", settings.api.base_url);

    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let mut state = AppState::with_settings(settings);

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(msg_tx.clone());

    // The session cookie may still be valid; ask before showing the login form
    handle_action(UpdateAction::CheckAuth, msg_tx.clone(), api.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, api);

    ratatui::restore();
    info!("Skygarden Admin stopped");

    result
}

/// Main event loop
fn run_loop<A>(
    terminal: &mut DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    api: Arc<A>,
) -> Result<()>
where
    A: CmsApi + Sync + 'static,
{
    while !state.should_quit() {
        // Results of background actions
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &api);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        // Terminal input (or Tick on timeout)
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &api);
        }
    }

    Ok(())
}
