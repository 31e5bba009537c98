//! Message processing: runs update() to a fixed point and dispatches actions

use std::sync::Arc;

use skyadmin_api::CmsApi;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Follow-up messages are handled immediately; actions are spawned and report
/// back through `msg_tx`.
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &Arc<A>,
) where
    A: CmsApi + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), api.clone());
        }

        msg = result.message;
    }
}
