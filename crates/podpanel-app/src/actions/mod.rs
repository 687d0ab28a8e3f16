//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;

use podpanel_client::Backend;
use podpanel_core::prelude::*;

use crate::handler::UpdateAction;
use crate::message::Message;

pub mod operations;
pub mod poller;

pub use operations::execute;
pub use poller::{fetch_dashboard, fetch_monitor_status, spawn_status_pollers, StatusPollers};

/// Execute an action by spawning a background task.
///
/// The task owns its inputs and reports back through `msg_tx`; it is never
/// cancelled once spawned.
pub fn handle_action<B>(action: UpdateAction, backend: Arc<B>, msg_tx: mpsc::Sender<Message>)
where
    B: Backend + Send + Sync + 'static,
{
    trace!("Dispatching {:?}", action);
    tokio::spawn(async move {
        let msg = execute(&*backend, action).await;
        if msg_tx.send(msg).await.is_err() {
            debug!("Dropping action result: channel closed");
        }
    });
}
