//! Message processing
//!
//! Runs a message through the TEA update function, dispatches any resulting
//! action and follows the chain of follow-up messages.

use std::sync::Arc;

use tokio::sync::mpsc;

use podpanel_client::Backend;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<B>(
    state: &mut AppState,
    message: Message,
    backend: &Arc<B>,
    msg_tx: &mpsc::Sender<Message>,
) where
    B: Backend + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, backend.clone(), msg_tx.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podpanel_client::test_utils::FakeBackend;
    use podpanel_core::Settings;

    /// Feed every message that arrives back through `process_message`
    async fn settle(
        state: &mut AppState,
        backend: &Arc<FakeBackend>,
        tx: &mpsc::Sender<Message>,
        rx: &mut mpsc::Receiver<Message>,
        rounds: usize,
    ) {
        for _ in 0..rounds {
            match tokio::time::timeout(std::time::Duration::from_secs(1), rx.recv()).await {
                Ok(Some(msg)) => process_message(state, msg, backend, tx),
                _ => break,
            }
        }
    }

    #[tokio::test]
    async fn test_startup_loads_settings_and_health() {
        let backend = Arc::new(FakeBackend::new());
        backend.with_state(|s| {
            s.settings = Settings {
                watch_folder: "/art/in".into(),
                ..Default::default()
            }
        });
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new();

        process_message(&mut state, Message::Startup, &backend, &tx);
        settle(&mut state, &backend, &tx, &mut rx, 2).await;

        assert_eq!(state.settings.form.watch_folder, "/art/in");
        assert!(matches!(
            state.health,
            crate::state::BackendHealth::Up { .. }
        ));
        assert_eq!(backend.call_count("get_settings"), 1);
        assert_eq!(backend.call_count("health"), 1);
    }

    #[tokio::test]
    async fn test_queue_chain_refreshes_monitor() {
        let backend = Arc::new(FakeBackend::new());
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new();
        state.image_path = "/art/in/cat.png".into();

        process_message(&mut state, Message::QueueImage, &backend, &tx);
        settle(&mut state, &backend, &tx, &mut rx, 2).await;

        assert_eq!(state.upload_status.text, "Queued: /art/in/cat.png");
        assert!(state.monitor_status.text.contains("Queue: 1"));
        assert_eq!(backend.calls(), vec!["queue", "monitor_status"]);
    }

    #[tokio::test]
    async fn test_draft_failure_surfaces_detail() {
        let backend = Arc::new(FakeBackend::new());
        backend.fail("create_draft", "Printify token missing");
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new();
        state.settings.hydrate(Settings::default());

        process_message(&mut state, Message::CreateDraft, &backend, &tx);
        settle(&mut state, &backend, &tx, &mut rx, 1).await;

        assert_eq!(state.upload_status.text, "Printify token missing");
        assert!(state.upload_status.is_error());
        assert_eq!(backend.call_count("dashboard"), 0);
    }

    #[tokio::test]
    async fn test_failed_startup_load_never_posts_settings() {
        let backend = Arc::new(FakeBackend::new());
        backend.fail("get_settings", "connection refused");
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new();

        process_message(&mut state, Message::Startup, &backend, &tx);
        settle(&mut state, &backend, &tx, &mut rx, 2).await;
        assert!(state.settings_status.is_error());

        process_message(&mut state, Message::ToggleVariant(7), &backend, &tx);
        process_message(&mut state, Message::SaveSettings, &backend, &tx);
        process_message(&mut state, Message::AnalyzeImage, &backend, &tx);
        tokio::task::yield_now().await;

        assert_eq!(backend.call_count("save_settings"), 0);
        assert!(rx.try_recv().is_err());
    }
}
