//! Status polling
//!
//! Two independent cycles keep the live surfaces fresh:
//! - Monitor cycle (default 4s): `GET /monitor/status`
//! - Dashboard cycle (default 7s): `GET /dashboard`, `/runs`, `/logs` together
//!
//! Each cycle is its own task with its own interval; neither awaits the
//! other, so a slow or failing monitor fetch never delays a dashboard fetch.
//! Failures are reported as messages and the cycle keeps ticking. A cycle
//! ends only when the message channel closes.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use podpanel_client::Backend;
use podpanel_core::prelude::*;

use crate::config::PollingSettings;
use crate::message::{DashboardSnapshot, Message};

/// Handles of the two polling tasks
#[derive(Debug)]
pub struct StatusPollers {
    pub monitor: JoinHandle<()>,
    pub dashboard: JoinHandle<()>,
}

impl StatusPollers {
    pub fn abort(&self) {
        self.monitor.abort();
        self.dashboard.abort();
    }
}

/// Start both cycles. The first fetch of each happens immediately.
pub fn spawn_status_pollers<B>(
    backend: Arc<B>,
    msg_tx: mpsc::Sender<Message>,
    polling: &PollingSettings,
) -> StatusPollers
where
    B: Backend + Send + Sync + 'static,
{
    let monitor = spawn_cycle(
        "monitor",
        backend.clone(),
        msg_tx.clone(),
        polling.monitor_interval(),
        |backend| async move { fetch_monitor_status(&*backend).await },
    );
    let dashboard = spawn_cycle(
        "dashboard",
        backend,
        msg_tx,
        polling.dashboard_interval(),
        |backend| async move { fetch_dashboard(&*backend).await },
    );
    StatusPollers { monitor, dashboard }
}

fn spawn_cycle<B, F, Fut>(
    name: &'static str,
    backend: Arc<B>,
    msg_tx: mpsc::Sender<Message>,
    period: Duration,
    fetch: F,
) -> JoinHandle<()>
where
    B: Backend + Send + Sync + 'static,
    F: Fn(Arc<B>) -> Fut + Send + 'static,
    Fut: std::future::Future<Output = Message> + Send,
{
    tokio::spawn(async move {
        info!("Starting {} cycle every {:?}", name, period);
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let msg = fetch(backend.clone()).await;
            if msg_tx.send(msg).await.is_err() {
                // Channel closed, app shutting down
                debug!("{} cycle stopped", name);
                break;
            }
        }
    })
}

/// One monitor status fetch
pub async fn fetch_monitor_status<B>(backend: &B) -> Message
where
    B: Backend + Sync,
{
    let result = backend.monitor_status().await;
    if let Err(e) = &result {
        debug!("Monitor status fetch failed: {}", e);
    }
    Message::MonitorStatusRefreshed {
        result: result.map_err(|e| e.detail()),
    }
}

/// One dashboard fetch: counters, runs and logs concurrently
pub async fn fetch_dashboard<B>(backend: &B) -> Message
where
    B: Backend + Sync,
{
    let result = tokio::try_join!(backend.dashboard(), backend.runs(), backend.logs());
    let result = match result {
        Ok((stats, runs, logs)) => Ok(DashboardSnapshot { stats, runs, logs }),
        Err(e) => {
            debug!("Dashboard fetch failed: {}", e);
            Err(e.detail())
        }
    };
    Message::DashboardRefreshed { result }
}
