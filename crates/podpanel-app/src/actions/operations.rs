//! Backend operations behind each [`UpdateAction`]
//!
//! Each operation runs to completion against a settings snapshot taken at
//! dispatch and reports back as exactly one [`Message`]. Nothing is retried
//! or cancelled.

use podpanel_client::Backend;
use podpanel_core::prelude::*;
use podpanel_core::Settings;

use crate::handler::UpdateAction;
use crate::message::{Message, MonitorCommand};

use super::poller;

/// Run `action` and produce its completion message
pub async fn execute<B>(backend: &B, action: UpdateAction) -> Message
where
    B: Backend + Sync,
{
    match action {
        UpdateAction::LoadSettings => Message::SettingsLoaded {
            result: backend.get_settings().await.map_err(detail),
        },

        UpdateAction::SaveSettings { settings, origin } => Message::SettingsSaved {
            origin,
            result: backend.save_settings(&settings).await.map_err(detail),
        },

        UpdateAction::ResetSettings => {
            let result = async {
                backend.reset_settings().await?;
                backend.get_settings().await
            }
            .await;
            Message::SettingsReset {
                result: result.map_err(detail),
            }
        }

        UpdateAction::StartMonitor { settings } => {
            let result = save_then(backend, &settings, backend.start_monitor()).await;
            Message::MonitorCommandFinished {
                command: MonitorCommand::Start,
                result: result.map_err(detail),
            }
        }

        UpdateAction::StopMonitor => Message::MonitorCommandFinished {
            command: MonitorCommand::Stop,
            result: backend.stop_monitor().await.map_err(detail),
        },

        UpdateAction::AnalyzeImage {
            settings,
            image_path,
        } => {
            let result = save_then(backend, &settings, backend.analyze(&image_path)).await;
            Message::AnalysisFinished {
                result: result.map_err(detail),
            }
        }

        UpdateAction::CreateDraft { settings, request } => {
            let result = save_then(backend, &settings, backend.create_draft(&request)).await;
            if let Ok(created) = &result {
                info!(
                    "Draft {:?} created for {}",
                    created.printify_product_id, request.image_path
                );
            }
            Message::DraftFinished {
                result: result.map_err(detail),
            }
        }

        UpdateAction::QueueImage { image_path } => Message::QueueFinished {
            result: backend.queue(&image_path).await.map_err(detail),
        },

        UpdateAction::FetchVariants { settings } => {
            let result = save_then(
                backend,
                &settings,
                backend.variants(settings.blueprint_id, settings.print_provider_id),
            )
            .await;
            Message::VariantsFetched {
                result: result.map_err(detail),
            }
        }

        UpdateAction::FetchMockups { settings } => {
            let result = save_then(
                backend,
                &settings,
                backend.mockups(settings.blueprint_id, settings.print_provider_id),
            )
            .await;
            Message::MockupsFetched {
                result: result.map_err(detail),
            }
        }

        UpdateAction::RefreshMonitor => poller::fetch_monitor_status(backend).await,

        UpdateAction::RefreshDashboard => poller::fetch_dashboard(backend).await,

        UpdateAction::CheckHealth => Message::HealthChecked {
            result: backend.health().await.map_err(detail),
        },
    }
}

/// Persist `settings`, then await `then`. `then` is not polled if the save
/// fails.
async fn save_then<B, T>(
    backend: &B,
    settings: &Settings,
    then: impl std::future::Future<Output = Result<T>>,
) -> Result<T>
where
    B: Backend + Sync,
{
    backend.save_settings(settings).await?;
    then.await
}

fn detail(e: Error) -> String {
    e.detail()
}
