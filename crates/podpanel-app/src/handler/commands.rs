//! Backend command handlers
//!
//! Dispatch side: mutate state synchronously, take a settings snapshot where
//! the command saves first, and hand an [`UpdateAction`] to the event loop.
//! Completion side: render each outcome into the status region that owns it.

use chrono::Local;

use podpanel_client::{DraftCreated, DraftRequest, QueuedItem};
use podpanel_core::prelude::*;
use podpanel_core::{
    AnalysisResult, CatalogVariant, HealthStatus, MockupDescriptor, MonitorStatus, Settings,
};

use crate::message::{DashboardSnapshot, MonitorCommand, Outcome, SaveOrigin};
use crate::selection::{self, VariantToggle, VARIANT_LIMIT_NOTICE};
use crate::state::{AppState, BackendHealth, StatusLine};

use super::{UpdateAction, UpdateResult};

// ─────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────

/// Shown when a command would save settings that never arrived
pub const SETTINGS_NOT_LOADED: &str = "Settings not loaded from the backend; press L to retry";

/// Commands that save the settings record are refused until it has been
/// loaded once; saving the blank default would overwrite the backend's copy.
fn refuse_unloaded(status: &mut StatusLine) -> UpdateResult {
    warn!("Settings not loaded, command refused");
    *status = StatusLine::error(SETTINGS_NOT_LOADED);
    UpdateResult::none()
}

fn save_action(state: &mut AppState, origin: SaveOrigin) -> UpdateAction {
    UpdateAction::SaveSettings {
        settings: state.settings.snapshot_for_save(),
        origin,
    }
}

pub fn save_settings(state: &mut AppState) -> UpdateResult {
    if !state.settings.loaded {
        return refuse_unloaded(&mut state.settings_status);
    }
    UpdateResult::action(save_action(state, SaveOrigin::User))
}

/// Unsaved form edits are replaced by the backend's record.
pub fn reload_settings(state: &mut AppState) -> UpdateResult {
    state.settings_status = StatusLine::busy("Loading settings...");
    UpdateResult::action(UpdateAction::LoadSettings)
}

pub fn reset_settings(state: &mut AppState) -> UpdateResult {
    state.upload_status = StatusLine::busy("Resetting settings...");
    UpdateResult::action(UpdateAction::ResetSettings)
}

pub fn handle_settings_loaded(state: &mut AppState, result: Outcome<Settings>) -> UpdateResult {
    match result {
        Ok(settings) => {
            debug!(
                "Loaded settings ({} variants, {} mockups)",
                settings.selected_variants.len(),
                settings.selected_mockups.len()
            );
            state.settings.hydrate(settings);
            state.settings_status = StatusLine::ok("Settings loaded");
        }
        Err(detail) => {
            warn!("Failed to load settings: {}", detail);
            state.settings_status = StatusLine::error(format!("Loading settings failed: {detail}"));
        }
    }
    UpdateResult::none()
}

pub fn handle_settings_saved(
    state: &mut AppState,
    origin: SaveOrigin,
    result: Outcome<()>,
) -> UpdateResult {
    match (origin, result) {
        (SaveOrigin::User, Ok(())) => {
            state.monitor_status = StatusLine::ok("Settings saved");
        }
        (SaveOrigin::User, Err(detail)) => {
            state.monitor_status = StatusLine::error(detail);
        }
        (SaveOrigin::Selection, Ok(())) => {
            trace!("Selection saved");
        }
        (SaveOrigin::Selection, Err(detail)) => {
            warn!("Saving selection failed: {}", detail);
            state.products_status = StatusLine::error(detail);
        }
    }
    UpdateResult::none()
}

pub fn handle_settings_reset(state: &mut AppState, result: Outcome<Settings>) -> UpdateResult {
    match result {
        Ok(settings) => {
            state.settings.hydrate(settings);
            state.settings_status = StatusLine::ok("Settings reset");
            state.upload_status = StatusLine::ok("Settings reset");
        }
        Err(detail) => {
            state.upload_status = StatusLine::error(detail);
        }
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Monitor
// ─────────────────────────────────────────────────────────

pub fn start_monitor(state: &mut AppState) -> UpdateResult {
    if !state.settings.loaded {
        return refuse_unloaded(&mut state.monitor_status);
    }
    state.monitor_status = StatusLine::busy("Starting monitor...");
    UpdateResult::action(UpdateAction::StartMonitor {
        settings: state.settings.snapshot_for_save(),
    })
}

pub fn stop_monitor(state: &mut AppState) -> UpdateResult {
    state.monitor_status = StatusLine::busy("Stopping monitor...");
    UpdateResult::action(UpdateAction::StopMonitor)
}

pub fn handle_monitor_command(
    state: &mut AppState,
    command: MonitorCommand,
    result: Outcome<()>,
) -> UpdateResult {
    match result {
        Ok(()) => {
            info!("Monitor {:?} accepted", command);
            UpdateResult::action(UpdateAction::RefreshMonitor)
        }
        Err(detail) => {
            state.monitor_status = StatusLine::error(detail);
            UpdateResult::none()
        }
    }
}

pub fn handle_monitor_status(
    state: &mut AppState,
    result: Outcome<MonitorStatus>,
) -> UpdateResult {
    state.monitor_status = match result {
        Ok(status) => {
            state.monitor_refreshed_at = Some(Local::now());
            StatusLine::ok(status.status_line())
        }
        Err(detail) => StatusLine::error(detail),
    };
    UpdateResult::none()
}

pub fn handle_dashboard(
    state: &mut AppState,
    result: Outcome<DashboardSnapshot>,
) -> UpdateResult {
    match result {
        Ok(snapshot) => {
            state.dashboard.apply(snapshot);
            state.clamp_json_scroll();
            state.dashboard_status = StatusLine::muted(format!(
                "Updated {}",
                Local::now().format("%H:%M:%S")
            ));
        }
        Err(detail) => {
            state.dashboard_status = StatusLine::error(detail);
        }
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Upload operations
// ─────────────────────────────────────────────────────────

fn trimmed_image_path(state: &AppState) -> String {
    state.image_path.trim().to_string()
}

pub fn analyze_image(state: &mut AppState) -> UpdateResult {
    if !state.settings.loaded {
        return refuse_unloaded(&mut state.upload_status);
    }
    let image_path = trimmed_image_path(state);
    state.upload_status = StatusLine::busy(format!("Analyzing {image_path}..."));
    UpdateResult::action(UpdateAction::AnalyzeImage {
        settings: state.settings.snapshot_for_save(),
        image_path,
    })
}

pub fn handle_analysis(state: &mut AppState, result: Outcome<AnalysisResult>) -> UpdateResult {
    match result {
        Ok(result) => {
            state.analysis_summary = result.summary();
            state.analysis = Some(result);
            state.upload_status = StatusLine::ok("Analysis complete");
        }
        Err(detail) => {
            state.upload_status = StatusLine::error(detail);
        }
    }
    UpdateResult::none()
}

pub fn create_draft(state: &mut AppState) -> UpdateResult {
    if !state.settings.loaded {
        return refuse_unloaded(&mut state.upload_status);
    }
    let request = DraftRequest::new(trimmed_image_path(state), state.analysis.as_ref());
    if request.analysis.is_none() {
        debug!("Creating draft without a prior analysis");
    }
    state.upload_status = StatusLine::busy("Creating draft...");
    UpdateResult::action(UpdateAction::CreateDraft {
        settings: state.settings.snapshot_for_save(),
        request,
    })
}

pub fn handle_draft(state: &mut AppState, result: Outcome<DraftCreated>) -> UpdateResult {
    match result {
        Ok(created) => {
            let id = created.printify_product_id.unwrap_or_else(|| "-".to_string());
            state.upload_status = StatusLine::ok(format!("Draft created: {id}"));
            UpdateResult::action(UpdateAction::RefreshDashboard)
        }
        Err(detail) => {
            state.upload_status = StatusLine::error(detail);
            UpdateResult::none()
        }
    }
}

/// Queueing does not save the settings first.
pub fn queue_image(state: &mut AppState) -> UpdateResult {
    let image_path = trimmed_image_path(state);
    state.upload_status = StatusLine::busy(format!("Queueing {image_path}..."));
    UpdateResult::action(UpdateAction::QueueImage { image_path })
}

pub fn handle_queue(state: &mut AppState, result: Outcome<QueuedItem>) -> UpdateResult {
    match result {
        Ok(item) => {
            state.upload_status = StatusLine::ok(format!("Queued: {}", item.queued_path));
            UpdateResult::action(UpdateAction::RefreshMonitor)
        }
        Err(detail) => {
            state.upload_status = StatusLine::error(detail);
            UpdateResult::none()
        }
    }
}

// ─────────────────────────────────────────────────────────
// Catalog
// ─────────────────────────────────────────────────────────

pub fn fetch_variants(state: &mut AppState) -> UpdateResult {
    if !state.settings.loaded {
        return refuse_unloaded(&mut state.products_status);
    }
    state.products_status = StatusLine::busy("Fetching variants...");
    UpdateResult::action(UpdateAction::FetchVariants {
        settings: state.settings.snapshot_for_save(),
    })
}

pub fn fetch_mockups(state: &mut AppState) -> UpdateResult {
    if !state.settings.loaded {
        return refuse_unloaded(&mut state.products_status);
    }
    state.products_status = StatusLine::busy("Fetching mockups...");
    UpdateResult::action(UpdateAction::FetchMockups {
        settings: state.settings.snapshot_for_save(),
    })
}

pub fn handle_variants(
    state: &mut AppState,
    result: Outcome<Vec<CatalogVariant>>,
) -> UpdateResult {
    match result {
        Ok(variants) => {
            state.products_status = StatusLine::ok(format!("Loaded {} variants", variants.len()));
            state.loaded_variants = variants;
            state.clamp_cursors();
        }
        Err(detail) => {
            state.products_status = StatusLine::error(detail);
        }
    }
    UpdateResult::none()
}

pub fn handle_mockups(
    state: &mut AppState,
    result: Outcome<Vec<MockupDescriptor>>,
) -> UpdateResult {
    match result {
        Ok(mockups) => {
            state.products_status = StatusLine::ok(format!("Loaded {} mockups", mockups.len()));
            state.loaded_mockups = mockups;
            state.clamp_cursors();
        }
        Err(detail) => {
            state.products_status = StatusLine::error(detail);
        }
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────

pub fn toggle_variant(state: &mut AppState, variant_id: i64) -> UpdateResult {
    if !state.settings.loaded {
        return refuse_unloaded(&mut state.products_status);
    }
    if selection::toggle_variant(&mut state.settings.record, variant_id)
        == VariantToggle::LimitExceeded
    {
        state.show_notice(VARIANT_LIMIT_NOTICE);
    }
    UpdateResult::action(save_action(state, SaveOrigin::Selection))
}

pub fn select_all_variants(state: &mut AppState) -> UpdateResult {
    if !state.settings.loaded {
        return refuse_unloaded(&mut state.products_status);
    }
    selection::select_all_variants(&mut state.settings.record, &state.loaded_variants);
    UpdateResult::action(save_action(state, SaveOrigin::Selection))
}

pub fn clear_variants(state: &mut AppState) -> UpdateResult {
    if !state.settings.loaded {
        return refuse_unloaded(&mut state.products_status);
    }
    selection::clear_variants(&mut state.settings.record);
    UpdateResult::action(save_action(state, SaveOrigin::Selection))
}

pub fn toggle_mockup(state: &mut AppState, mockup_id: &str) -> UpdateResult {
    if !state.settings.loaded {
        return refuse_unloaded(&mut state.products_status);
    }
    selection::toggle_mockup(&mut state.settings.record, mockup_id);
    UpdateResult::action(save_action(state, SaveOrigin::Selection))
}

// ─────────────────────────────────────────────────────────
// Health
// ─────────────────────────────────────────────────────────

pub fn handle_health(state: &mut AppState, result: Outcome<HealthStatus>) -> UpdateResult {
    state.health = match result {
        Ok(health) if health.ok => BackendHealth::Up {
            service: health.service,
        },
        Ok(_) => BackendHealth::Down {
            detail: "backend reported not ok".to_string(),
        },
        Err(detail) => BackendHealth::Down { detail },
    };
    UpdateResult::none()
}
