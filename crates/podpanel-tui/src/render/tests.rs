//! Full-frame rendering tests

use super::view;
use crate::test_utils::{mockup, test_state, variant, TestTerminal};

use podpanel_app::handler::update;
use podpanel_app::input_key::InputKey;
use podpanel_app::message::{DashboardSnapshot, Message};
use podpanel_app::state::{StatusLine, Tab};
use podpanel_app::AppState;
use podpanel_core::{DashboardStats, MonitorStatus, Settings};

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

/// Feed a message through update, ignoring any action
fn apply(state: &mut AppState, msg: Message) {
    let mut next = Some(msg);
    while let Some(m) = next {
        next = update(state, m).message;
    }
}

#[test]
fn test_initial_frame() {
    let state = test_state();
    let term = draw(&state);

    assert!(term.buffer_contains("podpanel"));
    assert!(term.buffer_contains("Dashboard"));
    assert!(term.buffer_contains("Monitoring: -"));
    assert!(term.buffer_contains("Waiting for first refresh"));
    assert!(term.buffer_contains("[ NO PRODUCTS YET ]"));
}

#[test]
fn test_monitor_line_visible_on_every_tab() {
    let mut state = test_state();
    apply(
        &mut state,
        Message::MonitorStatusRefreshed {
            result: Ok(MonitorStatus {
                monitoring: true,
                watch_folder: "/srv/inbox".into(),
                queue_size: 2,
                current_file: Some("a.png".into()),
            }),
        },
    );

    for tab in Tab::ALL {
        state.tab = tab;
        let term = draw(&state);
        assert!(
            term.buffer_contains("Monitoring: ON | Folder: /srv/inbox | Queue: 2 | Current: a.png"),
            "monitor line missing on {:?}",
            tab
        );
    }
}

#[test]
fn test_dashboard_refresh_shown() {
    let mut state = test_state();
    apply(
        &mut state,
        Message::DashboardRefreshed {
            result: Ok(DashboardSnapshot {
                stats: DashboardStats {
                    total_products: 4,
                    draft_products: 1,
                    total_logs: 9,
                    error_logs: 0,
                },
                runs: vec![serde_json::json!({
                    "image_path": "/in/a.png",
                    "status": "draft",
                    "printify_product_id": "p-1"
                })],
                logs: vec![serde_json::json!({"level": "INFO", "message": "started"})],
            }),
        },
    );

    let term = draw(&state);
    assert!(term.buffer_contains("Total products 4"));
    assert!(term.buffer_contains("DRAFT | /in/a.png | draft: p-1"));
    assert!(term.buffer_contains("Updated"));

    state.tab = Tab::Logs;
    let term = draw(&state);
    assert!(term.buffer_contains("\"image_path\": \"/in/a.png\""));

    apply(&mut state, Message::SwitchJsonView);
    let term = draw(&state);
    assert!(term.buffer_contains("\"message\": \"started\""));
}

#[test]
fn test_limit_notice_overlay() {
    let mut state = test_state();
    state.tab = Tab::Products;
    apply(
        &mut state,
        Message::SettingsLoaded {
            result: Ok(Settings::default()),
        },
    );
    state.loaded_variants = (1..=101).map(|i| variant(i, &format!("V{i}"), "white")).collect();
    apply(&mut state, Message::SelectAllVariants);
    apply(&mut state, Message::ToggleVariant(101));

    let term = draw(&state);
    assert!(term.buffer_contains("Printify limit is 100 variants."));
    assert!(term.buffer_contains("(MAX LIMIT REACHED)"));

    apply(&mut state, Message::Key(InputKey::Esc));
    let term = draw(&state);
    assert!(!term.buffer_contains("Printify limit is 100 variants."));
}

#[test]
fn test_settings_load_failure_replaces_monitor_line() {
    let mut state = test_state();
    apply(
        &mut state,
        Message::SettingsLoaded {
            result: Err("connection refused".into()),
        },
    );
    apply(
        &mut state,
        Message::MonitorStatusRefreshed {
            result: Err("monitor down".into()),
        },
    );

    for tab in Tab::ALL {
        state.tab = tab;
        let term = draw(&state);
        assert!(
            term.buffer_contains("Loading settings failed: connection refused"),
            "settings failure missing on {:?}",
            tab
        );
    }

    state.tab = Tab::Products;
    apply(&mut state, Message::ToggleVariant(3));
    let term = draw(&state);
    assert!(term.buffer_contains("press L to retry"));
}

#[test]
fn test_settings_tab_after_load() {
    let mut state = test_state();
    apply(
        &mut state,
        Message::SettingsLoaded {
            result: Ok(Settings {
                watch_folder: "/srv/inbox".into(),
                printify_api_key: "secret-key".into(),
                blueprint_id: 6,
                ..Default::default()
            }),
        },
    );
    state.tab = Tab::Settings;

    let term = draw(&state);
    assert!(term.buffer_contains("/srv/inbox"));
    assert!(!term.buffer_contains("secret-key"));
    assert!(term.buffer_contains("[x]"));
}

#[test]
fn test_products_tab_with_catalog() {
    let mut state = test_state();
    state.tab = Tab::Products;
    state.loaded_variants = vec![variant(1, "White / S", "white")];
    state.loaded_mockups = vec![mockup("front", "Front")];
    state.products_status = StatusLine::ok("Loaded 1 variants");

    let term = draw(&state);
    assert!(term.buffer_contains("White / S"));
    assert!(term.buffer_contains("[ ] Front"));
    assert!(term.buffer_contains("Variants selected: 0/100"));
    assert!(term.buffer_contains("Loaded 1 variants"));
}

#[test]
fn test_failed_request_error_styled_on_upload() {
    let mut state = test_state();
    state.tab = Tab::Upload;
    apply(
        &mut state,
        Message::DraftFinished {
            result: Err("Printify API key missing".into()),
        },
    );

    let term = draw(&state);
    let cell = term
        .cell_of("Printify API key missing")
        .expect("error rendered");
    assert_eq!(cell.fg, crate::theme::palette::STATUS_RED);
}

#[test]
fn test_small_terminal_does_not_panic() {
    let state = test_state();
    let mut term = TestTerminal::with_size(20, 8);
    term.draw_with(|frame| view(frame, &state));
}
