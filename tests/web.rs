//! Browser tests for localStorage-backed state
//! Run with: wasm-pack test --headless --firefox
#![cfg(target_arch = "wasm32")]

use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen_test::*;

use waterwise_web_leptos::config::{AppConfig, REMINDER_KEY};
use waterwise_web_leptos::state::{KeyValueStore, LocalStore, Reminder, ReminderOutcome};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_local_store_round_trip() {
    LocalStorage::delete("waterwise-test");
    assert_eq!(LocalStore.get("waterwise-test"), None);

    LocalStore.set("waterwise-test", "2026-10-16");
    assert_eq!(LocalStore.get("waterwise-test").as_deref(), Some("2026-10-16"));

    LocalStorage::delete("waterwise-test");
}

#[wasm_bindgen_test]
fn test_reminder_date_survives_new_instance() {
    LocalStorage::delete(REMINDER_KEY);

    let reminder = Reminder::new(LocalStore, REMINDER_KEY);
    assert_eq!(reminder.check("2026-10-16", || false), ReminderOutcome::Dismissed);

    let reloaded = Reminder::new(LocalStore, REMINDER_KEY);
    assert_eq!(
        reloaded.check("2026-10-16", || panic!("prompted twice on the same day")),
        ReminderOutcome::AlreadyShown
    );

    LocalStorage::delete(REMINDER_KEY);
}

#[wasm_bindgen_test]
fn test_config_defaults_without_env() {
    let config = AppConfig::from_env();
    assert_eq!(config.reminder_key, REMINDER_KEY);
    assert!(config.reload_delay_ms > 0);
}
