use gloo_storage::Storage;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::notice::Notice;
use crate::models::error::AppError;
use crate::models::settings::{Settings, SettingsField, SettingsStore, SETTINGS_VERSION};
use crate::services::clipboard;

/// Name of the local-storage entry holding the settings record.
const SETTINGS_STORAGE_KEY: &str = "state_settings";

/// Envelope written to local storage. The clipboard form is the bare record.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSettings {
    version: u32,
    #[serde(default)]
    state: Settings,
}

/// Handle returned by the `use_settings` hook.
#[derive(Clone, PartialEq)]
pub struct SettingsHandle {
    pub settings: Settings,
    pub update_field: Callback<SettingsField>,
    pub replace: Callback<Settings>,
    pub reset: Callback<()>,
    pub export_to_clipboard: Callback<()>,
    pub import_from_clipboard: Callback<()>,
}

/// Settings store bound to a component: every mutation goes through the
/// store, is persisted to local storage and re-renders dependents. Clipboard
/// outcomes are reported through `notify`.
#[hook]
pub fn use_settings(notify: Callback<Notice>) -> SettingsHandle {
    let settings = use_state(load_settings);

    let update_field = {
        let settings = settings.clone();
        Callback::from(move |field| {
            let mut store = SettingsStore::new((*settings).clone());
            store.update_field(field);
            apply(&settings, store.get().clone());
        })
    };

    let replace = {
        let settings = settings.clone();
        Callback::from(move |new_settings| {
            let mut store = SettingsStore::new((*settings).clone());
            let replaced = store.replace(new_settings);
            apply(&settings, replaced);
        })
    };

    let reset = {
        let settings = settings.clone();
        Callback::from(move |()| {
            let mut store = SettingsStore::new((*settings).clone());
            let defaults = store.reset();
            apply(&settings, defaults);
        })
    };

    let export_to_clipboard = {
        let settings = settings.clone();
        let notify = notify.clone();
        Callback::from(move |()| {
            let current = (*settings).clone();
            let notify = notify.clone();
            spawn_local(async move {
                match clipboard::write_text(&current.to_json()).await {
                    Ok(()) => notify.emit(Notice::success("Settings JSON copied to clipboard")),
                    // Export is a silent no-op outside a clipboard-capable
                    // context.
                    Err(AppError::Environment(_)) => {}
                    Err(e) => notify.emit(Notice::failure(&e)),
                }
            });
        })
    };

    let import_from_clipboard = {
        let settings = settings.clone();
        Callback::from(move |()| {
            let settings = settings.clone();
            let notify = notify.clone();
            spawn_local(async move {
                match read_settings_from_clipboard().await {
                    Ok(imported) => {
                        let mut store = SettingsStore::new((*settings).clone());
                        let replaced = store.replace(imported);
                        apply(&settings, replaced);
                        notify.emit(Notice::success("Successfully imported settings from clipboard"));
                    }
                    // Current settings stay untouched on any import failure.
                    Err(e) => notify.emit(Notice::failure(&e)),
                }
            });
        })
    };

    SettingsHandle {
        settings: (*settings).clone(),
        update_field,
        replace,
        reset,
        export_to_clipboard,
        import_from_clipboard,
    }
}

async fn read_settings_from_clipboard() -> Result<Settings, AppError> {
    let text = clipboard::read_text().await?;
    Settings::parse(&text)
}

fn apply(handle: &UseStateHandle<Settings>, new_settings: Settings) {
    save_settings(&new_settings);
    handle.set(new_settings);
}

/// Load the settings record from local storage, fall back to defaults when
/// the entry is absent or corrupt.
fn load_settings() -> Settings {
    match gloo_storage::LocalStorage::get::<StoredSettings>(SETTINGS_STORAGE_KEY) {
        Ok(stored) => stored.state,
        Err(_) => Settings::default(),
    }
}

/// Persist the settings record to local storage.
fn save_settings(settings: &Settings) {
    let stored = StoredSettings {
        version: SETTINGS_VERSION,
        state: settings.clone(),
    };
    if let Err(e) = gloo_storage::LocalStorage::set(SETTINGS_STORAGE_KEY, &stored) {
        web_sys::console::warn_1(&format!("Failed to save settings: {e:?}").into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_decodes_with_missing_state_fields() {
        let stored: StoredSettings =
            serde_json::from_str(r#"{"version": 0, "state": {"diagramDays": 3}}"#).unwrap();
        assert_eq!(stored.version, 0);
        assert_eq!(stored.state.diagram_days, 3);
        assert_eq!(stored.state.chart_items_count, 7);
    }

    #[test]
    fn test_envelope_round_trip() {
        let stored = StoredSettings {
            version: SETTINGS_VERSION,
            state: Settings::default(),
        };
        let json = serde_json::to_string(&stored).unwrap();
        let decoded: StoredSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.state, Settings::default());
    }
}
