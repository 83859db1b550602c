//! UI preference persistence — JSON save/load across restarts.
//!
//! Only view preferences are kept. Scenario numbers are written solely
//! when the user exports them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use equity_core::Currency;

use crate::app::{AppState, Overlay, View};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub active_view: View,
    pub welcome_dismissed: bool,
    pub display_currency: Currency,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            active_view: View::Journey,
            welcome_dismissed: false,
            display_currency: Currency::Usd,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        active_view: app.active_view,
        welcome_dismissed: app.overlay != Overlay::Welcome,
        display_currency: app.display_currency,
    }
}

/// Apply persisted state to AppState.
pub fn apply(app: &mut AppState, state: PersistedState) {
    app.active_view = state.active_view;
    app.display_currency = state.display_currency;
    if !state.welcome_dismissed {
        app.overlay = Overlay::Welcome;
    }
}
