//! UI preference state, currently just the dark-mode toggle.
//!
//! The source pages kept this as an ambient localStorage global read from
//! every component. Here it is an explicit settings object: loaded once from
//! the store at startup, written back on every change, and handed to the HTTP
//! surface like any other state.

use std::sync::{Arc, Mutex, RwLock};

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub const fn label(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

/// Durable backing for the preference, standing in for browser local storage.
pub trait PreferenceStore: Send + Sync {
    fn load(&self) -> Result<Option<ThemePreference>, PreferenceError>;
    fn save(&self, theme: ThemePreference) -> Result<(), PreferenceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("preference store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Default)]
pub struct MemoryPreferenceStore {
    theme: Mutex<Option<ThemePreference>>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Option<ThemePreference>, PreferenceError> {
        Ok(*self.theme.lock().expect("preference mutex poisoned"))
    }

    fn save(&self, theme: ThemePreference) -> Result<(), PreferenceError> {
        *self.theme.lock().expect("preference mutex poisoned") = Some(theme);
        Ok(())
    }
}

/// The settings object: read-at-init, write-on-change.
pub struct UiPreferences<S> {
    store: Arc<S>,
    theme: RwLock<ThemePreference>,
}

impl<S: PreferenceStore> UiPreferences<S> {
    /// Load the stored preference, defaulting to light when nothing is stored
    /// or the store cannot be read.
    pub fn init(store: Arc<S>) -> Self {
        let theme = match store.load() {
            Ok(Some(theme)) => theme,
            Ok(None) => ThemePreference::Light,
            Err(err) => {
                warn!(%err, "preference load failed, defaulting to light");
                ThemePreference::Light
            }
        };

        Self {
            store,
            theme: RwLock::new(theme),
        }
    }

    pub fn theme(&self) -> ThemePreference {
        *self.theme.read().expect("preference lock poisoned")
    }

    /// Update the in-memory value and write it through. A failed write keeps
    /// the in-memory value, matching the best-effort behavior of the browser
    /// storage it replaces.
    pub fn set_theme(&self, theme: ThemePreference) {
        *self.theme.write().expect("preference lock poisoned") = theme;
        if let Err(err) = self.store.save(theme) {
            warn!(%err, theme = theme.label(), "preference write failed");
        }
    }

    pub fn toggle(&self) -> ThemePreference {
        let next = self.theme().toggled();
        self.set_theme(next);
        next
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemePayload {
    theme: ThemePreference,
}

/// Router builder exposing the theme preference round-trip.
pub fn theme_router<S: PreferenceStore + 'static>(prefs: Arc<UiPreferences<S>>) -> Router {
    Router::new()
        .route(
            "/api/v1/preferences/theme",
            get(theme_handler::<S>).put(set_theme_handler::<S>),
        )
        .with_state(prefs)
}

async fn theme_handler<S: PreferenceStore + 'static>(
    State(prefs): State<Arc<UiPreferences<S>>>,
) -> Json<ThemePayload> {
    Json(ThemePayload {
        theme: prefs.theme(),
    })
}

async fn set_theme_handler<S: PreferenceStore + 'static>(
    State(prefs): State<Arc<UiPreferences<S>>>,
    Json(payload): Json<ThemePayload>,
) -> Json<ThemePayload> {
    prefs.set_theme(payload.theme);
    Json(ThemePayload {
        theme: prefs.theme(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self) -> Result<Option<ThemePreference>, PreferenceError> {
            Err(PreferenceError::Unavailable("storage blocked".to_string()))
        }

        fn save(&self, _theme: ThemePreference) -> Result<(), PreferenceError> {
            Err(PreferenceError::Unavailable("storage blocked".to_string()))
        }
    }

    #[test]
    fn defaults_to_light_when_store_is_empty() {
        let prefs = UiPreferences::init(Arc::new(MemoryPreferenceStore::default()));
        assert_eq!(prefs.theme(), ThemePreference::Light);
    }

    #[test]
    fn init_reads_the_stored_preference() {
        let store = Arc::new(MemoryPreferenceStore::default());
        store.save(ThemePreference::Dark).expect("save succeeds");
        let prefs = UiPreferences::init(store);
        assert_eq!(prefs.theme(), ThemePreference::Dark);
    }

    #[test]
    fn toggle_flips_and_writes_through() {
        let store = Arc::new(MemoryPreferenceStore::default());
        let prefs = UiPreferences::init(store.clone());

        assert_eq!(prefs.toggle(), ThemePreference::Dark);
        assert_eq!(store.load().expect("load succeeds"), Some(ThemePreference::Dark));

        assert_eq!(prefs.toggle(), ThemePreference::Light);
        assert_eq!(store.load().expect("load succeeds"), Some(ThemePreference::Light));
    }

    #[test]
    fn failed_store_write_keeps_in_memory_value() {
        let prefs = UiPreferences::init(Arc::new(BrokenStore));
        prefs.set_theme(ThemePreference::Dark);
        assert_eq!(prefs.theme(), ThemePreference::Dark);
    }
}
