//! Dashboard settings use-case service.
//!
//! # Responsibility
//! - Provide the explicit save/load boundary for `DashboardSettings`.
//! - Keep the presentation layer free of ambient storage writes.
//!
//! # Invariants
//! - `load` never fails because of malformed stored values; such values fall
//!   back to defaults.
//! - `save` writes every settings key.

use crate::model::settings::{DashboardSettings, ThemeMode, KEY_THEME_MODE, SETTINGS_KEYS};
use crate::repo::settings_repo::{RepoResult, SettingsRepository};
use log::{info, warn};

/// Settings service over a key-value repository.
pub struct SettingsService<R: SettingsRepository> {
    repo: R,
}

impl<R: SettingsRepository> SettingsService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads settings, falling back to defaults for absent or malformed keys.
    ///
    /// Stored keys outside the known settings set are ignored.
    pub fn load(&self) -> RepoResult<DashboardSettings> {
        let stored = self.repo.load_all()?;
        let mut settings = DashboardSettings::default();
        for key in SETTINGS_KEYS {
            let Some(value) = stored.get(key) else {
                continue;
            };
            if !settings.apply_entry(key, value) {
                warn!(
                    "event=settings_load module=settings status=fallback key={} value_len={}",
                    key,
                    value.len()
                );
            }
        }
        info!(
            "event=settings_load module=settings status=ok stored_keys={}",
            stored.len()
        );
        Ok(settings)
    }

    /// Persists every setting.
    pub fn save(&self, settings: &DashboardSettings) -> RepoResult<()> {
        for (key, value) in settings.to_entries() {
            self.repo.store_value(key, &value)?;
        }
        info!(
            "event=settings_save module=settings status=ok theme_mode={} theme_color={} layout_mode={}",
            settings.theme_mode.as_str(),
            settings.theme_color.as_str(),
            settings.layout_mode.as_str()
        );
        Ok(())
    }

    /// Flips light/dark mode and persists it immediately.
    ///
    /// Returns the updated settings.
    pub fn toggle_mode(&self, settings: &DashboardSettings) -> RepoResult<DashboardSettings> {
        let next = DashboardSettings {
            theme_mode: settings.theme_mode.toggled(),
            ..*settings
        };
        self.repo
            .store_value(KEY_THEME_MODE, next.theme_mode.as_str())?;
        info!(
            "event=settings_toggle_mode module=settings status=ok theme_mode={}",
            next.theme_mode.as_str()
        );
        Ok(next)
    }

    /// Loads only the persisted theme mode, defaulting to light.
    pub fn theme_mode(&self) -> RepoResult<ThemeMode> {
        let stored = self.repo.load_value(KEY_THEME_MODE)?;
        Ok(stored
            .and_then(|value| value.parse().ok())
            .unwrap_or_default())
    }
}
