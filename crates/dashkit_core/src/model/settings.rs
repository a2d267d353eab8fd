//! Dashboard settings model.
//!
//! # Responsibility
//! - Hold the explicit configuration object handed to the presentation
//!   layer at startup.
//! - Map each setting to and from its stored key/value text form.
//!
//! # Invariants
//! - Every field has a default, so a partially stored settings set still
//!   yields a complete value.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Light or dark base palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(()),
        }
    }
}

/// Accent color family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeColor {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Red,
}

impl ThemeColor {
    pub const ALL: [ThemeColor; 5] = [
        ThemeColor::Blue,
        ThemeColor::Green,
        ThemeColor::Purple,
        ThemeColor::Orange,
        ThemeColor::Red,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }

    /// Accent hex color for the given mode.
    pub fn accent_hex(self, mode: ThemeMode) -> &'static str {
        match (self, mode) {
            (Self::Blue, ThemeMode::Light) => "#2563eb",
            (Self::Blue, ThemeMode::Dark) => "#1d4ed8",
            (Self::Green, ThemeMode::Light) => "#10b981",
            (Self::Green, ThemeMode::Dark) => "#059669",
            (Self::Purple, ThemeMode::Light) => "#8b5cf6",
            (Self::Purple, ThemeMode::Dark) => "#7c3aed",
            (Self::Orange, ThemeMode::Light) => "#f97316",
            (Self::Orange, ThemeMode::Dark) => "#ea580c",
            (Self::Red, ThemeMode::Light) => "#ef4444",
            (Self::Red, ThemeMode::Dark) => "#dc2626",
        }
    }
}

impl FromStr for ThemeColor {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == value)
            .ok_or(())
    }
}

/// Density of dashboard cards and spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    Compact,
    #[default]
    Default,
    Comfortable,
}

impl LayoutMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Default => "default",
            Self::Comfortable => "comfortable",
        }
    }
}

impl FromStr for LayoutMode {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "compact" => Ok(Self::Compact),
            "default" => Ok(Self::Default),
            "comfortable" => Ok(Self::Comfortable),
            _ => Err(()),
        }
    }
}

/// Storage keys, kept compatible with the browser build's key names.
pub const KEY_THEME_MODE: &str = "themeMode";
pub const KEY_THEME_COLOR: &str = "themeColor";
pub const KEY_EMAIL_NOTIFICATIONS: &str = "emailNotifications";
pub const KEY_PUSH_NOTIFICATIONS: &str = "pushNotifications";
pub const KEY_LAYOUT_MODE: &str = "layoutMode";

/// Every key written by `DashboardSettings::to_entries`, in the same order.
pub const SETTINGS_KEYS: [&str; 5] = [
    KEY_THEME_MODE,
    KEY_THEME_COLOR,
    KEY_EMAIL_NOTIFICATIONS,
    KEY_PUSH_NOTIFICATIONS,
    KEY_LAYOUT_MODE,
];

/// Complete dashboard configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSettings {
    pub theme_mode: ThemeMode,
    pub theme_color: ThemeColor,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub layout_mode: LayoutMode,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Light,
            theme_color: ThemeColor::Blue,
            email_notifications: false,
            push_notifications: true,
            layout_mode: LayoutMode::Default,
        }
    }
}

impl DashboardSettings {
    /// Current accent hex for the configured mode and color.
    pub fn accent_hex(&self) -> &'static str {
        self.theme_color.accent_hex(self.theme_mode)
    }

    /// Stored text form of every setting, keyed by storage key.
    pub fn to_entries(&self) -> [(&'static str, String); 5] {
        [
            (KEY_THEME_MODE, self.theme_mode.as_str().to_string()),
            (KEY_THEME_COLOR, self.theme_color.as_str().to_string()),
            (KEY_EMAIL_NOTIFICATIONS, self.email_notifications.to_string()),
            (KEY_PUSH_NOTIFICATIONS, self.push_notifications.to_string()),
            (KEY_LAYOUT_MODE, self.layout_mode.as_str().to_string()),
        ]
    }

    /// Applies one stored value.
    ///
    /// Returns `false` when the key is unknown or the value is malformed;
    /// the setting keeps its current value in that case.
    pub fn apply_entry(&mut self, key: &str, value: &str) -> bool {
        match key {
            KEY_THEME_MODE => assign_parsed(&mut self.theme_mode, value),
            KEY_THEME_COLOR => assign_parsed(&mut self.theme_color, value),
            KEY_EMAIL_NOTIFICATIONS => assign_parsed(&mut self.email_notifications, value),
            KEY_PUSH_NOTIFICATIONS => assign_parsed(&mut self.push_notifications, value),
            KEY_LAYOUT_MODE => assign_parsed(&mut self.layout_mode, value),
            _ => false,
        }
    }
}

fn assign_parsed<T: FromStr>(slot: &mut T, value: &str) -> bool {
    match value.trim().parse::<T>() {
        Ok(parsed) => {
            *slot = parsed;
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        DashboardSettings, LayoutMode, ThemeColor, ThemeMode, KEY_LAYOUT_MODE, SETTINGS_KEYS,
    };

    #[test]
    fn defaults_match_first_launch_values() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.theme_mode, ThemeMode::Light);
        assert_eq!(settings.theme_color, ThemeColor::Blue);
        assert!(!settings.email_notifications);
        assert!(settings.push_notifications);
        assert_eq!(settings.layout_mode, LayoutMode::Default);
        assert_eq!(settings.accent_hex(), "#2563eb");
    }

    #[test]
    fn entries_apply_back_to_equal_settings() {
        let settings = DashboardSettings {
            theme_mode: ThemeMode::Dark,
            theme_color: ThemeColor::Orange,
            email_notifications: true,
            push_notifications: false,
            layout_mode: LayoutMode::Compact,
        };

        let mut restored = DashboardSettings::default();
        for (key, value) in settings.to_entries() {
            assert!(restored.apply_entry(key, &value));
        }
        assert_eq!(restored, settings);
    }

    #[test]
    fn entries_cover_every_settings_key() {
        let keys = DashboardSettings::default().to_entries().map(|(key, _)| key);
        assert_eq!(keys, SETTINGS_KEYS);
    }

    #[test]
    fn malformed_value_keeps_current_setting() {
        let mut settings = DashboardSettings::default();
        assert!(!settings.apply_entry(KEY_LAYOUT_MODE, "spacious"));
        assert!(!settings.apply_entry("sidebarWidth", "240"));
        assert_eq!(settings, DashboardSettings::default());
    }

    #[test]
    fn toggled_mode_flips() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }
}
