use log::debug;

/// Preference key under which the active theme is persisted.
pub const THEME_PREF_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn storage_value(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn from_storage(value: &str) -> Option<Theme> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    fn flipped(self) -> Theme {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Durable key/value storage for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// The theme-sensitive parts of the UI shell: the three editing surfaces
/// (addressed collectively) and the mutually exclusive sun/moon icon pair.
pub trait ThemeView {
    fn apply_editor_theme(&mut self, theme_id: &str);
    fn show_sun_icon(&mut self, visible: bool);
    fn show_moon_icon(&mut self, visible: bool);
}

/// How a deployment handles themes: the usual dark/light toggle, or a single
/// fixed editor theme for kiosk-style builds where toggling does nothing.
#[derive(Debug, Clone)]
pub enum ThemeConfig {
    Toggle {
        dark_editor_theme: String,
        light_editor_theme: String,
    },
    Fixed {
        editor_theme: String,
    },
}

impl ThemeConfig {
    pub fn default_toggle() -> Self {
        Self::Toggle {
            dark_editor_theme: "tripane-dark".to_string(),
            light_editor_theme: "tripane-light".to_string(),
        }
    }
}

pub struct ThemeController {
    config: ThemeConfig,
    current: Theme,
}

impl ThemeController {
    /// Read the persisted theme from `prefs`, defaulting to Dark on first run.
    pub fn new(config: ThemeConfig, prefs: &dyn PreferenceStore) -> Self {
        let current = prefs
            .get(THEME_PREF_KEY)
            .and_then(|v| Theme::from_storage(&v))
            .unwrap_or(Theme::Dark);
        Self { config, current }
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    fn editor_theme_id(&self) -> &str {
        match &self.config {
            ThemeConfig::Toggle {
                dark_editor_theme,
                light_editor_theme,
            } => match self.current {
                Theme::Dark => dark_editor_theme,
                Theme::Light => light_editor_theme,
            },
            ThemeConfig::Fixed { editor_theme } => editor_theme,
        }
    }

    /// Push the current theme onto the editing surfaces and icon pair.
    /// Exactly one icon ends up visible: sun iff the theme is Dark.
    pub fn apply(&self, view: &mut dyn ThemeView) {
        view.apply_editor_theme(self.editor_theme_id());
        let is_dark = self.current == Theme::Dark;
        view.show_sun_icon(is_dark);
        view.show_moon_icon(!is_dark);
    }

    /// Flip Dark↔Light, persist the new value, and re-apply. Under a fixed
    /// theme configuration this is a no-op.
    pub fn toggle(&mut self, prefs: &mut dyn PreferenceStore, view: &mut dyn ThemeView) {
        if matches!(self.config, ThemeConfig::Fixed { .. }) {
            return;
        }
        self.current = self.current.flipped();
        prefs.set(THEME_PREF_KEY, self.current.storage_value());
        debug!("theme toggled to {}", self.current.storage_value());
        self.apply(view);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::collections::HashMap;

    /// In-memory preference store for tests.
    #[derive(Default)]
    pub struct MemoryPrefs {
        pub values: HashMap<String, String>,
    }

    impl PreferenceStore for MemoryPrefs {
        fn get(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.values.insert(key.to_string(), value.to_string());
        }
    }

    /// Records the most recent theme application.
    #[derive(Default)]
    pub struct RecordingView {
        pub editor_theme: Option<String>,
        pub sun_visible: bool,
        pub moon_visible: bool,
    }

    impl ThemeView for RecordingView {
        fn apply_editor_theme(&mut self, theme_id: &str) {
            self.editor_theme = Some(theme_id.to_string());
        }

        fn show_sun_icon(&mut self, visible: bool) {
            self.sun_visible = visible;
        }

        fn show_moon_icon(&mut self, visible: bool) {
            self.moon_visible = visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{MemoryPrefs, RecordingView};
    use super::*;

    #[test]
    fn test_defaults_to_dark_when_nothing_stored() {
        let prefs = MemoryPrefs::default();
        let controller = ThemeController::new(ThemeConfig::default_toggle(), &prefs);
        assert_eq!(controller.theme(), Theme::Dark);
    }

    #[test]
    fn test_reads_persisted_light_theme() {
        let mut prefs = MemoryPrefs::default();
        prefs.set(THEME_PREF_KEY, "light");
        let controller = ThemeController::new(ThemeConfig::default_toggle(), &prefs);
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn test_garbage_preference_falls_back_to_dark() {
        let mut prefs = MemoryPrefs::default();
        prefs.set(THEME_PREF_KEY, "solarized");
        let controller = ThemeController::new(ThemeConfig::default_toggle(), &prefs);
        assert_eq!(controller.theme(), Theme::Dark);
    }

    #[test]
    fn test_apply_shows_sun_iff_dark() {
        let prefs = MemoryPrefs::default();
        let controller = ThemeController::new(ThemeConfig::default_toggle(), &prefs);
        let mut view = RecordingView::default();
        controller.apply(&mut view);
        assert!(view.sun_visible);
        assert!(!view.moon_visible);
        assert_eq!(view.editor_theme.as_deref(), Some("tripane-dark"));
    }

    #[test]
    fn test_toggle_persists_and_updates_icons() {
        let mut prefs = MemoryPrefs::default();
        let mut view = RecordingView::default();
        let mut controller = ThemeController::new(ThemeConfig::default_toggle(), &prefs);

        controller.toggle(&mut prefs, &mut view);
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(prefs.get(THEME_PREF_KEY).as_deref(), Some("light"));
        assert!(!view.sun_visible);
        assert!(view.moon_visible);
        assert_eq!(view.editor_theme.as_deref(), Some("tripane-light"));
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut prefs = MemoryPrefs::default();
        prefs.set(THEME_PREF_KEY, "dark");
        let mut view = RecordingView::default();
        let mut controller = ThemeController::new(ThemeConfig::default_toggle(), &prefs);
        controller.apply(&mut view);
        let sun_before = view.sun_visible;
        let moon_before = view.moon_visible;

        controller.toggle(&mut prefs, &mut view);
        controller.toggle(&mut prefs, &mut view);

        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(prefs.get(THEME_PREF_KEY).as_deref(), Some("dark"));
        assert_eq!(view.sun_visible, sun_before);
        assert_eq!(view.moon_visible, moon_before);
    }

    #[test]
    fn test_fixed_config_ignores_toggle() {
        let mut prefs = MemoryPrefs::default();
        let mut view = RecordingView::default();
        let config = ThemeConfig::Fixed {
            editor_theme: "tripane-dark".to_string(),
        };
        let mut controller = ThemeController::new(config, &prefs);

        controller.toggle(&mut prefs, &mut view);

        assert_eq!(controller.theme(), Theme::Dark);
        assert!(prefs.get(THEME_PREF_KEY).is_none());
        // Nothing was applied either
        assert!(view.editor_theme.is_none());
    }
}
