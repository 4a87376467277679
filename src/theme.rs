//! Theme colors as an explicit configuration object.
//!
//! Created once at startup from the persisted dark-mode flag and passed to
//! whatever renders; nothing here is ambient or mutable in place.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark_flag(dark_mode: bool) -> Self {
        if dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

/// The three colors every view consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub background: &'static str,
    pub text: &'static str,
    pub card: &'static str,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Theme {
                background: "#121212",
                text: "#FFFFFF",
                card: "#1E1E1E",
            },
            ThemeMode::Light => Theme {
                background: "#FFFFFF",
                text: "#000000",
                card: "#F5F5F5",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_dark_flag() {
        assert_eq!(ThemeMode::from_dark_flag(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_dark_flag(false), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_flips_mode() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_theme_colors() {
        let dark = Theme::for_mode(ThemeMode::Dark);
        assert_eq!(dark.background, "#121212");
        assert_eq!(dark.text, "#FFFFFF");
        assert_eq!(dark.card, "#1E1E1E");

        let light = Theme::for_mode(ThemeMode::Light);
        assert_eq!(light.background, "#FFFFFF");
        assert_eq!(light.text, "#000000");
        assert_eq!(light.card, "#F5F5F5");
    }
}
