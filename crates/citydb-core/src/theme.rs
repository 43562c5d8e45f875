// crates/citydb-core/src/theme.rs
use crate::error::{CityError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Colours used by a front end for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub bg: &'static str,
    pub fg: &'static str,
    pub button_bg: &'static str,
    pub button_fg: &'static str,
}

const LIGHT: Palette = Palette {
    bg: "#FFFFFF",
    fg: "#000000",
    button_bg: "#E0E0E0",
    button_fg: "#000000",
};

const DARK: Palette = Palette {
    bg: "#2E2E2E",
    fg: "#FFFFFF",
    button_bg: "#4D4D4D",
    button_fg: "#FFFFFF",
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "claro",
            Theme::Dark => "escuro",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = CityError;

    /// Accepts `claro`/`light` and `escuro`/`dark`, in any case.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "claro" | "light" => Ok(Theme::Light),
            "escuro" | "dark" => Ok(Theme::Dark),
            _ => Err(CityError::ThemeNotFound(s.to_string())),
        }
    }
}

/// Holds the active theme of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeManager {
    current: Theme,
}

impl ThemeManager {
    pub fn new(theme: Theme) -> Self {
        ThemeManager { current: theme }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn palette(&self) -> Palette {
        self.current.palette()
    }

    /// Switches to the named theme; unknown names leave the theme unchanged.
    pub fn set_theme(&mut self, name: &str) -> Result<Theme> {
        self.current = name.parse()?;
        Ok(self.current)
    }

    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.current
    }

    /// Looks up a palette entry by key (`bg`, `fg`, `button_bg`, `button_fg`).
    pub fn get(&self, key: &str) -> Option<&'static str> {
        let p = self.palette();
        match key {
            "bg" => Some(p.bg),
            "fg" => Some(p.fg),
            "button_bg" => Some(p.button_bg),
            "button_fg" => Some(p.button_fg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_light_and_toggles() {
        let mut themes = ThemeManager::default();
        assert_eq!(themes.current(), Theme::Light);
        assert_eq!(themes.get("bg"), Some("#FFFFFF"));
        assert_eq!(themes.toggle(), Theme::Dark);
        assert_eq!(themes.get("button_bg"), Some("#4D4D4D"));
        assert_eq!(themes.get("border"), None);
    }

    #[test]
    fn unknown_theme_is_an_error_and_keeps_current() {
        let mut themes = ThemeManager::new(Theme::Dark);
        let err = themes.set_theme("sepia").unwrap_err();
        assert!(matches!(err, CityError::ThemeNotFound(ref name) if name == "sepia"));
        assert_eq!(themes.current(), Theme::Dark);

        assert_eq!(themes.set_theme("CLARO").unwrap(), Theme::Light);
    }
}
