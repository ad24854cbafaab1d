use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hours `[DAY_START_HOUR, DAY_END_HOUR)` resolve to the light theme in auto mode.
pub const DAY_START_HOUR: u32 = 6;
pub const DAY_END_HOUR: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// What the user asked for. `Auto` follows the local clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: Rgb,
    pub accent: Rgb,
    pub surface: Rgb,
    pub highlight: Rgb,
}

impl Theme {
    pub fn for_hour(hour: u32) -> Self {
        if (DAY_START_HOUR..DAY_END_HOUR).contains(&hour) {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn auto() -> Self {
        Self::for_hour(Local::now().hour())
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                text: Rgb(0x94, 0x94, 0x94),
                accent: Rgb(0x3B, 0xB2, 0xFF),
                surface: Rgb(0xF6, 0xF6, 0xF6),
                highlight: Rgb(0xFF, 0xFF, 0xFF),
            },
            Theme::Dark => Palette {
                text: Rgb(0xF6, 0xF6, 0xF6),
                accent: Rgb(0x20, 0x4E, 0x6B),
                surface: Rgb(0x27, 0x2A, 0x2F),
                highlight: Rgb(0x3B, 0xB2, 0xFF),
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

impl ThemePreference {
    pub fn resolve(self) -> Theme {
        self.resolve_at(Local::now().hour())
    }

    pub fn resolve_at(self, hour: u32) -> Theme {
        match self {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::Auto => Theme::for_hour(hour),
        }
    }
}

impl From<Theme> for ThemePreference {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => ThemePreference::Light,
            Theme::Dark => ThemePreference::Dark,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemePreference::Light => f.write_str("light"),
            ThemePreference::Dark => f.write_str("dark"),
            ThemePreference::Auto => f.write_str("auto"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_follows_daylight_hours() {
        assert_eq!(Theme::for_hour(0), Theme::Dark);
        assert_eq!(Theme::for_hour(5), Theme::Dark);
        assert_eq!(Theme::for_hour(6), Theme::Light);
        assert_eq!(Theme::for_hour(17), Theme::Light);
        assert_eq!(Theme::for_hour(18), Theme::Dark);
        assert_eq!(Theme::for_hour(23), Theme::Dark);
    }

    #[test]
    fn test_explicit_preference_wins_over_clock() {
        assert_eq!(ThemePreference::Dark.resolve_at(12), Theme::Dark);
        assert_eq!(ThemePreference::Light.resolve_at(2), Theme::Light);
        assert_eq!(ThemePreference::Auto.resolve_at(2), Theme::Dark);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_is_dark() {
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
        assert!(Theme::for_hour(3).is_dark());
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
        assert_eq!(Theme::Light.palette().accent, Rgb(0x3B, 0xB2, 0xFF));
    }
}
