use std::fmt;
use std::str::FromStr;

/// Browser-storage key holding the persisted theme literal.
pub const STORAGE_KEY: &str = "color-theme";

/// The two-valued global presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The literal written to persisted storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Fallback when nothing is persisted: follow the OS color-scheme signal.
    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_literals_round_trip() {
        assert_eq!("dark".parse(), Ok(Theme::Dark));
        assert_eq!("light".parse(), Ok(Theme::Light));
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.as_str().parse(), Ok(theme));
        }
    }

    #[test]
    fn anything_else_is_an_error() {
        assert_eq!(Theme::from_str(""), Err(()));
        assert_eq!(Theme::from_str("Dark"), Err(()));
        assert_eq!(Theme::from_str("auto"), Err(()));
    }

    #[test]
    fn double_toggle_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn os_preference_fallback() {
        assert_eq!(Theme::from_preference(true), Theme::Dark);
        assert_eq!(Theme::from_preference(false), Theme::Light);
    }
}
