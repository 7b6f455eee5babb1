//! Interface styles and user selection

/// The concrete appearance a resolved theme targets.
///
/// A resolved style is always terminal: there is no "unspecified" variant.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum InterfaceStyle {
    Light,
    Dark,
}

impl InterfaceStyle {
    /// The opposite style.
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// How the effective theme is chosen within the app.
///
/// Raw values are persisted; keep them stable.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ThemeSelection {
    /// Track whatever the host environment reports.
    FollowSystem,
    /// Always light, regardless of the system appearance.
    Light,
    /// Always dark, regardless of the system appearance.
    Dark,
}

impl ThemeSelection {
    /// Stable ordinal used by the preference store. Never renumber.
    pub const fn raw(self) -> i64 {
        match self {
            Self::FollowSystem => 0,
            Self::Light => 1,
            Self::Dark => 2,
        }
    }

    /// Inverse of [`raw`](Self::raw). Unknown ordinals map to `None`.
    pub const fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Self::FollowSystem),
            1 => Some(Self::Light),
            2 => Some(Self::Dark),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_ordinals_are_stable() {
        assert_eq!(ThemeSelection::FollowSystem.raw(), 0);
        assert_eq!(ThemeSelection::Light.raw(), 1);
        assert_eq!(ThemeSelection::Dark.raw(), 2);
    }

    #[test]
    fn from_raw_round_trips() {
        for sel in [
            ThemeSelection::FollowSystem,
            ThemeSelection::Light,
            ThemeSelection::Dark,
        ] {
            assert_eq!(ThemeSelection::from_raw(sel.raw()), Some(sel));
        }
        assert_eq!(ThemeSelection::from_raw(3), None);
        assert_eq!(ThemeSelection::from_raw(-1), None);
    }

    #[test]
    fn toggle_flips_style() {
        assert_eq!(InterfaceStyle::Light.toggle(), InterfaceStyle::Dark);
        assert_eq!(InterfaceStyle::Dark.toggle(), InterfaceStyle::Light);
    }
}
