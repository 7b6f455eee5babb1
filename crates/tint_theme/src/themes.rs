//! Built-in themes derived from the Catppuccin design system
//!
//! Latte drives the standard light theme and Mocha the standard dark theme.
//! Apps usually [`configure`](crate::ThemeManager::configure) their own
//! catalog on top of (or instead of) these.

use tint_core::Color;

use crate::palette::Palette;
use crate::style::InterfaceStyle;
use crate::theme::{Theme, ThemeCatalog};

/// Catppuccin Latte palette (light)
pub mod latte {
    use tint_core::Color;

    pub const BLUE: Color = Color::rgb(30.0 / 255.0, 102.0 / 255.0, 245.0 / 255.0);
    pub const TEXT: Color = Color::rgb(76.0 / 255.0, 79.0 / 255.0, 105.0 / 255.0);
    pub const SUBTEXT1: Color = Color::rgb(92.0 / 255.0, 95.0 / 255.0, 119.0 / 255.0);
    pub const SURFACE0: Color = Color::rgb(204.0 / 255.0, 208.0 / 255.0, 218.0 / 255.0);
    pub const BASE: Color = Color::rgb(239.0 / 255.0, 241.0 / 255.0, 245.0 / 255.0);
    pub const MANTLE: Color = Color::rgb(230.0 / 255.0, 233.0 / 255.0, 239.0 / 255.0);
}

/// Catppuccin Mocha palette (dark)
pub mod mocha {
    use tint_core::Color;

    pub const BLUE: Color = Color::rgb(137.0 / 255.0, 180.0 / 255.0, 250.0 / 255.0);
    pub const TEXT: Color = Color::rgb(205.0 / 255.0, 214.0 / 255.0, 244.0 / 255.0);
    pub const SUBTEXT1: Color = Color::rgb(186.0 / 255.0, 194.0 / 255.0, 222.0 / 255.0);
    pub const SURFACE0: Color = Color::rgb(49.0 / 255.0, 50.0 / 255.0, 68.0 / 255.0);
    pub const SURFACE1: Color = Color::rgb(69.0 / 255.0, 71.0 / 255.0, 90.0 / 255.0);
    pub const BASE: Color = Color::rgb(30.0 / 255.0, 30.0 / 255.0, 46.0 / 255.0);
}

/// Standard light theme (Catppuccin Latte). Each call builds a fresh
/// instance, so a reconfigured catalog always triggers a change broadcast.
pub fn standard_light() -> Theme {
    Theme::new(
        InterfaceStyle::Light,
        Palette::from_required(
            latte::BASE,
            Color::WHITE,
            latte::TEXT,
            latte::SUBTEXT1,
            latte::BLUE,
            latte::SURFACE0,
        ),
    )
}

/// Standard dark theme (Catppuccin Mocha).
pub fn standard_dark() -> Theme {
    Theme::new(
        InterfaceStyle::Dark,
        Palette::from_required(
            mocha::BASE,
            mocha::SURFACE0,
            mocha::TEXT,
            mocha::SUBTEXT1,
            mocha::BLUE,
            mocha::SURFACE1,
        ),
    )
}

/// The catalog installed by [`ThemeManager::init_default`](crate::ThemeManager::init_default).
pub fn default_catalog() -> ThemeCatalog {
    ThemeCatalog::new("Tint", standard_light(), standard_dark())
}
