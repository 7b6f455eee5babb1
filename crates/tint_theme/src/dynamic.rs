//! Dynamic colors that re-resolve on every read
//!
//! A [`DynamicColor`] is a static-looking color reference that queries the
//! coordinator's current theme each time it is resolved. Widgets hold one
//! per token instead of a literal [`Color`] and repaint correctly after any
//! theme change without their own subscription.
//!
//! Resolution is side-effect-free and allocates nothing beyond the returned
//! `Color`, so it is safe to call on every render pass.

use tint_core::Color;

use crate::manager::ThemeManager;
use crate::style::InterfaceStyle;
use crate::token::ColorToken;

/// A color reference resolved against the coordinator at read time.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct DynamicColor {
    token: ColorToken,
}

impl DynamicColor {
    pub const BACKGROUND: DynamicColor = DynamicColor::new(ColorToken::BACKGROUND);
    pub const SURFACE: DynamicColor = DynamicColor::new(ColorToken::SURFACE);
    pub const PRIMARY_TEXT: DynamicColor = DynamicColor::new(ColorToken::PRIMARY_TEXT);
    pub const SECONDARY_TEXT: DynamicColor = DynamicColor::new(ColorToken::SECONDARY_TEXT);
    pub const ACCENT: DynamicColor = DynamicColor::new(ColorToken::ACCENT);
    pub const DIVIDER: DynamicColor = DynamicColor::new(ColorToken::DIVIDER);

    pub const fn new(token: ColorToken) -> Self {
        Self { token }
    }

    /// Reference an app-defined token by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(ColorToken::new(name))
    }

    pub fn token(&self) -> &ColorToken {
        &self.token
    }

    /// Resolve under the manager's currently resolved theme.
    pub fn resolve(&self, manager: &ThemeManager) -> Color {
        manager.current_theme().palette().color(&self.token)
    }

    /// Resolve under an explicitly forced style, for render contexts whose
    /// ancestor surface overrides the global resolution.
    pub fn resolve_in(&self, manager: &ThemeManager, style: InterfaceStyle) -> Color {
        manager.theme_for(style).palette().color(&self.token)
    }

    /// Resolve against the process-wide manager installed by
    /// [`ThemeManager::init`].
    pub fn resolve_global(&self) -> Color {
        self.resolve(ThemeManager::get())
    }
}
