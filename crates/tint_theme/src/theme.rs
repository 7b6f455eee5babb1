//! Themes and the light/dark catalog

use std::sync::Arc;

use crate::palette::Palette;
use crate::style::InterfaceStyle;

/// An immutable (interface style, palette) pair.
///
/// A theme is a cheap-to-clone handle. Two themes compare by *instance*,
/// not by structure: the coordinator broadcasts a change whenever the
/// resolved instance differs, even if the color values happen to coincide.
#[derive(Clone, Debug)]
pub struct Theme {
    inner: Arc<ThemeInner>,
}

#[derive(Debug)]
struct ThemeInner {
    style: InterfaceStyle,
    palette: Palette,
}

impl Theme {
    pub fn new(style: InterfaceStyle, palette: Palette) -> Self {
        Self {
            inner: Arc::new(ThemeInner { style, palette }),
        }
    }

    pub fn interface_style(&self) -> InterfaceStyle {
        self.inner.style
    }

    pub fn palette(&self) -> &Palette {
        &self.inner.palette
    }

    /// Instance identity. This is the coordinator's change-detection
    /// predicate; structural equality is deliberately not offered.
    pub fn ptr_eq(a: &Theme, b: &Theme) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

/// The light/dark theme pairing an app ships. Swapped as a unit at runtime;
/// there is no per-color patching.
#[derive(Clone, Debug)]
pub struct ThemeCatalog {
    name: String,
    light: Theme,
    dark: Theme,
}

impl ThemeCatalog {
    pub fn new(name: impl Into<String>, light: Theme, dark: Theme) -> Self {
        debug_assert_eq!(light.interface_style(), InterfaceStyle::Light);
        debug_assert_eq!(dark.interface_style(), InterfaceStyle::Dark);
        Self {
            name: name.into(),
            light,
            dark,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn theme_for(&self, style: InterfaceStyle) -> &Theme {
        match style {
            InterfaceStyle::Light => &self.light,
            InterfaceStyle::Dark => &self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::{standard_dark, standard_light};

    #[test]
    fn catalog_selects_theme_by_style() {
        let catalog = ThemeCatalog::new("test", standard_light(), standard_dark());
        assert_eq!(
            catalog.theme_for(InterfaceStyle::Light).interface_style(),
            InterfaceStyle::Light
        );
        assert_eq!(
            catalog.theme_for(InterfaceStyle::Dark).interface_style(),
            InterfaceStyle::Dark
        );
    }

    #[test]
    fn identity_is_per_instance() {
        let a = standard_light();
        let b = standard_light();
        assert!(Theme::ptr_eq(&a, &a.clone()));
        // Structurally identical, distinct instances.
        assert!(!Theme::ptr_eq(&a, &b));
    }
}
