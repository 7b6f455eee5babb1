//! Palettes: immutable token-to-color maps with fallback chaining
//!
//! A palette is a cheap-to-clone handle. Deriving a palette with
//! [`Palette::applying_overrides`] keeps the parent alive through the
//! handle, so layered customization never dangles.

use rustc_hash::FxHashMap;
use std::sync::Arc;

use tint_core::Color;

use crate::error::ThemeError;
use crate::token::ColorToken;

/// Returned by [`Palette::color`] when the fallback chain is exhausted, so
/// rendering degrades instead of panicking in release builds.
const MISSING_TOKEN_PLACEHOLDER: Color = Color::TRANSPARENT;

/// Immutable mapping from [`ColorToken`] to [`Color`], with an optional
/// fallback palette consulted for tokens the own map does not define.
#[derive(Clone, Debug)]
pub struct Palette {
    inner: Arc<PaletteInner>,
}

#[derive(Debug)]
struct PaletteInner {
    colors: FxHashMap<ColorToken, Color>,
    fallback: Option<Palette>,
}

impl Palette {
    /// Create a root palette. A root palette has no fallback, so it must
    /// populate every token in [`ColorToken::REQUIRED`]; a gap is a
    /// programming error (asserted in development, logged in release).
    pub fn new(colors: FxHashMap<ColorToken, Color>) -> Self {
        let missing: Vec<String> = ColorToken::REQUIRED
            .iter()
            .filter(|token| !colors.contains_key(token))
            .map(|token| token.as_str().to_owned())
            .collect();
        if !missing.is_empty() {
            tracing::error!(?missing, "root palette is missing required tokens");
            debug_assert!(
                false,
                "root palette missing required tokens: {}",
                missing.join(", ")
            );
        }
        Self {
            inner: Arc::new(PaletteInner {
                colors,
                fallback: None,
            }),
        }
    }

    /// Create a root palette from string-named entries. Convenient for app
    /// code that mints its own tokens.
    pub fn from_named<S: Into<String>>(colors: impl IntoIterator<Item = (S, Color)>) -> Self {
        Self::new(
            colors
                .into_iter()
                .map(|(name, color)| (ColorToken::new(name), color))
                .collect(),
        )
    }

    /// Create a root palette from exactly the required tokens.
    pub fn from_required(
        background: Color,
        surface: Color,
        primary_text: Color,
        secondary_text: Color,
        accent: Color,
        divider: Color,
    ) -> Self {
        let mut colors = FxHashMap::default();
        colors.insert(ColorToken::BACKGROUND, background);
        colors.insert(ColorToken::SURFACE, surface);
        colors.insert(ColorToken::PRIMARY_TEXT, primary_text);
        colors.insert(ColorToken::SECONDARY_TEXT, secondary_text);
        colors.insert(ColorToken::ACCENT, accent);
        colors.insert(ColorToken::DIVIDER, divider);
        Self::new(colors)
    }

    /// Derive a palette whose own map is exactly `overrides` and whose
    /// fallback is `self`. `self` is not mutated.
    pub fn applying_overrides(&self, overrides: FxHashMap<ColorToken, Color>) -> Palette {
        Palette {
            inner: Arc::new(PaletteInner {
                colors: overrides,
                fallback: Some(self.clone()),
            }),
        }
    }

    /// [`applying_overrides`](Self::applying_overrides) with string-named entries.
    pub fn applying_overrides_named<S: Into<String>>(
        &self,
        overrides: impl IntoIterator<Item = (S, Color)>,
    ) -> Palette {
        self.applying_overrides(
            overrides
                .into_iter()
                .map(|(name, color)| (ColorToken::new(name), color))
                .collect(),
        )
    }

    /// Look up a token: own map first, then the fallback chain.
    pub fn try_color(&self, token: &ColorToken) -> Result<Color, ThemeError> {
        let mut palette = self;
        loop {
            if let Some(color) = palette.inner.colors.get(token) {
                return Ok(*color);
            }
            match &palette.inner.fallback {
                Some(fallback) => palette = fallback,
                None => {
                    return Err(ThemeError::MissingToken {
                        token: token.clone(),
                    })
                }
            }
        }
    }

    /// Look up a token, degrading to a transparent placeholder if the chain
    /// is exhausted. An exhausted chain is a contract violation: asserted in
    /// development builds, logged in release builds.
    pub fn color(&self, token: &ColorToken) -> Color {
        match self.try_color(token) {
            Ok(color) => color,
            Err(err) => {
                tracing::error!("palette lookup failed: {err}");
                debug_assert!(false, "{err}");
                MISSING_TOKEN_PLACEHOLDER
            }
        }
    }

    pub fn background(&self) -> Color {
        self.color(&ColorToken::BACKGROUND)
    }

    pub fn surface(&self) -> Color {
        self.color(&ColorToken::SURFACE)
    }

    pub fn primary_text(&self) -> Color {
        self.color(&ColorToken::PRIMARY_TEXT)
    }

    pub fn secondary_text(&self) -> Color {
        self.color(&ColorToken::SECONDARY_TEXT)
    }

    pub fn accent(&self) -> Color {
        self.color(&ColorToken::ACCENT)
    }

    pub fn divider(&self) -> Color {
        self.color(&ColorToken::DIVIDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Palette {
        Palette::from_required(
            Color::from_hex(0xEFF1F5),
            Color::WHITE,
            Color::from_hex(0x4C4F69),
            Color::from_hex(0x5C5F77),
            Color::from_hex(0x1E66F5),
            Color::from_hex(0xCCD0DA),
        )
    }

    #[test]
    fn own_map_wins_over_fallback() {
        let derived = base().applying_overrides_named([("accent", Color::BLACK)]);
        assert_eq!(derived.accent(), Color::BLACK);
    }

    #[test]
    fn unresolved_tokens_fall_back_to_parent() {
        let parent = base();
        let derived = parent.applying_overrides_named([("accent", Color::BLACK)]);
        assert_eq!(derived.background(), parent.background());
        assert_eq!(derived.divider(), parent.divider());
    }

    #[test]
    fn custom_tokens_chain_through_layers() {
        let badge = ColorToken::new("badge");
        let layer1 = base().applying_overrides_named([("badge", Color::from_hex(0xD20F39))]);
        let layer2 = layer1.applying_overrides_named([("accent", Color::WHITE)]);
        assert_eq!(layer2.try_color(&badge).unwrap(), Color::from_hex(0xD20F39));
    }

    #[test]
    fn from_named_builds_a_root_palette() {
        let palette = Palette::from_named([
            ("background", Color::WHITE),
            ("surface", Color::WHITE),
            ("primary-text", Color::BLACK),
            ("secondary-text", Color::gray(0.4)),
            ("accent", Color::from_hex(0x3584E4)),
            ("divider", Color::gray(0.8)),
            ("app.badge", Color::from_hex(0xE01B24)),
        ]);
        assert_eq!(palette.accent(), Color::from_hex(0x3584E4));
        assert_eq!(
            palette.try_color(&ColorToken::new("app.badge")).unwrap(),
            Color::from_hex(0xE01B24)
        );
    }

    #[test]
    #[should_panic(expected = "root palette missing required tokens")]
    fn root_palette_with_gaps_is_rejected_in_debug_builds() {
        Palette::from_named([("accent", Color::BLACK)]);
    }

    #[test]
    fn exhausted_chain_reports_missing_token() {
        let missing = ColorToken::new("does-not-exist");
        let err = base().try_color(&missing).unwrap_err();
        assert!(matches!(err, ThemeError::MissingToken { .. }));
    }

    #[test]
    fn derived_palette_outlives_its_construction_scope() {
        let derived = {
            let parent = base();
            parent.applying_overrides_named([("accent", Color::BLACK)])
        };
        // Parent handle dropped; the chain keeps it alive.
        assert_eq!(derived.background(), Color::from_hex(0xEFF1F5));
    }
}
