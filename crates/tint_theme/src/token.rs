//! Color tokens
//!
//! Tokens are opaque named slots that UI code references instead of literal
//! colors. Apps may mint their own tokens; a small required subset must be
//! present in every root palette.

use std::borrow::Cow;
use std::fmt;

/// String-keyed color token. Equality and hashing go by the underlying name.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct ColorToken(Cow<'static, str>);

impl ColorToken {
    pub const BACKGROUND: ColorToken = ColorToken::from_static("background");
    pub const SURFACE: ColorToken = ColorToken::from_static("surface");
    pub const PRIMARY_TEXT: ColorToken = ColorToken::from_static("primary-text");
    pub const SECONDARY_TEXT: ColorToken = ColorToken::from_static("secondary-text");
    pub const ACCENT: ColorToken = ColorToken::from_static("accent");
    pub const DIVIDER: ColorToken = ColorToken::from_static("divider");

    /// Tokens every root palette must populate.
    pub const REQUIRED: [ColorToken; 6] = [
        Self::BACKGROUND,
        Self::SURFACE,
        Self::PRIMARY_TEXT,
        Self::SECONDARY_TEXT,
        Self::ACCENT,
        Self::DIVIDER,
    ];

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
