//! Presentation surfaces
//!
//! A surface is a top-level presentation root (a window or similar) whose
//! interface style can be forced or left to follow the ambient environment.
//! The [`ThemeManager`](crate::ThemeManager) holds surfaces weakly: dropping
//! a surface silently removes it from future broadcasts.

use crate::style::InterfaceStyle;

/// Implemented by presentation roots that want their sub-tree's interface
/// style driven by the theme coordinator.
pub trait ThemeSurface: Send + Sync {
    /// Apply a style override to this surface's sub-tree.
    ///
    /// `None` means "defer to the ambient environment": nested content keeps
    /// reacting to live system appearance changes without coordinator
    /// involvement. `Some(style)` forces exactly that style.
    ///
    /// Must be idempotent; the coordinator may re-apply the current value.
    fn apply_interface_style(&self, override_style: Option<InterfaceStyle>);
}
