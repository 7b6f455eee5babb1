//! Typed theme events
//!
//! One variant per broadcast channel, delivered synchronously to callbacks
//! registered with [`ThemeManager::subscribe`](crate::ThemeManager::subscribe).

use std::sync::Arc;

use crate::style::ThemeSelection;
use crate::theme::Theme;

/// Broadcast by the theme coordinator.
#[derive(Clone, Debug)]
pub enum ThemeEvent {
    /// The resolved theme instance changed. Carries the new theme.
    ThemeChanged(Theme),
    /// The user's selection changed, independent of whether resolution did.
    SelectionChanged(ThemeSelection),
}

/// Handle returned by `subscribe`, used to remove the callback again.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Event handler function type
pub type ThemeEventHandler = Arc<dyn Fn(&ThemeEvent) + Send + Sync>;
