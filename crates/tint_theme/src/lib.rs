//! Tint Theme Coordination
//!
//! A runtime theme-coordination layer for GUI apps: resolves the effective
//! theme from the user's explicit selection and the system's ambient
//! appearance, fans the result out to every live presentation surface, and
//! persists the selection across restarts.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tint_theme::{DynamicColor, InterfaceStyle, ThemeManager, ThemeSelection};
//!
//! // At app startup, once the host reports its appearance:
//! ThemeManager::init_default("prefs/theme.toml", InterfaceStyle::Light);
//!
//! let manager = ThemeManager::get();
//! manager.register(&window);                 // window: Arc<dyn ThemeSurface>
//! manager.select_theme(ThemeSelection::Dark); // user taps "Dark"
//!
//! // In widgets, resolve colors per render pass:
//! let accent = DynamicColor::ACCENT.resolve(manager);
//! ```
//!
//! # Architecture
//!
//! - [`ThemeManager`]: the coordinator. Owns selection, system style,
//!   catalog, resolved theme, the weak surface registry, and event
//!   subscribers. Confined to the thread that created it.
//! - [`Palette`] / [`Theme`] / [`ThemeCatalog`]: immutable color data.
//!   Palettes chain fallbacks; themes compare by instance; the catalog is
//!   swapped as a unit.
//! - [`resolve_interface_style`]: the pure selection + system -> style rule.
//! - [`DynamicColor`]: per-render token resolution so widgets need no
//!   subscriptions of their own.
//! - [`PreferenceStore`]: pluggable persistence of the selection ordinal.
//!
//! # Events
//!
//! [`ThemeEvent::SelectionChanged`] fires on every explicit selection
//! change; [`ThemeEvent::ThemeChanged`] fires only when the resolved theme
//! *instance* changes. Delivery is synchronous and completes before the
//! triggering call returns.

pub mod dynamic;
pub mod error;
pub mod events;
pub mod manager;
pub mod palette;
pub mod resolve;
pub mod store;
pub mod style;
pub mod surface;
pub mod theme;
pub mod themes;
pub mod token;

// Re-export commonly used types
pub use dynamic::DynamicColor;
pub use error::ThemeError;
pub use events::{SubscriptionId, ThemeEvent};
pub use manager::ThemeManager;
pub use palette::Palette;
pub use resolve::resolve_interface_style;
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use style::{InterfaceStyle, ThemeSelection};
pub use surface::ThemeSurface;
pub use theme::{Theme, ThemeCatalog};
pub use themes::{default_catalog, standard_dark, standard_light};
pub use token::ColorToken;
