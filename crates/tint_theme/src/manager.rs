//! Global theme coordinator
//!
//! `ThemeManager` owns all theme state: the user selection, the system's
//! ambient interface style, the active catalog, the resolved theme, a weak
//! registry of presentation surfaces, and the typed event subscribers. It
//! is the only component that mutates any of this; everything else reads
//! resolved state or calls the entry points below.
//!
//! The manager is confined to the thread that created it (the UI thread).
//! Mutation entry points assert that confinement instead of locking for
//! concurrent callers; the interior `RwLock`s exist to satisfy `Sync` for
//! the process-wide singleton and are never contended by contract.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, RwLock, Weak};
use std::thread::{self, ThreadId};

use tracing::debug;

use crate::events::{SubscriptionId, ThemeEvent, ThemeEventHandler};
use crate::resolve::resolve_interface_style;
use crate::store::{FilePreferenceStore, PreferenceStore};
use crate::style::{InterfaceStyle, ThemeSelection};
use crate::surface::ThemeSurface;
use crate::theme::{Theme, ThemeCatalog};
use crate::themes::default_catalog;

/// Global theme manager instance
static THEME_MANAGER: OnceLock<ThemeManager> = OnceLock::new();

/// Central coordinator keeping the app-wide theme in sync with the user
/// preference and the system appearance.
pub struct ThemeManager {
    /// Thread the manager was created on; all mutation happens there.
    owner: ThreadId,
    store: Box<dyn PreferenceStore>,
    catalog: RwLock<ThemeCatalog>,
    selection: RwLock<ThemeSelection>,
    system_style: RwLock<InterfaceStyle>,
    current: RwLock<Theme>,
    surfaces: RwLock<Vec<Weak<dyn ThemeSurface>>>,
    subscribers: RwLock<Vec<(SubscriptionId, ThemeEventHandler)>>,
    next_subscription: AtomicU64,
}

impl ThemeManager {
    /// Create a standalone manager. Tests and embedders construct isolated
    /// instances this way; apps normally go through [`init`](Self::init).
    ///
    /// Loads the persisted selection (absence means `FollowSystem`) and
    /// resolves the initial theme from it and `system_style`.
    pub fn new(
        catalog: ThemeCatalog,
        store: Box<dyn PreferenceStore>,
        system_style: InterfaceStyle,
    ) -> Self {
        let selection = store.load_selection().unwrap_or(ThemeSelection::FollowSystem);
        let current = catalog
            .theme_for(resolve_interface_style(selection, system_style))
            .clone();
        Self {
            owner: thread::current().id(),
            store,
            catalog: RwLock::new(catalog),
            selection: RwLock::new(selection),
            system_style: RwLock::new(system_style),
            current: RwLock::new(current),
            surfaces: RwLock::new(Vec::new()),
            subscribers: RwLock::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
        }
    }

    /// Initialize the global manager (call once at app startup; the first
    /// call wins).
    pub fn init(
        catalog: ThemeCatalog,
        store: Box<dyn PreferenceStore>,
        system_style: InterfaceStyle,
    ) {
        let _ = THEME_MANAGER.set(Self::new(catalog, store, system_style));
    }

    /// Initialize the global manager with the built-in catalog and a TOML
    /// preference file at `prefs_path`.
    pub fn init_default(prefs_path: impl Into<PathBuf>, system_style: InterfaceStyle) {
        Self::init(
            default_catalog(),
            Box::new(FilePreferenceStore::new(prefs_path)),
            system_style,
        );
    }

    /// Get the global manager instance
    pub fn get() -> &'static ThemeManager {
        THEME_MANAGER
            .get()
            .expect("ThemeManager not initialized. Call ThemeManager::init() at app startup.")
    }

    /// Try to get the global manager (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeManager> {
        THEME_MANAGER.get()
    }

    // ========== Reads ==========

    pub fn selection(&self) -> ThemeSelection {
        *self.selection.read().unwrap()
    }

    pub fn system_interface_style(&self) -> InterfaceStyle {
        *self.system_style.read().unwrap()
    }

    /// The currently resolved theme. Always equals
    /// `catalog.theme_for(resolve(selection, system_style))`.
    pub fn current_theme(&self) -> Theme {
        self.current.read().unwrap().clone()
    }

    /// Catalog lookup for a particular style; no state change.
    pub fn theme_for(&self, style: InterfaceStyle) -> Theme {
        self.catalog.read().unwrap().theme_for(style).clone()
    }

    /// The style `current_theme` targets.
    pub fn effective_interface_style(&self) -> InterfaceStyle {
        resolve_interface_style(self.selection(), self.system_interface_style())
    }

    /// Number of live registered surfaces. Pure read: dead entries are
    /// skipped here and pruned on the next broadcast.
    pub fn surface_count(&self) -> usize {
        self.surfaces
            .read()
            .unwrap()
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    // ========== Mutation entry points ==========

    /// Swap the catalog (e.g. inject brand colors) and immediately
    /// re-resolve and propagate. Always re-applies: catalog identity
    /// changed even if the colors did not.
    pub fn configure(&self, catalog: ThemeCatalog) {
        self.assert_confined();
        debug!(catalog = catalog.name(), "theme catalog replaced");
        *self.catalog.write().unwrap() = catalog;
        self.resolve_and_apply();
    }

    /// Register a surface for automatic interface-style updates.
    ///
    /// Holds the surface weakly and applies the current override to it right
    /// away. Idempotent: registering the same surface twice keeps one entry.
    pub fn register(&self, surface: &Arc<dyn ThemeSurface>) {
        self.assert_confined();
        let weak = Arc::downgrade(surface);
        {
            let mut surfaces = self.surfaces.write().unwrap();
            if !surfaces.iter().any(|existing| existing.ptr_eq(&weak)) {
                surfaces.push(weak);
            }
        }
        surface.apply_interface_style(self.style_override());
    }

    /// Remove a surface before it is dropped. Optional; dropped surfaces
    /// are pruned automatically.
    pub fn unregister(&self, surface: &Arc<dyn ThemeSurface>) {
        self.assert_confined();
        let weak = Arc::downgrade(surface);
        self.surfaces
            .write()
            .unwrap()
            .retain(|existing| !existing.ptr_eq(&weak));
    }

    /// Entry point for an explicit user choice.
    ///
    /// No-op when the selection is unchanged. Otherwise persists the new
    /// selection synchronously, broadcasts `SelectionChanged`, and
    /// re-resolves (broadcasting `ThemeChanged` only if the resolved theme
    /// instance differs).
    pub fn select_theme(&self, selection: ThemeSelection) {
        self.assert_confined();
        {
            let mut current = self.selection.write().unwrap();
            if *current == selection {
                return;
            }
            debug!(from = ?*current, to = ?selection, "theme selection changed");
            *current = selection;
        }
        self.store.store_selection(selection);
        self.broadcast(&ThemeEvent::SelectionChanged(selection));
        self.resolve_and_apply();
    }

    /// Entry point for a host-environment appearance change.
    ///
    /// No-op when the style is unchanged. The new style is always recorded,
    /// but it only becomes visible when the selection is `FollowSystem`;
    /// an explicit user choice suppresses ambient changes.
    pub fn update_system_interface_style_if_needed(&self, style: InterfaceStyle) {
        self.assert_confined();
        {
            let mut system = self.system_style.write().unwrap();
            if *system == style {
                return;
            }
            debug!(from = ?*system, to = ?style, "system interface style changed");
            *system = style;
        }
        if self.selection() == ThemeSelection::FollowSystem {
            self.resolve_and_apply();
        }
    }

    // ========== Events ==========

    /// Register an event callback. Subscription is a mutation and must
    /// happen on the owning thread. Delivery is synchronous on that same
    /// thread; the subscriber list is snapshotted before delivery, so a
    /// callback may subscribe, unsubscribe, or re-enter the manager.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&ThemeEvent) + Send + Sync + 'static,
    {
        self.assert_confined();
        let id = SubscriptionId::new(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.subscribers
            .write()
            .unwrap()
            .push((id, Arc::new(handler)));
        id
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.assert_confined();
        self.subscribers
            .write()
            .unwrap()
            .retain(|(existing, _)| *existing != id);
    }

    // ========== Internals ==========

    /// The override surfaces should run under: `None` defers to the ambient
    /// environment, `Some` forces the explicitly selected style.
    fn style_override(&self) -> Option<InterfaceStyle> {
        match self.selection() {
            ThemeSelection::FollowSystem => None,
            ThemeSelection::Light | ThemeSelection::Dark => {
                Some(self.effective_interface_style())
            }
        }
    }

    /// Resolve selection + system style to a theme, re-apply the style
    /// override to every live surface, and broadcast if the resolved theme
    /// instance changed.
    ///
    /// Surfaces are re-applied even when the instance is unchanged: a
    /// selection change can flip a surface between "defer to ambient" and
    /// "forced" without changing which theme is resolved.
    fn resolve_and_apply(&self) {
        let target = resolve_interface_style(self.selection(), self.system_interface_style());
        let resolved = self.theme_for(target);
        let changed = {
            let mut current = self.current.write().unwrap();
            let changed = !Theme::ptr_eq(&current, &resolved);
            *current = resolved.clone();
            changed
        };

        let override_style = self.style_override();
        for surface in self.live_surfaces() {
            surface.apply_interface_style(override_style);
        }
        if changed {
            self.broadcast(&ThemeEvent::ThemeChanged(resolved));
        }
    }

    /// Snapshot live surfaces, pruning entries whose surface was dropped.
    fn live_surfaces(&self) -> Vec<Arc<dyn ThemeSurface>> {
        let mut surfaces = self.surfaces.write().unwrap();
        surfaces.retain(|weak| weak.strong_count() > 0);
        surfaces.iter().filter_map(Weak::upgrade).collect()
    }

    fn broadcast(&self, event: &ThemeEvent) {
        // Snapshot so handlers can mutate the subscriber list mid-delivery.
        let handlers: Vec<ThemeEventHandler> = self
            .subscribers
            .read()
            .unwrap()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in &handlers {
            handler(event);
        }
    }

    fn assert_confined(&self) {
        assert!(
            thread::current().id() == self.owner,
            "ThemeManager mutation APIs must be invoked on the thread that created it"
        );
    }
}
