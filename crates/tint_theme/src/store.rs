//! Selection persistence
//!
//! The coordinator treats persistence as a thin collaborator: a single
//! integer (the stable [`ThemeSelection::raw`] ordinal) in a key-value
//! store. Failures are contained here; callers never see them.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::style::ThemeSelection;

/// Durable storage for the user's theme selection.
pub trait PreferenceStore: Send + Sync {
    /// Previously persisted selection, or `None` if never stored (the
    /// coordinator treats absence as `FollowSystem`).
    fn load_selection(&self) -> Option<ThemeSelection>;

    /// Synchronous best-effort write. Failure is not surfaced; a store may
    /// degrade to in-memory-only behavior for the rest of the process.
    fn store_selection(&self, selection: ThemeSelection);
}

#[derive(Debug, Deserialize, Serialize)]
struct PreferenceFile {
    selection: i64,
}

/// TOML-file-backed store (`selection = <ordinal>`).
///
/// After the first failed write it stops touching the disk and logs once;
/// losing the preference is low-severity, a retry loop is not.
pub struct FilePreferenceStore {
    path: PathBuf,
    write_failed: AtomicBool,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_failed: AtomicBool::new(false),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read(&self) -> anyhow::Result<PreferenceFile> {
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing {}", self.path.display()))
    }

    fn write(&self, selection: ThemeSelection) -> anyhow::Result<()> {
        let body = toml::to_string(&PreferenceFile {
            selection: selection.raw(),
        })
        .context("serializing theme preference")?;
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        std::fs::write(&self.path, body)
            .with_context(|| format!("writing {}", self.path.display()))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load_selection(&self) -> Option<ThemeSelection> {
        match self.read() {
            Ok(prefs) => ThemeSelection::from_raw(prefs.selection),
            Err(err) => {
                // A missing file is the normal first-run case.
                tracing::debug!("no stored theme selection: {err:#}");
                None
            }
        }
    }

    fn store_selection(&self, selection: ThemeSelection) {
        if self.write_failed.load(Ordering::Relaxed) {
            return;
        }
        if let Err(err) = self.write(selection) {
            tracing::warn!("failed to persist theme selection, keeping it in memory only: {err:#}");
            self.write_failed.store(true, Ordering::Relaxed);
        }
    }
}

/// In-process store for tests and embedders that manage persistence
/// themselves.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    selection: Mutex<Option<ThemeSelection>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load_selection(&self) -> Option<ThemeSelection> {
        *self.selection.lock().unwrap()
    }

    fn store_selection(&self, selection: ThemeSelection) {
        *self.selection.lock().unwrap() = Some(selection);
    }
}
