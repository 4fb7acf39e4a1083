//! # Hot Reload Module
//!
//! Rebuilds the route table when the manifest file changes, without
//! interrupting lookups against the table already in service.
//!
//! ## Reload Process
//!
//! 1. **Detection** - the filesystem watcher reports a modify or create event
//! 2. **Parse** - the manifest is loaded and resolved
//! 3. **Build** - a fresh table is built and validated for overlaps
//! 4. **Swap** - only a valid table replaces the live one
//!
//! If any step fails the error is logged and the previous table stays live,
//! so saving a half-edited manifest never takes routes down.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dynamic_version_url::hot_reload::{watch_manifest, LiveRoutes};
//! use dynamic_version_url::runtime_config::VersionConfig;
//! use std::sync::Arc;
//!
//! let live = Arc::new(LiveRoutes::load("routes.yaml", VersionConfig::default())?);
//! let _watcher = watch_manifest("routes.yaml", Arc::clone(&live))?;
//!
//! let table = live.current();
//! println!("{} registrations", table.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::builder::build_router;
use crate::error::Error;
use crate::manifest::{load_manifest, Manifest};
use crate::router::Router;
use crate::runtime_config::VersionConfig;
use arc_swap::ArcSwap;
use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};

/// A route table that can be replaced while readers hold the previous one.
pub struct LiveRoutes {
    table: ArcSwap<Router>,
    config: VersionConfig,
    /// Serializes rebuilds so two reloads never race on the swap
    rebuild_lock: Mutex<()>,
}

impl LiveRoutes {
    /// Wrap an already built table.
    #[must_use]
    pub fn new(router: Router, config: VersionConfig) -> Self {
        Self {
            table: ArcSwap::from_pointee(router),
            config,
            rebuild_lock: Mutex::new(()),
        }
    }

    /// Build the initial table from a manifest file.
    ///
    /// # Errors
    ///
    /// Any load or build failure; there is no previous table to keep.
    pub fn load(path: impl AsRef<Path>, config: VersionConfig) -> Result<Self, Error> {
        let manifest = load_manifest(path.as_ref())?;
        let router = build_router(&manifest, &config)?;
        Ok(Self::new(router, config))
    }

    /// The table currently in service.
    #[must_use]
    pub fn current(&self) -> Arc<Router> {
        self.table.load_full()
    }

    /// Build a table from `manifest` and make it live if it is valid.
    ///
    /// # Errors
    ///
    /// The build failure; the live table is left untouched.
    pub fn rebuild(&self, manifest: &Manifest) -> Result<Arc<Router>, Error> {
        let _guard = self
            .rebuild_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let router = Arc::new(build_router(manifest, &self.config)?);
        self.table.store(Arc::clone(&router));
        info!(
            routes_count = router.len(),
            patterns_count = router.all_patterns().len(),
            "hot-reload: route table swapped"
        );
        Ok(router)
    }

    /// Load `path` and [`rebuild`](Self::rebuild) from it.
    ///
    /// # Errors
    ///
    /// Load or build failure; the live table is left untouched.
    pub fn reload_from(&self, path: &Path) -> Result<Arc<Router>, Error> {
        let manifest = load_manifest(path)?;
        self.rebuild(&manifest)
    }
}

/// Watch a manifest file and rebuild `live` whenever it changes.
///
/// The returned watcher must be kept alive for as long as reloads are wanted.
///
/// # Errors
///
/// Failure to create the watcher or to watch `path`.
pub fn watch_manifest<P>(
    manifest_path: P,
    live: Arc<LiveRoutes>,
) -> notify::Result<RecommendedWatcher>
where
    P: AsRef<Path>,
{
    let path: PathBuf = manifest_path.as_ref().to_path_buf();
    let watch_path = path.clone();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    if let Err(e) = live.reload_from(&watch_path) {
                        warn!(
                            path = %watch_path.display(),
                            error = %e,
                            "hot-reload: keeping previous route table"
                        );
                    }
                }
            }
            Err(e) => error!(error = %e, "hot-reload: watch error"),
        },
        Config::default(),
    )?;

    watcher.watch(&path, RecursiveMode::NonRecursive)?;
    info!(path = %path.display(), "hot-reload: watching manifest");
    Ok(watcher)
}
