//! # Hot Reload Module
//!
//! Watches an OpenAPI document and hands every successfully reloaded version
//! to a callback, which the `watch` command uses to re-render its output file.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use schemadoc::hot_reload::watch_spec;
//!
//! let watcher = watch_spec("openapi.yaml", |spec| {
//!     println!("reloaded {}", spec.title);
//! })?;
//!
//! // Keep watcher alive
//! std::mem::forget(watcher);
//! ```
//!
//! ## Error Handling
//!
//! A document that fails to load is logged and skipped; the callback only
//! sees valid documents, so the last good output stays in place while the
//! file is being edited.

use crate::spec::{self, LoadedSpec};
use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Watch `spec_path` and call `on_reload` with each new valid version.
pub fn watch_spec<P, F>(spec_path: P, mut on_reload: F) -> notify::Result<RecommendedWatcher>
where
    P: AsRef<Path>,
    F: FnMut(LoadedSpec) + Send + 'static,
{
    let path: PathBuf = spec_path.as_ref().to_path_buf();
    let watch_path = path.clone();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    let shown = watch_path.to_string_lossy();
                    match spec::load_spec(&shown) {
                        Ok(loaded) => {
                            info!(path = %shown, title = %loaded.title, "hot-reload: spec changed");
                            on_reload(loaded);
                        }
                        Err(e) => {
                            warn!(path = %shown, error = %e, "hot-reload: keeping previous output");
                        }
                    }
                }
            }
            Err(e) => warn!(error = ?e, "watch error"),
        },
        Config::default(),
    )?;

    watcher.watch(&path, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}
