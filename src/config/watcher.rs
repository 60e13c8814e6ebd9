//! Configuration file watcher for hot reload.
//!
//! # Design Decisions
//! - Watches the parent directory, not the file: editors that save by
//!   writing a temp file and renaming it would otherwise detach the watch
//! - Events for other files in that directory are ignored
//! - A reload that parses to the config already in effect is not sent

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::GateConfig;

/// Watches one config file and emits each new valid version of it.
pub struct ConfigWatcher {
    path: PathBuf,
    current: GateConfig,
    update_tx: mpsc::UnboundedSender<GateConfig>,
}

impl ConfigWatcher {
    /// `current` is the config already loaded from `path`.
    ///
    /// Returns the watcher and a receiver for configuration updates.
    pub fn new(path: &Path, current: GateConfig) -> (Self, mpsc::UnboundedReceiver<GateConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                current,
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching in a background thread.
    ///
    /// The returned watcher must be kept alive for as long as updates are wanted.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let ConfigWatcher {
            path,
            mut current,
            update_tx,
        } = self;
        let dir = watch_dir(&path);
        let watched = path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if is_config_event(&event, &watched) => match load_config(&watched) {
                    Ok(new_config) if new_config == current => {
                        tracing::debug!(path = ?watched, "Config file touched, content unchanged");
                    }
                    Ok(new_config) => {
                        tracing::info!(path = ?watched, "Config file changed, applying");
                        current = new_config.clone();
                        let _ = update_tx.send(new_config);
                    }
                    Err(e) => {
                        tracing::error!(
                            error = %e,
                            "Failed to reload config, keeping current configuration"
                        );
                    }
                },
                Ok(_) => {}
                Err(e) => tracing::error!(error = ?e, "Watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?path, dir = ?dir, "Config watcher started");
        Ok(watcher)
    }
}

fn watch_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Whether `event` may have changed the file at `path`.
fn is_config_event(event: &Event, path: &Path) -> bool {
    let relevant_kind = matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_));
    relevant_kind
        && event
            .paths
            .iter()
            .any(|p| p.file_name().is_some() && p.file_name() == path.file_name())
}
