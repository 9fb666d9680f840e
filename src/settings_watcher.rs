//! Hot reload of the engine settings file.
//!
//! Watches the settings file's directory (editors often replace files via
//! rename, which a file-level watch misses) and reports changes to the
//! settings file only. Polling is non-blocking so hosts can call it from
//! their frame loop.

use crate::error::SettingsResult;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use tracing::debug;

pub use crate::settings::default_settings_path;

#[derive(Debug)]
pub enum SettingsEvent {
    Created,
    Modified,
    Deleted,
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
}

impl SettingsWatcher {
    pub fn new(path: PathBuf) -> SettingsResult<Self> {
        let (tx, rx) = channel();
        let mut watcher = notify::recommended_watcher(tx)?;

        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        debug!(path = %path.display(), "Watching settings file");

        Ok(Self {
            path,
            _watcher: watcher,
            rx,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Next relevant event, if one is pending.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(Ok(event)) => {
                    if !event.paths.iter().any(|p| p.ends_with(self.file_name())) {
                        continue;
                    }
                    let mapped = match event.kind {
                        EventKind::Create(_) => SettingsEvent::Created,
                        EventKind::Modify(_) => SettingsEvent::Modified,
                        EventKind::Remove(_) => SettingsEvent::Deleted,
                        _ => continue,
                    };
                    return Some(mapped);
                }
                Ok(Err(e)) => return Some(SettingsEvent::Error(e.to_string())),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return None,
            }
        }
    }

    fn file_name(&self) -> &Path {
        self.path
            .file_name()
            .map(Path::new)
            .unwrap_or(self.path.as_path())
    }
}
