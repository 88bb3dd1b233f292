// Directory watching - tells the UI thread which shown folders changed
use eframe::egui;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

pub struct DirectoryWatcher {
    watcher: RecommendedWatcher,
    changes: Receiver<PathBuf>,
    watched: HashSet<PathBuf>,
}

impl DirectoryWatcher {
    pub fn new(ctx: egui::Context) -> notify::Result<Self> {
        let (tx, changes) = channel();

        let watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            if let Ok(event) = res {
                for path in event.paths {
                    if let Some(parent) = path.parent() {
                        let _ = tx.send(parent.to_path_buf());
                    }
                    let _ = tx.send(path);
                }
                ctx.request_repaint();
            }
        })?;

        Ok(Self {
            watcher,
            changes,
            watched: HashSet::new(),
        })
    }

    /// Watches exactly `paths`, dropping anything watched before.
    pub fn watch_only(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        let wanted: HashSet<PathBuf> = paths.into_iter().collect();

        for old in self.watched.difference(&wanted) {
            let _ = self.watcher.unwatch(old);
        }
        for new in wanted.difference(&self.watched) {
            if let Err(e) = self.watcher.watch(new, RecursiveMode::NonRecursive) {
                tracing::debug!(path = %new.display(), error = %e, "cannot watch directory");
            }
        }
        self.watched = wanted;
    }

    /// Paths reported since the last call.
    pub fn changed(&self) -> HashSet<PathBuf> {
        self.changes.try_iter().collect()
    }
}
