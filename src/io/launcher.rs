use std::path::Path;

/// Hands a file to whatever the OS has registered for it.
pub trait Launcher {
    fn open(&self, path: &Path);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, path: &Path) {
        match open::that_detached(path) {
            Ok(()) => tracing::info!(path = %path.display(), "opened with default application"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not open file"),
        }
    }
}
