use super::directory::read_directory;
use crate::entry::FileEntry;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// The filesystem as seen by the core. Everything the core knows about
/// disk state comes through these calls.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn is_file(&self, path: &Path) -> bool;
    fn read_dir(&self, path: &Path, show_hidden: bool) -> Result<Vec<FileEntry>>;

    /// Roots come back unchanged.
    fn parent_of(&self, path: &Path) -> PathBuf {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => path.to_path_buf(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_dir(&self, path: &Path, show_hidden: bool) -> Result<Vec<FileEntry>> {
        Ok(read_directory(path, show_hidden)?)
    }
}
