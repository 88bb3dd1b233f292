// In-memory filesystem for exercising the core without touching disk
use super::directory::sort_entries;
use super::filesystem::FileSystem;
use crate::entry::FileEntry;
use crate::error::{ExplorerError, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[derive(Clone, Debug, Default)]
pub struct MemoryFs {
    dirs: BTreeSet<PathBuf>,
    files: BTreeSet<PathBuf>,
}

impl MemoryFs {
    pub fn new() -> Self {
        let mut fs = Self::default();
        fs.dirs.insert(PathBuf::from("/"));
        fs
    }

    /// Adds the directory and every ancestor.
    pub fn with_dir(mut self, path: &str) -> Self {
        self.add_ancestors(Path::new(path));
        self.dirs.insert(PathBuf::from(path));
        self
    }

    pub fn with_file(mut self, path: &str) -> Self {
        self.add_ancestors(Path::new(path));
        self.files.insert(PathBuf::from(path));
        self
    }

    fn add_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if !ancestor.as_os_str().is_empty() {
                self.dirs.insert(ancestor.to_path_buf());
            }
        }
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.is_dir(path) || self.is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains(path)
    }

    fn read_dir(&self, path: &Path, show_hidden: bool) -> Result<Vec<FileEntry>> {
        if !self.is_dir(path) {
            return Err(ExplorerError::InvalidPath(path.to_path_buf()));
        }
        let children = self
            .dirs
            .iter()
            .map(|p| (p, true))
            .chain(self.files.iter().map(|p| (p, false)))
            .filter(|(p, _)| p.parent() == Some(path));

        let mut entries: Vec<FileEntry> = children
            .filter_map(|(p, is_dir)| {
                let name = p.file_name()?.to_string_lossy().to_string();
                Some(FileEntry {
                    path: p.clone(),
                    name,
                    is_dir,
                    is_symlink: false,
                    size: 0,
                    modified: SystemTime::UNIX_EPOCH,
                })
            })
            .filter(|e| show_hidden || !e.is_hidden())
            .collect();
        sort_entries(&mut entries);
        Ok(entries)
    }
}
