use super::filesystem::FileSystem;
use crate::entry::FileEntry;
use crate::error::Result;
use std::path::{Component, Path, PathBuf};

/// Validity gate and path arithmetic in front of a [`FileSystem`].
pub struct PathResolver<F> {
    fs: F,
}

impl<F: FileSystem> PathResolver<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.fs.exists(path)
    }

    pub fn is_directory(&self, path: &Path) -> bool {
        self.fs.is_dir(path)
    }

    pub fn is_file(&self, path: &Path) -> bool {
        self.fs.is_file(path)
    }

    pub fn parent_of(&self, path: &Path) -> PathBuf {
        self.fs.parent_of(path)
    }

    pub fn list(&self, path: &Path, show_hidden: bool) -> Result<Vec<FileEntry>> {
        self.fs.read_dir(path, show_hidden)
    }

    /// Turns path-bar text into a path: trims, expands `~`, and drops `.`
    /// components and trailing separators. `..` and symlinks are left alone.
    pub fn normalize(&self, text: &str) -> PathBuf {
        let expanded = expand_home(text.trim());
        expanded
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    }
}

fn expand_home(text: &str) -> PathBuf {
    let rest = if text == "~" {
        Some("")
    } else {
        text.strip_prefix("~/")
            .or_else(|| text.strip_prefix("~\\"))
    };

    match (rest, directories::UserDirs::new()) {
        (Some(rest), Some(dirs)) => dirs.home_dir().join(rest),
        _ => PathBuf::from(text),
    }
}

/// Label for a favorite: the last segment, or the drive/root itself.
pub fn display_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().into_owned();
    }
    match path.components().next() {
        Some(Component::Prefix(prefix)) => prefix.as_os_str().to_string_lossy().into_owned(),
        _ => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::memory::MemoryFs;

    fn resolver() -> PathResolver<MemoryFs> {
        PathResolver::new(MemoryFs::new().with_dir("/home/docs").with_file("/home/a.txt"))
    }

    #[test]
    fn test_exists_and_kind() {
        let r = resolver();
        assert!(r.exists(Path::new("/home")));
        assert!(r.is_directory(Path::new("/home/docs")));
        assert!(r.is_file(Path::new("/home/a.txt")));
        assert!(!r.is_directory(Path::new("/home/a.txt")));
        assert!(!r.exists(Path::new("/nowhere")));
        assert!(!r.is_file(Path::new("/nowhere")) && !r.is_directory(Path::new("/nowhere")));
    }

    #[test]
    fn test_parent_of() {
        let r = resolver();
        assert_eq!(r.parent_of(Path::new("/home/docs")), PathBuf::from("/home"));
        assert_eq!(r.parent_of(Path::new("/")), PathBuf::from("/"));
    }

    #[test]
    fn test_normalize_trims_and_drops_noise() {
        let r = resolver();
        assert_eq!(r.normalize("  /home/./docs/  "), PathBuf::from("/home/docs"));
        assert_eq!(r.normalize("/home//docs"), PathBuf::from("/home/docs"));
        assert_eq!(r.normalize("/a/../b"), PathBuf::from("/a/../b"));
        assert_eq!(r.normalize(""), PathBuf::new());
    }

    #[test]
    fn test_normalize_expands_home() {
        let Some(dirs) = directories::UserDirs::new() else {
            return;
        };
        let r = resolver();
        assert_eq!(r.normalize("~"), dirs.home_dir().to_path_buf());
        assert_eq!(r.normalize("~/music"), dirs.home_dir().join("music"));
        assert_eq!(r.normalize("~other"), PathBuf::from("~other"));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/home/docs")), "docs");
        assert_eq!(display_name(Path::new("/home/docs/")), "docs");
        assert_eq!(display_name(Path::new("/")), "/");
    }

    #[test]
    #[cfg(windows)]
    fn test_display_name_drive() {
        assert_eq!(display_name(Path::new("C:\\")), "C:");
    }
}
