use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

/// One row of a directory listing.
#[derive(Clone, Debug)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    pub is_symlink: bool,
    pub size: u64,
    pub modified: SystemTime,
}

impl FileEntry {
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let symlink_meta = fs::symlink_metadata(&path).ok()?;
        let is_symlink = symlink_meta.is_symlink();

        let name = path.file_name()?.to_string_lossy().to_string();

        // Broken links still show up, as plain files.
        let metadata = fs::metadata(&path).ok();
        let is_dir = metadata.as_ref().map(|m| m.is_dir()).unwrap_or(false);
        let size = metadata.as_ref().map(|m| m.len()).unwrap_or(0);
        let modified = metadata
            .as_ref()
            .and_then(|m| m.modified().ok())
            .or_else(|| symlink_meta.modified().ok())
            .unwrap_or(SystemTime::UNIX_EPOCH);

        Some(Self {
            path,
            name,
            is_dir,
            is_symlink,
            size,
            modified,
        })
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    pub fn icon(&self) -> &'static str {
        if self.is_dir {
            "📁"
        } else {
            "📄"
        }
    }

    pub fn display_name(&self) -> String {
        if self.is_symlink {
            format!("{} \u{2192}", self.name)
        } else {
            self.name.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_reads_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, b"hello").unwrap();

        let entry = FileEntry::from_path(file.clone()).unwrap();
        assert_eq!(entry.name, "notes.txt");
        assert!(!entry.is_dir);
        assert_eq!(entry.size, 5);
        assert_eq!(entry.icon(), "📄");

        let dir_entry = FileEntry::from_path(dir.path().to_path_buf()).unwrap();
        assert!(dir_entry.is_dir);
    }

    #[test]
    fn test_missing_path_has_no_entry() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileEntry::from_path(dir.path().join("nope")).is_none());
    }

    #[test]
    fn test_hidden_detection() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(".profile");
        fs::write(&file, b"").unwrap();
        assert!(FileEntry::from_path(file).unwrap().is_hidden());
    }
}
