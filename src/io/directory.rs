use crate::entry::FileEntry;
use std::fs;
use std::path::Path;

pub fn read_directory(path: &Path, show_hidden: bool) -> Result<Vec<FileEntry>, std::io::Error> {
    let mut entries = Vec::new();
    let read_dir = fs::read_dir(path)?;

    for entry in read_dir.flatten() {
        if let Some(file_entry) = FileEntry::from_path(entry.path()) {
            if !show_hidden && file_entry.is_hidden() {
                continue;
            }
            entries.push(file_entry);
        }
    }
    sort_entries(&mut entries);
    Ok(entries)
}

/// Directories first, then case-insensitive by name.
pub fn sort_entries(entries: &mut [FileEntry]) {
    entries.sort_by(|a, b| {
        if a.is_dir != b.is_dir {
            return b.is_dir.cmp(&a.is_dir);
        }
        a.name.to_lowercase().cmp(&b.name.to_lowercase())
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_first_then_alphabetical() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), b"").unwrap();
        fs::write(dir.path().join("A.txt"), b"").unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();

        let entries = read_directory(dir.path(), false).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "A.txt", "b.txt"]);
    }

    #[test]
    fn test_hidden_entries_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".hidden"), b"").unwrap();
        fs::write(dir.path().join("shown"), b"").unwrap();

        assert_eq!(read_directory(dir.path(), false).unwrap().len(), 1);
        assert_eq!(read_directory(dir.path(), true).unwrap().len(), 2);
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_directory(&dir.path().join("missing"), false).is_err());
    }
}
