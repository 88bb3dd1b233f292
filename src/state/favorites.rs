// Favorites - bookmarked folders and files, persisted as JSON
use crate::error::{ExplorerError, Result};
use crate::io::display_name;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FavoriteCategory {
    Folder,
    File,
}

impl FavoriteCategory {
    pub const ALL: [FavoriteCategory; 2] = [FavoriteCategory::Folder, FavoriteCategory::File];

    pub fn label(self) -> &'static str {
        match self {
            FavoriteCategory::Folder => "Folders",
            FavoriteCategory::File => "Files",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FavoriteItem {
    pub path: PathBuf,
    pub category: FavoriteCategory,
    pub display_name: String,
}

/// On-disk shape of the favorites file.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FavoritesRecord {
    #[serde(default)]
    pub folders: Vec<String>,
    #[serde(default)]
    pub files: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct FavoritesStore {
    folders: Vec<FavoriteItem>,
    files: Vec<FavoriteItem>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn items_mut(&mut self, category: FavoriteCategory) -> &mut Vec<FavoriteItem> {
        match category {
            FavoriteCategory::Folder => &mut self.folders,
            FavoriteCategory::File => &mut self.files,
        }
    }

    /// Appends the favorite unless the same (path, category) is already
    /// present. Returns whether anything changed.
    pub fn add(&mut self, path: PathBuf, category: FavoriteCategory) -> bool {
        if self.contains(&path, category) {
            return false;
        }
        let display_name = display_name(&path);
        self.items_mut(category).push(FavoriteItem {
            path,
            category,
            display_name,
        });
        true
    }

    pub fn remove(&mut self, path: &Path, category: FavoriteCategory) -> bool {
        let items = self.items_mut(category);
        match items.iter().position(|item| item.path == path) {
            Some(idx) => {
                items.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, path: &Path, category: FavoriteCategory) -> bool {
        self.list_items(category).iter().any(|item| item.path == path)
    }

    pub fn list_items(&self, category: FavoriteCategory) -> &[FavoriteItem] {
        match category {
            FavoriteCategory::Folder => &self.folders,
            FavoriteCategory::File => &self.files,
        }
    }

    pub fn len(&self) -> usize {
        self.folders.len() + self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn serialize(&self) -> FavoritesRecord {
        let paths = |items: &[FavoriteItem]| -> Vec<String> {
            items
                .iter()
                .map(|item| item.path.to_string_lossy().into_owned())
                .collect()
        };
        FavoritesRecord {
            folders: paths(&self.folders),
            files: paths(&self.files),
        }
    }

    /// Stale paths are kept; they are re-checked when activated.
    pub fn deserialize(&mut self, record: FavoritesRecord) {
        for path in record.folders {
            self.add(PathBuf::from(path), FavoriteCategory::Folder);
        }
        for path in record.files {
            self.add(PathBuf::from(path), FavoriteCategory::File);
        }
    }

    /// Reads the favorites file. A missing or unreadable file yields an
    /// empty store.
    pub fn load(file: &Path) -> Self {
        let mut store = Self::new();
        match Self::read_record(file) {
            Ok(Some(record)) => {
                store.deserialize(record);
                tracing::info!(path = %file.display(), count = store.len(), "loaded favorites");
            }
            Ok(None) => {
                tracing::debug!(path = %file.display(), "no favorites file, starting empty");
            }
            Err(e) => {
                tracing::warn!(error = %e, "favorites unavailable, starting empty");
            }
        }
        store
    }

    fn read_record(file: &Path) -> Result<Option<FavoritesRecord>> {
        let contents = match fs::read_to_string(file) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ExplorerError::PersistenceUnavailable {
                    path: file.to_path_buf(),
                    source,
                })
            }
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Overwrites the favorites file with the whole store. The write goes
    /// to a temporary sibling first and is renamed into place.
    pub fn save(&self, file: &Path) -> Result<()> {
        let unavailable = |source: std::io::Error| ExplorerError::PersistenceUnavailable {
            path: file.to_path_buf(),
            source,
        };

        let dir = match file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(unavailable)?;

        let contents = serde_json::to_string_pretty(&self.serialize())?;
        let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(unavailable)?;
        tmp.write_all(contents.as_bytes()).map_err(unavailable)?;
        tmp.persist(file).map_err(|e| unavailable(e.error))?;

        tracing::info!(path = %file.display(), count = self.len(), "saved favorites");
        Ok(())
    }
}
