// Navigation history - back/forward/up stack for one panel
use crate::io::{FileSystem, PathResolver};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default)]
pub struct NavigationHistory {
    entries: Vec<PathBuf>,
    cursor: usize,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History with a single entry, as used for new folder windows.
    pub fn seeded(path: PathBuf) -> Self {
        let mut history = Self::new();
        history.navigate_to(path);
        history
    }

    /// Records a new location. The caller has already checked that it exists.
    pub fn navigate_to(&mut self, path: PathBuf) {
        if !self.entries.is_empty() {
            // Remove any forward history when navigating to a new path
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(path);
        self.cursor = self.entries.len() - 1;
    }

    pub fn back(&mut self) -> Option<&Path> {
        if self.cursor > 0 {
            self.cursor -= 1;
            Some(self.entries[self.cursor].as_path())
        } else {
            None
        }
    }

    pub fn forward(&mut self) -> Option<&Path> {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            Some(self.entries[self.cursor].as_path())
        } else {
            None
        }
    }

    /// Moves to the parent as a fresh navigation, so forward history is
    /// discarded. No-op at a root.
    pub fn up<F: FileSystem>(&mut self, resolver: &PathResolver<F>) -> Option<&Path> {
        let current = self.current()?;
        let parent = resolver.parent_of(current);
        if parent.as_path() == current {
            return None;
        }
        self.navigate_to(parent);
        self.current()
    }

    pub fn current(&self) -> Option<&Path> {
        self.entries.get(self.cursor).map(PathBuf::as_path)
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::memory::MemoryFs;

    fn p(s: &str) -> PathBuf {
        PathBuf::from(s)
    }

    fn history_of(paths: &[&str]) -> NavigationHistory {
        let mut history = NavigationHistory::new();
        for path in paths {
            history.navigate_to(p(path));
        }
        history
    }

    #[test]
    fn test_empty_history_is_inert() {
        let resolver = PathResolver::new(MemoryFs::new());
        let mut history = NavigationHistory::new();
        assert!(history.back().is_none());
        assert!(history.forward().is_none());
        assert!(history.up(&resolver).is_none());
        assert!(history.current().is_none());
        assert!(history.is_empty());
    }

    #[test]
    fn test_browsing_scenario() {
        let mut history = NavigationHistory::new();
        history.navigate_to(p("/home"));
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.entries(), &[p("/home")]);

        history.navigate_to(p("/home/docs"));
        assert_eq!(history.entries(), &[p("/home"), p("/home/docs")]);
        assert_eq!(history.cursor(), 1);

        assert_eq!(history.back(), Some(Path::new("/home")));
        assert_eq!(history.cursor(), 0);

        history.navigate_to(p("/tmp"));
        assert_eq!(history.entries(), &[p("/home"), p("/tmp")]);
        assert_eq!(history.cursor(), 1);

        assert!(history.forward().is_none());
    }

    #[test]
    fn test_navigate_truncates_forward_branch() {
        let mut history = history_of(&["/a", "/b", "/c"]);
        history.back();
        assert_eq!(history.current(), Some(Path::new("/b")));

        history.navigate_to(p("/d"));
        assert_eq!(history.entries(), &[p("/a"), p("/b"), p("/d")]);
        assert_eq!(history.cursor(), 2);
        assert!(history.forward().is_none());
    }

    #[test]
    fn test_back_then_forward_restores_location() {
        let mut history = history_of(&["/a", "/b", "/c", "/d"]);
        for _ in 0..3 {
            let before = history.current().map(Path::to_path_buf);
            assert!(history.back().is_some());
            assert_eq!(history.forward().map(Path::to_path_buf), before);
            history.back();
        }
        assert_eq!(history.cursor(), 0);
        assert!(history.back().is_none());
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_forward_walks_to_end() {
        let mut history = history_of(&["/a", "/b", "/c"]);
        history.back();
        history.back();
        assert!(history.can_go_forward());
        assert_eq!(history.forward(), Some(Path::new("/b")));
        assert_eq!(history.forward(), Some(Path::new("/c")));
        assert!(!history.can_go_forward());
        assert!(history.forward().is_none());
    }

    #[test]
    fn test_up_at_root_is_noop() {
        let resolver = PathResolver::new(MemoryFs::new());
        let mut history = history_of(&["/"]);
        assert!(history.up(&resolver).is_none());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_up_is_a_fresh_navigation() {
        let resolver = PathResolver::new(MemoryFs::new().with_dir("/home/docs"));
        let mut history = history_of(&["/home", "/home/docs", "/tmp"]);
        history.back();

        assert_eq!(history.up(&resolver), Some(Path::new("/home")));
        assert_eq!(history.entries(), &[p("/home"), p("/home/docs"), p("/home")]);
        assert!(!history.can_go_forward());

        assert_eq!(history.up(&resolver), Some(Path::new("/")));
        assert!(history.up(&resolver).is_none());
        assert_eq!(history.len(), 4);
    }

    #[test]
    fn test_seeded() {
        let history = NavigationHistory::seeded(p("/srv"));
        assert_eq!(history.current(), Some(Path::new("/srv")));
        assert!(!history.can_go_back());
    }
}
