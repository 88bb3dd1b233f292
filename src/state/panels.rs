// Panels - the independently navigable views and their histories
use super::history::NavigationHistory;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PanelId {
    Tree,
    List,
    Favorites,
    Window(WindowId),
}

impl PanelId {
    const PRIMARY: [PanelId; 3] = [PanelId::Tree, PanelId::List, PanelId::Favorites];

    /// The panel that re-roots when a location is chosen here. The tree and
    /// favorites panels drive the primary list.
    pub fn navigation_target(self) -> PanelId {
        match self {
            PanelId::Window(id) => PanelId::Window(id),
            _ => PanelId::List,
        }
    }

    /// Other panels in the same window.
    pub fn siblings(self) -> Vec<PanelId> {
        match self {
            PanelId::Window(_) => Vec::new(),
            _ => Self::PRIMARY.into_iter().filter(|p| *p != self).collect(),
        }
    }
}

/// One history for the primary window, one per open folder window.
#[derive(Default)]
pub struct PanelRegistry {
    primary: NavigationHistory,
    windows: BTreeMap<WindowId, NavigationHistory>,
    next_window: u64,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self, panel: PanelId) -> Option<&NavigationHistory> {
        match panel.navigation_target() {
            PanelId::Window(id) => self.windows.get(&id),
            _ => Some(&self.primary),
        }
    }

    pub fn history_mut(&mut self, panel: PanelId) -> Option<&mut NavigationHistory> {
        match panel.navigation_target() {
            PanelId::Window(id) => self.windows.get_mut(&id),
            _ => Some(&mut self.primary),
        }
    }

    pub fn open_window(&mut self, path: PathBuf) -> WindowId {
        let id = WindowId(self.next_window);
        self.next_window += 1;
        self.windows.insert(id, NavigationHistory::seeded(path));
        id
    }

    pub fn close_window(&mut self, id: WindowId) -> bool {
        self.windows.remove(&id).is_some()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_primary_panels_share_history() {
        let mut registry = PanelRegistry::new();
        registry
            .history_mut(PanelId::Tree)
            .unwrap()
            .navigate_to(PathBuf::from("/usr"));
        assert_eq!(
            registry.history(PanelId::List).unwrap().current(),
            Some(Path::new("/usr"))
        );
        assert_eq!(
            registry.history(PanelId::Favorites).unwrap().current(),
            Some(Path::new("/usr"))
        );
    }

    #[test]
    fn test_window_lifecycle() {
        let mut registry = PanelRegistry::new();
        let a = registry.open_window(PathBuf::from("/a"));
        let b = registry.open_window(PathBuf::from("/b"));
        assert_ne!(a, b);
        assert!(registry.history(PanelId::Window(a)).is_some());
        assert_eq!(
            registry.history(PanelId::Window(b)).unwrap().current(),
            Some(Path::new("/b"))
        );

        assert!(registry.close_window(a));
        assert!(!registry.close_window(a));
        assert!(registry.history(PanelId::Window(a)).is_none());
        assert!(registry.history(PanelId::Window(b)).is_some());
    }

    #[test]
    fn test_window_ids_not_reused() {
        let mut registry = PanelRegistry::new();
        let a = registry.open_window(PathBuf::from("/a"));
        registry.close_window(a);
        let b = registry.open_window(PathBuf::from("/a"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_siblings() {
        assert_eq!(PanelId::Tree.siblings(), vec![PanelId::List, PanelId::Favorites]);
        assert_eq!(PanelId::List.siblings(), vec![PanelId::Tree, PanelId::Favorites]);
        let mut registry = PanelRegistry::new();
        let id = registry.open_window(PathBuf::from("/a"));
        assert!(PanelId::Window(id).siblings().is_empty());
    }
}
