// Selection state - at most one selected path per panel
use super::panels::{PanelId, WindowId};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Default)]
pub struct SelectionState {
    selected: HashMap<PanelId, PathBuf>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `path` in `panel` and clears every sibling panel. Returns the
    /// siblings that actually lost a selection.
    pub fn select(&mut self, panel: PanelId, path: PathBuf) -> Vec<PanelId> {
        let cleared = panel
            .siblings()
            .into_iter()
            .filter(|sibling| self.selected.remove(sibling).is_some())
            .collect();
        self.selected.insert(panel, path);
        cleared
    }

    pub fn clear(&mut self, panel: PanelId) -> bool {
        self.selected.remove(&panel).is_some()
    }

    pub fn selected(&self, panel: PanelId) -> Option<&Path> {
        self.selected.get(&panel).map(PathBuf::as_path)
    }

    pub fn forget_window(&mut self, id: WindowId) {
        self.selected.remove(&PanelId::Window(id));
    }
}
