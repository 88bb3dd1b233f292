// View coordinator - routes every navigation and favorites request
use crate::io::{FileSystem, Launcher, LocalFs, PathResolver, SystemLauncher};
use crate::message::{ViewCommand, ViewEvent};
use crate::state::{
    FavoriteCategory, FavoritesStore, NavigationHistory, PanelId, PanelRegistry, SelectionState,
    WindowId,
};
use std::mem;
use std::path::{Path, PathBuf};

pub struct ViewCoordinator<F = LocalFs, L = SystemLauncher> {
    resolver: PathResolver<F>,
    launcher: L,
    panels: PanelRegistry,
    selection: SelectionState,
    favorites: FavoritesStore,
    active: PanelId,
    commands: Vec<ViewCommand>,
}

impl<F: FileSystem, L: Launcher> ViewCoordinator<F, L> {
    pub fn new(fs: F, launcher: L, favorites: FavoritesStore) -> Self {
        Self {
            resolver: PathResolver::new(fs),
            launcher,
            panels: PanelRegistry::new(),
            selection: SelectionState::new(),
            favorites,
            active: PanelId::List,
            commands: Vec::new(),
        }
    }

    pub fn resolver(&self) -> &PathResolver<F> {
        &self.resolver
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn history(&self, panel: PanelId) -> Option<&NavigationHistory> {
        self.panels.history(panel)
    }

    pub fn current_path(&self, panel: PanelId) -> Option<&Path> {
        self.panels.history(panel).and_then(NavigationHistory::current)
    }

    pub fn selected(&self, panel: PanelId) -> Option<&Path> {
        self.selection.selected(panel)
    }

    pub fn active_panel(&self) -> PanelId {
        self.active
    }

    /// Hands the queued commands to the view layer.
    pub fn drain_commands(&mut self) -> Vec<ViewCommand> {
        mem::take(&mut self.commands)
    }

    pub fn dispatch(&mut self, event: ViewEvent) {
        tracing::trace!(?event, "view event");
        match event {
            ViewEvent::Activated { panel, path } => self.activate(panel, path),
            ViewEvent::PathSubmitted { panel, text } => self.submit_path(panel, &text),
            ViewEvent::TreeRootSubmitted(text) => self.submit_tree_root(&text),
            ViewEvent::Back(panel) => {
                if self.focus(panel) {
                    self.go_back();
                }
            }
            ViewEvent::Forward(panel) => {
                if self.focus(panel) {
                    self.go_forward();
                }
            }
            ViewEvent::Up(panel) => {
                if self.focus(panel) {
                    self.go_up();
                }
            }
            ViewEvent::Selected { panel, path } => self.select(panel, path),
            ViewEvent::Focused(panel) => {
                self.focus(panel);
            }
            ViewEvent::AddFavorite(path) => self.promote_to_favorite(path),
            ViewEvent::AddSelectionToFavorites => self.promote_selection(),
            ViewEvent::RemoveFavorite { path, category } => self.remove_favorite(&path, category),
            ViewEvent::OpenWindow(path) => {
                self.open_window(path);
            }
            ViewEvent::WindowClosed(id) => {
                self.close_window(id);
            }
        }
    }

    /// Makes `panel` the target of back/forward/up. Returns false for a
    /// window that is no longer open.
    pub fn focus(&mut self, panel: PanelId) -> bool {
        if self.panels.history(panel).is_none() {
            tracing::debug!(?panel, "ignoring focus of a closed window");
            return false;
        }
        self.active = panel.navigation_target();
        true
    }

    /// "The user chose this location." Directories navigate the panel,
    /// files go to the launcher, anything else is ignored.
    pub fn activate(&mut self, panel: PanelId, path: PathBuf) {
        if self.resolver.is_directory(&path) {
            let target = panel.navigation_target();
            let Some(history) = self.panels.history_mut(target) else {
                tracing::debug!(?panel, "activation for a closed window");
                return;
            };
            history.navigate_to(path.clone());
            self.active = target;
            tracing::debug!(?target, path = %path.display(), "navigated");
            self.reroot(target, Some(path));
        } else if self.resolver.is_file(&path) {
            self.launcher.open(&path);
        } else {
            tracing::debug!(path = %path.display(), "ignoring activation of missing path");
        }
    }

    pub fn submit_path(&mut self, panel: PanelId, text: &str) {
        let path = self.resolver.normalize(text);
        self.activate(panel, path);
    }

    /// Re-roots the tree panel. The tree has no history of its own.
    pub fn submit_tree_root(&mut self, text: &str) {
        let path = self.resolver.normalize(text);
        if self.resolver.is_directory(&path) {
            self.commands.push(ViewCommand::ReRoot {
                panel: PanelId::Tree,
                path,
            });
        } else {
            tracing::debug!(path = %path.display(), "ignoring tree root that is not a directory");
        }
    }

    pub fn go_back(&mut self) {
        let panel = self.active;
        let path = self
            .panels
            .history_mut(panel)
            .and_then(|history| history.back().map(Path::to_path_buf));
        self.reroot(panel, path);
    }

    pub fn go_forward(&mut self) {
        let panel = self.active;
        let path = self
            .panels
            .history_mut(panel)
            .and_then(|history| history.forward().map(Path::to_path_buf));
        self.reroot(panel, path);
    }

    pub fn go_up(&mut self) {
        let panel = self.active;
        let resolver = &self.resolver;
        let path = self
            .panels
            .history_mut(panel)
            .and_then(|history| history.up(resolver).map(Path::to_path_buf));
        self.reroot(panel, path);
    }

    /// A re-rooted panel starts with nothing selected.
    fn reroot(&mut self, panel: PanelId, path: Option<PathBuf>) {
        if let Some(path) = path {
            self.selection.clear(panel);
            self.commands.push(ViewCommand::ReRoot { panel, path });
        }
    }

    /// Records a selection and clears it from every sibling panel.
    pub fn select(&mut self, panel: PanelId, path: PathBuf) {
        self.focus(panel);
        for sibling in self.selection.select(panel, path) {
            self.commands.push(ViewCommand::ClearSelection { panel: sibling });
        }
    }

    pub fn promote_to_favorite(&mut self, path: PathBuf) {
        let category = if self.resolver.is_directory(&path) {
            FavoriteCategory::Folder
        } else if self.resolver.is_file(&path) {
            FavoriteCategory::File
        } else {
            tracing::debug!(path = %path.display(), "not adding missing path to favorites");
            return;
        };
        let shown = path.display().to_string();
        if self.favorites.add(path, category) {
            tracing::info!(path = %shown, ?category, "added favorite");
        }
    }

    /// Favorites the list selection, falling back to the tree selection.
    pub fn promote_selection(&mut self) {
        let path = self
            .selection
            .selected(PanelId::List)
            .or_else(|| self.selection.selected(PanelId::Tree))
            .map(Path::to_path_buf);
        if let Some(path) = path {
            self.promote_to_favorite(path);
        }
    }

    pub fn remove_favorite(&mut self, path: &Path, category: FavoriteCategory) {
        if self.favorites.remove(path, category) {
            tracing::info!(path = %path.display(), ?category, "removed favorite");
        }
    }

    /// Opens a folder window with its own history. Only directories open.
    pub fn open_window(&mut self, path: PathBuf) -> Option<WindowId> {
        if !self.resolver.is_directory(&path) {
            tracing::debug!(path = %path.display(), "folder window needs a directory");
            return None;
        }
        let window = self.panels.open_window(path.clone());
        tracing::info!(%window, path = %path.display(), "opened folder window");
        self.commands.push(ViewCommand::OpenWindow { window, path });
        Some(window)
    }

    pub fn close_window(&mut self, window: WindowId) -> bool {
        let closed = self.panels.close_window(window);
        if closed {
            self.selection.forget_window(window);
            if self.active == PanelId::Window(window) {
                self.active = PanelId::List;
            }
            tracing::info!(%window, "closed folder window");
        }
        closed
    }

    /// Writes the favorites file. Failure leaves the store intact and is
    /// passed on as a warning.
    pub fn save_favorites(&mut self, file: &Path) {
        if let Err(e) = self.favorites.save(file) {
            tracing::warn!(error = %e, "could not save favorites");
            self.commands
                .push(ViewCommand::Warning(format!("Could not save favorites: {e}")));
        }
    }
}
