use crate::subscription::DirectoryWatcher;
use crate::view::{FolderView, TreeView};
use eframe::egui;
use folio::config::Config;
use folio::io::{LocalFs, SystemLauncher};
use folio::message::{ViewCommand, ViewEvent};
use folio::state::{FavoriteCategory, FavoritesStore, PanelId, WindowId};
use folio::ViewCoordinator;
use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// A secondary folder window as the view layer sees it.
pub struct FolderWindow {
    pub view: FolderView,
    pub open: bool,
}

pub struct FolioApp {
    pub coordinator: ViewCoordinator,
    pub config: Config,
    pub favorites_file: PathBuf,

    // Panels
    pub list: FolderView,
    pub tree: TreeView,
    pub favorite_selected: Option<(FavoriteCategory, PathBuf)>,
    pub windows: BTreeMap<WindowId, FolderWindow>,

    // UI state
    pub show_hidden: bool,
    pub warning: Option<(String, Instant)>,
    pub watcher: Option<DirectoryWatcher>,
    saved: bool,
}

impl FolioApp {
    pub fn new(ctx: &egui::Context, config: Config, start_path: Option<PathBuf>) -> Self {
        let favorites_file = config.favorites_path();
        let favorites = FavoritesStore::load(&favorites_file);
        let coordinator = ViewCoordinator::new(LocalFs, SystemLauncher, favorites);

        let watcher = match DirectoryWatcher::new(ctx.clone()) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                tracing::warn!(error = %e, "file watching disabled");
                None
            }
        };

        let tree_root = config
            .ui
            .tree_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(std::path::MAIN_SEPARATOR_STR));

        let mut app = Self {
            coordinator,
            show_hidden: config.ui.show_hidden,
            favorites_file,
            list: FolderView::default(),
            tree: TreeView::new(tree_root),
            favorite_selected: None,
            windows: BTreeMap::new(),
            warning: None,
            watcher,
            saved: false,
            config,
        };

        // Try the argument, then the configured folder, then Home, then the
        // current directory.
        let candidates = start_path
            .into_iter()
            .chain(app.config.ui.start_path.clone())
            .chain(directories::UserDirs::new().map(|ud| ud.home_dir().to_path_buf()))
            .chain(env::current_dir().ok());
        for candidate in candidates {
            if !app.coordinator.resolver().is_directory(&candidate) {
                continue;
            }
            app.dispatch(ViewEvent::Activated {
                panel: PanelId::List,
                path: candidate,
            });
            if app.list.path.is_some() {
                break;
            }
        }
        app
    }

    pub fn dispatch(&mut self, event: ViewEvent) {
        self.coordinator.dispatch(event);
        self.apply_commands();
    }

    fn apply_commands(&mut self) {
        let mut rewatch = false;
        for command in self.coordinator.drain_commands() {
            match command {
                ViewCommand::ReRoot { panel, path } => {
                    self.reroot(panel, path);
                    rewatch = true;
                }
                ViewCommand::ClearSelection { panel } => self.clear_selection(panel),
                ViewCommand::OpenWindow { window, path } => {
                    let mut view = FolderView::default();
                    view.reroot(path, self.coordinator.resolver(), self.show_hidden);
                    self.windows.insert(window, FolderWindow { view, open: true });
                    rewatch = true;
                }
                ViewCommand::Warning(message) => self.warning = Some((message, Instant::now())),
            }
        }
        if rewatch {
            self.rewatch();
        }
    }

    fn reroot(&mut self, panel: PanelId, path: PathBuf) {
        let resolver = self.coordinator.resolver();
        match panel {
            PanelId::List => self.list.reroot(path, resolver, self.show_hidden),
            PanelId::Tree => self.tree.reroot(path),
            PanelId::Window(id) => {
                if let Some(window) = self.windows.get_mut(&id) {
                    window.view.reroot(path, resolver, self.show_hidden);
                }
            }
            PanelId::Favorites => {}
        }
    }

    fn clear_selection(&mut self, panel: PanelId) {
        match panel {
            PanelId::List => self.list.selected = None,
            PanelId::Tree => self.tree.selected = None,
            PanelId::Favorites => self.favorite_selected = None,
            PanelId::Window(id) => {
                if let Some(window) = self.windows.get_mut(&id) {
                    window.view.selected = None;
                }
            }
        }
    }

    /// Mirrors a selection event into the view-side highlight.
    fn highlight(&mut self, event: &ViewEvent) {
        if let ViewEvent::Selected { panel, path } = event {
            match panel {
                PanelId::List => self.list.selected = Some(path.clone()),
                PanelId::Tree => self.tree.selected = Some(path.clone()),
                PanelId::Window(id) => {
                    if let Some(window) = self.windows.get_mut(id) {
                        window.view.selected = Some(path.clone());
                    }
                }
                PanelId::Favorites => {}
            }
        }
    }

    pub fn handle_events(&mut self, events: Vec<ViewEvent>) {
        for event in events {
            self.highlight(&event);
            self.dispatch(event);
        }
    }

    fn rewatch(&mut self) {
        let shown: Vec<PathBuf> = self
            .list
            .path
            .iter()
            .chain(self.windows.values().filter_map(|w| w.view.path.as_ref()))
            .cloned()
            .collect();
        if let Some(watcher) = &mut self.watcher {
            watcher.watch_only(shown);
        }
    }

    /// Re-lists any shown folder the watcher reported.
    fn refresh_changed(&mut self) {
        let Some(watcher) = &self.watcher else {
            return;
        };
        let changed = watcher.changed();
        if changed.is_empty() {
            return;
        }

        let resolver = self.coordinator.resolver();
        for path in &changed {
            if self.list.shows(path) {
                self.list.refresh(resolver, self.show_hidden);
            }
            for window in self.windows.values_mut() {
                if window.view.shows(path) {
                    window.view.refresh(resolver, self.show_hidden);
                }
            }
            self.tree.invalidate(path);
        }
    }

    pub fn toggle_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
        let resolver = self.coordinator.resolver();
        self.list.refresh(resolver, self.show_hidden);
        for window in self.windows.values_mut() {
            window.view.refresh(resolver, self.show_hidden);
        }
        self.tree.invalidate_all();
    }

    fn save_once(&mut self) {
        if self.saved {
            return;
        }
        self.saved = true;
        let file = self.favorites_file.clone();
        self.coordinator.save_favorites(&file);
        self.apply_commands();
    }

    fn clear_expired_warning(&mut self) {
        if let Some((_, time)) = &self.warning {
            if time.elapsed().as_secs() >= crate::style::MESSAGE_TIMEOUT_SECS {
                self.warning = None;
            }
        }
    }

    pub fn window_title(path: Option<&Path>) -> String {
        match path {
            Some(path) => path.display().to_string(),
            None => "Folder".to_string(),
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.save_once();
        }

        self.refresh_changed();
        self.clear_expired_warning();

        let mut events = Vec::new();
        self.render_toolbar(ctx, &mut events);
        self.render_status_bar(ctx);
        self.render_side_panel(ctx, &mut events);
        self.render_list_panel(ctx, &mut events);
        self.render_folder_windows(ctx, &mut events);
        self.handle_events(events);
    }
}
