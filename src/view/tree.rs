// Directory tree - lazily listed, rooted wherever the tree path bar says
use super::folder::entry_context_menu;
use eframe::egui;
use egui::collapsing_header::CollapsingState;
use folio::entry::FileEntry;
use folio::io::{display_name, FileSystem, PathResolver};
use folio::message::ViewEvent;
use folio::state::PanelId;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct TreeView {
    pub root: PathBuf,
    pub selected: Option<PathBuf>,
    pub path_text: String,
    children: HashMap<PathBuf, Vec<FileEntry>>,
}

impl TreeView {
    pub fn new(root: PathBuf) -> Self {
        Self {
            path_text: root.display().to_string(),
            root,
            selected: None,
            children: HashMap::new(),
        }
    }

    pub fn reroot(&mut self, root: PathBuf) {
        self.path_text = root.display().to_string();
        self.root = root;
        self.children.clear();
    }

    /// Drops cached children so they are listed again on next draw.
    pub fn invalidate(&mut self, path: &Path) {
        self.children.remove(path);
    }

    pub fn invalidate_all(&mut self) {
        self.children.clear();
    }

    fn subdirectories<F: FileSystem>(
        &mut self,
        path: &Path,
        resolver: &PathResolver<F>,
        show_hidden: bool,
    ) -> Vec<FileEntry> {
        self.children
            .entry(path.to_path_buf())
            .or_insert_with(|| {
                resolver
                    .list(path, show_hidden)
                    .map(|entries| entries.into_iter().filter(|e| e.is_dir).collect())
                    .unwrap_or_default()
            })
            .clone()
    }
}

pub fn render_tree<F: FileSystem>(
    ui: &mut egui::Ui,
    tree: &mut TreeView,
    resolver: &PathResolver<F>,
    show_hidden: bool,
    events: &mut Vec<ViewEvent>,
) {
    let response = ui.add(
        egui::TextEdit::singleline(&mut tree.path_text)
            .hint_text("Enter path for the tree view...")
            .desired_width(f32::INFINITY),
    );
    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        events.push(ViewEvent::TreeRootSubmitted(tree.path_text.clone()));
    }

    egui::ScrollArea::vertical()
        .id_salt("tree_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let root = tree.root.clone();
            let root_entry = FileEntry {
                name: display_name(&root),
                path: root,
                is_dir: true,
                is_symlink: false,
                size: 0,
                modified: std::time::SystemTime::UNIX_EPOCH,
            };
            render_node(ui, tree, &root_entry, true, resolver, show_hidden, events);
        });
}

fn render_node<F: FileSystem>(
    ui: &mut egui::Ui,
    tree: &mut TreeView,
    entry: &FileEntry,
    default_open: bool,
    resolver: &PathResolver<F>,
    show_hidden: bool,
    events: &mut Vec<ViewEvent>,
) {
    let id = ui.make_persistent_id(("tree", &entry.path));
    let is_selected = tree.selected.as_deref() == Some(entry.path.as_path());

    CollapsingState::load_with_default_open(ui.ctx(), id, default_open)
        .show_header(ui, |ui| {
            let response = ui.selectable_label(is_selected, format!("📁 {}", entry.name));
            if response.clicked() {
                events.push(ViewEvent::Selected {
                    panel: PanelId::Tree,
                    path: entry.path.clone(),
                });
                events.push(ViewEvent::Activated {
                    panel: PanelId::Tree,
                    path: entry.path.clone(),
                });
            }
            entry_context_menu(&response, entry, events);
        })
        .body(|ui| {
            for child in tree.subdirectories(&entry.path, resolver, show_hidden) {
                render_node(ui, tree, &child, false, resolver, show_hidden, events);
            }
        });
}
