// Folder contents - the listing shown by the primary list and folder windows
use crate::style;
use chrono::{DateTime, Local};
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use folio::entry::FileEntry;
use folio::io::{FileSystem, PathResolver};
use folio::message::ViewEvent;
use folio::state::PanelId;
use std::path::{Path, PathBuf};

/// What one listing panel currently shows.
#[derive(Default)]
pub struct FolderView {
    pub path: Option<PathBuf>,
    pub entries: Vec<FileEntry>,
    pub selected: Option<PathBuf>,
    pub path_text: String,
    pub error: Option<String>,
}

impl FolderView {
    pub fn reroot<F: FileSystem>(&mut self, path: PathBuf, resolver: &PathResolver<F>, show_hidden: bool) {
        self.path_text = path.display().to_string();
        self.path = Some(path);
        self.selected = None;
        self.refresh(resolver, show_hidden);
    }

    pub fn refresh<F: FileSystem>(&mut self, resolver: &PathResolver<F>, show_hidden: bool) {
        let Some(path) = &self.path else {
            return;
        };
        match resolver.list(path, show_hidden) {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
            }
            Err(e) => {
                self.entries.clear();
                self.error = Some(format!("Error reading {}: {}", path.display(), e));
            }
        }
    }

    pub fn shows(&self, path: &Path) -> bool {
        self.path.as_deref() == Some(path)
    }
}

/// Path bar for a listing. Enter submits the text as a location.
pub fn render_path_bar(ui: &mut egui::Ui, view: &mut FolderView, panel: PanelId, events: &mut Vec<ViewEvent>) {
    let response = ui.add(
        egui::TextEdit::singleline(&mut view.path_text)
            .hint_text("Enter path...")
            .desired_width(f32::INFINITY),
    );
    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        events.push(ViewEvent::PathSubmitted {
            panel,
            text: view.path_text.clone(),
        });
    }
}

pub fn render_listing(ui: &mut egui::Ui, view: &FolderView, panel: PanelId, events: &mut Vec<ViewEvent>) {
    if let Some(err) = &view.error {
        ui.colored_label(egui::Color32::RED, err);
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(style::ICON_COL_WIDTH))
        .column(Column::remainder().clip(true))
        .column(Column::exact(style::SIZE_COL_WIDTH))
        .column(Column::exact(style::MODIFIED_COL_WIDTH))
        .header(style::HEADER_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.label("");
            });
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Size");
            });
            header.col(|ui| {
                ui.strong("Modified");
            });
        })
        .body(|body| {
            body.rows(style::ROW_HEIGHT, view.entries.len(), |mut row| {
                let entry = &view.entries[row.index()];
                let is_selected = view.selected.as_deref() == Some(entry.path.as_path());
                row.set_selected(is_selected);

                row.col(|ui| {
                    ui.label(entry.icon());
                });
                row.col(|ui| {
                    let response = style::truncated_label_with_sense(
                        ui,
                        entry.display_name(),
                        egui::Sense::click(),
                    );
                    if response.clicked() {
                        events.push(ViewEvent::Selected {
                            panel,
                            path: entry.path.clone(),
                        });
                    }
                    if response.double_clicked() {
                        events.push(ViewEvent::Activated {
                            panel,
                            path: entry.path.clone(),
                        });
                    }
                    entry_context_menu(&response, entry, events);
                });
                row.col(|ui| {
                    if !entry.is_dir {
                        ui.label(bytesize::ByteSize(entry.size).to_string());
                    }
                });
                row.col(|ui| {
                    let modified: DateTime<Local> = entry.modified.into();
                    ui.label(modified.format("%Y-%m-%d %H:%M").to_string());
                });
            });
        });
}

/// Right-click menu shared by listings and the tree.
pub fn entry_context_menu(response: &egui::Response, entry: &FileEntry, events: &mut Vec<ViewEvent>) {
    response.context_menu(|ui| {
        let label = if entry.is_dir {
            "Add folder to favorites"
        } else {
            "Add file to favorites"
        };
        if ui.button(label).clicked() {
            events.push(ViewEvent::AddFavorite(entry.path.clone()));
            ui.close();
        }
        if entry.is_dir && ui.button("Open in new window").clicked() {
            events.push(ViewEvent::OpenWindow(entry.path.clone()));
            ui.close();
        }
    });
}
