// Panel rendering for the primary window and folder windows

use super::folder::{render_listing, render_path_bar};
use super::tree::render_tree;
use crate::app::FolioApp;
use crate::style;
use eframe::egui;
use folio::message::ViewEvent;
use folio::state::{FavoriteCategory, NavigationHistory, PanelId};

/// Back / forward / up buttons for one panel.
fn render_nav_buttons(
    ui: &mut egui::Ui,
    history: Option<&NavigationHistory>,
    panel: PanelId,
    events: &mut Vec<ViewEvent>,
) {
    let can_back = history.is_some_and(NavigationHistory::can_go_back);
    let can_forward = history.is_some_and(NavigationHistory::can_go_forward);
    let has_location = history.is_some_and(|h| !h.is_empty());

    if ui.add_enabled(can_back, egui::Button::new("◀")).on_hover_text("Back").clicked() {
        events.push(ViewEvent::Back(panel));
    }
    if ui
        .add_enabled(can_forward, egui::Button::new("▶"))
        .on_hover_text("Forward")
        .clicked()
    {
        events.push(ViewEvent::Forward(panel));
    }
    if ui
        .add_enabled(has_location, egui::Button::new("⬆"))
        .on_hover_text("Parent folder")
        .clicked()
    {
        events.push(ViewEvent::Up(panel));
    }
}

impl FolioApp {
    pub(crate) fn render_toolbar(&mut self, ctx: &egui::Context, events: &mut Vec<ViewEvent>) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                render_nav_buttons(ui, self.coordinator.history(PanelId::List), PanelId::List, events);

                if ui.button("★").on_hover_text("Add selection to favorites").clicked() {
                    events.push(ViewEvent::AddSelectionToFavorites);
                }

                let mut show_hidden = self.show_hidden;
                if ui.checkbox(&mut show_hidden, "Hidden").changed() {
                    self.toggle_hidden();
                }
            });
            ui.add_space(4.0);
        });
    }

    pub(crate) fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} items", self.list.entries.len()));
                if !self.windows.is_empty() {
                    ui.label(format!("| {} folder window(s)", self.windows.len()));
                }
                if let Some((message, _)) = &self.warning {
                    ui.colored_label(style::WARNING_COLOR, format!("| {}", message));
                }
            });
        });
    }

    pub(crate) fn render_side_panel(&mut self, ctx: &egui::Context, events: &mut Vec<ViewEvent>) {
        egui::SidePanel::left("side_panel")
            .resizable(true)
            .default_width(self.config.panel.side_width)
            .show(ctx, |ui| {
                self.render_favorites(ui, events);
                ui.separator();
                render_tree(
                    ui,
                    &mut self.tree,
                    self.coordinator.resolver(),
                    self.show_hidden,
                    events,
                );
            });
    }

    fn render_favorites(&mut self, ui: &mut egui::Ui, events: &mut Vec<ViewEvent>) {
        egui::CollapsingHeader::new("Favorites")
            .id_salt("favorites")
            .default_open(true)
            .show(ui, |ui| {
                for category in FavoriteCategory::ALL {
                    let items = self.coordinator.favorites().list_items(category);
                    egui::CollapsingHeader::new(category.label())
                        .id_salt(category.label())
                        .default_open(true)
                        .show(ui, |ui| {
                            for item in items {
                                let is_selected = self
                                    .favorite_selected
                                    .as_ref()
                                    .is_some_and(|(c, p)| *c == category && *p == item.path);
                                let response = ui
                                    .selectable_label(is_selected, &item.display_name)
                                    .on_hover_text(item.path.display().to_string());

                                if response.clicked() {
                                    self.favorite_selected = Some((category, item.path.clone()));
                                    events.push(ViewEvent::Selected {
                                        panel: PanelId::Favorites,
                                        path: item.path.clone(),
                                    });
                                    if category == FavoriteCategory::Folder {
                                        events.push(ViewEvent::Activated {
                                            panel: PanelId::Favorites,
                                            path: item.path.clone(),
                                        });
                                    }
                                }
                                if response.double_clicked() && category == FavoriteCategory::File {
                                    events.push(ViewEvent::Activated {
                                        panel: PanelId::Favorites,
                                        path: item.path.clone(),
                                    });
                                }
                                response.context_menu(|ui| {
                                    if ui.button("Remove from favorites").clicked() {
                                        events.push(ViewEvent::RemoveFavorite {
                                            path: item.path.clone(),
                                            category,
                                        });
                                        ui.close();
                                    }
                                });
                            }
                        });
                }
            });
    }

    pub(crate) fn render_list_panel(&mut self, ctx: &egui::Context, events: &mut Vec<ViewEvent>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            render_path_bar(ui, &mut self.list, PanelId::List, events);
            ui.separator();
            render_listing(ui, &self.list, PanelId::List, events);
        });
    }

    pub(crate) fn render_folder_windows(&mut self, ctx: &egui::Context, events: &mut Vec<ViewEvent>) {
        let default_size = [
            self.config.window.folder_width,
            self.config.window.folder_height,
        ];
        for (&id, window) in self.windows.iter_mut() {
            let panel = PanelId::Window(id);
            let history = self.coordinator.history(panel);

            egui::Window::new(FolioApp::window_title(window.view.path.as_deref()))
                .id(egui::Id::new(("folder_window", id)))
                .open(&mut window.open)
                .default_size(default_size)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        render_nav_buttons(ui, history, panel, events);
                    });
                    render_path_bar(ui, &mut window.view, panel, events);
                    ui.separator();
                    render_listing(ui, &window.view, panel, events);
                });

            if !window.open {
                events.push(ViewEvent::WindowClosed(id));
            }
        }
        self.windows.retain(|_, window| window.open);
    }
}
