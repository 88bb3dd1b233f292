use eframe::egui;

// --- Sizing ---
pub const ICON_COL_WIDTH: f32 = 30.0;
pub const SIZE_COL_WIDTH: f32 = 80.0;
pub const MODIFIED_COL_WIDTH: f32 = 130.0;
pub const ROW_HEIGHT: f32 = 24.0;
pub const HEADER_HEIGHT: f32 = 20.0;

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

pub const WARNING_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 160, 60);

pub fn truncated_label_with_sense(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    sense: egui::Sense,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().sense(sense))
}
