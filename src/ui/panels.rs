use eframe::egui::Ui;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Bottom bar
// ---------------------------------------------------------------------------

/// File name and row count, nothing interactive.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(state.status_line());
    });
}
