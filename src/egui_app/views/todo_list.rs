use eframe::egui;

use crate::egui_app::state::TodoStore;
use crate::egui_app::theme::colors;
use crate::egui_app::types::{TodoAction, UiState};
use crate::egui_app::views::todo_preview;

/// Render the filtered list, or the empty-state message
pub fn render(ui: &mut egui::Ui, store: &TodoStore, ui_state: &mut UiState, actions: &mut Vec<TodoAction>) {
    if let Some(message) = store.empty_message() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.colored_label(colors::TEXT_MUTED, message);
        });
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for item in store.filtered_items() {
                let draft = ui_state.drafts.get_mut(&item.id);
                todo_preview::render(ui, item, draft, store.is_syncing(&item.id), actions);
                ui.add_space(4.0);
            }
        });
}
