//! Add Todo Form
//!
//! A single-line input plus an Add button. Enter submits too.

use eframe::egui;

use crate::egui_app::types::TodoAction;

/// Render the add form
pub fn render(ui: &mut egui::Ui, new_title: &mut String, actions: &mut Vec<TodoAction>) {
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(new_title)
                .hint_text("What needs to be done?")
                .desired_width(ui.available_width() - 60.0),
        );

        // Submit on Enter
        let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if response.lost_focus() && enter_pressed {
            actions.push(TodoAction::Add);
            response.request_focus();
        }

        let can_submit = !new_title.trim().is_empty();
        if ui.add_enabled(can_submit, egui::Button::new("Add")).clicked() {
            actions.push(TodoAction::Add);
        }
    });
}
