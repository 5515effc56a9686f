//! Todo Row
//!
//! One row of the list. In display mode: completion checkbox, title, Edit
//! and Delete buttons. In edit mode: a text field with Save and Cancel.

use eframe::egui;

use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::TodoAction;
use crate::shared::Item;

/// Render a single todo
///
/// `draft` is the title being edited, when the row is in edit mode.
pub fn render(
    ui: &mut egui::Ui,
    item: &Item,
    draft: Option<&mut String>,
    syncing: bool,
    actions: &mut Vec<TodoAction>,
) {
    styles::row_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| match draft {
            Some(draft) => render_editing(ui, item, draft, actions),
            None => render_display(ui, item, syncing, actions),
        });
    });
}

fn render_display(ui: &mut egui::Ui, item: &Item, syncing: bool, actions: &mut Vec<TodoAction>) {
    let mut completed = item.is_completed;
    if ui.checkbox(&mut completed, "").changed() {
        actions.push(TodoAction::Toggle(item.id.clone()));
    }

    let title = if item.is_completed {
        egui::RichText::new(&item.title).strikethrough().color(colors::TEXT_MUTED)
    } else {
        egui::RichText::new(&item.title).color(colors::TEXT_DARK)
    };
    ui.label(title);

    if syncing {
        ui.colored_label(colors::SYNCING, "●").on_hover_text("Saving…");
    }

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui.button("Delete").clicked() {
            actions.push(TodoAction::Delete(item.id.clone()));
        }
        if ui.button("Edit").clicked() {
            actions.push(TodoAction::StartEdit(item.clone()));
        }
    });
}

fn render_editing(ui: &mut egui::Ui, item: &Item, draft: &mut String, actions: &mut Vec<TodoAction>) {
    let response = ui.add(
        egui::TextEdit::singleline(draft).desired_width(ui.available_width() - 130.0),
    );

    let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
    if response.lost_focus() && enter_pressed {
        actions.push(TodoAction::SaveEdit(item.id.clone()));
    }
    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        actions.push(TodoAction::CancelEdit(item.id.clone()));
    }

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui.button("Cancel").clicked() {
            actions.push(TodoAction::CancelEdit(item.id.clone()));
        }
        if ui.button("Save").clicked() {
            actions.push(TodoAction::SaveEdit(item.id.clone()));
        }
    });
}
