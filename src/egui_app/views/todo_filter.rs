use eframe::egui;

use crate::egui_app::types::TodoAction;
use crate::shared::Filter;

const FILTERS: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

/// Render the All / Active / Completed switch
pub fn render(ui: &mut egui::Ui, current: Filter, actions: &mut Vec<TodoAction>) {
    ui.horizontal(|ui| {
        for filter in FILTERS {
            if ui.selectable_label(current == filter, filter.label()).clicked() && current != filter {
                actions.push(TodoAction::SetFilter(filter));
            }
        }
    });
}
