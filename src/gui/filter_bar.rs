use eframe::egui::{
    self,
    Margin,
    RichText,
    TextEdit,
    Ui,
};

use super::{
    actions::ActionQueue,
    theme::Theme,
};
use crate::core::{
    RosterAction,
    RosterView,
};

const ALL_CLASSES: &str = "All classes";

pub fn filter_bar(ui: &mut Ui, view: &RosterView<'_>, theme: &Theme, actions: &mut ActionQueue) {
    egui::Frame::group(ui.style()).inner_margin(Margin::same(12)).show(ui, |ui| {
        ui.label(theme.heading(ui.ctx(), "Search and filter"));
        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 16.0;

            ui.vertical(|ui| {
                ui.label("Search by name");
                let mut search = view.filter.search_query.clone();
                let response = ui.add(
                    TextEdit::singleline(&mut search)
                        .id_salt("roster_search")
                        .hint_text("🔍 Enter a student name...")
                        .desired_width(260.0),
                );
                if response.changed() {
                    actions.push(RosterAction::SetSearch(search));
                }
            });

            ui.vertical(|ui| {
                ui.label("Filter by class");
                let mut selected = view.filter.class_filter.clone();
                let selected_text =
                    if selected.is_empty() { ALL_CLASSES.to_string() } else { selected.clone() };

                egui::ComboBox::from_id_salt("roster_class_filter")
                    .selected_text(selected_text)
                    .width(180.0)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut selected, String::new(), ALL_CLASSES);
                        for class in &view.classes {
                            ui.selectable_value(&mut selected, class.clone(), class.as_str());
                        }
                    });

                if selected != view.filter.class_filter {
                    actions.push(RosterAction::SetClassFilter(selected));
                }
            });
        });

        if view.is_filtering {
            ui.add_space(6.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("✖ Clear filters").clicked() {
                    actions.push(RosterAction::ClearFilters);
                }
            });
        }
    });

    if view.is_filtering {
        if let Some(message) = view.summary.message() {
            ui.add_space(4.0);
            ui.label(RichText::new(message).color(theme.comment(ui.ctx())));
        }
    }
}
