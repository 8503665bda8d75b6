use eframe::egui::{
    self,
    Margin,
    RichText,
    Ui,
};

use super::{
    actions::ActionQueue,
    table::row_buttons,
    theme::Theme,
};
use crate::core::RosterView;

/// Narrow-window rendering: one framed card per student.
pub fn student_cards(ui: &mut Ui, view: &RosterView<'_>, theme: &Theme, actions: &mut ActionQueue) {
    if view.students.is_empty() {
        egui::Frame::group(ui.style()).inner_margin(Margin::same(12)).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(view.summary.empty_message()).color(theme.comment(ui.ctx())));
            });
        });
        return;
    }

    for student in &view.students {
        egui::Frame::group(ui.style()).inner_margin(Margin::same(10)).show(ui, |ui| {
            ui.set_width(ui.available_width());

            egui::Sides::new().show(
                ui,
                |ui| {
                    ui.label(RichText::new(&student.name).size(16.0).strong());
                },
                |ui| {
                    row_buttons(ui, student, theme, actions);
                },
            );

            ui.horizontal(|ui| {
                ui.label(theme.bold(ui.ctx(), "Class:"));
                ui.label(student.class.as_str());
                ui.add_space(24.0);
                ui.label(theme.bold(ui.ctx(), "Age:"));
                ui.label(student.age.to_string());
            });
        });
        ui.add_space(6.0);
    }
}
