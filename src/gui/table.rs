use eframe::egui::{
    self,
    RichText,
    Ui,
};
use egui_extras::{
    Column,
    TableBuilder,
};

use super::{
    actions::ActionQueue,
    theme::Theme,
};
use crate::core::{
    RosterAction,
    RosterView,
    Student,
};

const ROW_HEIGHT: f32 = 32.0;

pub fn student_table(ui: &mut Ui, view: &RosterView<'_>, theme: &Theme, actions: &mut ActionQueue) {
    TableBuilder::new(ui)
        .id_salt("student_table")
        .striped(true)
        .resizable(false)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(180.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(130.0))
        .header(26.0, |mut header| {
            for title in ["Name", "Class", "Age"] {
                header.col(|ui| {
                    ui.label(theme.heading(ui.ctx(), title));
                });
            }
            header.col(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(theme.heading(ui.ctx(), "Actions"));
                });
            });
        })
        .body(|mut body| {
            if view.students.is_empty() {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(
                            RichText::new(view.summary.empty_message())
                                .color(theme.comment(ui.ctx())),
                        );
                    });
                    for _ in 0..3 {
                        row.col(|_| {});
                    }
                });
                return;
            }

            for student in &view.students {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(RichText::new(&student.name).strong());
                    });
                    row.col(|ui| {
                        ui.label(student.class.as_str());
                    });
                    row.col(|ui| {
                        ui.label(student.age.to_string());
                    });
                    row.col(|ui| {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            row_buttons(ui, student, theme, actions);
                        });
                    });
                });
            }
        });
}

/// Edit and delete buttons shared by the table rows and the cards.
pub fn row_buttons(ui: &mut Ui, student: &Student, theme: &Theme, actions: &mut ActionQueue) {
    // Laid out right to left: delete first so it ends up on the right.
    let delete = egui::Button::new(RichText::new("Delete").color(egui::Color32::WHITE))
        .fill(theme.red(ui.ctx()).linear_multiply(0.85));
    if ui.add(delete).clicked() {
        actions.push(RosterAction::Delete(student.id));
    }

    let edit = egui::Button::new(RichText::new("Edit").color(egui::Color32::WHITE))
        .fill(theme.cyan(ui.ctx()).linear_multiply(0.7));
    if ui.add(edit).clicked() {
        actions.push(RosterAction::OpenEdit(student.id));
    }
}
