use eframe::egui::{
    self,
    RichText,
    TextEdit,
    Ui,
};

use super::{
    actions::ActionQueue,
    theme::Theme,
};
use crate::core::{
    DraftForm,
    FormErrors,
    FormField,
    RosterAction,
};

/// Name, class and age inputs with their inline errors. Returns true when the
/// user pressed Enter in one of the fields.
pub fn form_fields(
    ui: &mut Ui,
    id_salt: &str,
    draft: &DraftForm,
    errors: &FormErrors,
    theme: &Theme,
    actions: &mut ActionQueue,
) -> bool {
    let mut submitted = false;

    for field in FormField::ALL {
        ui.label(field.label());

        let mut value = draft.get(field).to_string();
        let error = errors.get(field);

        let mut edit = TextEdit::singleline(&mut value)
            .id_salt((id_salt, field))
            .hint_text(field.hint())
            .desired_width(f32::INFINITY);
        if error.is_some() {
            edit = edit.text_color(ui.visuals().error_fg_color);
        }

        let response = ui.add(edit);
        if response.changed() {
            actions.push(RosterAction::SetField { field, value });
        }
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submitted = true;
        }

        if let Some(message) = error {
            ui.label(RichText::new(message).small().color(theme.red(ui.ctx())));
        }
        ui.add_space(6.0);
    }

    submitted
}

pub fn add_student_panel(
    ui: &mut Ui,
    draft: &DraftForm,
    errors: &FormErrors,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    egui::Frame::group(ui.style()).inner_margin(egui::Margin::same(12)).show(ui, |ui| {
        ui.label(theme.heading(ui.ctx(), "Add new student"));
        ui.add_space(8.0);

        let submitted = form_fields(ui, "add_student", draft, errors, theme, actions);

        let button = egui::Button::new(RichText::new("Add student").color(egui::Color32::WHITE))
            .fill(theme.green(ui.ctx()).linear_multiply(0.8));
        if ui.add(button).clicked() || submitted {
            actions.push(RosterAction::SubmitCreate);
        }
    });
}
