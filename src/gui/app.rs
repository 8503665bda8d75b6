use std::path::PathBuf;

use eframe::egui::{
    self,
    RichText,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    cards::student_cards,
    filter_bar::filter_bar,
    modal::{
        action_buttons,
        Modal,
        ModalResult,
    },
    settings::{
        SettingsData,
        SETTINGS_FILE,
    },
    student_form::{
        add_student_panel,
        form_fields,
    },
    table::student_table,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    core::{
        CloseReason,
        RosterAction,
        RosterController,
        RosterError,
        RosterView,
    },
    persistence::{
        get_data_file_path,
        save_json_to,
    },
};

pub struct RosterApp {
    pub controller: RosterController,
    pub settings: SettingsData,
    pub theme: Theme,
    edit_modal: Modal,
    actions: ActionQueue,
    settings_path: Option<PathBuf>,
}

impl RosterApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: SettingsData) -> Self {
        let theme = settings.theme.theme();
        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_zoom_factor(settings.zoom);

        let mut app = Self::with_settings(settings);
        app.settings_path = Some(get_data_file_path(SETTINGS_FILE));
        app
    }

    /// Builds the app state without touching an egui context. Settings
    /// changes are kept in memory only.
    pub fn with_settings(settings: SettingsData) -> Self {
        let controller = if settings.seed_sample_roster {
            RosterController::with_sample_roster()
        } else {
            RosterController::default()
        };
        tracing::info!(students = controller.store().len(), "roster session started");

        Self {
            controller,
            theme: settings.theme.theme(),
            settings,
            edit_modal: Modal::new("Edit student"),
            actions: ActionQueue::new(),
            settings_path: None,
        }
    }

    pub fn queue(&mut self, action: impl Into<UiAction>) {
        self.actions.push(action);
    }

    /// Applies everything queued during the frame, in order.
    pub fn process_actions(&mut self, ctx: Option<&egui::Context>) {
        let actions: Vec<UiAction> = self.actions.drain().collect();
        for action in actions {
            match action {
                UiAction::Roster(action) => self.apply_roster_action(action),
                UiAction::SetTheme(choice) => {
                    self.settings.theme = choice;
                    self.theme = choice.theme();
                    if let Some(ctx) = ctx {
                        set_theme(ctx, &self.theme);
                    }
                    self.save_settings();
                }
                UiAction::SetLayout(layout) => {
                    self.settings.layout = layout;
                    self.save_settings();
                }
                UiAction::SetZoom(zoom) => {
                    self.settings.set_zoom(zoom);
                    if let Some(ctx) = ctx {
                        ctx.set_zoom_factor(self.settings.zoom);
                    }
                    self.save_settings();
                }
                UiAction::SetSeedSampleRoster(seed) => {
                    self.settings.seed_sample_roster = seed;
                    self.save_settings();
                }
            }
        }
    }

    fn apply_roster_action(&mut self, action: RosterAction) {
        match self.controller.apply(action) {
            Ok(()) => {}
            // Field errors are already in the form state.
            Err(RosterError::Validation(_)) => {}
            Err(e) => tracing::debug!("roster action rejected: {}", e),
        }
    }

    fn save_settings(&self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        if let Err(e) = save_json_to(&self.settings, path) {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }

    fn roster_panel(&mut self, ctx: &egui::Context) {
        let view = self.controller.view();
        let theme = &self.theme;
        let actions = &mut self.actions;
        let layout = self.settings.layout;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.heading(RichText::new("Student list").color(theme.cyan(ui.ctx())).strong());
                ui.add_space(12.0);

                ui.add_enabled_ui(!view.edit_open, |ui| {
                    add_student_panel(ui, view.draft, view.errors, theme, actions);
                    ui.add_space(12.0);
                    filter_bar(ui, &view, theme, actions);
                    ui.add_space(12.0);

                    if layout.use_table(ui.available_width()) {
                        student_table(ui, &view, theme, actions);
                    } else {
                        student_cards(ui, &view, theme, actions);
                    }
                });
            });
        });

        if view.edit_open {
            let listening = self.controller.listeners().is_listening();
            if let Some(result) = edit_dialog(ctx, &self.edit_modal, &view, theme, listening, actions) {
                let action = match result {
                    ModalResult::Confirmed => RosterAction::SaveEdit,
                    ModalResult::Cancelled => RosterAction::CloseEdit(CloseReason::Cancelled),
                    ModalResult::Dismissed(reason) => RosterAction::CloseEdit(reason),
                };
                actions.push(action);
            }
        }
    }
}

fn edit_dialog(
    ctx: &egui::Context,
    modal: &Modal,
    view: &RosterView<'_>,
    theme: &Theme,
    listening: bool,
    actions: &mut ActionQueue,
) -> Option<ModalResult> {
    modal.show(ctx, listening, |ui| {
        let submitted = form_fields(ui, "edit_student", view.draft, view.errors, theme, actions);
        ui.add_space(4.0);
        let result = action_buttons(ui, "Save", "Cancel");
        if submitted { Some(ModalResult::Confirmed) } else { result }
    })
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBar::show(ctx, &self.settings, &mut self.actions);
        self.roster_panel(ctx);
        self.process_actions(Some(ctx));
    }
}
