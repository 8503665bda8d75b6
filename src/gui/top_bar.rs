use eframe::egui::{
    self,
    containers,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    settings::{
        LayoutMode,
        SettingsData,
    },
    theme::ThemeChoice,
};

const ZOOM_STEP: f32 = 0.1;

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, settings: &SettingsData, actions: &mut ActionQueue) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    Self::theme_menu(ui, settings, actions);
                    ui.separator();
                    Self::layout_menu(ui, settings, actions);
                    ui.separator();
                    Self::zoom_menu(ui, settings, actions);
                });

                ui.menu_button("Data", |ui| {
                    let mut seed = settings.seed_sample_roster;
                    if ui
                        .checkbox(&mut seed, "Load sample students on start")
                        .on_hover_text("Takes effect the next time the roster is opened")
                        .changed()
                    {
                        actions.push(UiAction::SetSeedSampleRoster(seed));
                    }
                });
            });
        });
    }

    fn theme_menu(ui: &mut egui::Ui, settings: &SettingsData, actions: &mut ActionQueue) {
        ui.label("Theme");
        for choice in ThemeChoice::ALL {
            if ui.radio(settings.theme == choice, choice.label()).clicked() {
                actions.push(UiAction::SetTheme(choice));
            }
        }
    }

    fn layout_menu(ui: &mut egui::Ui, settings: &SettingsData, actions: &mut ActionQueue) {
        ui.label("Layout");
        for mode in LayoutMode::ALL {
            if ui.radio(settings.layout == mode, mode.label()).clicked() {
                actions.push(UiAction::SetLayout(mode));
            }
        }
    }

    fn zoom_menu(ui: &mut egui::Ui, settings: &SettingsData, actions: &mut ActionQueue) {
        ui.label(format!("Zoom {:.0}%", settings.zoom * 100.0));
        ui.horizontal(|ui| {
            if ui.button("−").clicked() {
                actions.push(UiAction::SetZoom(settings.zoom - ZOOM_STEP));
            }
            if ui.button("Reset").clicked() {
                actions.push(UiAction::SetZoom(1.0));
            }
            if ui.button("+").clicked() {
                actions.push(UiAction::SetZoom(settings.zoom + ZOOM_STEP));
            }
        });
    }
}
