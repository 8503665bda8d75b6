use eframe::egui;

use crate::core::CloseReason;

const MODAL_WIDTH: f32 = 380.0;
const OVERLAY_ALPHA: u8 = 100;

/// Centered window over a dimming overlay. Clicking the overlay or pressing
/// Escape dismisses it.
pub struct Modal {
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalResult {
    Confirmed,
    Cancelled,
    Dismissed(CloseReason),
}

impl Modal {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    /// Draws the modal for this frame. Outside clicks and Escape are only
    /// honoured while `listening` is true.
    pub fn show<F>(&self, ctx: &egui::Context, listening: bool, content: F) -> Option<ModalResult>
    where
        F: FnOnce(&mut egui::Ui) -> Option<ModalResult>,
    {
        let clicked_outside = show_overlay(ctx);

        let inner = egui::Window::new(&self.title)
            .id(egui::Id::new("modal_window").with(&self.title))
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.set_width(MODAL_WIDTH);
                content(ui)
            })
            .and_then(|response| response.inner)
            .flatten();

        if inner.is_some() || !listening {
            return inner;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            return Some(ModalResult::Dismissed(CloseReason::Escape));
        }

        if clicked_outside {
            return Some(ModalResult::Dismissed(CloseReason::OutsideClick));
        }

        None
    }
}

fn show_overlay(ctx: &egui::Context) -> bool {
    egui::Area::new(egui::Id::new("modal_overlay"))
        .order(egui::Order::Middle)
        .fixed_pos(egui::Pos2::ZERO)
        .show(ctx, |ui| {
            let screen_rect = ctx.screen_rect();
            let (_rect, response) = ui.allocate_exact_size(screen_rect.size(), egui::Sense::click());
            ui.painter().rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(OVERLAY_ALPHA));
            response.clicked()
        })
        .inner
}

pub fn action_buttons(ui: &mut egui::Ui, confirm_text: &str, cancel_text: &str) -> Option<ModalResult> {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui.button(confirm_text).clicked() {
            Some(ModalResult::Confirmed)
        } else if ui.button(cancel_text).clicked() {
            Some(ModalResult::Cancelled)
        } else {
            None
        }
    })
    .inner
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape_frame(listening: bool) -> Option<ModalResult> {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            events: vec![egui::Event::Key {
                key: egui::Key::Escape,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::default(),
            }],
            ..Default::default()
        };

        let modal = Modal::new("Edit student");
        let mut result = None;
        let _ = ctx.run(input, |ctx| {
            result = modal.show(ctx, listening, |_| None);
        });
        result
    }

    #[test]
    fn escape_dismisses_while_listening() {
        assert_eq!(escape_frame(true), Some(ModalResult::Dismissed(CloseReason::Escape)));
    }

    #[test]
    fn escape_is_ignored_without_listener() {
        assert_eq!(escape_frame(false), None);
    }
}
