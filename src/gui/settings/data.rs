use serde::{
    Deserialize,
    Serialize,
};

use crate::gui::theme::ThemeChoice;

pub const SETTINGS_FILE: &str = "settings.json";

/// Below this width the roster is shown as cards instead of a table.
pub const TABLE_MIN_WIDTH: f32 = 640.0;

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutMode {
    #[default]
    Auto,
    Table,
    Cards,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 3] = [LayoutMode::Auto, LayoutMode::Table, LayoutMode::Cards];

    pub fn label(&self) -> &'static str {
        match self {
            LayoutMode::Auto => "Automatic",
            LayoutMode::Table => "Table",
            LayoutMode::Cards => "Cards",
        }
    }

    pub fn use_table(&self, available_width: f32) -> bool {
        match self {
            LayoutMode::Auto => available_width >= TABLE_MIN_WIDTH,
            LayoutMode::Table => true,
            LayoutMode::Cards => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub theme: ThemeChoice,
    pub layout: LayoutMode,
    pub zoom: f32,
    pub seed_sample_roster: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { theme: ThemeChoice::default(), layout: LayoutMode::Auto, zoom: 1.0, seed_sample_roster: true }
    }
}

impl SettingsData {
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }
}
