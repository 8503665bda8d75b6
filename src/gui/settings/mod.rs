pub mod data;

pub use data::{
    LayoutMode,
    SettingsData,
    SETTINGS_FILE,
};
