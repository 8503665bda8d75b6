pub mod actions;
pub mod app;
pub mod cards;
pub mod filter_bar;
pub mod modal;
pub mod settings;
pub mod student_form;
pub mod table;
pub mod theme;
pub mod top_bar;

pub use actions::{
    ActionQueue,
    UiAction,
};
pub use app::RosterApp;
