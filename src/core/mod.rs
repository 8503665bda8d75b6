pub mod controller;
pub mod dismiss;
pub mod errors;
pub mod filter;
pub mod models;
pub mod session;
pub mod store;
pub mod validation;

pub use controller::{
    RosterAction,
    RosterController,
    RosterView,
};
pub use errors::RosterError;
pub use filter::{
    FilterSummary,
    RosterFilter,
};
pub use models::{
    DraftForm,
    FormField,
    Student,
    StudentId,
};
pub use session::CloseReason;
pub use validation::FormErrors;
