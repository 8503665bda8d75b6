use tracing::{
    debug,
    info,
};

use super::{
    dismiss::DismissListeners,
    errors::RosterError,
    filter::{
        unique_classes,
        FilterSummary,
        RosterFilter,
    },
    models::{
        sample_roster,
        DraftForm,
        FormField,
        Student,
        StudentFields,
        StudentId,
    },
    session::{
        CloseReason,
        EditSession,
    },
    store::StudentStore,
    validation::{
        validate,
        FormErrors,
    },
};

/// User intents understood by [`RosterController::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterAction {
    SetField { field: FormField, value: String },
    SubmitCreate,
    OpenEdit(StudentId),
    SaveEdit,
    CloseEdit(CloseReason),
    Delete(StudentId),
    SetSearch(String),
    SetClassFilter(String),
    ClearFilters,
}

/// Everything the presentation layer needs for one frame.
#[derive(Debug)]
pub struct RosterView<'a> {
    pub students: Vec<&'a Student>,
    pub draft: &'a DraftForm,
    pub errors: &'a FormErrors,
    pub edit_open: bool,
    pub editing_id: Option<StudentId>,
    pub classes: Vec<String>,
    pub filter: &'a RosterFilter,
    pub is_filtering: bool,
    pub summary: FilterSummary,
}

/// Owns the roster state for one session. All mutation goes through here.
#[derive(Debug, Default)]
pub struct RosterController {
    store: StudentStore,
    draft: DraftForm,
    errors: FormErrors,
    filter: RosterFilter,
    listeners: DismissListeners,
    session: EditSession,
}

impl RosterController {
    pub fn new(students: Vec<Student>) -> Self {
        Self { store: StudentStore::from_students(students), ..Self::default() }
    }

    pub fn with_sample_roster() -> Self {
        Self::new(sample_roster())
    }

    pub fn store(&self) -> &StudentStore {
        &self.store
    }

    pub fn draft(&self) -> &DraftForm {
        &self.draft
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn filter(&self) -> &RosterFilter {
        &self.filter
    }

    pub fn listeners(&self) -> &DismissListeners {
        &self.listeners
    }

    pub fn edit_target(&self) -> Option<StudentId> {
        self.session.target()
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_open()
    }

    pub fn apply(&mut self, action: RosterAction) -> Result<(), RosterError> {
        match action {
            RosterAction::SetField { field, value } => self.set_field(field, value),
            RosterAction::SubmitCreate => {
                self.submit_create()?;
            }
            RosterAction::OpenEdit(id) => self.open_edit(id)?,
            RosterAction::SaveEdit => {
                self.save_edit()?;
            }
            RosterAction::CloseEdit(reason) => {
                self.close_edit(reason);
            }
            RosterAction::Delete(id) => {
                self.delete(id);
            }
            RosterAction::SetSearch(query) => self.set_search(query),
            RosterAction::SetClassFilter(class) => self.set_class_filter(class),
            RosterAction::ClearFilters => self.clear_filters(),
        }
        Ok(())
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        self.draft.set(field, value);
        self.errors.clear_field(field);
    }

    pub fn submit_create(&mut self) -> Result<StudentId, RosterError> {
        if let Some(target) = self.session.target() {
            return Err(RosterError::EditInProgress(target));
        }

        let fields = self.validate_draft()?;
        let id = self.store.insert(fields).ok_or(RosterError::IdsExhausted)?;
        self.draft.clear();
        self.errors.clear();
        info!(%id, total = self.store.len(), "student added");
        Ok(id)
    }

    pub fn open_edit(&mut self, id: StudentId) -> Result<(), RosterError> {
        let student = self.store.get(id).ok_or(RosterError::StudentNotFound(id))?;
        self.draft = DraftForm::from_student(student);
        self.errors.clear();
        self.session.open(id, &self.listeners);
        info!(%id, "editing student");
        Ok(())
    }

    pub fn save_edit(&mut self) -> Result<StudentId, RosterError> {
        let target = self.session.target().ok_or(RosterError::NoEditSession)?;
        let fields = self.validate_draft()?;

        if !self.store.update(target, fields) {
            self.close_edit(CloseReason::TargetDeleted);
            return Err(RosterError::StudentNotFound(target));
        }

        info!(id = %target, "student updated");
        self.close_edit(CloseReason::Saved);
        Ok(target)
    }

    /// Ends the edit session, discarding the draft. Returns false when no
    /// session was open.
    pub fn close_edit(&mut self, reason: CloseReason) -> bool {
        match self.session.close() {
            Some(target) => {
                self.draft.clear();
                self.errors.clear();
                debug!(id = %target, %reason, "edit session closed");
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: StudentId) -> Option<Student> {
        let removed = self.store.remove(id);
        match &removed {
            Some(_) => {
                info!(%id, total = self.store.len(), "student deleted");
                if self.session.target() == Some(id) {
                    self.close_edit(CloseReason::TargetDeleted);
                }
            }
            None => debug!(%id, "delete ignored, no such student"),
        }
        removed
    }

    pub fn set_search(&mut self, query: String) {
        self.filter.search_query = query;
    }

    pub fn set_class_filter(&mut self, class: String) {
        self.filter.class_filter = class;
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    pub fn visible_students(&self) -> Vec<&Student> {
        self.filter.apply(self.store.students())
    }

    pub fn view(&self) -> RosterView<'_> {
        let students = self.visible_students();
        let summary = FilterSummary::describe(&self.filter, students.len(), self.store.len());

        RosterView {
            students,
            draft: &self.draft,
            errors: &self.errors,
            edit_open: self.session.is_open(),
            editing_id: self.session.target(),
            classes: unique_classes(self.store.students()),
            filter: &self.filter,
            is_filtering: self.filter.is_filtering(),
            summary,
        }
    }

    fn validate_draft(&mut self) -> Result<StudentFields, RosterError> {
        match validate(&self.draft) {
            Ok(fields) => {
                self.errors.clear();
                Ok(fields)
            }
            Err(errors) => {
                debug!(%errors, "student form rejected");
                self.errors = errors.clone();
                Err(errors.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::NAME_REQUIRED;

    fn fill(controller: &mut RosterController, name: &str, class: &str, age: &str) {
        controller.set_field(FormField::Name, name.to_string());
        controller.set_field(FormField::Class, class.to_string());
        controller.set_field(FormField::Age, age.to_string());
    }

    #[test]
    fn create_on_five_records_assigns_six() {
        let mut controller = RosterController::new(sample_roster()[..5].to_vec());
        fill(&mut controller, "An", "10A1", "16");

        let id = controller.submit_create().unwrap();

        assert_eq!(id, StudentId(6));
        assert_eq!(controller.store().len(), 6);
        assert_eq!(controller.store().students()[5], Student::new(6, "An", "10A1", 16));
        assert_eq!(controller.draft(), &DraftForm::default());
        assert!(controller.errors().is_empty());
    }

    #[test]
    fn create_with_empty_name_is_rejected() {
        let mut controller = RosterController::with_sample_roster();
        let before = controller.store().clone();
        fill(&mut controller, "", "10A1", "16");

        let err = controller.submit_create().unwrap_err();

        assert!(matches!(err, RosterError::Validation(_)));
        assert_eq!(controller.store(), &before);
        assert_eq!(controller.errors().get(FormField::Name), Some(NAME_REQUIRED));
        assert_eq!(controller.draft().class, "10A1");
    }

    #[test]
    fn typing_clears_only_that_fields_error() {
        let mut controller = RosterController::default();
        assert!(controller.submit_create().is_err());
        assert!(controller.errors().get(FormField::Class).is_some());

        controller.set_field(FormField::Name, "A".into());

        assert_eq!(controller.errors().get(FormField::Name), None);
        assert!(controller.errors().get(FormField::Class).is_some());
        assert!(controller.errors().get(FormField::Age).is_some());
    }

    #[test]
    fn edit_save_updates_in_place_and_closes() {
        let mut controller = RosterController::with_sample_roster();
        controller.open_edit(StudentId(3)).unwrap();
        assert_eq!(controller.draft().age, "18");
        assert!(controller.listeners().is_listening());

        controller.set_field(FormField::Class, "12A1".into());
        assert_eq!(controller.save_edit().unwrap(), StudentId(3));

        assert!(!controller.is_editing());
        assert!(!controller.listeners().is_listening());
        assert_eq!(controller.store().students()[2], Student::new(3, "Lê Văn C", "12A1", 18));
        assert_eq!(controller.draft(), &DraftForm::default());
    }

    #[test]
    fn failed_save_keeps_session_open() {
        let mut controller = RosterController::with_sample_roster();
        let before = controller.store().clone();
        controller.open_edit(StudentId(2)).unwrap();
        controller.set_field(FormField::Age, "0".into());

        assert!(controller.save_edit().is_err());

        assert_eq!(controller.edit_target(), Some(StudentId(2)));
        assert!(controller.errors().get(FormField::Age).is_some());
        assert_eq!(controller.store(), &before);
    }

    #[test]
    fn every_close_path_resets_draft_and_listeners() {
        for reason in [CloseReason::Cancelled, CloseReason::OutsideClick, CloseReason::Escape] {
            let mut controller = RosterController::with_sample_roster();
            let before = controller.store().clone();
            controller.open_edit(StudentId(4)).unwrap();
            controller.set_field(FormField::Name, "changed".into());
            controller.set_field(FormField::Age, "".into());
            let _ = controller.save_edit();

            assert!(controller.close_edit(reason));

            assert_eq!(controller.store(), &before);
            assert_eq!(controller.draft(), &DraftForm::default());
            assert!(controller.errors().is_empty());
            assert!(!controller.listeners().is_listening());
        }
    }

    #[test]
    fn opening_an_edit_replaces_create_errors_with_the_record() {
        let mut controller = RosterController::with_sample_roster();
        fill(&mut controller, "", "", "abc");
        assert!(controller.submit_create().is_err());
        assert!(!controller.errors().is_empty());

        controller.open_edit(StudentId(1)).unwrap();

        assert!(controller.errors().is_empty());
        let expected = DraftForm::from_student(controller.store().get(StudentId(1)).unwrap());
        assert_eq!(controller.draft(), &expected);
    }

    #[test]
    fn create_fails_cleanly_when_ids_run_out() {
        let mut controller = RosterController::new(vec![Student::new(u32::MAX, "Last", "12A3", 18)]);
        fill(&mut controller, "An", "10A1", "16");

        assert!(matches!(controller.submit_create(), Err(RosterError::IdsExhausted)));
        assert_eq!(controller.store().len(), 1);
        assert_eq!(controller.draft().name, "An");
    }

    #[test]
    fn open_edit_on_missing_id_fails() {
        let mut controller = RosterController::with_sample_roster();
        assert!(matches!(
            controller.open_edit(StudentId(999)),
            Err(RosterError::StudentNotFound(StudentId(999)))
        ));
        assert!(!controller.is_editing());
    }

    #[test]
    fn save_without_session_fails() {
        let mut controller = RosterController::with_sample_roster();
        assert!(matches!(controller.save_edit(), Err(RosterError::NoEditSession)));
    }

    #[test]
    fn create_is_refused_while_editing() {
        let mut controller = RosterController::with_sample_roster();
        controller.open_edit(StudentId(1)).unwrap();
        assert!(matches!(controller.submit_create(), Err(RosterError::EditInProgress(_))));
        assert_eq!(controller.store().len(), 8);
    }

    #[test]
    fn deleting_the_edited_student_closes_the_session() {
        let mut controller = RosterController::with_sample_roster();
        controller.open_edit(StudentId(5)).unwrap();

        assert!(controller.delete(StudentId(5)).is_some());

        assert!(!controller.is_editing());
        assert!(!controller.listeners().is_listening());
    }

    #[test]
    fn view_reflects_filters() {
        let mut controller = RosterController::with_sample_roster();
        controller.apply(RosterAction::SetSearch("thị".into())).unwrap();
        controller.apply(RosterAction::SetClassFilter("11A2".into())).unwrap();

        let view = controller.view();
        let ids: Vec<u32> = view.students.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![2, 8]);
        assert!(view.is_filtering);
        assert_eq!(view.classes, vec!["10A1", "11A2", "12A3"]);
        assert_eq!(view.summary, FilterSummary::Found {
            count: 2,
            search_query: "thị".into(),
            class_filter: "11A2".into(),
        });

        controller.apply(RosterAction::ClearFilters).unwrap();
        assert_eq!(controller.view().students.len(), 8);
    }
}
