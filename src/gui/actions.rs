use super::{
    settings::LayoutMode,
    theme::ThemeChoice,
};
use crate::core::RosterAction;

// Widgets only record what the user did; the app applies it after the frame
// is drawn, so rendering never needs a mutable borrow of the roster.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Roster(RosterAction),

    // Settings
    SetTheme(ThemeChoice),
    SetLayout(LayoutMode),
    SetZoom(f32),
    SetSeedSampleRoster(bool),
}

impl From<RosterAction> for UiAction {
    fn from(action: RosterAction) -> Self {
        UiAction::Roster(action)
    }
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: impl Into<UiAction>) {
        self.actions.push(action.into());
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StudentId;

    #[test]
    fn drain_preserves_push_order() {
        let mut queue = ActionQueue::new();
        queue.push(RosterAction::OpenEdit(StudentId(1)));
        queue.push(UiAction::SetZoom(1.5));
        queue.push(RosterAction::SaveEdit);

        let drained: Vec<UiAction> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                UiAction::Roster(RosterAction::OpenEdit(StudentId(1))),
                UiAction::SetZoom(1.5),
                UiAction::Roster(RosterAction::SaveEdit),
            ]
        );
        assert!(queue.is_empty());
    }
}
