use std::fmt;

use super::{
    dismiss::{
        DismissListeners,
        DismissSubscription,
    },
    models::StudentId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Saved,
    Cancelled,
    OutsideClick,
    Escape,
    TargetDeleted,
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CloseReason::Saved => "saved",
            CloseReason::Cancelled => "cancelled",
            CloseReason::OutsideClick => "outside click",
            CloseReason::Escape => "escape",
            CloseReason::TargetDeleted => "target deleted",
        };
        f.write_str(text)
    }
}

/// Which record the edit dialog is bound to. The dismissal subscription lives
/// exactly as long as the `Open` state.
#[derive(Debug, Default)]
pub enum EditSession {
    #[default]
    Closed,
    Open { target: StudentId, subscription: DismissSubscription },
}

impl EditSession {
    pub fn open(&mut self, target: StudentId, listeners: &DismissListeners) {
        // Release any previous subscription before taking a new one.
        *self = EditSession::Closed;
        *self = EditSession::Open { target, subscription: listeners.subscribe() };
    }

    /// Returns the target that was open, if any.
    pub fn close(&mut self) -> Option<StudentId> {
        match std::mem::take(self) {
            EditSession::Open { target, .. } => Some(target),
            EditSession::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EditSession::Open { .. })
    }

    pub fn target(&self) -> Option<StudentId> {
        match self {
            EditSession::Open { target, .. } => Some(*target),
            EditSession::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_and_close_track_subscription() {
        let listeners = DismissListeners::new();
        let mut session = EditSession::default();
        assert!(!session.is_open());

        session.open(StudentId(3), &listeners);
        assert_eq!(session.target(), Some(StudentId(3)));
        assert!(listeners.is_listening());

        assert_eq!(session.close(), Some(StudentId(3)));
        assert!(!session.is_open());
        assert!(!listeners.is_listening());
        assert_eq!(session.close(), None);
    }

    #[test]
    fn reopening_keeps_a_single_subscription() {
        let listeners = DismissListeners::new();
        let mut session = EditSession::default();

        session.open(StudentId(1), &listeners);
        session.open(StudentId(2), &listeners);

        assert_eq!(session.target(), Some(StudentId(2)));
        assert_eq!(listeners.active_count(), 1);
    }
}
