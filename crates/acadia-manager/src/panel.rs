//! Form panel state machine.
//!
//! Closed → Open(create) on "add"; Closed → Open(edit) on "edit";
//! Open → Closed on successful submit or cancel; Open stays Open on a
//! failed submit. The terminal state of every interaction is Closed.

/// State of the create/edit form panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPanel {
    /// No form showing.
    #[default]
    Closed,
    /// Creating a new record.
    Create,
    /// Editing the selected record.
    Edit,
}

impl FormPanel {
    /// True while the panel shows a form.
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// User or system event driving the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// "Add" action.
    OpenCreate,
    /// "Edit" action on a record.
    OpenEdit,
    /// Mutation confirmed by the backend.
    SubmitSucceeded,
    /// Mutation rejected; error shown in place.
    SubmitFailed,
    /// Explicit cancel/close.
    Cancel,
}

/// Rejected panel transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal form panel transition: {from:?} on {event:?}")]
pub struct PanelTransitionError {
    /// State the panel was in.
    pub from: FormPanel,
    /// Event that does not apply there.
    pub event: PanelEvent,
}

/// Validate and apply a panel transition.
pub fn transition(from: FormPanel, event: PanelEvent) -> Result<FormPanel, PanelTransitionError> {
    use FormPanel::*;
    use PanelEvent::*;
    match (from, event) {
        (Closed, OpenCreate) => Ok(Create),
        (Closed, OpenEdit) => Ok(Edit),
        (Create | Edit, SubmitSucceeded | Cancel) => Ok(Closed),
        (Create, SubmitFailed) => Ok(Create),
        (Edit, SubmitFailed) => Ok(Edit),
        _ => Err(PanelTransitionError { from, event }),
    }
}
