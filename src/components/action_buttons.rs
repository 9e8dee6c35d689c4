use serde::Serialize;

use crate::breakpoint::{Layout, Viewport};
use crate::domain::action::{ActionKind, ActionSet, Severity};
use crate::domain::types::PatientId;
use crate::view::ListEvent;

/// Per-row action buttons, bound to the row's patient at construction.
pub struct ActionButtonGroup<'a> {
    target: PatientId,
    actions: &'a ActionSet,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActionButtonView {
    pub kind: ActionKind,
    pub label: &'static str,
    pub icon: &'static str,
    pub css_class: &'static str,
    pub destructive: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActionButtonGroupView {
    pub target: PatientId,
    pub layout: Layout,
    pub buttons: Vec<ActionButtonView>,
}

impl<'a> ActionButtonGroup<'a> {
    pub fn new(target: PatientId, actions: &'a ActionSet) -> Self {
        Self { target, actions }
    }

    /// Emits the action event for `kind`, or nothing if the row does not offer it.
    pub fn click(&self, kind: ActionKind) -> Option<ListEvent> {
        self.actions.contains(kind).then_some(ListEvent::Action {
            target: self.target,
            kind,
        })
    }

    pub fn view(&self, viewport: Viewport) -> ActionButtonGroupView {
        let buttons = self
            .actions
            .iter()
            .map(|kind| ActionButtonView {
                kind,
                label: kind.label(),
                icon: kind.icon(),
                css_class: kind.severity().css_class(),
                destructive: kind.severity() == Severity::Destructive,
            })
            .collect();

        ActionButtonGroupView {
            target: self.target,
            layout: viewport.layout(),
            buttons,
        }
    }
}
