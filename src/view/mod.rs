//! Stateful views composed from the stateless components.

use crate::domain::action::ActionKind;
use crate::domain::types::{PatientId, SearchQuery};

pub mod patient_list;

/// User interaction emitted by a component and consumed by its owning view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListEvent {
    Search(SearchQuery),
    ChangePage(usize),
    Action { target: PatientId, kind: ActionKind },
}
