//! Row-scoped actions offered next to every patient in the list.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Operation a user can request for a single patient row.
///
/// The declaration order is the on-screen order of the buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    View,
    Edit,
    Delete,
}

/// Visual weight of an action button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Neutral,
    Caution,
    /// Irreversible data loss; rendered in the danger color.
    Destructive,
}

impl Severity {
    /// Button classes from the shared button stylesheet.
    pub const fn css_class(self) -> &'static str {
        match self {
            Severity::Neutral => "btn btn-sm",
            Severity::Caution => "btn btn-sm btn-warning",
            Severity::Destructive => "btn btn-sm btn-danger",
        }
    }
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [ActionKind::View, ActionKind::Edit, ActionKind::Delete];

    pub const fn severity(self) -> Severity {
        match self {
            ActionKind::View => Severity::Neutral,
            ActionKind::Edit => Severity::Caution,
            ActionKind::Delete => Severity::Destructive,
        }
    }

    /// Whether a successful action changes patient data and requires a re-fetch.
    pub const fn mutates(self) -> bool {
        matches!(self, ActionKind::Edit | ActionKind::Delete)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ActionKind::View => "view",
            ActionKind::Edit => "edit",
            ActionKind::Delete => "delete",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ActionKind::View => "مشاهده",
            ActionKind::Edit => "ویرایش",
            ActionKind::Delete => "حذف",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            ActionKind::View => "fas fa-eye",
            ActionKind::Edit => "fas fa-edit",
            ActionKind::Delete => "fas fa-trash",
        }
    }
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "view" => Ok(ActionKind::View),
            "edit" => Ok(ActionKind::Edit),
            "delete" => Ok(ActionKind::Delete),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown action `{other}`"
            ))),
        }
    }
}

/// Ordered set of actions available for a row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSet(BTreeSet<ActionKind>);

impl ActionSet {
    /// Every known action.
    pub fn all() -> Self {
        ActionKind::ALL.into_iter().collect()
    }

    pub fn with(mut self, kind: ActionKind) -> Self {
        self.0.insert(kind);
        self
    }

    pub fn contains(&self, kind: ActionKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates in display order: view, edit, delete.
    pub fn iter(&self) -> impl Iterator<Item = ActionKind> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<ActionKind> for ActionSet {
    fn from_iter<I: IntoIterator<Item = ActionKind>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_set_iterates_in_display_order() {
        let set: ActionSet = [ActionKind::Delete, ActionKind::View, ActionKind::Edit]
            .into_iter()
            .collect();

        let order: Vec<_> = set.iter().collect();

        assert_eq!(order, ActionKind::ALL.to_vec());
    }

    #[test]
    fn only_delete_is_destructive() {
        for kind in ActionKind::ALL {
            assert_eq!(
                kind.severity() == Severity::Destructive,
                kind == ActionKind::Delete
            );
        }
        assert!(ActionKind::Delete.severity().css_class().contains("btn-danger"));
    }

    #[test]
    fn parses_action_names() {
        assert_eq!("Delete".parse::<ActionKind>(), Ok(ActionKind::Delete));
        assert_eq!(" edit ".parse::<ActionKind>(), Ok(ActionKind::Edit));
        assert!("archive".parse::<ActionKind>().is_err());
    }

    #[test]
    fn view_does_not_mutate() {
        assert!(!ActionKind::View.mutates());
        assert!(ActionKind::Edit.mutates());
        assert!(ActionKind::Delete.mutates());
    }
}
