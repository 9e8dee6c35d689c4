use serde::Deserialize;
use validator::Validate;

use crate::components::sidebar::SidebarState;
use crate::domain::action::ActionKind;
use crate::domain::types::{PatientId, SearchQuery};
use crate::dto::patient_list::RowActionCommand;
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// Form posted by a row action button.
pub struct RowActionForm {
    /// Identifier of the patient the button belongs to.
    pub id: i32,
    /// `view`, `edit` or `delete`.
    pub kind: String,
    /// Search text the list was showing.
    #[serde(default)]
    pub search: String,
    /// Page the list was showing.
    #[validate(range(min = 1))]
    pub page: usize,
    /// Viewport width the list was rendered for.
    pub width: Option<u32>,
    #[serde(default)]
    pub sidebar: SidebarState,
}

impl TryFrom<RowActionForm> for RowActionCommand {
    type Error = FormError;

    fn try_from(form: RowActionForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let target = PatientId::new(form.id).map_err(|_| FormError::InvalidPatientId)?;
        let kind = form
            .kind
            .parse::<ActionKind>()
            .map_err(|_| FormError::InvalidAction)?;

        Ok(Self {
            target,
            kind,
            query: SearchQuery::new(form.search),
            page: form.page,
        })
    }
}
