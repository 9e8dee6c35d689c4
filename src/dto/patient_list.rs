use serde::{Deserialize, Serialize};

use crate::components::pagination_control::PaginationView;
use crate::components::results_table::ResultsTableView;
use crate::components::search_bar::SearchBarView;
use crate::components::sidebar::SidebarState;
use crate::domain::action::ActionKind;
use crate::domain::types::{PatientId, SearchQuery};
use crate::pagination::PageDescriptor;
use crate::view::patient_list::ActionNotice;

/// Everything the patient list template needs to render one state of the view.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PatientListPage {
    pub search_bar: SearchBarView,
    pub table: ResultsTableView,
    pub pagination: PaginationView,
    /// A fetch is in flight; the rows shown belong to the previous request.
    pub loading: bool,
    /// Message of the last failed fetch.
    pub error: Option<String>,
    pub notices: Vec<ActionNotice>,
    pub page: PageDescriptor,
}

/// Query parameters accepted by the patient list page.
#[derive(Debug, Default, Deserialize)]
pub struct PatientListQuery {
    /// Free-text search entered by the user.
    pub search: Option<String>,
    /// 1-based page number.
    pub page: Option<usize>,
    /// Viewport width in CSS pixels, used to pick the responsive layout.
    pub width: Option<u32>,
    pub sidebar: Option<SidebarState>,
    /// Hide the inline fetch error; the rows stay.
    #[serde(default)]
    pub dismiss_error: bool,
}

/// Hrefs and hidden form values that carry the list state into the next request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ListLinks {
    /// Page links append the page number to this href.
    pub page_prefix: String,
    pub retry: String,
    pub dismiss_error: String,
    pub width: Option<u32>,
    /// Sidebar state once the user interacts with the page outside the sidebar.
    pub sidebar: SidebarState,
}

/// Row action submitted from the list, with the list state it was clicked in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowActionCommand {
    pub target: PatientId,
    pub kind: ActionKind,
    pub query: SearchQuery,
    pub page: usize,
}

/// List state to return to after a row action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowActionOutcome {
    pub query: SearchQuery,
    pub page: usize,
    /// Set when the action failed.
    pub notice: Option<ActionNotice>,
}
