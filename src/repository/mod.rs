//! Collaborator contracts consumed by the patient list view.
//!
//! The view never talks to a backend directly: fetches go through
//! [`PatientSource`] and row actions through [`PatientMutator`].

use crate::domain::action::ActionKind;
use crate::domain::patient::PatientRow;
use crate::domain::types::{PageSize, PatientId, SearchQuery};
use crate::repository::errors::{ActionResult, FetchResult};

pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// One page of results together with the size of the whole result set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchedPage {
    pub rows: Vec<PatientRow>,
    pub total: usize,
}

impl FetchedPage {
    pub fn new(rows: Vec<PatientRow>, total: usize) -> Self {
        Self { rows, total }
    }
}

pub trait PatientSource {
    /// Returns the `page`-th slice (1-based) of the records matching `query`.
    fn fetch_page(
        &self,
        query: &SearchQuery,
        page: usize,
        page_size: PageSize,
    ) -> FetchResult<FetchedPage>;
}

pub trait PatientMutator {
    fn perform_action(&self, kind: ActionKind, target: PatientId) -> ActionResult<()>;
}
