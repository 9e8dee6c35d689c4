//! Mock collaborator implementations for isolating services in tests.

use mockall::mock;

use crate::domain::action::ActionKind;
use crate::domain::types::{PageSize, PatientId, SearchQuery};
use crate::repository::errors::{ActionResult, FetchResult};
use crate::repository::{FetchedPage, PatientMutator, PatientSource};

mock! {
    pub Repository {}

    impl PatientSource for Repository {
        fn fetch_page(
            &self,
            query: &SearchQuery,
            page: usize,
            page_size: PageSize,
        ) -> FetchResult<FetchedPage>;
    }

    impl PatientMutator for Repository {
        fn perform_action(&self, kind: ActionKind, target: PatientId) -> ActionResult<()>;
    }
}
