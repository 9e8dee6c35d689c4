//! State owner of the searchable, paginated patient list.
//!
//! [`PatientListView`] performs no I/O. Every transition that needs data
//! returns a [`FetchRequest`] (or an [`ActionRequest`]) for the caller to run,
//! and the result is fed back through [`PatientListView::complete_fetch`] or
//! [`PatientListView::complete_action`]. Completions are matched against the
//! current `(query, page)` pair, so a slow response for a superseded request
//! can never overwrite newer state.

use std::collections::HashSet;

use log::{debug, error, warn};
use serde::Serialize;

use crate::breakpoint::Viewport;
use crate::components::pagination_control::PaginationControl;
use crate::components::results_table::ResultsTable;
use crate::components::search_bar::SearchBar;
use crate::domain::action::ActionKind;
use crate::domain::patient::PatientRow;
use crate::domain::types::{PageSize, PatientId, SearchQuery};
use crate::dto::patient_list::PatientListPage;
use crate::pagination::{PageDescriptor, clamp_page, total_pages};
use crate::repository::FetchedPage;
use crate::repository::errors::{ActionResult, FetchError, FetchResult};
use crate::view::ListEvent;

/// Data the view needs fetched before it can display the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub query: SearchQuery,
    pub page: usize,
    pub page_size: PageSize,
}

impl FetchRequest {
    fn is_for(&self, query: &SearchQuery, page: usize) -> bool {
        self.page == page && &self.query == query
    }
}

/// Row action to hand over to the mutation service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionRequest {
    pub target: PatientId,
    pub kind: ActionKind,
    /// Query on screen when the action was requested.
    pub query: SearchQuery,
    /// Page on screen when the action was requested.
    pub page: usize,
}

impl ActionRequest {
    fn is_for(&self, query: &SearchQuery, page: usize) -> bool {
        self.page == page && &self.query == query
    }
}

/// Work requested by the view in response to an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Fetch(FetchRequest),
    Dispatch(ActionRequest),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewStatus {
    /// The last fetch finished, or none was issued yet.
    Idle,
    /// A fetch is in flight; the previous rows stay on screen.
    Fetching,
    /// The last fetch failed; the previous rows stay on screen.
    Error(FetchError),
}

/// What the view did with a fetch completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// The completion belonged to a superseded `(query, page)` and was dropped.
    Discarded,
    /// The result set shrank below the current page; the clamped page must be fetched.
    Refetch(FetchRequest),
}

/// Failed row action waiting to be shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActionNotice {
    pub target: PatientId,
    pub kind: ActionKind,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct PatientListView {
    query: SearchQuery,
    page: usize,
    page_size: PageSize,
    rows: Vec<PatientRow>,
    total: usize,
    status: ViewStatus,
    notices: Vec<ActionNotice>,
}

impl PatientListView {
    /// Creates an idle view with an empty query on the first page.
    pub fn new(page_size: PageSize) -> Self {
        Self::restore(page_size, SearchQuery::default(), 1)
    }

    /// Creates an idle view positioned on `query` and `page`, e.g. from a URL.
    ///
    /// The page is validated against the result count by the first fetch.
    pub fn restore(page_size: PageSize, query: SearchQuery, page: usize) -> Self {
        Self {
            query,
            page: page.max(1),
            page_size,
            rows: Vec::new(),
            total: 0,
            status: ViewStatus::Idle,
            notices: Vec::new(),
        }
    }

    /// Creates a view and the initial fetch for its default state.
    pub fn mount(page_size: PageSize) -> (Self, FetchRequest) {
        let mut view = Self::new(page_size);
        let request = view.begin_fetch();
        (view, request)
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn rows(&self) -> &[PatientRow] {
        &self.rows
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.page_size)
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ViewStatus::Fetching
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.status {
            ViewStatus::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn notices(&self) -> &[ActionNotice] {
        &self.notices
    }

    pub fn descriptor(&self) -> PageDescriptor {
        PageDescriptor::new(self.total, self.page_size, self.page)
    }

    /// Routes a component event to the matching transition.
    pub fn handle(&mut self, event: ListEvent) -> Option<Command> {
        match event {
            ListEvent::Search(query) => Some(Command::Fetch(self.submit_search(query))),
            ListEvent::ChangePage(page) => Some(Command::Fetch(self.change_page(page))),
            ListEvent::Action { target, kind } => {
                self.request_action(target, kind).map(Command::Dispatch)
            }
        }
    }

    /// Replaces the query and goes back to the first page.
    pub fn submit_search(&mut self, query: impl Into<SearchQuery>) -> FetchRequest {
        self.query = query.into();
        self.page = 1;
        self.notices.clear();
        self.begin_fetch()
    }

    /// Moves to `page`, clamped to the known page range, keeping the query.
    pub fn change_page(&mut self, page: usize) -> FetchRequest {
        self.page = clamp_page(page, self.total_pages());
        self.notices.clear();
        self.begin_fetch()
    }

    /// Re-issues the fetch for the current query and page.
    pub fn retry(&mut self) -> FetchRequest {
        self.begin_fetch()
    }

    /// Hides the inline fetch error; the rows on screen are untouched.
    pub fn dismiss_error(&mut self) {
        if matches!(self.status, ViewStatus::Error(_)) {
            self.status = ViewStatus::Idle;
        }
    }

    pub fn dismiss_notice(&mut self, target: PatientId) {
        self.notices.retain(|notice| notice.target != target);
    }

    /// Applies a fetch result if it still matches the current query and page.
    pub fn complete_fetch(
        &mut self,
        request: &FetchRequest,
        result: FetchResult<FetchedPage>,
    ) -> FetchOutcome {
        if !request.is_for(&self.query, self.page) {
            debug!(
                "Discarding stale patient page {} for query `{}`",
                request.page, request.query
            );
            return FetchOutcome::Discarded;
        }

        let fetched = match result {
            Ok(fetched) => fetched,
            Err(err) => {
                error!("Failed to fetch patients: {err}");
                self.status = ViewStatus::Error(err);
                return FetchOutcome::Applied;
            }
        };

        if let Some(id) = first_duplicate(&fetched.rows) {
            let err = FetchError::Server(format!("patient {id} appears twice on one page"));
            error!("Rejected patient page: {err}");
            self.status = ViewStatus::Error(err);
            return FetchOutcome::Applied;
        }

        self.total = fetched.total;

        let clamped = clamp_page(self.page, self.total_pages());
        if clamped != self.page {
            debug!(
                "Page {} is past the last page {}, moving to page {clamped}",
                self.page,
                self.total_pages()
            );
            self.page = clamped;
            return FetchOutcome::Refetch(self.begin_fetch());
        }

        self.rows = fetched.rows;
        self.status = ViewStatus::Idle;
        FetchOutcome::Applied
    }

    /// Validates a row action against the rows currently on screen.
    pub fn request_action(&mut self, target: PatientId, kind: ActionKind) -> Option<ActionRequest> {
        let Some(row) = self.rows.iter().find(|row| row.id == target) else {
            warn!("Ignoring {kind} for patient {target} which is not on the current page");
            return None;
        };

        if !row.actions.contains(kind) {
            warn!("Ignoring {kind} for patient {target}: action not offered");
            return None;
        }

        self.dismiss_notice(target);
        Some(ActionRequest {
            target,
            kind,
            query: self.query.clone(),
            page: self.page,
        })
    }

    /// Records the outcome of a row action.
    ///
    /// Successful edits and deletes re-run the current fetch. A delete that
    /// removed the only row of a page after the first moves one page back,
    /// unless the user has already left that page.
    pub fn complete_action(
        &mut self,
        request: &ActionRequest,
        result: ActionResult<()>,
    ) -> Option<FetchRequest> {
        if let Err(err) = result {
            error!(
                "Failed to {} patient {}: {err}",
                request.kind, request.target
            );
            self.notices.push(ActionNotice {
                target: request.target,
                kind: request.kind,
                message: err.to_string(),
            });
            return None;
        }

        if !request.kind.mutates() {
            return None;
        }

        let emptied_page = request.is_for(&self.query, self.page)
            && matches!(self.rows.as_slice(), [only] if only.id == request.target);
        if request.kind == ActionKind::Delete && emptied_page && self.page > 1 {
            self.page -= 1;
        }

        Some(self.begin_fetch())
    }

    /// Builds the render model for every component of the list.
    pub fn present(&self, viewport: Viewport) -> PatientListPage {
        PatientListPage {
            search_bar: SearchBar::new(&self.query).view(viewport),
            table: ResultsTable::new(&self.rows)
                .with_notices(&self.notices)
                .view(viewport),
            pagination: PaginationControl::new(self.page, self.total_pages()).view(),
            loading: self.is_loading(),
            error: self.error().map(ToString::to_string),
            notices: self.notices.clone(),
            page: self.descriptor(),
        }
    }

    fn begin_fetch(&mut self) -> FetchRequest {
        self.status = ViewStatus::Fetching;
        FetchRequest {
            query: self.query.clone(),
            page: self.page,
            page_size: self.page_size,
        }
    }
}

fn first_duplicate(rows: &[PatientRow]) -> Option<PatientId> {
    let mut seen = HashSet::new();
    rows.iter().map(|row| row.id).find(|id| !seen.insert(*id))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::action::ActionSet;
    use crate::domain::patient::Gender;

    fn size(n: usize) -> PageSize {
        PageSize::new(n).expect("valid page size")
    }

    fn row(id: i32) -> PatientRow {
        PatientRow {
            id: PatientId::new(id).expect("valid id"),
            file_number: format!("P-{id}"),
            full_name: format!("Patient {id}"),
            national_id: None,
            phone: "0912".to_string(),
            gender: Gender::Male,
            registered_on: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            actions: ActionSet::all(),
        }
    }

    fn page_of(ids: &[i32], total: usize) -> FetchResult<FetchedPage> {
        Ok(FetchedPage::new(ids.iter().copied().map(row).collect(), total))
    }

    #[test]
    fn starts_idle_on_first_page() {
        let view = PatientListView::new(size(10));

        assert_eq!(view.status(), &ViewStatus::Idle);
        assert_eq!(view.page(), 1);
        assert!(view.query().is_empty());
    }

    #[test]
    fn mount_issues_default_fetch() {
        let (view, request) = PatientListView::mount(size(10));

        assert!(view.is_loading());
        assert_eq!(request.page, 1);
        assert!(request.query.is_empty());
    }

    #[test]
    fn change_page_clamps_to_known_range() {
        let (mut view, request) = PatientListView::mount(size(10));
        view.complete_fetch(&request, page_of(&[1, 2], 25));

        assert_eq!(view.change_page(9).page, 3);
        assert_eq!(view.change_page(0).page, 1);
    }

    #[test]
    fn duplicate_rows_are_rejected() {
        let (mut view, request) = PatientListView::mount(size(10));

        view.complete_fetch(&request, page_of(&[1, 1], 2));

        assert!(matches!(view.error(), Some(FetchError::Server(_))));
        assert!(view.rows().is_empty());
    }

    #[test]
    fn shrunk_result_set_refetches_last_page() {
        let mut view = PatientListView::restore(size(10), SearchQuery::default(), 4);
        let request = view.retry();

        let outcome = view.complete_fetch(&request, page_of(&[], 15));

        let FetchOutcome::Refetch(next) = outcome else {
            panic!("expected a refetch, got {outcome:?}");
        };
        assert_eq!(next.page, 2);
        assert_eq!(view.page(), 2);
        assert!(view.is_loading());
    }

    #[test]
    fn action_for_row_off_screen_is_ignored() {
        let (mut view, request) = PatientListView::mount(size(10));
        view.complete_fetch(&request, page_of(&[1], 1));

        let target = PatientId::new(99).expect("valid id");

        assert_eq!(view.request_action(target, ActionKind::Delete), None);
    }

    #[test]
    fn view_action_does_not_refetch() {
        let (mut view, request) = PatientListView::mount(size(10));
        view.complete_fetch(&request, page_of(&[1], 1));
        let target = PatientId::new(1).expect("valid id");
        let action = view
            .request_action(target, ActionKind::View)
            .expect("row is on screen");

        assert_eq!(view.complete_action(&action, Ok(())), None);
        assert_eq!(view.status(), &ViewStatus::Idle);
    }

    #[test]
    fn delete_after_leaving_page_does_not_move_back() {
        let (mut view, request) = PatientListView::mount(size(10));
        view.complete_fetch(&request, page_of(&[1], 25));
        let request = view.change_page(3);
        view.complete_fetch(&request, page_of(&[21], 21));
        let target = PatientId::new(21).expect("valid id");
        let action = view
            .request_action(target, ActionKind::Delete)
            .expect("row is on screen");

        // The user moves on before the delete completes.
        let request = view.change_page(2);
        view.complete_fetch(&request, page_of(&[11], 21));
        let refetch = view.complete_action(&action, Ok(())).expect("delete refetches");

        assert_eq!(refetch.page, 2);
        assert_eq!(view.page(), 2);
    }

    #[test]
    fn dismiss_error_keeps_rows() {
        let (mut view, request) = PatientListView::mount(size(10));
        view.complete_fetch(&request, page_of(&[1, 2], 2));
        let retry = view.retry();
        view.complete_fetch(&retry, Err(FetchError::Transport("timeout".into())));

        view.dismiss_error();

        assert_eq!(view.status(), &ViewStatus::Idle);
        assert_eq!(view.rows().len(), 2);
    }
}
