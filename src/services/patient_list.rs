//! Drives [`PatientListView`] against a patient collaborator.
//!
//! The HTTP layer is stateless, so every request rebuilds the view from the
//! query string, runs the fetches it asks for, and renders the result.

use crate::breakpoint::Viewport;
use crate::domain::types::{PageSize, SearchQuery};
use crate::dto::patient_list::{
    PatientListPage, PatientListQuery, RowActionCommand, RowActionOutcome,
};
use crate::repository::{PatientMutator, PatientSource};
use crate::services::{ServiceError, ServiceResult};
use crate::view::ListEvent;
use crate::view::patient_list::{ActionRequest, Command, FetchOutcome, FetchRequest, PatientListView};

/// Runs `request` and every follow-up fetch caused by page clamping.
///
/// Each follow-up targets a strictly lower page, so the loop ends.
pub fn run_fetch<R>(repo: &R, view: &mut PatientListView, request: FetchRequest) -> FetchOutcome
where
    R: PatientSource + ?Sized,
{
    let mut request = request;
    loop {
        let result = repo.fetch_page(&request.query, request.page, request.page_size);
        match view.complete_fetch(&request, result) {
            FetchOutcome::Refetch(next) => request = next,
            outcome => return outcome,
        }
    }
}

/// Hands a validated row action to the collaborator and refreshes the list if needed.
pub fn run_action<R>(repo: &R, view: &mut PatientListView, action: ActionRequest)
where
    R: PatientSource + PatientMutator + ?Sized,
{
    let result = repo.perform_action(action.kind, action.target);
    if let Some(request) = view.complete_action(&action, result) {
        run_fetch(repo, view, request);
    }
}

/// Applies a component event and carries out whatever the view asks for.
pub fn dispatch_event<R>(repo: &R, view: &mut PatientListView, event: ListEvent)
where
    R: PatientSource + PatientMutator + ?Sized,
{
    match view.handle(event) {
        Some(Command::Fetch(request)) => {
            run_fetch(repo, view, request);
        }
        Some(Command::Dispatch(action)) => run_action(repo, view, action),
        None => {}
    }
}

/// Loads the list state described by `query` and renders it for the requested width.
///
/// Fetch failures are part of the page; a page below 1 is shown as page 1.
pub fn load_patient_list<R>(repo: &R, page_size: PageSize, query: PatientListQuery) -> PatientListPage
where
    R: PatientSource + ?Sized,
{
    let search = SearchQuery::new(query.search.unwrap_or_default());
    let mut view = PatientListView::restore(page_size, search, query.page.unwrap_or(1));
    let request = view.retry();
    run_fetch(repo, &mut view, request);

    if query.dismiss_error {
        view.dismiss_error();
    }

    let viewport = query.width.map(Viewport::new).unwrap_or_default();
    view.present(viewport)
}

/// Performs a row action clicked on the list state in `command`.
///
/// The page is fetched first so the action is checked against the rows the
/// user actually saw.
pub fn perform_row_action<R>(
    repo: &R,
    page_size: PageSize,
    command: RowActionCommand,
) -> ServiceResult<RowActionOutcome>
where
    R: PatientSource + PatientMutator + ?Sized,
{
    let mut view = PatientListView::restore(page_size, command.query, command.page);
    let request = view.retry();
    run_fetch(repo, &mut view, request);

    if let Some(err) = view.error() {
        log::error!("Cannot {} patient {}: {err}", command.kind, command.target);
        return Err(ServiceError::Fetch(err.clone()));
    }

    let action = view
        .request_action(command.target, command.kind)
        .ok_or(ServiceError::NotFound)?;
    run_action(repo, &mut view, action);

    Ok(RowActionOutcome {
        query: view.query().clone(),
        page: view.page(),
        notice: view.notices().last().cloned(),
    })
}
