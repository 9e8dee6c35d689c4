use sleep_clinic::components::pagination_control::PaginationControl;
use sleep_clinic::components::search_bar::SearchBar;
use sleep_clinic::domain::action::ActionKind;
use sleep_clinic::domain::types::SearchQuery;
use sleep_clinic::pagination::total_pages;
use sleep_clinic::repository::errors::{ActionError, FetchError};
use sleep_clinic::view::ListEvent;
use sleep_clinic::view::patient_list::{
    Command, FetchOutcome, FetchRequest, PatientListView, ViewStatus,
};

mod common;

use common::{id, ids, page_of, size};

#[test]
fn total_pages_is_ceiling_and_zero_only_when_empty() {
    for page_size in 1..=7 {
        for total in 0..=50 {
            let pages = total_pages(total, size(page_size));
            assert_eq!(pages, total.div_ceil(page_size));
            assert_eq!(pages == 0, total == 0);
        }
    }
}

#[test]
fn page_stays_in_range_after_total_changes() {
    let (mut view, request) = PatientListView::mount(size(10));
    view.complete_fetch(&request, Ok(page_of(&[1, 2, 3], 95)));

    for (target, total) in [(10, 95), (4, 31), (1, 0), (7, 64), (3, 5)] {
        let request = view.change_page(target);
        let mut outcome = view.complete_fetch(&request, Ok(page_of(&[], total)));
        while let FetchOutcome::Refetch(next) = outcome {
            outcome = view.complete_fetch(&next, Ok(page_of(&[], total)));
        }

        assert!(view.page() >= 1);
        assert!(view.page() <= view.total_pages().max(1));
    }
}

#[test]
fn new_search_always_resets_to_first_page() {
    let (mut view, request) = PatientListView::mount(size(10));
    view.complete_fetch(&request, Ok(page_of(&[1], 25)));

    for page in [1, 2, 3] {
        let request = view.change_page(page);
        view.complete_fetch(&request, Ok(page_of(&[1], 25)));

        let search = view.submit_search("ali");
        assert_eq!(search.page, 1);
        assert_eq!(view.page(), 1);
    }
}

#[test]
fn slower_older_fetch_does_not_overwrite_newer_one() {
    let (mut view, request) = PatientListView::mount(size(10));
    view.complete_fetch(&request, Ok(page_of(&[1, 2], 2)));

    let fetch_a = view.submit_search("a");
    let fetch_b = view.submit_search("b");

    assert_eq!(
        view.complete_fetch(&fetch_b, Ok(page_of(&[20, 21], 2))),
        FetchOutcome::Applied
    );
    assert_eq!(
        view.complete_fetch(&fetch_a, Ok(page_of(&[10, 11], 2))),
        FetchOutcome::Discarded
    );

    assert_eq!(ids(view.rows()), vec![20, 21]);
    assert_eq!(view.query().as_str(), "b");
    assert_eq!(view.status(), &ViewStatus::Idle);
}

#[test]
fn stale_failure_does_not_flag_newer_state() {
    let (mut view, request) = PatientListView::mount(size(10));
    view.complete_fetch(&request, Ok(page_of(&[1, 2], 15)));

    let fetch_a = view.change_page(2);
    let fetch_b = view.change_page(1);
    view.complete_fetch(&fetch_b, Ok(page_of(&[1, 2], 15)));
    view.complete_fetch(&fetch_a, Err(FetchError::Server("boom".to_string())));

    assert_eq!(view.status(), &ViewStatus::Idle);
    assert_eq!(view.error(), None);
}

#[test]
fn deleting_only_row_on_later_page_moves_back_once() {
    let (mut view, request) = PatientListView::mount(size(10));
    view.complete_fetch(&request, Ok(page_of(&[1], 21)));
    let request = view.change_page(3);
    view.complete_fetch(&request, Ok(page_of(&[21], 21)));

    let action = view
        .request_action(id(21), ActionKind::Delete)
        .expect("row is on screen");
    let refetch = view
        .complete_action(&action, Ok(()))
        .expect("delete refetches");

    assert_eq!(view.page(), 2);
    assert_eq!(refetch.page, 2);
    assert_eq!(
        view.complete_fetch(&refetch, Ok(page_of(&[11, 12], 20))),
        FetchOutcome::Applied
    );
    assert_eq!(view.page(), 2);
}

#[test]
fn deleting_one_of_several_rows_keeps_page() {
    let (mut view, request) = PatientListView::mount(size(10));
    view.complete_fetch(&request, Ok(page_of(&[1], 25)));
    let request = view.change_page(3);
    view.complete_fetch(&request, Ok(page_of(&[21, 22], 25)));

    let action = view
        .request_action(id(22), ActionKind::Delete)
        .expect("row is on screen");
    let refetch = view.complete_action(&action, Ok(())).expect("delete refetches");

    assert_eq!(refetch.page, 3);
}

#[test]
fn delete_completing_after_search_keeps_new_position() {
    let (mut view, request) = PatientListView::mount(size(10));
    view.complete_fetch(&request, Ok(page_of(&[1], 25)));
    let request = view.change_page(3);
    view.complete_fetch(&request, Ok(page_of(&[21], 21)));
    let action = view
        .request_action(id(21), ActionKind::Delete)
        .expect("row is on screen");

    let request = view.submit_search(SearchQuery::new("karimi"));
    view.complete_fetch(&request, Ok(page_of(&[21], 1)));
    let refetch = view.complete_action(&action, Ok(())).expect("delete refetches");

    assert_eq!(refetch.page, 1);
    assert_eq!(refetch.query.as_str(), "karimi");
}

#[test]
fn deleting_only_row_on_first_page_stays_on_first_page() {
    let (mut view, request) = PatientListView::mount(size(10));
    view.complete_fetch(&request, Ok(page_of(&[1], 1)));

    let action = view
        .request_action(id(1), ActionKind::Delete)
        .expect("row is on screen");
    let refetch = view.complete_action(&action, Ok(())).expect("delete refetches");

    assert_eq!(refetch.page, 1);
}

#[test]
fn search_after_paging_fetches_first_page_of_new_query() {
    let (mut view, request) = PatientListView::mount(size(10));
    view.complete_fetch(&request, Ok(page_of(&[1, 2, 3], 25)));
    assert_eq!(view.total_pages(), 3);

    let request = view.change_page(3);
    view.complete_fetch(&request, Ok(page_of(&[21, 22, 23, 24, 25], 25)));
    assert_eq!(view.page(), 3);

    let event = SearchBar::new(view.query()).submit("  smith ");
    let command = view.handle(event);

    assert_eq!(view.page(), 1);
    assert_eq!(
        command,
        Some(Command::Fetch(FetchRequest {
            query: SearchQuery::new("smith"),
            page: 1,
            page_size: size(10),
        }))
    );
}

#[test]
fn transport_error_keeps_rows_visible() {
    let (mut view, request) = PatientListView::mount(size(10));
    view.complete_fetch(&request, Ok(page_of(&[1, 2, 3], 3)));

    let retry = view.retry();
    assert!(view.is_loading());
    assert_eq!(ids(view.rows()), vec![1, 2, 3]);

    view.complete_fetch(&retry, Err(FetchError::Transport("timeout".to_string())));

    assert_eq!(ids(view.rows()), vec![1, 2, 3]);
    assert!(matches!(view.status(), ViewStatus::Error(FetchError::Transport(_))));
    let page = view.present(Default::default());
    assert!(page.error.is_some());
    assert_eq!(page.table.rows.len(), 3);
}

#[test]
fn clicking_active_page_emits_nothing() {
    let control = PaginationControl::new(2, 3);

    assert_eq!(control.click(2), None);
    assert_eq!(control.click(3), Some(ListEvent::ChangePage(3)));
}

#[test]
fn action_failure_keeps_query_and_page() {
    let (mut view, request) = PatientListView::mount(size(10));
    view.complete_fetch(&request, Ok(page_of(&[1], 12)));
    let request = view.change_page(2);
    view.complete_fetch(&request, Ok(page_of(&[11, 12], 12)));

    let action = view
        .request_action(id(12), ActionKind::Delete)
        .expect("row is on screen");
    let refetch = view.complete_action(
        &action,
        Err(ActionError::Conflict {
            kind: ActionKind::Delete,
            target: id(12),
        }),
    );

    assert_eq!(refetch, None);
    assert_eq!(view.page(), 2);
    assert_eq!(ids(view.rows()), vec![11, 12]);
    assert_eq!(view.notices().len(), 1);
    assert_eq!(view.notices()[0].target, id(12));
}
