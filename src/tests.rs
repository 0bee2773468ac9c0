use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::AppConfig;
use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::domain::entities::page::{FetchMode, PageEnvelope, PageRequest, Pagination};
use crate::domain::entities::preferences::{ColorScheme, Preferences, ThemeMode};
use crate::domain::entities::property::Property;
use crate::domain::entities::query::{QueryState, Selector};
use crate::domain::entities::record::Record;
use crate::domain::entities::session::{Role, Session, Viewer};
use crate::domain::entities::user::User;
use crate::infra::memory::preferences::MemoryPreferenceStore;
use crate::infra::memory::seed::{sample_bookings, sample_properties, sample_users};
use crate::infra::memory::source::MemorySource;
use crate::infra::sqlite::preferences::{load_preferences, SqlitePreferenceStore};
use crate::ui::components::pager::range_label;
use crate::ui::components::query_bar::{filter_label, parse_filter_input};
use crate::ui::routes::{booking_scope, nav_items, Route};
use crate::ui::screens::bookings::BookingScope;
use crate::ui::screens::deep_link_page;
use crate::ui::screens::property_manage::landlord_scope;
use crate::ui::style::{root_style, status_badge_style};
use crate::usecase::ports::preferences::{PreferenceStore, StoreError};
use crate::usecase::ports::source::FetchError;
use crate::usecase::services::fetcher::{plan_request, run_fetch, FetchRequest, FetchResponse};
use crate::usecase::services::list_query::{Completion, ListQueryController, Phase};
use crate::usecase::services::preference_service::PreferenceService;
use crate::usecase::services::projector::{
    page_has_more, page_window, recount, slice_page, total_pages, QueryChange, QueryTracker,
};
use crate::usecase::services::reducer::apply_query;

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("rentdesk-{prefix}-{nanos}"))
}

fn property(id: i64, title: &str, city: &str, price: f64, size: f64, available: bool) -> Property {
    Property {
        id,
        title: title.to_string(),
        city: city.to_string(),
        address: format!("Street {id}"),
        description: String::new(),
        price,
        size,
        rooms: None,
        available,
        landlord_id: Some(7),
    }
}

fn numbered_properties(count: usize) -> Vec<Property> {
    (0..count)
        .map(|idx| {
            property(
                idx as i64 + 1,
                &format!("Room {}", idx + 1),
                "Porto",
                400.0 + idx as f64 * 10.0,
                20.0,
                idx % 2 == 0,
            )
        })
        .collect()
}

fn envelope(content: Vec<Property>, total: usize, size: usize, number: usize) -> PageEnvelope<Property> {
    PageEnvelope::new(content, total, size, number)
}

fn respond(request: &FetchRequest, result: Result<PageEnvelope<Property>, FetchError>) -> FetchResponse<Property> {
    FetchResponse {
        ticket: request.ticket,
        result,
    }
}

fn sample_queries() -> Vec<QueryState> {
    let mut by_price = QueryState::default();
    by_price.set_filter("maxPrice", Some(450.0));
    let mut by_status = QueryState::default();
    by_status.status = Selector::Exactly("available".to_string());
    let mut combined = QueryState {
        search_term: "room 1".to_string(),
        ..QueryState::default()
    };
    combined.set_filter("minSize", Some(10.0));
    combined.status = Selector::Exactly("unavailable".to_string());
    vec![
        QueryState::default(),
        QueryState {
            search_term: "ROOM".to_string(),
            ..QueryState::default()
        },
        by_price,
        by_status,
        combined,
    ]
}

#[test]
fn empty_query_returns_working_set_unchanged() {
    let records = numbered_properties(8);

    let filtered = apply_query(&records, &QueryState::default());

    assert_eq!(filtered, records);
}

#[test]
fn filtering_never_adds_records() {
    let records = numbered_properties(15);

    for query in sample_queries() {
        let filtered = apply_query(&records, &query);
        assert!(filtered.len() <= records.len());
        assert!(
            filtered.iter().all(|record| records.contains(record)),
            "every filtered record should come from the working set: {query:?}"
        );
    }
}

#[test]
fn filtering_is_idempotent() {
    let records = numbered_properties(15);

    for query in sample_queries() {
        let once = apply_query(&records, &query);
        let twice = apply_query(&once, &query);
        assert_eq!(once, twice, "query should be idempotent: {query:?}");
    }
}

#[test]
fn search_matches_title_case_insensitively() {
    let records = vec![
        property(1, "Lakeview Apt", "Braga", 500.0, 30.0, true),
        property(2, "Mountain Cabin", "Faro", 700.0, 45.0, true),
    ];
    let query = QueryState {
        search_term: "lake".to_string(),
        ..QueryState::default()
    };

    let filtered = apply_query(&records, &query);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Lakeview Apt");
}

#[test]
fn search_covers_city_and_address() {
    let records = vec![
        property(1, "Studio", "Lisbon", 500.0, 30.0, true),
        property(2, "Loft", "Porto", 700.0, 45.0, true),
    ];

    let by_city = apply_query(
        &records,
        &QueryState {
            search_term: "LISB".to_string(),
            ..QueryState::default()
        },
    );
    let by_address = apply_query(
        &records,
        &QueryState {
            search_term: "street 2".to_string(),
            ..QueryState::default()
        },
    );

    assert_eq!(by_city.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
    assert_eq!(by_address.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn search_term_is_matched_verbatim() {
    let records = vec![property(1, "Lakeview Apt", "Braga", 500.0, 30.0, true)];
    let trailing_space = QueryState {
        search_term: "apt ".to_string(),
        ..QueryState::default()
    };
    let blank = QueryState {
        search_term: " ".to_string(),
        ..QueryState::default()
    };

    assert!(apply_query(&records, &trailing_space).is_empty());
    assert!(!blank.is_unfiltered());
    assert_eq!(apply_query(&records, &QueryState::default()).len(), 1);
}

#[test]
fn range_filters_apply_inclusive_bounds() {
    let records = vec![
        property(1, "A", "X", 400.0, 15.0, true),
        property(2, "B", "X", 500.0, 25.0, true),
        property(3, "C", "X", 600.0, 35.0, true),
    ];
    let mut query = QueryState::default();
    query.set_filter("maxPrice", Some(500.0));
    query.set_filter("minSize", Some(15.0));

    let filtered = apply_query(&records, &query);

    assert_eq!(filtered.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn set_range_filter_rejects_records_without_the_field() {
    let mut with_rooms = property(1, "A", "X", 400.0, 15.0, true);
    with_rooms.rooms = Some(3);
    let without_rooms = property(2, "B", "X", 400.0, 15.0, true);
    let mut query = QueryState::default();
    query.set_filter("minRooms", Some(2.0));

    let filtered = apply_query(&[with_rooms, without_rooms], &query);

    assert_eq!(filtered.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn unknown_filter_names_are_ignored() {
    let records = numbered_properties(3);
    let mut query = QueryState::default();
    query.set_filter("maxBananas", Some(1.0));

    assert_eq!(apply_query(&records, &query), records);
}

#[test]
fn status_selector_wildcard_and_exact_match() {
    let records = vec![
        property(1, "A", "X", 400.0, 15.0, true),
        property(2, "B", "X", 400.0, 15.0, false),
    ];

    let any = apply_query(
        &records,
        &QueryState {
            status: Selector::from_option("all"),
            ..QueryState::default()
        },
    );
    let unavailable = apply_query(
        &records,
        &QueryState {
            status: Selector::from_option("unavailable"),
            ..QueryState::default()
        },
    );

    assert_eq!(any.len(), 2);
    assert_eq!(unavailable.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn filtering_leaves_input_untouched() {
    let records = numbered_properties(6);
    let snapshot = records.clone();
    let mut query = QueryState::default();
    query.set_filter("maxPrice", Some(410.0));

    let _ = apply_query(&records, &query);

    assert_eq!(records, snapshot);
}

#[test]
fn query_state_serializes_to_backend_params() {
    let mut query = QueryState {
        search_term: "lake".to_string(),
        status: Selector::Exactly("available".to_string()),
        ..QueryState::default()
    };
    query.set_filter("maxPrice", Some(800.0));
    query.set_filter("minSize", Some(12.5));
    query.set_filter("minRooms", Some(f64::NAN));

    assert_eq!(
        query.to_params(),
        vec![
            ("search".to_string(), "lake".to_string()),
            ("maxPrice".to_string(), "800".to_string()),
            ("minSize".to_string(), "12.5".to_string()),
            ("status".to_string(), "available".to_string()),
        ]
    );
}

#[test]
fn twelve_records_split_into_three_pages_of_five() {
    let records = numbered_properties(12);
    let mut pagination = Pagination::new(5);
    recount(&mut pagination, records.len());

    assert_eq!(pagination.total_pages, 3);

    pagination.current_page = 0;
    assert_eq!(slice_page(&records, &pagination).len(), 5);

    pagination.current_page = 2;
    let last = slice_page(&records, &pagination);
    assert_eq!(last.len(), 2);
    assert_eq!(last[0].id, 11);
}

#[test]
fn every_page_is_full_except_possibly_the_last() {
    for total in [1_usize, 4, 5, 9, 10, 23] {
        for page_size in [1_usize, 3, 5, 10] {
            let records = numbered_properties(total);
            let mut pagination = Pagination::new(page_size);
            recount(&mut pagination, total);
            assert_eq!(pagination.total_pages, total_pages(total, page_size));

            for page in 0..pagination.total_pages {
                pagination.current_page = page;
                let expected = if page + 1 == pagination.total_pages {
                    total - page * page_size
                } else {
                    page_size
                };
                assert_eq!(
                    slice_page(&records, &pagination).len(),
                    expected,
                    "total {total}, size {page_size}, page {page}"
                );
            }
        }
    }
}

#[test]
fn recount_clamps_current_page_into_range() {
    let mut pagination = Pagination::new(5);
    pagination.current_page = 7;

    recount(&mut pagination, 12);
    assert_eq!(pagination.current_page, 2);

    recount(&mut pagination, 0);
    assert_eq!(pagination.current_page, 0);
    assert_eq!(pagination.total_pages, 0);
}

#[test]
fn page_window_marks_gaps() {
    let mut pagination = Pagination::new(10);
    pagination.total_pages = 12;
    pagination.current_page = 6;

    assert_eq!(
        page_window(&pagination),
        vec![Some(0), None, Some(4), Some(5), Some(6), Some(7), Some(8), None, Some(11)]
    );

    pagination.total_pages = 3;
    pagination.current_page = 0;
    assert_eq!(page_window(&pagination), vec![Some(0), Some(1), Some(2)]);

    pagination.total_pages = 0;
    assert!(page_window(&pagination).is_empty());
}

#[test]
fn query_tracker_reports_initial_then_changes() {
    let mut tracker = QueryTracker::default();
    let mut query = QueryState::default();

    assert_eq!(tracker.observe(&query), QueryChange::Initial);
    assert_eq!(tracker.observe(&query), QueryChange::Unchanged);

    query.search_term = "porto".to_string();
    assert_eq!(tracker.observe(&query), QueryChange::Changed);
    assert_eq!(tracker.observe(&query), QueryChange::Unchanged);
}

#[test]
fn short_or_last_page_ends_the_stream() {
    assert!(page_has_more(10, 10, false));
    assert!(!page_has_more(3, 10, false));
    assert!(!page_has_more(10, 10, true));
}

#[test]
fn bulk_mount_requests_one_oversized_page_with_scope() {
    let mut controller =
        ListQueryController::<Property>::new(FetchMode::Bulk { size: 1000 }, 5).with_scope("landlordId", 7);
    assert_eq!(controller.phase(), Phase::Idle);

    let request = controller.mount(None);

    assert_eq!(controller.phase(), Phase::Loading);
    assert_eq!(request.page.page, 0);
    assert_eq!(request.page.size, 1000);
    assert_eq!(
        request.page.params,
        vec![("landlordId".to_string(), "7".to_string())]
    );
    assert!(!request.append);
}

#[test]
fn bulk_mode_pages_locally_without_refetching() {
    let mut controller = ListQueryController::new(FetchMode::Bulk { size: 1000 }, 5);
    let request = controller.mount(None);
    let records = numbered_properties(12);

    let completion = controller.complete(respond(&request, Ok(envelope(records, 12, 1000, 0))));

    assert_eq!(completion, Completion::Applied);
    assert_eq!(controller.phase(), Phase::Ready);
    assert_eq!(controller.pagination().total_elements, 12);
    assert_eq!(controller.pagination().total_pages, 3);
    assert_eq!(controller.displayed().len(), 5);

    assert!(controller.set_page(2).is_none());
    assert_eq!(controller.pagination().current_page, 2);
    assert_eq!(controller.displayed().len(), 2);
    assert!(!controller.is_loading());
}

#[test]
fn deep_linked_page_survives_mount_but_filter_change_resets_it() {
    let mut controller = ListQueryController::new(FetchMode::Bulk { size: 1000 }, 5);
    let request = controller.mount(Some(2));
    controller.complete(respond(&request, Ok(envelope(numbered_properties(12), 12, 1000, 0))));

    assert_eq!(controller.pagination().current_page, 2);

    assert!(controller.set_filter("maxPrice", Some(10_000.0)).is_none());

    assert_eq!(controller.pagination().current_page, 0);
    assert_eq!(controller.displayed().len(), 5);
}

#[test]
fn repeating_the_same_query_keeps_the_page() {
    let mut controller = ListQueryController::new(FetchMode::Bulk { size: 1000 }, 5);
    let request = controller.mount(None);
    controller.complete(respond(&request, Ok(envelope(numbered_properties(12), 12, 1000, 0))));
    controller.set_page(1);

    controller.set_search_term("");

    assert_eq!(controller.pagination().current_page, 1);
}

#[test]
fn bulk_search_recounts_filtered_totals() {
    let mut controller = ListQueryController::new(FetchMode::Bulk { size: 1000 }, 5);
    let request = controller.mount(None);
    controller.complete(respond(&request, Ok(envelope(numbered_properties(12), 12, 1000, 0))));

    controller.set_search_term("room 1");

    // Room 1, Room 10, Room 11, Room 12
    assert_eq!(controller.pagination().total_elements, 4);
    assert_eq!(controller.pagination().total_pages, 1);
    assert_eq!(controller.filtered().len(), 4);
    assert_eq!(controller.working_set().len(), 12);
}

#[test]
fn server_paging_refetches_on_page_and_query_change() {
    let mut controller = ListQueryController::<Property>::new(FetchMode::ServerPaged, 10);
    let request = controller.mount(None);
    controller.complete(respond(&request, Ok(envelope(numbered_properties(10), 35, 10, 0))));
    assert_eq!(controller.pagination().total_pages, 4);
    assert!(controller.pagination().has_more);

    let next = controller.set_page(2).expect("page change should refetch");
    assert_eq!(next.page.page, 2);
    controller.complete(respond(&next, Ok(envelope(numbered_properties(10), 35, 10, 2))));
    assert_eq!(controller.pagination().current_page, 2);

    let filtered = controller
        .set_status(Selector::Exactly("available".to_string()))
        .expect("query change should refetch");

    assert_eq!(controller.pagination().current_page, 0);
    assert_eq!(filtered.page.page, 0);
    assert!(filtered
        .page
        .params
        .contains(&("status".to_string(), "available".to_string())));
}

#[test]
fn server_paging_ignores_repeated_page_selection() {
    let mut controller = ListQueryController::<Property>::new(FetchMode::ServerPaged, 10);
    let request = controller.mount(None);
    controller.complete(respond(&request, Ok(envelope(numbered_properties(10), 35, 10, 0))));

    assert!(controller.set_page(0).is_none());
    assert_eq!(
        controller.set_page(99).map(|request| request.page.page),
        Some(3)
    );
}

#[test]
fn infinite_scroll_accumulates_until_short_page() {
    let mut controller = ListQueryController::new(FetchMode::InfiniteScroll, 10);
    let first = controller.mount(None);
    controller.complete(respond(&first, Ok(envelope(numbered_properties(10), 13, 10, 0))));

    assert!(controller.pagination().has_more);

    let second = controller.load_more().expect("should request the next page");
    assert_eq!(second.page.page, 1);
    assert!(second.append);
    controller.complete(respond(&second, Ok(envelope(numbered_properties(3), 13, 10, 1))));

    assert!(!controller.pagination().has_more);
    assert_eq!(controller.working_set().len(), 13);
    assert_eq!(controller.displayed().len(), 13);
    assert!(controller.load_more().is_none());
}

#[test]
fn infinite_scroll_grows_by_full_pages() {
    let page_size = 4;
    let mut controller = ListQueryController::new(FetchMode::InfiniteScroll, page_size);
    let mut request = controller.mount(None);

    for fetched in 1..=5 {
        let page = request.page.page;
        let content = numbered_properties(page_size)
            .into_iter()
            .map(|mut p| {
                p.id += (page * page_size) as i64;
                p
            })
            .collect();
        // Backend reports a longer collection so no page is `last`.
        controller.complete(respond(&request, Ok(envelope(content, 100, page_size, page))));
        assert_eq!(controller.working_set().len(), fetched * page_size);
        request = controller.load_more().expect("full pages keep the stream open");
    }
}

#[test]
fn infinite_scroll_guards_against_duplicate_fetches() {
    let mut controller = ListQueryController::new(FetchMode::InfiniteScroll, 10);
    let first = controller.mount(None);

    assert!(controller.load_more().is_none(), "first page still in flight");

    controller.complete(respond(&first, Ok(envelope(numbered_properties(10), 30, 10, 0))));
    let _second = controller.load_more().expect("should request page 1");

    assert!(controller.load_more().is_none(), "page 1 still in flight");
}

#[test]
fn infinite_scroll_filters_the_accumulation_without_refetching() {
    let mut controller = ListQueryController::new(FetchMode::InfiniteScroll, 10);
    let first = controller.mount(None);
    controller.complete(respond(&first, Ok(envelope(numbered_properties(10), 30, 10, 0))));

    assert!(controller.set_status(Selector::Exactly("available".to_string())).is_none());

    assert_eq!(controller.displayed().len(), 5);
    assert_eq!(controller.working_set().len(), 10);
    assert_eq!(controller.pagination().current_page, 1);
}

#[test]
fn stale_responses_are_dropped() {
    let mut controller = ListQueryController::<Property>::new(FetchMode::ServerPaged, 10);
    let first = controller.mount(None);
    let second = controller
        .set_search_term("porto")
        .expect("query change should refetch");

    let fresh = controller.complete(respond(&second, Ok(envelope(numbered_properties(2), 2, 10, 0))));
    let stale = controller.complete(respond(&first, Ok(envelope(numbered_properties(10), 40, 10, 0))));

    assert_eq!(fresh, Completion::Applied);
    assert_eq!(stale, Completion::Stale);
    assert_eq!(controller.working_set().len(), 2);
    assert_eq!(controller.pagination().total_elements, 2);
}

#[test]
fn failed_initial_load_surfaces_error_and_stops_paging() {
    let mut controller = ListQueryController::<Property>::new(FetchMode::InfiniteScroll, 10);
    let request = controller.mount(None);

    controller.complete(respond(
        &request,
        Err(FetchError::Transport("connection refused".to_string())),
    ));

    assert_eq!(controller.phase(), Phase::Error);
    assert!(controller.working_set().is_empty());
    assert!(!controller.pagination().has_more);
    assert_eq!(
        controller.error().map(|err| err.to_string()),
        Some("network error: connection refused".to_string())
    );
    assert!(controller.load_more().is_none());

    let retry = controller.retry().expect("error state should allow retry");
    assert_eq!(controller.phase(), Phase::Loading);
    assert!(!retry.append);
    controller.complete(respond(&retry, Ok(envelope(numbered_properties(3), 3, 10, 0))));
    assert_eq!(controller.phase(), Phase::Ready);
    assert!(controller.error().is_none());
}

#[test]
fn failed_refetch_keeps_previous_working_set() {
    let mut controller = ListQueryController::<Property>::new(FetchMode::ServerPaged, 10);
    let request = controller.mount(None);
    controller.complete(respond(&request, Ok(envelope(numbered_properties(10), 25, 10, 0))));

    let next = controller.set_page(1).expect("page change should refetch");
    controller.complete(respond(&next, Err(FetchError::Status { status: 503 })));

    assert_eq!(controller.phase(), Phase::Error);
    assert_eq!(controller.working_set().len(), 10);
    assert!(controller.retry().is_some());
    assert!(controller.retry().is_none(), "already loading again");
}

#[test]
fn missing_content_is_an_empty_result() {
    let mut controller = ListQueryController::<Property>::new(FetchMode::Bulk { size: 1000 }, 5);
    let request = controller.mount(None);
    let body: PageEnvelope<Property> =
        serde_json::from_str(r#"{"totalElements": 0, "totalPages": 0, "number": 0, "last": true}"#)
            .expect("envelope without content should parse");

    controller.complete(respond(&request, Ok(body)));

    assert_eq!(controller.phase(), Phase::Ready);
    assert!(controller.working_set().is_empty());
    assert!(controller.displayed().is_empty());
}

#[test]
fn refresh_restarts_infinite_scroll_from_first_page() {
    let mut controller = ListQueryController::new(FetchMode::InfiniteScroll, 10);
    let first = controller.mount(None);
    controller.complete(respond(&first, Ok(envelope(numbered_properties(10), 30, 10, 0))));
    let pending = controller.load_more().expect("should request page 1");

    let restart = controller.refresh();

    assert_eq!(restart.page.page, 0);
    assert!(!restart.append);
    assert_eq!(
        controller.complete(respond(&pending, Ok(envelope(numbered_properties(10), 30, 10, 1)))),
        Completion::Stale
    );
    controller.complete(respond(&restart, Ok(envelope(numbered_properties(10), 30, 10, 0))));
    assert_eq!(controller.working_set().len(), 10);
}

#[test]
fn plan_request_sends_query_only_for_server_paging() {
    let mut query = QueryState {
        search_term: "lake".to_string(),
        ..QueryState::default()
    };
    query.set_filter("maxPrice", Some(900.0));
    let mut pagination = Pagination::new(20);
    pagination.current_page = 3;
    let scope = vec![("seekerId".to_string(), "4".to_string())];

    let server = plan_request(FetchMode::ServerPaged, &pagination, &query, &scope);
    let bulk = plan_request(FetchMode::Bulk { size: 1000 }, &pagination, &query, &scope);
    let infinite = plan_request(FetchMode::InfiniteScroll, &pagination, &query, &scope);

    assert_eq!(
        server.query_pairs(),
        vec![
            ("page".to_string(), "3".to_string()),
            ("size".to_string(), "20".to_string()),
            ("search".to_string(), "lake".to_string()),
            ("maxPrice".to_string(), "900".to_string()),
            ("seekerId".to_string(), "4".to_string()),
        ]
    );
    assert_eq!(bulk, PageRequest { page: 0, size: 1000, params: scope.clone() });
    assert_eq!(infinite, PageRequest { page: 3, size: 20, params: scope });
}

#[tokio::test]
async fn memory_source_pages_and_filters_like_the_backend() {
    let source = MemorySource::new(numbered_properties(12));
    let mut request = PageRequest::new(1, 5);
    request
        .params
        .push(("status".to_string(), "available".to_string()));

    let page = run_fetch(
        &source,
        &FetchRequest {
            ticket: 9,
            page: request.clone(),
            append: false,
        },
    )
    .await;

    assert_eq!(page.ticket, 9);
    let envelope = page.result.expect("memory source should not fail");
    assert_eq!(envelope.total_elements, 6);
    assert_eq!(envelope.total_pages, 2);
    assert!(envelope.last);
    assert_eq!(envelope.content.map(|c| c.len()), Some(1));
    assert_eq!(source.requests(), vec![request]);
}

#[tokio::test]
async fn server_deep_link_past_the_end_falls_back_to_last_page() {
    let source = MemorySource::new(numbered_properties(25));
    let mut controller = ListQueryController::new(FetchMode::ServerPaged, 10);

    let request = controller.mount(Some(7));
    assert_eq!(request.page.page, 7);
    let completion = controller.complete(run_fetch(&source, &request).await);

    let Completion::Refetch(last_page) = completion else {
        panic!("page past the end should be refetched, got {completion:?}");
    };
    assert_eq!(last_page.page.page, 2);
    assert_eq!(controller.pagination().current_page, 2);
    assert_eq!(controller.phase(), Phase::Loading);

    let completion = controller.complete(run_fetch(&source, &last_page).await);
    let pagination = controller.pagination();

    assert_eq!(completion, Completion::Applied);
    assert_eq!(controller.phase(), Phase::Ready);
    assert_eq!(pagination.total_pages, 3);
    assert_eq!(pagination.total_elements, 25);
    assert!(pagination.current_page < pagination.total_pages);
    assert_eq!(controller.displayed().len(), 5);
}

#[tokio::test]
async fn memory_source_failure_flows_into_controller() {
    let source = MemorySource::new(numbered_properties(4));
    source.fail_next(FetchError::Status { status: 500 });
    let mut controller = ListQueryController::new(FetchMode::Bulk { size: 1000 }, 5);

    let request = controller.mount(None);
    let response = run_fetch(&source, &request).await;
    controller.complete(response);
    assert_eq!(controller.phase(), Phase::Error);

    let retry = controller.retry().expect("should retry");
    let response = run_fetch(&source, &retry).await;
    controller.complete(response);
    assert_eq!(controller.phase(), Phase::Ready);
    assert_eq!(controller.displayed().len(), 4);
}

#[test]
fn property_deserializes_from_backend_json() {
    let json = r#"{
        "id": 3,
        "title": "Lakeview Apt",
        "city": "Braga",
        "address": "Rua do Lago 1",
        "price": 650.0,
        "size": 42.5,
        "available": true,
        "landlordId": 12
    }"#;

    let property: Property = serde_json::from_str(json).expect("property should parse");

    assert_eq!(property.landlord_id, Some(12));
    assert_eq!(property.rooms, None);
    assert_eq!(property.status_key(), "available");
    assert_eq!(property.numeric_field("size"), Some(42.5));
}

#[test]
fn user_and_booking_expose_their_filter_surface() {
    let user: User = serde_json::from_str(
        r#"{"id": 1, "firstName": "Ana", "lastName": "Silva", "email": "ana@example.com", "role": "LANDLORD"}"#,
    )
    .expect("user should parse");
    let booking: Booking = serde_json::from_str(
        r#"{"id": 5, "propertyId": 3, "propertyTitle": "Lakeview Apt", "seekerId": 1,
            "seekerName": "Ana Silva", "startDate": "2026-03-01", "endDate": "2026-03-08",
            "totalPrice": 210.0, "status": "APPROVED"}"#,
    )
    .expect("booking should parse");

    assert!(user.enabled);
    assert_eq!(user.full_name(), "Ana Silva");
    assert_eq!(user.status_key(), "LANDLORD");
    assert_eq!(booking.status, BookingStatus::Approved);
    assert_eq!(booking.nights(), 7);
    assert_eq!(booking.numeric_field("totalPrice"), Some(210.0));
    assert!(User::range_filters().is_empty());
}

#[test]
fn sample_data_is_consistent() {
    let properties = sample_properties();
    let bookings = sample_bookings();

    assert_eq!(properties.len(), 30);
    assert_eq!(sample_users().len(), 12);
    assert!(!bookings.is_empty());
    assert!(bookings
        .iter()
        .all(|booking| properties.iter().any(|p| p.id == booking.property_id)));
    assert!(bookings.iter().all(|booking| booking.end_date > booking.start_date));
}

mod rest {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::domain::entities::page::PageRequest;
    use crate::domain::entities::property::Property;
    use crate::infra::http::rest_source::RestSource;
    use crate::usecase::ports::source::{FetchError, RecordSource};

    #[tokio::test]
    async fn rest_source_sends_paging_params_and_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/properties")
                    .query_param("page", "1")
                    .query_param("size", "2")
                    .query_param("landlordId", "7")
                    .header("authorization", "Bearer secret");
                then.status(200).json_body(json!({
                    "content": [
                        {"id": 3, "title": "Lakeview Apt", "city": "Braga", "address": "A",
                         "price": 500.0, "size": 30.0, "available": true}
                    ],
                    "totalElements": 3,
                    "totalPages": 2,
                    "number": 1,
                    "last": true
                }));
            })
            .await;

        let source = RestSource::<Property>::new(reqwest::Client::new(), server.url("/api/"))
            .with_token(Some("secret".to_string()));
        let mut request = PageRequest::new(1, 2);
        request
            .params
            .push(("landlordId".to_string(), "7".to_string()));

        let envelope = source
            .fetch_page(&request)
            .await
            .expect("request should succeed");

        mock.assert_async().await;
        assert_eq!(source.collection_url(), server.url("/api/properties"));
        assert_eq!(envelope.total_elements, 3);
        assert!(envelope.last);
        assert_eq!(
            envelope.content.map(|content| content[0].title.clone()),
            Some("Lakeview Apt".to_string())
        );
    }

    #[tokio::test]
    async fn rest_source_maps_error_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/properties");
                then.status(500);
            })
            .await;

        let source = RestSource::<Property>::new(reqwest::Client::new(), server.base_url());
        let result = source.fetch_page(&PageRequest::new(0, 10)).await;

        assert_eq!(result, Err(FetchError::Status { status: 500 }));
    }

    #[tokio::test]
    async fn rest_source_reports_malformed_bodies() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/properties");
                then.status(200).body("<html>oops</html>");
            })
            .await;

        let source = RestSource::<Property>::new(reqwest::Client::new(), server.base_url());
        let result = source.fetch_page(&PageRequest::new(0, 10)).await;

        assert!(matches!(result, Err(FetchError::Malformed(_))));
    }

    #[tokio::test]
    async fn rest_source_reports_unreachable_backend() {
        let source = RestSource::<Property>::new(reqwest::Client::new(), "http://127.0.0.1:9");
        let result = source.fetch_page(&PageRequest::new(0, 10)).await;

        assert!(matches!(result, Err(FetchError::Transport(_))));
    }

    #[tokio::test]
    async fn rest_source_accepts_body_without_content() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/properties");
                then.status(200)
                    .json_body(json!({"totalElements": 0, "totalPages": 0, "number": 0, "last": true}));
            })
            .await;

        let source = RestSource::<Property>::new(reqwest::Client::new(), server.base_url());
        let envelope = source
            .fetch_page(&PageRequest::new(0, 10))
            .await
            .expect("body without content should still parse");

        assert!(envelope.content.is_none());
    }
}

#[test]
fn preferences_ignore_invalid_entries_and_clamp_radius() {
    let entries = BTreeMap::from([
        ("theme".to_string(), "dark".to_string()),
        ("color_scheme".to_string(), "neon".to_string()),
        ("border_radius".to_string(), "200".to_string()),
    ]);

    let prefs = Preferences::from_entries(&entries);

    assert_eq!(prefs.theme, ThemeMode::Dark);
    assert_eq!(prefs.color_scheme, ColorScheme::Blue);
    assert_eq!(prefs.border_radius, 24);
}

#[test]
fn preference_service_round_trips_through_store() {
    let service = PreferenceService::new(Arc::new(MemoryPreferenceStore::default()));
    assert_eq!(service.load(), Preferences::default());

    let prefs = Preferences {
        theme: ThemeMode::Dark,
        color_scheme: ColorScheme::Purple,
        border_radius: 4,
    };
    service.save(&prefs).expect("should save preferences");

    assert_eq!(service.load(), prefs);
}

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        Err(StoreError::Message("disk on fire".to_string()))
    }

    fn save(&self, _entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        Err(StoreError::Message("disk on fire".to_string()))
    }
}

#[test]
fn preference_service_falls_back_to_defaults_when_store_fails() {
    let service = PreferenceService::new(Arc::new(BrokenStore));

    assert_eq!(service.load(), Preferences::default());
    assert_eq!(
        service.save(&Preferences::default()),
        Err(StoreError::Message("disk on fire".to_string()))
    );
}

#[test]
fn sqlite_preferences_persist_across_stores() {
    let temp_dir = unique_test_dir("preferences");
    let db_path = temp_dir.join("nested").join("preferences.sqlite");

    let store = SqlitePreferenceStore::open(db_path.clone()).expect("store should open");
    let prefs = Preferences {
        theme: ThemeMode::Dark,
        color_scheme: ColorScheme::Orange,
        border_radius: 12,
    };
    PreferenceService::new(Arc::new(store))
        .save(&prefs)
        .expect("should save preferences");
    let updated = prefs.with_border_radius(16);
    let reopened = SqlitePreferenceStore::open(db_path.clone()).expect("store should reopen");
    reopened
        .save(&updated.to_entries())
        .expect("should update preferences");

    let loaded = PreferenceService::new(Arc::new(reopened)).load();
    let raw = load_preferences(&db_path).expect("should read raw preferences");

    assert_eq!(loaded, updated);
    assert_eq!(raw.len(), 3);
    assert_eq!(raw.get("border_radius").map(String::as_str), Some("16"));

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn config_reads_lookup_with_defaults() {
    let env = BTreeMap::from([
        ("RENTDESK_API_URL", " https://api.example.com/api "),
        ("RENTDESK_ROLE", "landlord"),
        ("RENTDESK_USER_ID", "42"),
        ("RENTDESK_PAGE_SIZE", "not-a-number"),
        ("RENTDESK_BULK_SIZE", "0"),
        ("RENTDESK_TOKEN", ""),
    ]);

    let config = AppConfig::from_lookup(|key| env.get(key).map(|value| value.to_string()));

    assert_eq!(
        config.api_base_url.as_deref(),
        Some("https://api.example.com/api")
    );
    assert_eq!(config.role, Role::Landlord);
    assert_eq!(config.user_id, 42);
    assert_eq!(config.page_size, 10);
    assert_eq!(config.bulk_size, 1);
    assert_eq!(config.token, None);
    assert_eq!(
        config.session().viewer(),
        Viewer::Landlord { landlord_id: 42 }
    );
}

#[test]
fn default_config_uses_sample_data_as_seeker() {
    let config = AppConfig::from_lookup(|_| None);

    assert_eq!(config, AppConfig::default());
    assert!(config.api_base_url.is_none());
    assert_eq!(config.bulk_size, 1000);
}

#[test]
fn default_db_path_uses_rentdesk_app_directory() {
    let db_path = crate::config::default_db_path().expect("default db path should resolve");

    assert_eq!(
        db_path.file_name().and_then(|name| name.to_str()),
        Some("preferences.sqlite")
    );
    assert!(db_path.to_string_lossy().contains("rentdesk"));
}

#[test]
fn roles_parse_and_resolve_to_viewers() {
    assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
    assert!("tenant".parse::<Role>().is_err());

    let session = |role| Session {
        user_id: 9,
        display_name: "Test".to_string(),
        role,
        token: None,
    };

    assert_eq!(session(Role::Seeker).viewer(), Viewer::Seeker { user_id: 9 });
    assert_eq!(session(Role::Admin).viewer(), Viewer::Admin);
}

#[test]
fn navigation_depends_on_viewer() {
    let labels = |viewer| {
        nav_items(viewer)
            .into_iter()
            .map(|(label, _)| label)
            .collect::<Vec<_>>()
    };

    assert_eq!(
        labels(Viewer::Seeker { user_id: 1 }),
        vec!["Dashboard", "Browse", "My bookings", "Settings"]
    );
    assert_eq!(
        labels(Viewer::Landlord { landlord_id: 1 }),
        vec!["Dashboard", "My properties", "Booking requests", "Settings"]
    );
    assert!(nav_items(Viewer::Admin).contains(&("Users", Route::Users { page: 0 })));
}

#[test]
fn booking_scope_follows_viewer() {
    assert_eq!(
        booking_scope(Viewer::Seeker { user_id: 3 }).params(),
        vec![("seekerId".to_string(), "3".to_string())]
    );
    assert_eq!(
        booking_scope(Viewer::Landlord { landlord_id: 8 }),
        BookingScope::Landlord(8)
    );
    assert!(booking_scope(Viewer::Admin).params().is_empty());
    assert_eq!(
        landlord_scope(Some(8)),
        vec![("landlordId".to_string(), "8".to_string())]
    );
    assert!(landlord_scope(None).is_empty());
}

#[test]
fn route_pages_are_one_based() {
    assert_eq!(deep_link_page(0), None);
    assert_eq!(deep_link_page(1), Some(0));
    assert_eq!(deep_link_page(3), Some(2));
}

#[test]
fn filter_inputs_parse_numbers_or_clear() {
    assert_eq!(parse_filter_input("750"), Some(750.0));
    assert_eq!(parse_filter_input(" 12,5 "), Some(12.5));
    assert_eq!(parse_filter_input(""), None);
    assert_eq!(parse_filter_input("abc"), None);
    assert_eq!(parse_filter_input("inf"), None);
    assert_eq!(filter_label("maxPrice"), "Max price");
    assert_eq!(filter_label("minRooms"), "Min rooms");
}

#[test]
fn range_label_describes_visible_slice() {
    assert_eq!(range_label(0, 5, 5, 12), "Showing 1–5 of 12");
    assert_eq!(range_label(2, 5, 2, 12), "Showing 11–12 of 12");
    assert_eq!(range_label(0, 5, 0, 0), "No results");
}

#[test]
fn root_style_carries_preferences() {
    let style = root_style(&Preferences {
        theme: ThemeMode::Dark,
        color_scheme: ColorScheme::Green,
        border_radius: 6,
    });

    assert!(style.contains("--accent: #2e9d5b;"));
    assert!(style.contains("--radius: 6px;"));
    assert!(style.contains("background: #17191c;"));
    assert!(status_badge_style("available").contains("#2e9d5b"));
}
