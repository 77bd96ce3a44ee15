// Engine-level registration: persistence outcome and lifecycle log events

use chrono::{NaiveDate, NaiveTime};
use ordertx_core::errors::ExErrorKind;
use ordertx_core::logging_facility::init_test_capture;
use ordertx_core::model::{OrderSubmission, OrderedMenu};
use ordertx_core::PriceMatching;
use ordertx_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND,
    FIELD_ITEM_COUNT, FIELD_ORDER_CODE, FIELD_REQUEST_ID, FIELD_TOTAL_PRICE,
};
use ordertx_core_types::{RequestContext, TraceId};
use ordertx_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use ordertx_engine::commands::order::register_order;
use ordertx_engine::RegistrationOptions;
use ordertx_store::repo::SqliteOrderRepo;
use rusqlite::Connection;

const CATALOG: &str = r#"
schema_version: 0
categories:
  - code: 4
    name: Korean
menus:
  - code: 1
    name: Kimchi stew
    price: 5000
    category: 4
  - code: 2
    name: Bulgogi
    price: 8000
    category: 4
"#;

fn setup_test_db() -> Connection {
    let mut conn = ordertx_store::db::open_in_memory().unwrap();
    ordertx_store::db::configure(&conn).unwrap();
    ordertx_store::migrations::apply_migrations(&mut conn).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.yaml");
    std::fs::write(&path, CATALOG).unwrap();
    let result = apply_engine_command(
        EngineCommand::ImportMenuCatalog { path },
        &mut conn,
        &RequestContext::new(),
    )
    .unwrap();
    match result {
        EngineCommandResult::ImportMenuCatalog(summary) => assert_eq!(summary.menus, 2),
        other => panic!("unexpected result: {:?}", other),
    }
    conn
}

fn submission(items: &[(i64, u32)]) -> OrderSubmission {
    OrderSubmission::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        items
            .iter()
            .map(|(code, qty)| OrderedMenu::new(*code, *qty))
            .collect(),
    )
}

fn counts(conn: &Connection) -> (i64, i64) {
    (
        SqliteOrderRepo::count_orders(conn).unwrap(),
        SqliteOrderRepo::count_line_items(conn).unwrap(),
    )
}

#[test]
fn test_register_order_persists_header_and_lines() {
    let mut conn = setup_test_db();
    let ctx = RequestContext::new();

    let registered = register_order(
        &mut conn,
        &ctx,
        &submission(&[(1, 2), (2, 1)]),
        &RegistrationOptions::default(),
    )
    .unwrap();

    assert_eq!(registered.total_price, 18000);
    assert_eq!(registered.line_item_count, 2);
    assert_eq!(counts(&conn), (1, 2));
}

#[test]
fn test_engine_command_dispatches_registration() {
    let mut conn = setup_test_db();

    let result = apply_engine_command(
        EngineCommand::RegisterOrder {
            submission: submission(&[(2, 3)]),
            options: RegistrationOptions::default().with_price_matching(PriceMatching::Positional),
        },
        &mut conn,
        &RequestContext::new(),
    )
    .unwrap();

    match result {
        EngineCommandResult::RegisterOrder(registered) => {
            assert_eq!(registered.total_price, 24000)
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_unknown_menu_leaves_no_rows_and_tags_error() {
    let mut conn = setup_test_db();
    let ctx = RequestContext::new().with_trace_id(TraceId::from_string("trace-unknown".into()));

    let err = register_order(
        &mut conn,
        &ctx,
        &submission(&[(1, 1), (77, 1)]),
        &RegistrationOptions::default(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::LookupMismatch);
    assert_eq!(err.request_id(), Some(&ctx.request_id));
    assert_eq!(err.trace_id().map(|t| t.as_str()), Some("trace-unknown"));
    assert_eq!(counts(&conn), (0, 0));
}

#[test]
fn test_failed_second_line_item_rolls_back_everything() {
    let mut conn = setup_test_db();
    conn.execute_batch(
        "CREATE TRIGGER reject_bulgogi BEFORE INSERT ON tbl_order_menu
         WHEN NEW.menu_code = 2
         BEGIN SELECT RAISE(ABORT, 'line item rejected'); END;",
    )
    .unwrap();

    let err = register_order(
        &mut conn,
        &RequestContext::new(),
        &submission(&[(1, 2), (2, 1)]),
        &RegistrationOptions::default(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Persistence);
    assert_eq!(counts(&conn), (0, 0));
}

#[test]
fn test_success_emits_start_and_end_events() {
    let capture = init_test_capture();
    let mut conn = setup_test_db();
    let ctx = RequestContext::new();

    let registered = register_order(
        &mut conn,
        &ctx,
        &submission(&[(1, 1)]),
        &RegistrationOptions::default(),
    )
    .unwrap();

    let events = capture.events_with(FIELD_REQUEST_ID, ctx.request_id.as_str());
    let kinds: Vec<&str> = events.iter().filter_map(|e| e.event.as_deref()).collect();
    assert_eq!(kinds, vec![EVENT_START, EVENT_END]);
    assert_eq!(events[0].field(FIELD_ITEM_COUNT), Some("1"));

    let end = &events[1];
    assert_eq!(end.op.as_deref(), Some("register_order"));
    assert!(end.field(FIELD_DURATION_MS).is_some());
    assert_eq!(
        end.field(FIELD_ORDER_CODE),
        Some(registered.order_code.to_string().as_str())
    );
    assert_eq!(end.field(FIELD_TOTAL_PRICE), Some("5000"));
}

#[test]
fn test_failure_emits_end_error_with_code() {
    let capture = init_test_capture();
    let mut conn = setup_test_db();
    let ctx = RequestContext::new();

    register_order(
        &mut conn,
        &ctx,
        &submission(&[]),
        &RegistrationOptions::default(),
    )
    .unwrap_err();

    let events = capture.events_with(FIELD_REQUEST_ID, ctx.request_id.as_str());
    let kinds: Vec<&str> = events.iter().filter_map(|e| e.event.as_deref()).collect();
    assert_eq!(kinds, vec![EVENT_START, EVENT_END_ERROR]);
    assert_eq!(events[1].field(FIELD_ERR_CODE), Some("ERR_VALIDATION"));
    assert_eq!(events[1].field(FIELD_ERR_KIND), Some("Validation"));
}
