// Order registration through SqliteUnitOfWork
// Covers commit, rollback on lookup mismatch and rollback on a failed line item insert

use chrono::{NaiveDate, NaiveTime};
use ordertx_core::errors::ExErrorKind;
use ordertx_core::model::{Category, MenuItem, OrderSubmission, OrderedMenu};
use ordertx_core::OrderService;
use ordertx_store::repo::{SqliteMenuRepo, SqliteOrderRepo};
use ordertx_store::SqliteUnitOfWork;
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    ordertx_store::db::configure(&conn).unwrap();
    ordertx_store::migrations::apply_migrations(&mut conn).unwrap();

    SqliteMenuRepo::upsert_category(
        &conn,
        &Category {
            code: 4,
            name: "Korean".to_string(),
        },
    )
    .unwrap();
    for (code, name, price) in [(1, "Kimchi stew", 5000), (2, "Bulgogi", 8000), (3, "Iced tea", 1500)] {
        SqliteMenuRepo::upsert_menu(&conn, &MenuItem::new(code, name, price, 4)).unwrap();
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
fn test_register_commits_order_and_line_items() {
    let mut conn = setup_test_db();

    let registered = OrderService::new(SqliteUnitOfWork::new(&mut conn))
        .register_new_order(&submission(&[(1, 2), (2, 1)]))
        .unwrap();

    assert_eq!(registered.total_price, 18000);
    assert_eq!(counts(&conn), (1, 2));

    let order = SqliteOrderRepo::get_order(&conn, registered.order_code)
        .unwrap()
        .unwrap();
    assert_eq!(order.total_price, 18000);
    assert_eq!(order.time, NaiveTime::from_hms_opt(12, 0, 0).unwrap());

    let lines = SqliteOrderRepo::list_line_items(&conn, registered.order_code).unwrap();
    let pairs: Vec<(i64, u32)> = lines.iter().map(|l| (l.menu_code, l.quantity)).collect();
    assert_eq!(pairs, vec![(1, 2), (2, 1)]);
    assert!(lines.iter().all(|l| l.order_code == registered.order_code));
}

#[test]
fn test_unknown_menu_rolls_back() {
    let mut conn = setup_test_db();

    let err = OrderService::new(SqliteUnitOfWork::new(&mut conn))
        .register_new_order(&submission(&[(1, 1), (42, 1)]))
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::LookupMismatch);
    assert_eq!(counts(&conn), (0, 0));
}

#[test]
fn test_failed_line_item_rolls_back_header_and_earlier_items() {
    let mut conn = setup_test_db();
    conn.execute_batch(
        "CREATE TRIGGER reject_bulgogi BEFORE INSERT ON tbl_order_menu
         WHEN NEW.menu_code = 2
         BEGIN SELECT RAISE(ABORT, 'line item rejected'); END;",
    )
    .unwrap();

    let err = OrderService::new(SqliteUnitOfWork::new(&mut conn))
        .register_new_order(&submission(&[(1, 2), (2, 1), (3, 1)]))
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Persistence);
    assert_eq!(err.op(), Some("insert_order_line_item"));
    assert!(err.message().contains("line item rejected"));
    assert_eq!(counts(&conn), (0, 0));
}

#[test]
fn test_connection_usable_after_rollback() {
    let mut conn = setup_test_db();

    {
        let mut service = OrderService::new(SqliteUnitOfWork::new(&mut conn));
        service
            .register_new_order(&submission(&[(99, 1)]))
            .unwrap_err();
        service.register_new_order(&submission(&[(3, 2)])).unwrap();
    }

    assert_eq!(counts(&conn), (1, 1));
}

#[test]
fn test_duplicate_codes_priced_and_stored_separately() {
    let mut conn = setup_test_db();

    let registered = OrderService::new(SqliteUnitOfWork::new(&mut conn))
        .register_new_order(&submission(&[(3, 1), (3, 2)]))
        .unwrap();

    assert_eq!(registered.total_price, 4500);
    assert_eq!(counts(&conn), (1, 2));
}

#[test]
fn test_sub_second_time_stored_as_whole_seconds() {
    let mut conn = setup_test_db();
    let mut s = submission(&[(1, 1)]);
    s.order_time = NaiveTime::from_hms_milli_opt(12, 0, 0, 500).unwrap();

    let registered = OrderService::new(SqliteUnitOfWork::new(&mut conn))
        .register_new_order(&s)
        .unwrap();

    let stored = SqliteOrderRepo::get_order(&conn, registered.order_code)
        .unwrap()
        .unwrap();
    assert_eq!(stored.time, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
}

#[test]
fn test_oversized_submission_rejected_before_lookup() {
    let mut conn = setup_test_db();
    let items: Vec<(i64, u32)> = (1..=40_000).map(|code| (code, 1)).collect();

    let err = OrderService::new(SqliteUnitOfWork::new(&mut conn))
        .register_new_order(&submission(&items))
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Validation);
    assert!(err.message().len() < 200);
    assert_eq!(counts(&conn), (0, 0));
}
