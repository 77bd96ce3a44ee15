// Order registration against the in-memory backend.
// A wrapping unit of work injects lookup distortions and insert failures.

use chrono::{NaiveDate, NaiveTime};
use ordertx_core::errors::{ExError, ExErrorKind, ExResult};
use ordertx_core::model::{MenuItem, Order, OrderLineItem, OrderSubmission, OrderedMenu};
use ordertx_core::ports::{MenuMapper, OrderMapper, TransactionContext, UnitOfWork};
use ordertx_core::{InMemoryStore, OrderService, PriceMatching};

#[derive(Clone, Copy, Default)]
enum LookupTweak {
    #[default]
    None,
    Reverse,
    DropLast,
}

#[derive(Default)]
struct Faults {
    lookup: LookupTweak,
    fail_line_item_for: Option<i64>,
}

struct FaultyUnitOfWork<'s> {
    inner: &'s mut InMemoryStore,
    faults: Faults,
    transactions: usize,
}

struct FaultyContext<'a> {
    inner: &'a dyn TransactionContext,
    faults: &'a Faults,
}

impl MenuMapper for FaultyContext<'_> {
    fn select_menu_items_by_codes(&self, codes: &[i64]) -> ExResult<Vec<MenuItem>> {
        let mut menus = self.inner.select_menu_items_by_codes(codes)?;
        match self.faults.lookup {
            LookupTweak::None => {}
            LookupTweak::Reverse => menus.reverse(),
            LookupTweak::DropLast => {
                menus.pop();
            }
        }
        Ok(menus)
    }
}

impl OrderMapper for FaultyContext<'_> {
    fn insert_order(&self, order: &Order) -> ExResult<i64> {
        self.inner.insert_order(order)
    }

    fn insert_order_line_item(&self, line_item: &OrderLineItem) -> ExResult<()> {
        if self.faults.fail_line_item_for == Some(line_item.menu_code) {
            return Err(ExError::new(ExErrorKind::Persistence)
                .with_op("insert_order_line_item")
                .with_message("injected failure"));
        }
        self.inner.insert_order_line_item(line_item)
    }
}

impl UnitOfWork for FaultyUnitOfWork<'_> {
    fn run_in_transaction<T, F>(&mut self, work: F) -> ExResult<T>
    where
        F: FnOnce(&dyn TransactionContext) -> ExResult<T>,
    {
        self.transactions += 1;
        let faults = &self.faults;
        self.inner.run_in_transaction(|ctx| {
            let faulty = FaultyContext { inner: ctx, faults };
            work(&faulty)
        })
    }
}

fn catalog() -> InMemoryStore {
    InMemoryStore::with_menus([
        MenuItem::new(1, "Kimchi stew", 5000, 4),
        MenuItem::new(2, "Bulgogi", 8000, 4),
        MenuItem::new(3, "Iced tea", 1500, 7),
    ])
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

#[test]
fn test_register_two_items_happy_path() {
    let mut store = catalog();
    let mut service = OrderService::new(&mut store);

    let registered = service
        .register_new_order(&submission(&[(1, 2), (2, 1)]))
        .unwrap();

    assert_eq!(registered.total_price, 18000);
    assert_eq!(registered.line_item_count, 2);

    assert_eq!(store.order_count(), 1);
    let order = store.order(registered.order_code).unwrap();
    assert_eq!(order.total_price, 18000);
    assert_eq!(order.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

    let lines = store.line_items_for(registered.order_code);
    assert_eq!(lines.len(), 2);
    assert_eq!((lines[0].menu_code, lines[0].quantity), (1, 2));
    assert_eq!((lines[1].menu_code, lines[1].quantity), (2, 1));
}

#[test]
fn test_repeated_calls_create_separate_orders() {
    let mut store = catalog();
    let mut service = OrderService::new(&mut store);
    let s = submission(&[(3, 1)]);

    let first = service.register_new_order(&s).unwrap();
    let second = service.register_new_order(&s).unwrap();

    assert_ne!(first.order_code, second.order_code);
    assert_eq!(store.order_count(), 2);
    assert_eq!(store.line_item_count(), 2);
}

#[test]
fn test_duplicate_codes_become_separate_line_items() {
    let mut store = catalog();
    let mut service = OrderService::new(&mut store);

    let registered = service
        .register_new_order(&submission(&[(3, 1), (1, 1), (3, 2)]))
        .unwrap();

    assert_eq!(registered.total_price, 1500 + 5000 + 3000);
    let lines = store.line_items_for(registered.order_code);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2].quantity, 2);
}

#[test]
fn test_unknown_menu_is_lookup_mismatch_and_writes_nothing() {
    let mut store = catalog();
    let mut service = OrderService::new(&mut store);

    let err = service
        .register_new_order(&submission(&[(1, 1), (99, 1)]))
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::LookupMismatch);
    assert_eq!(store.order_count(), 0);
    assert_eq!(store.line_item_count(), 0);
}

#[test]
fn test_short_lookup_aborts_before_insert() {
    let mut store = catalog();
    let mut uow = FaultyUnitOfWork {
        inner: &mut store,
        faults: Faults {
            lookup: LookupTweak::DropLast,
            ..Faults::default()
        },
        transactions: 0,
    };

    let err = OrderService::new(&mut uow)
        .register_new_order(&submission(&[(1, 2), (2, 1)]))
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::LookupMismatch);
    assert_eq!(uow.transactions, 1);
    assert_eq!(store.order_count(), 0);
    assert_eq!(store.line_item_count(), 0);
}

#[test]
fn test_line_item_failure_rolls_back_order_header() {
    let mut store = catalog();
    let mut uow = FaultyUnitOfWork {
        inner: &mut store,
        faults: Faults {
            fail_line_item_for: Some(2),
            ..Faults::default()
        },
        transactions: 0,
    };

    let err = OrderService::new(&mut uow)
        .register_new_order(&submission(&[(1, 2), (2, 1), (3, 1)]))
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Persistence);
    assert_eq!(err.message(), "injected failure");
    assert_eq!(store.order_count(), 0, "order header must be rolled back");
    assert_eq!(store.line_item_count(), 0, "first line item must be rolled back");
}

#[test]
fn test_reordered_lookup_priced_by_code() {
    let mut store = catalog();
    let mut uow = FaultyUnitOfWork {
        inner: &mut store,
        faults: Faults {
            lookup: LookupTweak::Reverse,
            ..Faults::default()
        },
        transactions: 0,
    };

    let registered = OrderService::new(&mut uow)
        .register_new_order(&submission(&[(1, 2), (2, 1)]))
        .unwrap();

    assert_eq!(registered.total_price, 18000);
}

#[test]
fn test_reordered_lookup_misprices_positionally() {
    // Known limitation of positional matching: the reversed lookup prices
    // item 1 at 8000 and item 2 at 5000.
    let mut store = catalog();
    let mut uow = FaultyUnitOfWork {
        inner: &mut store,
        faults: Faults {
            lookup: LookupTweak::Reverse,
            ..Faults::default()
        },
        transactions: 0,
    };

    let mut service = OrderService::new(&mut uow).with_price_matching(PriceMatching::Positional);
    assert_eq!(service.price_matching(), PriceMatching::Positional);
    let registered = service
        .register_new_order(&submission(&[(1, 2), (2, 1)]))
        .unwrap();

    assert_eq!(registered.total_price, 2 * 8000 + 5000);
}

#[test]
fn test_validation_runs_before_transaction() {
    let mut store = catalog();
    let mut uow = FaultyUnitOfWork {
        inner: &mut store,
        faults: Faults::default(),
        transactions: 0,
    };

    let mut service = OrderService::new(&mut uow);
    let empty = service.register_new_order(&submission(&[])).unwrap_err();
    let zero = service.register_new_order(&submission(&[(1, 0)])).unwrap_err();

    assert_eq!(empty.kind(), ExErrorKind::Validation);
    assert_eq!(zero.kind(), ExErrorKind::Validation);
    assert_eq!(uow.transactions, 0);
}

#[test]
fn test_overflowing_total_rejected() {
    let mut store = InMemoryStore::with_menus([MenuItem::new(1, "Gold leaf", i64::MAX, 1)]);
    let mut service = OrderService::new(&mut store);

    let err = service
        .register_new_order(&submission(&[(1, 2)]))
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ArithmeticOverflow);
    assert_eq!(store.order_count(), 0);
}

#[test]
fn test_sub_second_time_dropped_from_order() {
    let mut store = catalog();
    let mut s = submission(&[(1, 1)]);
    s.order_time = NaiveTime::from_hms_milli_opt(12, 0, 0, 500).unwrap();

    let registered = OrderService::new(&mut store).register_new_order(&s).unwrap();

    let order = store.order(registered.order_code).unwrap();
    assert_eq!(order.time, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
}

#[test]
fn test_oversized_submission_never_opens_transaction() {
    let mut store = catalog();
    let mut uow = FaultyUnitOfWork {
        inner: &mut store,
        faults: Faults::default(),
        transactions: 0,
    };
    let items: Vec<(i64, u32)> = (0..=ordertx_core::rules::MAX_ORDER_ITEMS as i64)
        .map(|_| (1, 1))
        .collect();

    let err = OrderService::new(&mut uow)
        .register_new_order(&submission(&items))
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Validation);
    assert_eq!(uow.transactions, 0);
}
