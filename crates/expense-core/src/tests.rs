use chrono::NaiveDate;

use crate::{
    expense_service::{ExpenseDraft, ExpenseService},
    ledger_service::LedgerService,
    persistence::{serialize_ledger, PersistenceBridge},
    storage::MemoryStore,
    summary_service::SummaryService,
    time::{FixedClock, DEFAULT_DATE_FORMAT},
};
use expense_domain::{ExpenseCategory, ExpenseRecord, Ledger};

const TOLERANCE: f64 = 1e-9;

fn clock() -> FixedClock {
    FixedClock::on(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap())
}

fn add(ledger: &mut Ledger, amount: &str, category: ExpenseCategory) {
    ExpenseService::add(
        ledger,
        &ExpenseDraft::new(amount, category),
        &clock(),
        DEFAULT_DATE_FORMAT,
    )
    .expect("valid expense");
}

#[test]
fn initialize_without_persisted_data_is_empty() {
    assert!(LedgerService::initialize(None).is_empty());
}

#[test]
fn initialize_with_corrupt_data_is_empty() {
    for corrupt in ["", "{", "{\"a\":1}", "[{\"amount\":\"x\"}]", "null"] {
        let ledger = LedgerService::initialize(Some(corrupt));
        assert!(ledger.is_empty(), "{corrupt:?} should hydrate empty");
    }
}

#[test]
fn initialize_rejects_unknown_categories() {
    let data = r#"[{"id":"5f0c3a52-8e1b-4a0e-9c53-3b7a2b1c9d10","amount":3,"category":"Pets","note":"","date":"1/1/2025"}]"#;
    assert!(LedgerService::initialize(Some(data)).is_empty());
}

#[test]
fn initialize_drops_duplicate_ids_keeping_newest() {
    let newest = ExpenseRecord::new(10.0, ExpenseCategory::Food, "newer", "1/2/2025");
    let mut older = ExpenseRecord::new(20.0, ExpenseCategory::Rent, "older", "1/1/2025");
    older.id = newest.id.clone();
    let data = serialize_ledger(&Ledger::from_records(vec![newest.clone(), older])).unwrap();

    let ledger = LedgerService::initialize(Some(&data));
    assert_eq!(ledger.records(), &[newest]);
}

#[test]
fn initialize_accepts_any_string_id() {
    let data = r#"[{"id":"exp-1","amount":50,"category":"Food","note":"","date":"10/18/2026"}]"#;
    let ledger = LedgerService::initialize(Some(data));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.records().first().map(|r| r.id.as_str()), Some("exp-1"));
}

#[test]
fn empty_totals_are_positive_zero() {
    let ledger = Ledger::new();
    assert!(!SummaryService::total_spent(&ledger).is_sign_negative());
    for entry in SummaryService::category_totals(&ledger) {
        assert!(!entry.total.is_sign_negative(), "{}", entry.category);
    }

    let mut ledger = Ledger::new();
    add(&mut ledger, "12", ExpenseCategory::Food);
    let rent = SummaryService::breakdown(&ledger).total_for(ExpenseCategory::Rent);
    assert!(!rent.is_sign_negative());
}

#[test]
fn add_prepends_exactly_one_record() {
    let mut ledger = Ledger::new();
    add(&mut ledger, "20", ExpenseCategory::Food);
    let before = ledger.len();

    let draft = ExpenseDraft::new("7.25", ExpenseCategory::Utilities).with_note("water");
    let added = ExpenseService::add(&mut ledger, &draft, &clock(), DEFAULT_DATE_FORMAT).unwrap();

    assert_eq!(ledger.len(), before + 1);
    let front = ledger.records().first().expect("front record");
    assert_eq!(front, &added);
    assert_eq!(front.amount, 7.25);
    assert_eq!(front.category, ExpenseCategory::Utilities);
    assert_eq!(front.note, "water");
    assert_eq!(front.date, "03/09/2025");
}

#[test]
fn add_defaults_note_to_empty() {
    let mut ledger = Ledger::new();
    add(&mut ledger, "1", ExpenseCategory::Other);
    assert_eq!(ledger.records().first().map(|r| r.note.as_str()), Some(""));
}

#[test]
fn add_with_invalid_amount_leaves_ledger_unchanged() {
    let mut ledger = Ledger::new();
    add(&mut ledger, "5", ExpenseCategory::Food);
    let snapshot = ledger.clone();

    let drafts = [
        ExpenseDraft::default(),
        ExpenseDraft::new("", ExpenseCategory::Food),
        ExpenseDraft::new("twelve", ExpenseCategory::Rent),
    ];
    for draft in &drafts {
        let err = ExpenseService::add(&mut ledger, draft, &clock(), DEFAULT_DATE_FORMAT)
            .expect_err("draft should be rejected");
        assert!(err.is_validation());
    }
    assert_eq!(ledger, snapshot);
}

#[test]
fn add_with_bad_date_format_leaves_ledger_unchanged() {
    let mut ledger = Ledger::new();
    let draft = ExpenseDraft::new("5", ExpenseCategory::Food);
    assert!(ExpenseService::add(&mut ledger, &draft, &clock(), "%Q").is_err());
    assert!(ledger.is_empty());
}

#[test]
fn single_food_expense_scenario() {
    let mut ledger = Ledger::new();
    add(&mut ledger, "50", ExpenseCategory::Food);

    assert_eq!(SummaryService::total_spent(&ledger), 50.0);
    let totals = SummaryService::category_totals(&ledger);
    assert_eq!(totals.len(), ExpenseCategory::ALL.len());
    for entry in totals {
        let expected = if entry.category == ExpenseCategory::Food {
            50.0
        } else {
            0.0
        };
        assert_eq!(entry.total, expected, "{}", entry.category);
    }
}

#[test]
fn food_then_rent_scenario_orders_newest_first() {
    let mut ledger = Ledger::new();
    add(&mut ledger, "20", ExpenseCategory::Food);
    add(&mut ledger, "30", ExpenseCategory::Rent);

    let categories: Vec<_> = ledger.iter().map(|r| r.category).collect();
    assert_eq!(categories, vec![ExpenseCategory::Rent, ExpenseCategory::Food]);
    assert_eq!(SummaryService::total_spent(&ledger), 50.0);
}

#[test]
fn category_totals_follow_enumeration_order() {
    let mut ledger = Ledger::new();
    add(&mut ledger, "3", ExpenseCategory::Other);
    add(&mut ledger, "4", ExpenseCategory::Shopping);

    let order: Vec<_> = SummaryService::category_totals(&ledger)
        .into_iter()
        .map(|entry| entry.category)
        .collect();
    assert_eq!(order, ExpenseCategory::ALL.to_vec());
}

#[test]
fn category_totals_sum_to_total_spent() {
    let mut ledger = Ledger::new();
    let amounts = ["0.1", "0.2", "19.99", "1000", "3.3333", "42", "7.07"];
    for (idx, amount) in amounts.iter().enumerate() {
        let category = ExpenseCategory::ALL[idx % ExpenseCategory::ALL.len()];
        add(&mut ledger, amount, category);
    }

    let summed: f64 = SummaryService::category_totals(&ledger)
        .iter()
        .map(|entry| entry.total)
        .sum();
    let total = SummaryService::total_spent(&ledger);
    assert!((summed - total).abs() < TOLERANCE, "{summed} != {total}");

    let breakdown = SummaryService::breakdown(&ledger);
    let shares: f64 = ExpenseCategory::ALL
        .iter()
        .map(|category| breakdown.share(*category))
        .sum();
    assert!((shares - 1.0).abs() < TOLERANCE);
}

#[test]
fn save_then_load_round_trips_ledger() {
    let bridge = PersistenceBridge::with_default_key(Box::new(MemoryStore::new()));
    let mut ledger = Ledger::new();
    add(&mut ledger, "12.5", ExpenseCategory::Transport);
    add(&mut ledger, "800", ExpenseCategory::Rent);
    add(&mut ledger, "0.99", ExpenseCategory::Shopping);

    bridge.save(&ledger).unwrap();
    let restored = LedgerService::initialize(bridge.load().unwrap().as_deref());

    assert_eq!(restored, ledger);
}
