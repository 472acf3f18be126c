mod common;

use std::{cell::RefCell, rc::Rc, sync::Arc};

use common::{memory_tracker, open_tracker, RecordingStore};
use expense_tracker::{
    core::{CommitOutcome, LedgerObserver, LedgerSnapshot},
    domain::ExpenseCategory,
    errors::TrackerError,
    services::{KeyValueStore, MemoryStore, DEFAULT_STORAGE_KEY},
};

/// Records `(record_count, total_spent)` for each notification.
#[derive(Clone, Default)]
struct Notifications(Rc<RefCell<Vec<(usize, f64)>>>);

impl Notifications {
    fn seen(&self) -> Vec<(usize, f64)> {
        self.0.borrow().clone()
    }
}

impl LedgerObserver for Notifications {
    fn ledger_changed(&mut self, snapshot: &LedgerSnapshot<'_>) {
        self.0
            .borrow_mut()
            .push((snapshot.record_count(), snapshot.total_spent()));
    }
}

#[test]
fn commit_saves_once_and_notifies_once() {
    let store = Arc::new(RecordingStore::default());
    let mut tracker = open_tracker(Arc::clone(&store));
    let notifications = Notifications::default();
    tracker.subscribe(Box::new(notifications.clone()));

    tracker.set_amount("50");
    tracker.select_category(ExpenseCategory::Food);
    let outcome = tracker.commit().expect("commit");

    let record = outcome.record().expect("record added");
    assert_eq!(record.amount, 50.0);
    assert_eq!(record.date, "03/09/2025");
    assert_eq!(store.writes(), 1);
    assert_eq!(notifications.seen(), vec![(1, 50.0)]);
}

#[test]
fn declined_commit_neither_saves_nor_notifies() {
    let store = Arc::new(RecordingStore::default());
    let mut tracker = open_tracker(Arc::clone(&store));
    let notifications = Notifications::default();
    tracker.subscribe(Box::new(notifications.clone()));

    tracker.set_amount("abc");
    tracker.set_note("kept");
    let outcome = tracker.commit().expect("decline is not an error");

    assert!(matches!(outcome, CommitOutcome::Declined { .. }));
    assert!(tracker.ledger().is_empty());
    assert_eq!(tracker.form().amount, "abc");
    assert_eq!(tracker.form().note, "kept");
    assert_eq!(store.writes(), 0);
    assert!(notifications.seen().is_empty());
}

#[test]
fn declined_one_step_add_restores_the_pending_form() {
    let (store, mut tracker) = memory_tracker();
    tracker.set_amount("42");
    tracker.select_category(ExpenseCategory::Utilities);
    tracker.set_note("keep");

    let outcome = tracker
        .add_expense("abc", ExpenseCategory::Rent, "")
        .expect("decline is not an error");

    assert!(matches!(outcome, CommitOutcome::Declined { .. }));
    let form = tracker.form();
    assert_eq!(form.amount, "42");
    assert_eq!(form.category, ExpenseCategory::Utilities);
    assert_eq!(form.note, "keep");
    assert!(store.get(DEFAULT_STORAGE_KEY).unwrap().is_none());
}

#[test]
fn blank_amount_is_declined() {
    let (store, mut tracker) = memory_tracker();
    let outcome = tracker.commit().expect("commit");
    assert_eq!(outcome.record(), None);
    assert!(store.get(DEFAULT_STORAGE_KEY).unwrap().is_none());
}

#[test]
fn failing_store_propagates_and_keeps_record_in_memory() {
    let mut tracker = open_tracker(RecordingStore::failing());
    let notifications = Notifications::default();
    tracker.subscribe(Box::new(notifications.clone()));

    let err = tracker
        .add_expense("12", ExpenseCategory::Transport, "bus")
        .expect_err("save should fail");

    assert!(matches!(err, TrackerError::StorageError(_)));
    assert_eq!(tracker.ledger().len(), 1);
    assert_eq!(notifications.seen(), vec![(1, 12.0)]);
}

#[test]
fn commit_clears_amount_and_note_but_keeps_category() {
    let (_store, mut tracker) = memory_tracker();
    tracker
        .add_expense("9.5", ExpenseCategory::Shopping, "socks")
        .expect("add");

    let form = tracker.form();
    assert!(form.amount.is_empty());
    assert!(form.note.is_empty());
    assert_eq!(form.category, ExpenseCategory::Shopping);
}

#[test]
fn reopening_hydrates_the_saved_ledger() {
    let (store, mut tracker) = memory_tracker();
    tracker
        .add_expense("20", ExpenseCategory::Food, "")
        .expect("add food");
    tracker
        .add_expense("30", ExpenseCategory::Rent, "march")
        .expect("add rent");

    let reopened = open_tracker(Arc::clone(&store));
    assert_eq!(reopened.ledger(), tracker.ledger());
    let categories: Vec<_> = reopened.ledger().iter().map(|r| r.category).collect();
    assert_eq!(categories, vec![ExpenseCategory::Rent, ExpenseCategory::Food]);
    assert_eq!(reopened.total_spent(), 50.0);
}

#[test]
fn corrupt_stored_value_opens_empty() {
    let store = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, "{not json");
    let tracker = open_tracker(store);
    assert!(tracker.ledger().is_empty());
    assert_eq!(tracker.total_spent(), 0.0);
}

#[test]
fn single_food_expense_breakdown() {
    let (_store, mut tracker) = memory_tracker();
    tracker
        .add_expense("50", ExpenseCategory::Food, "")
        .expect("add");

    let breakdown = tracker.breakdown();
    assert_eq!(breakdown.total_spent, 50.0);
    for category in ExpenseCategory::ALL {
        let expected = if category == ExpenseCategory::Food {
            50.0
        } else {
            0.0
        };
        assert_eq!(breakdown.total_for(category), expected);
    }
    let snapshot_total = tracker.with_snapshot(|snapshot| snapshot.total_spent());
    assert_eq!(snapshot_total, 50.0);
}

#[test]
fn settings_update_keeps_storage_key() {
    let (_store, mut tracker) = memory_tracker();
    let mut settings = tracker.settings().clone();
    settings.currency_symbol = "$".into();
    settings.storage_key = "elsewhere".into();

    tracker.update_settings(settings);

    assert_eq!(tracker.settings().currency_symbol, "$");
    assert_eq!(tracker.storage_key(), DEFAULT_STORAGE_KEY);
}
