//! The ordered collection of expenses recorded in a session.

use serde::{Deserialize, Serialize};

use crate::{category::ExpenseCategory, common::sum_amounts, expense::ExpenseRecord};

/// Ordered sequence of expenses, newest first.
///
/// Serializes as a bare JSON array of records, which is the persisted layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps records that are already in newest-first order.
    pub fn from_records(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }

    /// Inserts `record` at the front of the ledger and returns its id.
    pub fn prepend(&mut self, record: ExpenseRecord) -> String {
        let id = record.id.clone();
        self.records.insert(0, record);
        id
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExpenseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn in_category(
        &self,
        category: ExpenseCategory,
    ) -> impl Iterator<Item = &ExpenseRecord> + '_ {
        self.records
            .iter()
            .filter(move |record| record.category == category)
    }

    /// Sum of every amount in the ledger.
    pub fn total(&self) -> f64 {
        sum_amounts(&self.records)
    }

    pub fn into_records(self) -> Vec<ExpenseRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a ExpenseRecord;
    type IntoIter = std::slice::Iter<'a, ExpenseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(amount: f64, category: ExpenseCategory) -> ExpenseRecord {
        ExpenseRecord::new(amount, category, "", "1/15/2025")
    }

    #[test]
    fn prepend_puts_newest_first() {
        let mut ledger = Ledger::new();
        let food = ledger.prepend(record(20.0, ExpenseCategory::Food));
        let rent = ledger.prepend(record(30.0, ExpenseCategory::Rent));

        let ids: Vec<_> = ledger.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec![rent.as_str(), food.as_str()]);
        assert_eq!(ledger.records().first().map(|r| r.id.as_str()), Some(rent.as_str()));
    }

    #[test]
    fn in_category_filters_records() {
        let mut ledger = Ledger::new();
        ledger.prepend(record(20.0, ExpenseCategory::Food));
        ledger.prepend(record(30.0, ExpenseCategory::Rent));
        ledger.prepend(record(5.0, ExpenseCategory::Food));

        assert_eq!(ledger.in_category(ExpenseCategory::Food).count(), 2);
        assert_eq!(ledger.in_category(ExpenseCategory::Other).count(), 0);
        assert_eq!(ledger.total(), 55.0);
    }

    #[test]
    fn serializes_as_bare_array() {
        let mut ledger = Ledger::new();
        ledger.prepend(record(1.0, ExpenseCategory::Other));
        let json = serde_json::to_value(&ledger).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().map(Vec::len), Some(1));

        let restored: Ledger = serde_json::from_value(json).unwrap();
        assert_eq!(restored, ledger);
    }
}
