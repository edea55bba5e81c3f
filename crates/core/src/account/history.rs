//! Append-only transaction history of an account.

use rust_decimal::Decimal;
use serde::Serialize;

use super::types::{TransactionKind, TransactionRecord};

/// Ordered log of applied transactions.
///
/// Records are never removed or reordered. Only the owning account appends.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct History {
    records: Vec<TransactionRecord>,
}

/// Deposit and withdrawal sums over a history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct HistoryTotals {
    /// Sum of all deposits.
    pub deposited: Decimal,
    /// Sum of all withdrawals.
    pub withdrawn: Decimal,
}

impl HistoryTotals {
    /// Net movement (deposits minus withdrawals).
    ///
    /// Both sums are non-negative, so the difference cannot overflow.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.deposited - self.withdrawn
    }
}

impl History {
    /// Appends `record` and returns the stored copy.
    pub(crate) fn append(&mut self, record: TransactionRecord) -> &TransactionRecord {
        let index = self.records.len();
        self.records.push(record);
        // in bounds: the push above made `index` the last slot
        &self.records[index]
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, TransactionRecord> {
        self.records.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&TransactionRecord> {
        self.records.last()
    }

    /// Sums deposits and withdrawals.
    ///
    /// Each sum saturates at [`Decimal::MAX`]; a balance can sit at the
    /// maximum while its lifetime deposits go past it.
    #[must_use]
    pub fn totals(&self) -> HistoryTotals {
        self.records
            .iter()
            .fold(HistoryTotals::default(), |mut totals, record| {
                match record.kind() {
                    TransactionKind::Deposit => {
                        totals.deposited = totals.deposited.saturating_add(record.amount());
                    }
                    TransactionKind::Withdrawal => {
                        totals.withdrawn = totals.withdrawn.saturating_add(record.amount());
                    }
                }
                totals
            })
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a TransactionRecord;
    type IntoIter = std::slice::Iter<'a, TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut history = History::default();
        history.append(TransactionRecord::new(
            TransactionKind::Deposit,
            dec!(100),
            Utc::now(),
        ));
        history.append(TransactionRecord::new(
            TransactionKind::Withdrawal,
            dec!(40),
            Utc::now(),
        ));

        let kinds: Vec<_> = history.iter().map(TransactionRecord::kind).collect();
        assert_eq!(
            kinds,
            vec![TransactionKind::Deposit, TransactionKind::Withdrawal]
        );
        assert_eq!(history.len(), 2);
        assert_eq!(history.last().map(TransactionRecord::amount), Some(dec!(40)));
    }

    #[test]
    fn test_append_returns_the_stored_record() {
        let mut history = History::default();
        for amount in [dec!(1), dec!(2), dec!(3)] {
            let record = TransactionRecord::new(TransactionKind::Deposit, amount, Utc::now());
            let id = record.id();
            let stored = history.append(record);
            assert_eq!(stored.id(), id);
            assert_eq!(stored.amount(), amount);
        }
        assert_eq!(history.last().map(TransactionRecord::amount), Some(dec!(3)));
    }

    #[test]
    fn test_totals_saturate_instead_of_panicking() {
        let mut history = History::default();
        for amount in [Decimal::MAX, dec!(500), dec!(500)] {
            history.append(TransactionRecord::new(TransactionKind::Deposit, amount, Utc::now()));
        }
        history.append(TransactionRecord::new(TransactionKind::Withdrawal, dec!(500), Utc::now()));

        let totals = history.totals();
        assert_eq!(totals.deposited, Decimal::MAX);
        assert_eq!(totals.withdrawn, dec!(500));
        assert_eq!(totals.net(), Decimal::MAX - dec!(500));
    }

    #[test]
    fn test_totals() {
        let mut history = History::default();
        assert!(history.is_empty());
        assert_eq!(history.totals(), HistoryTotals::default());

        for (kind, amount) in [
            (TransactionKind::Deposit, dec!(100)),
            (TransactionKind::Deposit, dec!(50.25)),
            (TransactionKind::Withdrawal, dec!(30)),
        ] {
            history.append(TransactionRecord::new(kind, amount, Utc::now()));
        }

        let totals = history.totals();
        assert_eq!(totals.deposited, dec!(150.25));
        assert_eq!(totals.withdrawn, dec!(30));
        assert_eq!(totals.net(), dec!(120.25));
    }
}
