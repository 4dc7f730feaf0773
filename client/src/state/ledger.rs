//! Dashboard ledger state and totals.

#[cfg(test)]
#[path = "ledger_test.rs"]
mod ledger_test;

use crate::net::types::{EntryKind, StoredEntry};

#[derive(Clone, Debug, Default)]
pub struct LedgerState {
    pub entries: Vec<StoredEntry>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Income, expense, and balance over a set of entries, in cents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LedgerSummary {
    pub income_cents: i64,
    pub expense_cents: i64,
}

impl LedgerSummary {
    pub fn of(entries: &[StoredEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut acc, stored| {
            match stored.entry.kind {
                EntryKind::Income => acc.income_cents = acc.income_cents.saturating_add(stored.entry.amount_cents),
                EntryKind::Expense => acc.expense_cents = acc.expense_cents.saturating_add(stored.entry.amount_cents),
            }
            acc
        })
    }

    pub fn balance_cents(&self) -> i64 {
        self.income_cents.saturating_sub(self.expense_cents)
    }
}

impl LedgerState {
    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary::of(&self.entries)
    }

    /// Insert a freshly created entry without refetching.
    pub fn insert(&mut self, stored: StoredEntry) {
        self.entries.push(stored);
        crate::net::ledger::sort_newest_first(&mut self.entries);
    }
}
