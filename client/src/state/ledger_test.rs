use super::*;
use crate::net::types::AccountingEntry;

fn stored(id: &str, date: &str, kind: EntryKind, amount_cents: i64) -> StoredEntry {
    StoredEntry {
        id: id.to_owned(),
        entry: AccountingEntry {
            date: date.to_owned(),
            kind,
            category: "misc".to_owned(),
            amount_cents,
            note: String::new(),
        },
    }
}

#[test]
fn ledger_state_default_is_empty() {
    let state = LedgerState::default();
    assert!(state.entries.is_empty());
    assert!(!state.loading);
    assert_eq!(state.summary(), LedgerSummary::default());
}

#[test]
fn summary_splits_income_and_expense() {
    let entries = vec![
        stored("a", "2025-01-01", EntryKind::Income, 10_000),
        stored("b", "2025-01-02", EntryKind::Expense, 2_550),
        stored("c", "2025-01-03", EntryKind::Expense, 450),
    ];
    let summary = LedgerSummary::of(&entries);
    assert_eq!(summary.income_cents, 10_000);
    assert_eq!(summary.expense_cents, 3_000);
    assert_eq!(summary.balance_cents(), 7_000);
}

#[test]
fn balance_can_go_negative() {
    let summary = LedgerSummary::of(&[stored("a", "2025-01-01", EntryKind::Expense, 99)]);
    assert_eq!(summary.balance_cents(), -99);
}

#[test]
fn insert_keeps_newest_first() {
    let mut state = LedgerState::default();
    state.insert(stored("a", "2025-01-01", EntryKind::Income, 1));
    state.insert(stored("b", "2025-03-01", EntryKind::Income, 1));
    state.insert(stored("c", "2025-02-01", EntryKind::Income, 1));
    let ids: Vec<&str> = state.entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c", "a"]);
}
