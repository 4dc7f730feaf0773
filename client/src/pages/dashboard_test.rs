use super::*;

fn entry(kind: EntryKind, amount_cents: i64) -> AccountingEntry {
    AccountingEntry {
        date: "2025-01-01".to_owned(),
        kind,
        category: "misc".to_owned(),
        amount_cents,
        note: String::new(),
    }
}

#[test]
fn signed_amount_label_marks_income_positive() {
    assert_eq!(signed_amount_label(&entry(EntryKind::Income, 1250)), "+12.50");
}

#[test]
fn signed_amount_label_marks_expense_negative() {
    assert_eq!(signed_amount_label(&entry(EntryKind::Expense, 7)), "-0.07");
}

#[test]
fn kind_class_distinguishes_rows() {
    assert_ne!(kind_class(EntryKind::Income), kind_class(EntryKind::Expense));
    assert!(kind_class(EntryKind::Expense).ends_with("--expense"));
}
