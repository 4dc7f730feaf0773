use super::*;

fn form() -> EntryForm {
    EntryForm {
        date: "2025-02-28".to_owned(),
        kind: "expense".to_owned(),
        category: " groceries ".to_owned(),
        amount: "42.50".to_owned(),
        note: " weekly ".to_owned(),
    }
}

#[test]
fn is_valid_date_accepts_calendar_days() {
    assert!(is_valid_date("2025-01-31"));
    assert!(is_valid_date("2024-02-29"));
    assert!(is_valid_date("2000-02-29"));
}

#[test]
fn is_valid_date_rejects_bad_shapes_and_days() {
    for raw in [
        "",
        "2025-1-01",
        "2025/01/01",
        "2025-13-01",
        "2025-00-10",
        "2025-04-31",
        "2023-02-29",
        "1900-02-29",
        "20a5-01-01",
        "+025-01-01",
        "2025-01-011",
    ] {
        assert!(!is_valid_date(raw), "expected {raw:?} to be rejected");
    }
}

#[test]
fn parse_entry_form_trims_and_converts() {
    let entry = parse_entry_form(&form()).expect("valid form");
    assert_eq!(
        entry,
        AccountingEntry {
            date: "2025-02-28".to_owned(),
            kind: EntryKind::Expense,
            category: "groceries".to_owned(),
            amount_cents: 4250,
            note: "weekly".to_owned(),
        }
    );
}

#[test]
fn parse_entry_form_reports_first_problem() {
    assert_eq!(parse_entry_form(&EntryForm { date: "yesterday".into(), ..form() }), Err("Pick a valid date."));
    assert_eq!(parse_entry_form(&EntryForm { kind: "transfer".into(), ..form() }), Err("Choose income or expense."));
    assert_eq!(parse_entry_form(&EntryForm { category: "  ".into(), ..form() }), Err("Enter a category."));
    assert_eq!(parse_entry_form(&EntryForm { amount: String::new(), ..form() }), Err("Enter an amount."));
}

#[test]
fn parse_entry_form_enforces_lengths() {
    let long_category = "c".repeat(MAX_CATEGORY_LEN + 1);
    assert_eq!(parse_entry_form(&EntryForm { category: long_category, ..form() }), Err("Category is too long."));
    let long_note = "n".repeat(MAX_NOTE_LEN + 1);
    assert_eq!(parse_entry_form(&EntryForm { note: long_note, ..form() }), Err("Note is too long."));
}

#[test]
fn empty_note_is_allowed() {
    let entry = parse_entry_form(&EntryForm { note: String::new(), ..form() }).expect("valid form");
    assert_eq!(entry.note, "");
}
