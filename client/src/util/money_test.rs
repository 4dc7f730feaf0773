use super::*;

#[test]
fn parse_whole_and_fractional_amounts() {
    assert_eq!(parse_amount_cents("12"), Ok(1200));
    assert_eq!(parse_amount_cents("12.5"), Ok(1250));
    assert_eq!(parse_amount_cents("12.05"), Ok(1205));
    assert_eq!(parse_amount_cents(" .99 "), Ok(99));
    assert_eq!(parse_amount_cents("1,204.99"), Ok(120_499));
}

#[test]
fn parse_rejects_empty_and_garbage() {
    assert_eq!(parse_amount_cents("   "), Err("Enter an amount."));
    assert_eq!(parse_amount_cents("-3"), Err("Amount must be a positive number."));
    assert_eq!(parse_amount_cents("1.2.3"), Err("Amount must be a positive number."));
    assert_eq!(parse_amount_cents("."), Err("Amount must be a positive number."));
    assert_eq!(parse_amount_cents("12abc"), Err("Amount must be a positive number."));
}

#[test]
fn parse_rejects_zero_and_extra_decimals() {
    assert_eq!(parse_amount_cents("0.00"), Err("Amount must be greater than zero."));
    assert_eq!(parse_amount_cents("1.234"), Err("Amount can have at most two decimals."));
}

#[test]
fn parse_rejects_overflow() {
    assert_eq!(parse_amount_cents("99999999999999999999"), Err("Amount is too large."));
}

#[test]
fn format_cents_pads_and_signs() {
    assert_eq!(format_cents(0), "0.00");
    assert_eq!(format_cents(5), "0.05");
    assert_eq!(format_cents(123_450), "1234.50");
    assert_eq!(format_cents(-305), "-3.05");
}
