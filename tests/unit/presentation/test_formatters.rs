use lifeline_client::presentation::formatters::*;

#[test]
fn test_format_currency() {
    assert_eq!(format_currency(1234.5, "USD"), "$1,234.50");
    assert_eq!(format_currency(0.0, "USD"), "$0.00");
    assert_eq!(format_currency(1_000_000.0, "usd"), "$1,000,000.00");
    assert_eq!(format_currency(-1234.567, "USD"), "-$1,234.57");
    assert_eq!(format_currency(99.999, "GBP"), "£100.00");
    assert_eq!(format_currency(12.0, "CHF"), "CHF\u{a0}12.00");
    assert_eq!(format_currency(f64::NAN, "USD"), "0.00");
    assert_eq!(format_currency(f64::INFINITY, "USD"), "0.00");
}

#[test]
fn test_format_date_styles() {
    assert_eq!(format_date("2024-01-05", DateStyle::Short), "Jan 5");
    assert_eq!(format_date("2024-01-05", DateStyle::Long), "January 5, 2024");
    assert_eq!(format_date("2024-01-05", DateStyle::Default), "1/5/2024");
    assert_eq!(
        format_date("2024-11-30T14:05:00Z", DateStyle::Long),
        "November 30, 2024"
    );
    assert_eq!(
        format_date("2024-03-09T08:00:00", DateStyle::Short),
        "Mar 9"
    );
}

#[test]
fn test_format_date_edge_cases() {
    assert_eq!(format_date("", DateStyle::Short), "");
    assert_eq!(format_date("   ", DateStyle::Long), "");
    assert_eq!(format_date("not a date", DateStyle::Short), "Invalid Date");
    assert_eq!(format_date("2024-02-30", DateStyle::Short), "Invalid Date");
}

#[test]
fn test_date_style_parsing() {
    assert_eq!("short".parse::<DateStyle>().unwrap(), DateStyle::Short);
    assert_eq!("long".parse::<DateStyle>().unwrap(), DateStyle::Long);
    assert_eq!("anything".parse::<DateStyle>().unwrap(), DateStyle::Default);
}

#[test]
fn test_format_number_and_percentage() {
    assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
    assert_eq!(format_number(999.5, 0), "1,000");
    assert_eq!(format_number(f64::NAN, 2), "0");
    assert_eq!(format_percentage(12.34, 1), "12.3%");
    assert_eq!(format_percentage(-4.0, 2), "-4.00%");
    assert_eq!(format_percentage(f64::NAN, 1), "0%");
}

#[test]
fn test_exact_ties_round_away_from_zero() {
    assert_eq!(format_currency(0.125, "USD"), "$0.13");
    assert_eq!(format_currency(1234.625, "USD"), "$1,234.63");
    assert_eq!(format_currency(-0.125, "USD"), "-$0.13");
    assert_eq!(format_number(2.5, 0), "3");
    assert_eq!(format_number(-2.5, 0), "-3");
    assert_eq!(format_percentage(0.25, 1), "0.3%");
    assert_eq!(format_file_size(1152), "1.13 KB");
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(1), "1 days");
    assert_eq!(format_duration(29), "29 days");
    assert_eq!(format_duration(30), "1 month");
    assert_eq!(format_duration(45), "1 month");
    assert_eq!(format_duration(90), "3 months");
    assert_eq!(format_duration(364), "12 months");
    assert_eq!(format_duration(365), "1 year");
    assert_eq!(format_duration(800), "2 years");
}

#[test]
fn test_status_and_account_type_labels() {
    assert_eq!(format_status("paid"), "Paid");
    assert_eq!(format_status("OVERDUE"), "Overdue");
    assert_eq!(format_status("sent"), "sent");
    assert_eq!(format_account_type("Liability"), "Liability");
    assert_eq!(format_account_type("expense"), "Expense");
    assert_eq!(format_account_type("contra"), "contra");
}

#[test]
fn test_format_file_size() {
    assert_eq!(format_file_size(0), "0 Bytes");
    assert_eq!(format_file_size(512), "512 Bytes");
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
    assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
}

#[test]
fn test_format_phone_number() {
    assert_eq!(format_phone_number("5551234567"), "(555) 123-4567");
    assert_eq!(format_phone_number("555.123.4567"), "(555) 123-4567");
    assert_eq!(format_phone_number("+1 555 123 4567"), "+1 555 123 4567");
    assert_eq!(format_phone_number("12345"), "12345");
}

#[test]
fn test_mask_email() {
    assert_eq!(mask_email("jonathan@example.com"), "j******n@example.com");
    assert_eq!(mask_email("abc@example.com"), "a*c@example.com");
    assert_eq!(mask_email("al@example.com"), "al@example.com");
    assert_eq!(mask_email("not-an-email"), "not-an-email");
    assert_eq!(mask_email(""), "");
}

#[test]
fn test_format_company_id() {
    assert_eq!(format_company_id(42), "COM000042");
    assert_eq!(format_company_id("7"), "COM000007");
    assert_eq!(format_company_id(1234567), "COM1234567");
    assert_eq!(format_company_id(""), "");
    assert_eq!(format_company_id(0), "");
}
