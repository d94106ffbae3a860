/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Display formatting for amounts, dates and identifiers
//!
//! Output follows the `en-US` conventions used throughout the views:
//! comma thousands separators, `.` decimal point, month names in English.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").expect("valid regex"));
static US_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{3})(\d{3})(\d{4})$").expect("valid regex"));

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

const DATE_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y",
];

/// Date rendering styles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// `Jan 5`
    #[default]
    Short,
    /// `January 5, 2024`
    Long,
    /// `1/5/2024`
    Default,
}

impl FromStr for DateStyle {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "short" => DateStyle::Short,
            "long" => DateStyle::Long,
            _ => DateStyle::Default,
        })
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Magnitude rounded to `decimals` places, ties away from zero
///
/// `format!` rounds exact ties to even (`0.125` → `0.12`); displayed amounts
/// round them up instead.
fn round_half_away(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = (value.abs() * factor).round() / factor;
    if scaled.is_finite() { scaled } else { value.abs() }
}

/// Fixed-point rendering with grouped integer part, sign kept in front
fn grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, round_half_away(value, decimals));
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn currency_symbol(currency: &str) -> Option<&'static str> {
    match currency.to_ascii_uppercase().as_str() {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "INR" => Some("₹"),
        "CAD" => Some("CA$"),
        "AUD" => Some("A$"),
        "MXN" => Some("MX$"),
        _ => None,
    }
}

/// Formats an amount as currency with two decimals
///
/// ```
/// use lifeline_client::presentation::formatters::format_currency;
/// assert_eq!(format_currency(1234.5, "USD"), "$1,234.50");
/// assert_eq!(format_currency(-3.0, "EUR"), "-€3.00");
/// ```
///
/// Non-finite amounts render as `0.00`. Currencies without a known symbol
/// are prefixed with their code.
#[must_use]
pub fn format_currency(value: f64, currency: &str) -> String {
    if !value.is_finite() {
        return "0.00".to_string();
    }
    let amount = grouped(value, 2);
    let (sign, digits) = match amount.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", amount.as_str()),
    };
    match currency_symbol(currency) {
        Some(symbol) => format!("{sign}{symbol}{digits}"),
        None => format!("{sign}{}\u{a0}{digits}", currency.to_ascii_uppercase()),
    }
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    DATE_FORMATS.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(input, fmt)
            .map(|dt| dt.date())
            .or_else(|_| NaiveDate::parse_from_str(input, fmt))
            .ok()
    })
}

/// Formats a date string
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS`.
/// Empty input gives an empty string, anything unparsable gives
/// `Invalid Date`.
#[must_use]
pub fn format_date(input: &str, style: DateStyle) -> String {
    if input.trim().is_empty() {
        return String::new();
    }
    let Some(date) = parse_date(input) else {
        return "Invalid Date".to_string();
    };
    let pattern = match style {
        DateStyle::Short => "%b %-d",
        DateStyle::Long => "%B %-d, %Y",
        DateStyle::Default => "%-m/%-d/%Y",
    };
    date.format(pattern).to_string()
}

/// Formats a number with grouping and a fixed number of decimals
#[must_use]
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    grouped(value, decimals)
}

/// Formats a value already expressed in percent, `12.34` → `12.3%`
#[must_use]
pub fn format_percentage(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "0%".to_string();
    }
    format!("{}%", grouped(value, decimals))
}

/// Formats a span of days as days, months (30 days) or years (365 days)
#[must_use]
pub fn format_duration(days: i64) -> String {
    fn plural(n: i64, unit: &str) -> String {
        if n > 1 {
            format!("{n} {unit}s")
        } else {
            format!("{n} {unit}")
        }
    }

    if days < 30 {
        format!("{days} days")
    } else if days < 365 {
        plural(days / 30, "month")
    } else {
        plural(days / 365, "year")
    }
}

fn title_from(table: &[(&str, &'static str)], key: &str) -> String {
    let lowered = key.to_lowercase();
    table
        .iter()
        .find(|(k, _)| *k == lowered)
        .map_or_else(|| key.to_string(), |(_, title)| (*title).to_string())
}

/// Document status label: `paid` → `Paid`; unknown statuses pass through
#[must_use]
pub fn format_status(status: &str) -> String {
    title_from(
        &[
            ("paid", "Paid"),
            ("pending", "Pending"),
            ("overdue", "Overdue"),
            ("draft", "Draft"),
            ("void", "Void"),
            ("partial", "Partial"),
        ],
        status,
    )
}

/// Account type label: `asset` → `Asset`; unknown types pass through
#[must_use]
pub fn format_account_type(account_type: &str) -> String {
    title_from(
        &[
            ("asset", "Asset"),
            ("liability", "Liability"),
            ("equity", "Equity"),
            ("revenue", "Revenue"),
            ("expense", "Expense"),
        ],
        account_type,
    )
}

/// Human-readable byte count in 1024 steps, up to GB
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut unit = 0;
    let mut size = bytes as f64;
    while size >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{:.2}", round_half_away(size, 2));
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

/// US phone layout for ten-digit numbers, anything else unchanged
#[must_use]
pub fn format_phone_number(phone: &str) -> String {
    let digits = NON_DIGITS.replace_all(phone, "");
    match US_PHONE.captures(&digits) {
        Some(caps) => format!("({}) {}-{}", &caps[1], &caps[2], &caps[3]),
        None => phone.to_string(),
    }
}

/// Masks the local part of an address, keeping its first and last characters
///
/// `jonathan@example.com` → `j******n@example.com`. Local parts of two
/// characters or fewer are not masked; input without `@` is returned as is.
#[must_use]
pub fn mask_email(email: &str) -> String {
    let Some((name, domain)) = email.split_once('@') else {
        return email.to_string();
    };
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= 2 {
        return email.to_string();
    }
    let first = chars[0];
    let last = chars[chars.len() - 1];
    format!("{first}{}{last}@{domain}", "*".repeat(chars.len() - 2))
}

/// Display code of a company id, `42` → `COM000042`
///
/// A missing id (empty or `0`) renders as an empty string.
#[must_use]
pub fn format_company_id(id: impl Display) -> String {
    let id = id.to_string();
    if id.is_empty() || id == "0" {
        return String::new();
    }
    format!("COM{id:0>6}")
}
