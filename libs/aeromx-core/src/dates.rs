//! Calendar date arithmetic for maintenance due projection
//!
//! All persisted and displayed dates use the `YYYY-MM-DD` contract. Month and
//! year arithmetic clamps to the end of the target month (Jan 31 + 1 month is
//! Feb 28, or Feb 29 in a leap year).

use chrono::{Datelike, Months, NaiveDate};
use thiserror::Error;

/// Errors that can occur during date arithmetic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateArithmeticError {
    /// Date arithmetic fell outside the representable range
    #[error("Date arithmetic overflow starting from {0}")]
    Overflow(NaiveDate),

    /// Date string parsing failed
    #[error("Failed to parse date string '{string}': {reason}")]
    ParseError { string: String, reason: String },
}

/// Parse a date from a `YYYY-MM-DD` string
///
/// # Errors
/// Returns `DateArithmeticError::ParseError` if the string is not a valid
/// calendar date in the expected format
pub fn parse_date(s: &str) -> Result<NaiveDate, DateArithmeticError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| DateArithmeticError::ParseError {
        string: s.to_string(),
        reason: e.to_string(),
    })
}

/// Format a date using the `YYYY-MM-DD` contract
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Add days to a date with overflow checking
///
/// # Errors
/// Returns `DateArithmeticError::Overflow` if the result is unrepresentable
pub fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate, DateArithmeticError> {
    date.checked_add_signed(chrono::Duration::days(days))
        .ok_or(DateArithmeticError::Overflow(date))
}

/// Add months to a date, keeping the day-of-month where the target month
/// allows and clamping to the target month's last day otherwise
///
/// # Errors
/// Returns `DateArithmeticError::Overflow` if the result is unrepresentable
pub fn add_months_same_day(date: NaiveDate, months: u32) -> Result<NaiveDate, DateArithmeticError> {
    date.checked_add_months(Months::new(months))
        .ok_or(DateArithmeticError::Overflow(date))
}

/// Add months to a date and land on the last day of the resulting month
///
/// # Errors
/// Returns `DateArithmeticError::Overflow` if the result is unrepresentable
pub fn add_months_eom(date: NaiveDate, months: u32) -> Result<NaiveDate, DateArithmeticError> {
    let shifted = add_months_same_day(date, months)?;
    end_of_month(shifted)
}

/// Add years to a date, clamping Feb 29 to Feb 28 in non-leap target years
///
/// # Errors
/// Returns `DateArithmeticError::Overflow` if the result is unrepresentable
pub fn add_years(date: NaiveDate, years: u32) -> Result<NaiveDate, DateArithmeticError> {
    let months = years
        .checked_mul(12)
        .ok_or(DateArithmeticError::Overflow(date))?;
    add_months_same_day(date, months)
}

/// Last day of the month containing `date`
///
/// # Errors
/// Returns `DateArithmeticError::Overflow` if the result is unrepresentable
pub fn end_of_month(date: NaiveDate) -> Result<NaiveDate, DateArithmeticError> {
    let first_of_month = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .ok_or(DateArithmeticError::Overflow(date))?;
    let first_of_next = first_of_month
        .checked_add_months(Months::new(1))
        .ok_or(DateArithmeticError::Overflow(date))?;
    add_days(first_of_next, -1)
}

/// Whole calendar days from `from` to `to` (negative when `to` is earlier)
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}
