use chrono::{Datelike, Duration, NaiveDate};
use anyhow::{anyhow, Result};

use crate::model::month::YearMonth;

pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Number of days in the month, or 0 if the month cannot be represented.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next) = next_month(year, month);
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next, 1),
    ) {
        (Some(first), Some(following)) => (following - first).num_days() as u32,
        _ => 0,
    }
}

/// Parses a day relative to `today`.
///
/// Accepts `today`, `yesterday`/`yes`, `tomorrow`/`tom`, `-N` (N days ago)
/// and plain `YYYY-MM-DD`.
pub fn parse_day(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "yesterday" | "yes" => return days_before(today, 1, input),
        "tomorrow" | "tom" => return days_before(today, -1, input),
        _ => {}
    }

    if let Some(count) = input.strip_prefix('-') {
        let days: i64 = count
            .parse()
            .map_err(|_| anyhow!("Invalid relative day: {}", input))?;
        return days_before(today, days, input);
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| anyhow!("Could not parse date: {}", input))
}

fn days_before(today: NaiveDate, days: i64, input: &str) -> Result<NaiveDate> {
    Duration::try_days(days)
        .and_then(|delta| today.checked_sub_signed(delta))
        .ok_or_else(|| anyhow!("Invalid relative day: {}", input))
}

/// Parses a month relative to `today`: `this`, `last`, `next` or `YYYY-MM`.
pub fn parse_month(input: &str, today: NaiveDate) -> Result<YearMonth> {
    let input = input.trim();
    let current = YearMonth::of(today);
    match input.to_lowercase().as_str() {
        "this" | "now" => return Ok(current),
        "last" | "prev" => return Ok(current.previous()),
        "next" => return Ok(current.next()),
        _ => {}
    }

    let (year_str, month_str) = input
        .split_once('-')
        .ok_or_else(|| anyhow!("Could not parse month: {}", input))?;
    let year: i32 = year_str
        .parse()
        .map_err(|_| anyhow!("Invalid year in month: {}", input))?;
    let month: u32 = month_str
        .parse()
        .map_err(|_| anyhow!("Invalid month number: {}", input))?;
    YearMonth::new(year, month).ok_or_else(|| anyhow!("No such month: {}", input))
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn month_label(period: YearMonth) -> String {
    match period.first_day() {
        Some(first) => format!("{} {}", first.format("%B"), first.year()),
        None => period.to_string(),
    }
}
