use crate::Event;
use chrono::{prelude::*, Duration};
use std::fmt::Display;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DateError {
    #[error("Invalid month: {0}. The month should be between 1 and 12")]
    InvalidMonth(u32),
}

/// Parses a zero padded `YYYY-MM-DD` string. Anything else, including dates
/// that do not exist like `2023-02-29`, is rejected.
pub fn parse_date(datestr: &str) -> Option<NaiveDate> {
    let dates = datestr.split('-').collect::<Vec<_>>();
    if dates.len() != 3 || dates[0].len() != 4 || dates[1].len() != 2 || dates[2].len() != 2 {
        return None;
    }
    if !dates.iter().all(|part| part.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }

    let year = dates[0].parse().ok()?;
    let month = dates[1].parse().ok()?;
    let day = dates[2].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

// month: January -> 1
pub fn get_days_in_month(year: i32, month: u32) -> Result<u32, DateError> {
    let days = match month {
        1 => 31,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        3 => 31,
        4 => 30,
        5 => 31,
        6 => 30,
        7 => 31,
        8 => 31,
        9 => 30,
        10 => 31,
        11 => 30,
        12 => 31,
        _ => return Err(DateError::InvalidMonth(month)),
    };
    Ok(days)
}

fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    // A NaiveDate always carries a month in 1..=12
    let month_length = get_days_in_month(date.year(), date.month()).unwrap_or(28);
    first_day_of_month(date) + Duration::days(month_length as i64 - 1)
}

/// The first and last day of the calendar month containing `date`
pub fn get_month_range(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    (first_day_of_month(date), last_day_of_month(date))
}

/// The seven days, Sunday to Saturday, of the week containing `date`
pub fn get_week_dates(date: NaiveDate) -> Vec<NaiveDate> {
    let sunday = date - Duration::days(date.weekday().num_days_from_sunday() as i64);
    (0..7).map(|offset| sunday + Duration::days(offset)).collect()
}

/// Calendar grid of the month containing `date`. Every row is a Sunday first
/// week and slots outside of the month are `None`.
pub fn get_weeks_at_month(date: NaiveDate) -> Vec<[Option<u32>; 7]> {
    let first = first_day_of_month(date);
    let month_length = last_day_of_month(date).day();
    let offset = first.weekday().num_days_from_sunday();

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    for slot in 0..offset + month_length {
        if slot >= offset {
            week[(slot % 7) as usize] = Some(slot - offset + 1);
        }
        if slot % 7 == 6 {
            weeks.push(week);
            week = [None; 7];
        }
    }
    if (offset + month_length) % 7 != 0 {
        weeks.push(week);
    }
    weeks
}

/// Formats the week containing `date` as "2024년 10월 3주".
///
/// A week that spans two months belongs to the month containing its Thursday,
/// so 2023-02-28 is formatted as "2023년 3월 1주".
pub fn format_week(date: NaiveDate) -> String {
    let thursday = date + Duration::days(4 - date.weekday().num_days_from_sunday() as i64);
    let week_number = thursday.day0() / 7 + 1;
    format!(
        "{}년 {}월 {}주",
        thursday.year(),
        thursday.month(),
        week_number
    )
}

pub fn format_month(date: NaiveDate) -> String {
    format!("{}년 {}월", date.year(), date.month())
}

/// `YYYY-MM-DD`, where a given `day` replaces the day of `date`
pub fn format_date(date: NaiveDate, day: Option<u32>) -> String {
    format!(
        "{}-{}-{}",
        date.year(),
        fill_zero(date.month()),
        fill_zero(day.unwrap_or_else(|| date.day()))
    )
}

/// Inclusive on both ends. A range where `start` is after `end` contains nothing.
pub fn is_date_in_range(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    if start > end {
        return false;
    }
    start <= date && date <= end
}

pub fn fill_zero<T: Display>(value: T) -> String {
    fill_zero_to(value, 2)
}

/// Left pads the display form of `value` with zeros up to `size` characters.
/// Longer values are returned as they are.
pub fn fill_zero_to<T: Display>(value: T, size: usize) -> String {
    format!("{:0>width$}", value.to_string(), width = size)
}

pub fn get_events_for_day(events: &[Event], day: u32) -> Vec<&Event> {
    if !(1..=31).contains(&day) {
        return Vec::new();
    }
    events
        .iter()
        .filter(|event| match parse_date(&event.date) {
            Some(date) => date.day() == day,
            None => false,
        })
        .collect()
}
