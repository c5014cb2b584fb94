use crate::{
    date::{get_month_range, get_week_dates, is_date_in_range, parse_date},
    Event,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Week,
    Month,
}

#[derive(Error, Debug, PartialEq)]
#[error("View mode: {0} is not valid. Expected `week` or `month`")]
pub struct InvalidViewModeError(String);

impl FromStr for ViewMode {
    type Err = InvalidViewModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(InvalidViewModeError(s.to_string())),
        }
    }
}

fn contains_term(event: &Event, term: &str) -> bool {
    [&event.title, &event.description, &event.location]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
}

fn view_range(current_date: NaiveDate, view: ViewMode) -> (NaiveDate, NaiveDate) {
    match view {
        ViewMode::Week => {
            let week = get_week_dates(current_date);
            (week[0], week[6])
        }
        ViewMode::Month => get_month_range(current_date),
    }
}

/// Events matching `search_term` (case-insensitive, on title, description or
/// location) that take place in the week or month of `current_date`.
/// The input order is kept.
pub fn get_filtered_events<'a>(
    events: &'a [Event],
    search_term: &str,
    current_date: NaiveDate,
    view: ViewMode,
) -> Vec<&'a Event> {
    let term = search_term.to_lowercase();
    let (start, end) = view_range(current_date, view);

    events
        .iter()
        .filter(|event| contains_term(event, &term))
        .filter(|event| match parse_date(&event.date) {
            Some(date) => is_date_in_range(date, start, end),
            None => false,
        })
        .collect()
}
