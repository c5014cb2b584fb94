use chrono::{Datelike, NaiveDate};
use dayplan_domain::date::fill_zero;
use std::collections::BTreeMap;

/// Public holidays keyed by `YYYY-MM-DD`
pub trait IHolidayApi: Send + Sync {
    /// The holidays in the month of `date`
    fn fetch_holidays(&self, date: NaiveDate) -> BTreeMap<String, String>;
}

const KOREAN_HOLIDAYS: &[(&str, &str)] = &[
    ("2024-01-01", "신정"),
    ("2024-02-09", "설날"),
    ("2024-02-10", "설날"),
    ("2024-02-11", "설날"),
    ("2024-03-01", "삼일절"),
    ("2024-05-05", "어린이날"),
    ("2024-05-15", "부처님오신날"),
    ("2024-06-06", "현충일"),
    ("2024-08-15", "광복절"),
    ("2024-09-16", "추석"),
    ("2024-09-17", "추석"),
    ("2024-09-18", "추석"),
    ("2024-10-03", "개천절"),
    ("2024-10-09", "한글날"),
    ("2024-12-25", "크리스마스"),
    ("2025-01-01", "신정"),
    ("2025-01-28", "설날"),
    ("2025-01-29", "설날"),
    ("2025-01-30", "설날"),
    ("2025-03-01", "삼일절"),
    ("2025-05-05", "어린이날"),
    ("2025-05-06", "대체공휴일"),
    ("2025-06-06", "현충일"),
    ("2025-08-15", "광복절"),
    ("2025-10-03", "개천절"),
    ("2025-10-05", "추석"),
    ("2025-10-06", "추석"),
    ("2025-10-07", "추석"),
    ("2025-10-09", "한글날"),
    ("2025-12-25", "크리스마스"),
];

/// `IHolidayApi` with a fixed table of Korean public holidays
pub struct StaticHolidayApi {
    holidays: BTreeMap<String, String>,
}

impl StaticHolidayApi {
    pub fn new() -> Self {
        Self {
            holidays: KOREAN_HOLIDAYS
                .iter()
                .map(|(date, name)| (date.to_string(), name.to_string()))
                .collect(),
        }
    }
}

impl Default for StaticHolidayApi {
    fn default() -> Self {
        Self::new()
    }
}

impl IHolidayApi for StaticHolidayApi {
    fn fetch_holidays(&self, date: NaiveDate) -> BTreeMap<String, String> {
        let prefix = format!("{}-{}", date.year(), fill_zero(date.month()));
        self.holidays
            .iter()
            .filter(|(day, _)| day.starts_with(&prefix))
            .map(|(day, name)| (day.clone(), name.clone()))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_returns_the_holidays_of_the_month() {
        let api = StaticHolidayApi::new();
        let holidays = api.fetch_holidays(NaiveDate::from_ymd(2024, 2, 15));
        let expected = vec![
            ("2024-02-09", "설날"),
            ("2024-02-10", "설날"),
            ("2024-02-11", "설날"),
        ];
        assert_eq!(
            holidays.iter().map(|(d, n)| (d.as_str(), n.as_str())).collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn it_returns_nothing_for_months_without_holidays() {
        let api = StaticHolidayApi::new();
        assert!(api.fetch_holidays(NaiveDate::from_ymd(2024, 4, 1)).is_empty());
        assert!(api.fetch_holidays(NaiveDate::from_ymd(2023, 12, 1)).is_empty());
    }

    #[test]
    fn it_does_not_mix_years() {
        let api = StaticHolidayApi::new();
        let holidays = api.fetch_holidays(NaiveDate::from_ymd(2025, 1, 1));
        assert_eq!(holidays.len(), 4);
        assert_eq!(holidays.get("2025-01-01").map(String::as_str), Some("신정"));
        assert!(!holidays.contains_key("2024-01-01"));
    }
}
