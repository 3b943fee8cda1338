//! Windows relative to "today": hari ini, minggu ini, bulan ini, tahun ini.
//!
//! These back the fixed commands (`total hari ini`, `report mingguan`, ...)
//! and are the caller's default when a custom-period command has no args.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{last_day_of_month, previous_month};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativePeriod {
    Today,
    /// ISO week, Monday through Sunday
    Week,
    Month,
    Year,
}

impl RelativePeriod {
    pub fn label(&self) -> &'static str {
        match self {
            RelativePeriod::Today => "hari ini",
            RelativePeriod::Week => "minggu ini",
            RelativePeriod::Month => "bulan ini",
            RelativePeriod::Year => "tahun ini",
        }
    }

    pub fn previous_label(&self) -> &'static str {
        match self {
            RelativePeriod::Today => "kemarin",
            RelativePeriod::Week => "minggu lalu",
            RelativePeriod::Month => "bulan lalu",
            RelativePeriod::Year => "tahun lalu",
        }
    }

    /// Inclusive window containing `today`.
    pub fn bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            RelativePeriod::Today => (today, today),
            RelativePeriod::Week => {
                let offset = u64::from(today.weekday().num_days_from_monday());
                let start = today.checked_sub_days(Days::new(offset)).unwrap_or(today);
                let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
                (start, end)
            }
            RelativePeriod::Month => month_bounds(today.year(), today.month(), today),
            RelativePeriod::Year => year_bounds(today.year(), today),
        }
    }

    /// The window immediately before the one containing `today`.
    pub fn previous_bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            RelativePeriod::Today => {
                let yesterday = today.pred_opt().unwrap_or(today);
                (yesterday, yesterday)
            }
            RelativePeriod::Week => {
                let last_week = today.checked_sub_days(Days::new(7)).unwrap_or(today);
                RelativePeriod::Week.bounds(last_week)
            }
            RelativePeriod::Month => {
                let (year, month) = previous_month(today.year(), today.month());
                month_bounds(year, month, today)
            }
            RelativePeriod::Year => year_bounds(today.year() - 1, today),
        }
    }
}

fn month_bounds(year: i32, month: u32, fallback: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(fallback);
    let end = last_day_of_month(year, month).unwrap_or(fallback);
    (start, end)
}

fn year_bounds(year: i32, fallback: NaiveDate) -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(fallback),
        NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(fallback),
    )
}
