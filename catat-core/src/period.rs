//! Resolved calendar windows for totals, summaries, reports and comparisons.
//!
//! Every range variant is inclusive on both ends and guaranteed
//! `start <= end`; the constructors refuse anything else instead of
//! clamping.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{last_day_of_month, month_label, previous_month};
use crate::error::ParseError;

/// Format used for date-range labels.
pub const DATE_LABEL_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Period {
    Year {
        year: i32,
    },
    Month {
        year: i32,
        month: u32,
    },
    YearRange {
        start_year: i32,
        end_year: i32,
    },
    MonthRange {
        start_date: NaiveDate,
        end_date: NaiveDate,
        start_label: String,
        end_label: String,
    },
    DateRange {
        start_date: NaiveDate,
        end_date: NaiveDate,
        start_label: String,
        end_label: String,
    },
}

impl Period {
    pub fn year(year: i32) -> Self {
        Period::Year { year }
    }

    pub fn month(year: i32, month: u32) -> Result<Self, ParseError> {
        if !(1..=12).contains(&month) {
            return Err(ParseError::MalformedDate(format!("month {month} of {year}")));
        }
        Ok(Period::Month { year, month })
    }

    pub fn year_range(start_year: i32, end_year: i32) -> Result<Self, ParseError> {
        if start_year > end_year {
            return Err(ParseError::InvalidRange {
                start: start_year.to_string(),
                end: end_year.to_string(),
            });
        }
        Ok(Period::YearRange {
            start_year,
            end_year,
        })
    }

    /// First day of the start month through the last day of the end month.
    pub fn month_range(
        (start_year, start_month): (i32, u32),
        (end_year, end_month): (i32, u32),
    ) -> Result<Self, ParseError> {
        let start_date = NaiveDate::from_ymd_opt(start_year, start_month, 1).ok_or_else(|| {
            ParseError::MalformedDate(format!("month {start_month} of {start_year}"))
        })?;
        let end_date = last_day_of_month(end_year, end_month)
            .ok_or_else(|| ParseError::MalformedDate(format!("month {end_month} of {end_year}")))?;
        check_order(start_date, end_date)?;

        Ok(Period::MonthRange {
            start_date,
            end_date,
            start_label: format!("{} {}", month_label(start_month), start_year),
            end_label: format!("{} {}", month_label(end_month), end_year),
        })
    }

    pub fn date_range(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, ParseError> {
        check_order(start_date, end_date)?;
        Ok(Period::DateRange {
            start_date,
            end_date,
            start_label: start_date.format(DATE_LABEL_FORMAT).to_string(),
            end_label: end_date.format(DATE_LABEL_FORMAT).to_string(),
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Period::Year { .. } => "year",
            Period::Month { .. } => "month",
            Period::YearRange { .. } => "year_range",
            Period::MonthRange { .. } => "month_range",
            Period::DateRange { .. } => "date_range",
        }
    }

    /// Human label, e.g. "Tahun 2025", "Januari 2025", "2024 - 2025".
    pub fn label(&self) -> String {
        match self {
            Period::Year { year } => format!("Tahun {year}"),
            Period::Month { year, month } => format!("{} {}", month_label(*month), year),
            Period::YearRange {
                start_year,
                end_year,
            } => format!("{start_year} - {end_year}"),
            Period::MonthRange {
                start_label,
                end_label,
                ..
            }
            | Period::DateRange {
                start_label,
                end_label,
                ..
            } => format!("{start_label} - {end_label}"),
        }
    }

    /// Inclusive first and last calendar day covered.
    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        match self {
            Period::Year { year } => (year_start(*year), year_end(*year)),
            Period::Month { year, month } => {
                let start = NaiveDate::from_ymd_opt(*year, *month, 1).unwrap_or(NaiveDate::MIN);
                let end = last_day_of_month(*year, *month).unwrap_or(NaiveDate::MAX);
                (start, end)
            }
            Period::YearRange {
                start_year,
                end_year,
            } => (year_start(*start_year), year_end(*end_year)),
            Period::MonthRange {
                start_date,
                end_date,
                ..
            }
            | Period::DateRange {
                start_date,
                end_date,
                ..
            } => (*start_date, *end_date),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let (start, end) = self.bounds();
        start <= date && date <= end
    }

    /// Only single months and single years can be compared.
    pub fn supports_comparison(&self) -> bool {
        matches!(self, Period::Year { .. } | Period::Month { .. })
    }

    /// The window a comparison is made against. January rolls back to
    /// December of the prior year.
    pub fn previous(&self) -> Option<Period> {
        match self {
            Period::Year { year } => Some(Period::Year { year: year - 1 }),
            Period::Month { year, month } => {
                let (year, month) = previous_month(*year, *month);
                Some(Period::Month { year, month })
            }
            _ => None,
        }
    }

    /// Argument text that parses back into this same period.
    pub fn to_args(&self) -> String {
        match self {
            Period::Year { year } => format!("{year:04}"),
            Period::Month { year, month } => month_args(*year, *month),
            Period::YearRange {
                start_year,
                end_year,
            } => format!("{start_year:04}-{end_year:04}"),
            Period::MonthRange {
                start_date,
                end_date,
                ..
            } => format!(
                "{} hingga {}",
                month_args(start_date.year(), start_date.month()),
                month_args(end_date.year(), end_date.month())
            ),
            Period::DateRange {
                start_label,
                end_label,
                ..
            } => format!("{start_label} hingga {end_label}"),
        }
    }
}

/// `januari 0999`: the year is always four digits.
fn month_args(year: i32, month: u32) -> String {
    format!("{} {:04}", month_label(month).to_lowercase(), year)
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

fn check_order(start: NaiveDate, end: NaiveDate) -> Result<(), ParseError> {
    if start > end {
        return Err(ParseError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(())
}

fn year_start(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn year_end(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_range_ends_on_last_day() {
        let p = Period::month_range((2024, 1), (2025, 6)).unwrap();
        assert_eq!(p.bounds(), (date(2024, 1, 1), date(2025, 6, 30)));
        assert_eq!(p.label(), "Januari 2024 - Juni 2025");

        let leap = Period::month_range((2024, 2), (2024, 2)).unwrap();
        assert_eq!(leap.bounds().1, date(2024, 2, 29));
    }

    #[test]
    fn test_inverted_ranges_rejected() {
        assert!(Period::year_range(2025, 2024).is_err());
        assert!(Period::month_range((2025, 6), (2025, 5)).is_err());
        assert!(Period::date_range(date(2025, 1, 2), date(2025, 1, 1)).is_err());
        assert!(Period::month(2025, 13).is_err());
    }

    #[test]
    fn test_single_day_range_allowed() {
        let p = Period::date_range(date(2025, 3, 1), date(2025, 3, 1)).unwrap();
        assert_eq!(p.label(), "01/03/2025 - 01/03/2025");
        assert!(p.contains(date(2025, 3, 1)));
        assert!(!p.contains(date(2025, 3, 2)));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Period::year(2025).label(), "Tahun 2025");
        assert_eq!(Period::month(2025, 1).unwrap().label(), "Januari 2025");
        assert_eq!(Period::year_range(2024, 2025).unwrap().label(), "2024 - 2025");
    }

    #[test]
    fn test_previous() {
        assert_eq!(
            Period::month(2025, 1).unwrap().previous(),
            Some(Period::Month {
                year: 2024,
                month: 12
            })
        );
        assert_eq!(Period::year(2025).previous(), Some(Period::year(2024)));
        assert_eq!(Period::year_range(2024, 2025).unwrap().previous(), None);
        assert!(!Period::year_range(2024, 2025).unwrap().supports_comparison());
    }

    #[test]
    fn test_bounds() {
        assert_eq!(
            Period::year_range(2024, 2025).unwrap().bounds(),
            (date(2024, 1, 1), date(2025, 12, 31))
        );
        assert_eq!(
            Period::month(2023, 2).unwrap().bounds(),
            (date(2023, 2, 1), date(2023, 2, 28))
        );
    }

    #[test]
    fn test_serialized_shape() {
        let p = Period::month_range((2024, 1), (2025, 6)).unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["type"], "month_range");
        assert_eq!(json["start_date"], "2024-01-01");
        assert_eq!(json["end_date"], "2025-06-30");
        assert_eq!(json["start_label"], "Januari 2024");

        let y = serde_json::to_value(Period::year(2025)).unwrap();
        assert_eq!(y, serde_json::json!({"type": "year", "year": 2025}));
    }

    #[test]
    fn test_to_args() {
        assert_eq!(Period::month(2025, 8).unwrap().to_args(), "agustus 2025");
        assert_eq!(
            Period::date_range(date(2024, 1, 1), date(2025, 12, 31))
                .unwrap()
                .to_args(),
            "01/01/2024 hingga 31/12/2025"
        );
    }

    #[test]
    fn test_to_args_pads_early_years() {
        let p = Period::month_range((999, 1), (999, 2)).unwrap();
        assert_eq!(p.label(), "Januari 999 - Februari 999");
        assert_eq!(p.to_args(), "januari 0999 hingga februari 0999");
        assert_eq!(Period::month(42, 3).unwrap().to_args(), "maret 0042");
        assert_eq!(
            Period::date_range(date(5, 1, 1), date(5, 1, 2))
                .unwrap()
                .to_args(),
            "01/01/0005 hingga 02/01/0005"
        );
    }
}
