//! Canonical month representation.
//!
//! Each endpoint historically accepted the month in a different shape (a name,
//! a 1-based number, a 0-based index or a `YYYY-MM` string). Those shapes are
//! parsed here into a single [`SaleMonth`], and into a [`SalePeriod`] when a
//! year is involved.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleMonth(u32);

impl SaleMonth {
    pub const JANUARY: SaleMonth = SaleMonth(1);

    pub fn new(number: u32) -> Option<Self> {
        match number {
            1..=12 => Some(Self(number)),
            _ => None,
        }
    }

    /// Accepts `"January"`..`"December"` or `"1"`..`"12"`.
    pub fn from_name_or_number(value: &str) -> Option<Self> {
        let value = value.trim();

        if let Some(index) = MONTH_NAMES.iter().position(|name| *name == value) {
            return Some(Self(index as u32 + 1));
        }

        match value.parse::<u32>() {
            Ok(number) => Self::new(number),
            Err(_) => None,
        }
    }

    /// Accepts `"0"` (January) through `"11"` (December).
    pub fn from_zero_based(value: &str) -> Option<Self> {
        match value.trim().parse::<i64>() {
            Ok(index) if (0..=11).contains(&index) => Some(Self(index as u32 + 1)),
            _ => None,
        }
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    pub fn zero_based(&self) -> u32 {
        self.0 - 1
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.zero_based() as usize]
    }
}

/// A calendar month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalePeriod {
    pub year: i32,
    pub month: SaleMonth,
}

impl SalePeriod {
    pub fn new(year: i32, month: SaleMonth) -> Self {
        return Self { year, month };
    }

    /// Accepts `"YYYY-MM"`.
    pub fn from_year_month(value: &str) -> Option<Self> {
        let date = NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d").ok()?;

        Some(Self {
            year: date.year(),
            month: SaleMonth::new(date.month())?,
        })
    }

    /// Half-open `[start, end)` covering the whole month.
    pub fn bounds(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let start = NaiveDate::from_ymd_opt(self.year, self.month.number(), 1)?;
        let end = match self.month.number() {
            12 => NaiveDate::from_ymd_opt(self.year.checked_add(1)?, 1, 1)?,
            number => NaiveDate::from_ymd_opt(self.year, number + 1, 1)?,
        };

        Some((start.and_hms_opt(0, 0, 0)?, end.and_hms_opt(0, 0, 0)?))
    }

    pub fn to_year_month(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month.number())
    }
}
