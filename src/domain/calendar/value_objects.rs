// src/domain/calendar/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{Datelike, NaiveDate};
use std::fmt;

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Year(i32);

impl Year {
    pub fn new(value: i32) -> DomainResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(DomainError::Validation(format!(
                "year must be between {MIN_YEAR} and {MAX_YEAR}, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl From<Year> for i32 {
    fn from(value: Year) -> Self {
        value.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Month(u32);

impl Month {
    pub fn new(value: u32) -> DomainResult<Self> {
        if !(1..=12).contains(&value) {
            return Err(DomainError::Validation(format!(
                "month must be between 1 and 12, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<Month> for u32 {
    fn from(value: Month) -> Self {
        value.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of month. Only the absolute range is checked here; whether the day
/// exists in a given month is checked by [`CalendarDate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Day(u32);

impl Day {
    pub fn new(value: u32) -> DomainResult<Self> {
        if !(1..=31).contains(&value) {
            return Err(DomainError::Validation(format!(
                "day must be between 1 and 31, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A proleptic Gregorian date that is known to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn new(year: Year, month: Month, day: Day) -> DomainResult<Self> {
        NaiveDate::from_ymd_opt(year.get(), month.get(), day.get())
            .map(Self)
            .ok_or_else(|| {
                DomainError::Validation(format!(
                    "{:04}-{:02}-{:02} does not exist",
                    year.get(),
                    month.get(),
                    day.get()
                ))
            })
    }

    pub fn from_parts(year: i32, month: u32, day: u32) -> DomainResult<Self> {
        Self::new(Year::new(year)?, Month::new(month)?, Day::new(day)?)
    }

    pub fn year(&self) -> Year {
        Year(self.0.year())
    }

    pub fn month(&self) -> Month {
        Month(self.0.month())
    }

    pub fn day(&self) -> Day {
        Day(self.0.day())
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
