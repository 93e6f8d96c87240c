// src/domain/calendar/weekday.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::Weekday;
use serde::Serialize;
use std::fmt;

/// Weekday encoded as an index with Sunday = 0 through Saturday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WeekdayIndex(u8);

impl WeekdayIndex {
    pub const SUNDAY: Self = Self(0);
    pub const TUESDAY: Self = Self(2);
    pub const SATURDAY: Self = Self(6);

    pub fn new(value: u8) -> DomainResult<Self> {
        if value > 6 {
            return Err(DomainError::Validation(format!(
                "weekday index must be between 0 and 6, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<Weekday> for WeekdayIndex {
    fn from(value: Weekday) -> Self {
        Self(u8::try_from(value.num_days_from_sunday()).unwrap_or_default())
    }
}

impl From<WeekdayIndex> for u8 {
    fn from(value: WeekdayIndex) -> Self {
        value.0
    }
}

impl fmt::Display for WeekdayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
