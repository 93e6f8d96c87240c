// src/application/checks/day_of_week.rs
use super::VerificationSequence;
use crate::{
    application::{
        dto::{CheckRecord, DayOfWeekCheck},
        error::ApplicationResult,
    },
    domain::calendar::{CalendarDate, WeekdayIndex},
};

pub struct CheckDayOfWeekQuery {
    pub date: CalendarDate,
    pub expected: Option<WeekdayIndex>,
}

impl VerificationSequence {
    pub fn check_day_of_week(
        &self,
        query: CheckDayOfWeekQuery,
    ) -> ApplicationResult<DayOfWeekCheck> {
        tracing::info!(date = %query.date, "checking day of week");

        let weekday = self.clock.day_of_week(query.date);
        let check = DayOfWeekCheck::new(query.date, weekday, query.expected);

        if !check.matches_expected() {
            tracing::warn!(weekday = %weekday, expected = ?query.expected, "unexpected day of week");
        }

        self.sink.emit(&CheckRecord::DayOfWeek(check))?;
        Ok(check)
    }
}
