// src/application/checks/days_in_month.rs
use super::VerificationSequence;
use crate::{
    application::{
        dto::{CheckRecord, DaysInMonthCheck},
        error::ApplicationResult,
    },
    domain::calendar::{Month, Year},
};

pub struct CheckDaysInMonthQuery {
    pub year: Year,
    pub month: Month,
    pub expected: Option<u32>,
}

impl VerificationSequence {
    pub fn check_days_in_month(
        &self,
        query: CheckDaysInMonthQuery,
    ) -> ApplicationResult<DaysInMonthCheck> {
        tracing::info!(year = %query.year, month = %query.month, "checking days in month");

        let days = self.clock.days_in_month(query.year, query.month);
        let check = DaysInMonthCheck::new(query.year, query.month, days, query.expected);

        tracing::debug!(
            days,
            leap_year = self.clock.is_leap_year(query.year),
            "days in month resolved"
        );
        if !check.matches_expected() {
            tracing::warn!(days, expected = ?query.expected, "unexpected days in month");
        }

        self.sink.emit(&CheckRecord::DaysInMonth(check))?;
        Ok(check)
    }
}
