// src/application/checks/sequence.rs
use super::{
    CheckCurrentTickQuery, CheckDayOfWeekQuery, CheckDaysInMonthQuery, VerificationSequence,
};
use crate::{
    application::{dto::DiagnosticReport, error::ApplicationResult},
    domain::calendar::{CalendarDate, WeekdayIndex},
};

pub const DEFAULT_DELAY_US: u64 = 2_000;
pub const DEFAULT_YEAR: i32 = 2010;
pub const DEFAULT_MONTH: u32 = 4;
pub const DEFAULT_DAY: u32 = 27;
pub const DEFAULT_EXPECTED_DAYS: u32 = 30;

/// Inputs for one pass of the sequence. Days-in-month uses the year and month
/// of `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationPlan {
    pub delay_us: u64,
    pub date: CalendarDate,
    pub expected_days: Option<u32>,
    pub expected_weekday: Option<WeekdayIndex>,
}

impl VerificationPlan {
    /// 2 ms suspension, April 2010, and 2010-04-27 with their known answers.
    pub fn standard() -> ApplicationResult<Self> {
        Ok(Self {
            delay_us: DEFAULT_DELAY_US,
            date: CalendarDate::from_parts(DEFAULT_YEAR, DEFAULT_MONTH, DEFAULT_DAY)?,
            expected_days: Some(DEFAULT_EXPECTED_DAYS),
            expected_weekday: Some(WeekdayIndex::TUESDAY),
        })
    }
}

impl VerificationSequence {
    /// Runs the tick, days-in-month and day-of-week checks in that order.
    /// Each check emits exactly one record to the sink.
    pub async fn run(&self, plan: &VerificationPlan) -> ApplicationResult<DiagnosticReport> {
        let current_tick = self
            .check_current_tick(CheckCurrentTickQuery {
                delay_us: plan.delay_us,
            })
            .await?;

        let days_in_month = self.check_days_in_month(CheckDaysInMonthQuery {
            year: plan.date.year(),
            month: plan.date.month(),
            expected: plan.expected_days,
        })?;

        let day_of_week = self.check_day_of_week(CheckDayOfWeekQuery {
            date: plan.date,
            expected: plan.expected_weekday,
        })?;

        let report = DiagnosticReport {
            current_tick,
            days_in_month,
            day_of_week,
        };

        let mismatches = report.mismatches();
        tracing::info!(
            tick_passed = report.current_tick.passed,
            mismatches = mismatches.len(),
            "verification sequence finished"
        );
        Ok(report)
    }
}
