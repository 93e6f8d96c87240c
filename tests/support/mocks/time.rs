// tests/support/mocks/time.rs
use once_cell::sync::Lazy;
use rtc_probe::application::checks::VerificationPlan;
use rtc_probe::domain::calendar::CalendarDate;

static STANDARD_DATE: Lazy<CalendarDate> = Lazy::new(|| {
    CalendarDate::from_parts(2010, 4, 27).expect("invalid date in tests/support/mocks/time.rs")
});

/// 2010-04-27, the date every default run queries.
pub fn standard_date() -> CalendarDate {
    *STANDARD_DATE
}

pub fn standard_plan() -> VerificationPlan {
    VerificationPlan::standard().expect("standard plan")
}
