// src/application/checks/mod.rs
mod current_tick;
mod day_of_week;
mod days_in_month;
mod sequence;
mod service;

pub use current_tick::CheckCurrentTickQuery;
pub use day_of_week::CheckDayOfWeekQuery;
pub use days_in_month::CheckDaysInMonthQuery;
pub use sequence::VerificationPlan;
pub use service::VerificationSequence;
